//! `repasse status` -- show resolved configuration without leaking the key.

use crate::settings::Settings;

pub fn run() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    println!(
        "credential: {}",
        if settings.credential_configured() {
            "configured"
        } else {
            "not configured (canned audit results, no quiz generation)"
        }
    );
    println!("endpoint:   {} ({})", settings.inference.name, settings.inference.base_url);
    println!("model:      {}", settings.inference.model);
    Ok(())
}
