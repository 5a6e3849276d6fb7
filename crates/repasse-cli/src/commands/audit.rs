//! `repasse audit` -- audit census records for Fundeb-blocking issues.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use comfy_table::{Table, presets::UTF8_FULL};

use repasse_types::fixtures::demo_students;
use repasse_types::{AuditIssue, Severity, StudentRecord};

use crate::settings::Settings;

/// Arguments for `repasse audit`.
#[derive(Args)]
pub struct AuditArgs {
    /// JSON file with an array of student records.
    /// Defaults to the bundled demo dataset.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Disable canned-result substitution for the demo dataset
    /// (empty and failed remote results then pass through unchanged).
    #[arg(long)]
    pub no_demo_fallback: bool,
}

pub async fn run(args: AuditArgs) -> anyhow::Result<()> {
    let settings = Settings::from_env();

    let records: Vec<StudentRecord> = match &args.input {
        Some(path) => {
            let data = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            serde_json::from_str(&data)
                .with_context(|| format!("{} is not a valid record list", path.display()))?
        }
        None => demo_students(),
    };

    if !settings.credential_configured() {
        eprintln!("note: no {} set, using the canned demo result", crate::settings::API_KEY_ENV);
    }

    let gateway = settings.gateway(!args.no_demo_fallback);
    let issues = gateway.audit(&records).await;

    if issues.is_empty() {
        println!(
            "No issues found in {} record(s).",
            records.len()
        );
        return Ok(());
    }

    println!("{}", render_issues(&issues));
    println!("{}", summarize(&issues));
    Ok(())
}

fn render_issues(issues: &[AuditIssue]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header([
        "Record",
        "Student",
        "Field",
        "Type",
        "Severity",
        "Suggested action",
    ]);
    for issue in issues {
        table.add_row([
            issue.record_id.as_str(),
            issue.student_name.as_str(),
            issue.field.as_str(),
            issue.issue_type.as_str(),
            &issue.severity.to_string(),
            issue.suggested_action.as_str(),
        ]);
    }
    table
}

fn summarize(issues: &[AuditIssue]) -> String {
    let count_of = |sev: Severity| issues.iter().filter(|i| i.severity == sev).count();
    format!(
        "{} issue(s): {} critical, {} high, {} medium, {} low",
        issues.len(),
        count_of(Severity::Critical),
        count_of(Severity::High),
        count_of(Severity::Medium),
        count_of(Severity::Low),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use repasse_types::fixtures::demo_audit_issues;

    #[test]
    fn summary_counts_by_severity() {
        let summary = summarize(&demo_audit_issues());
        assert_eq!(summary, "4 issue(s): 2 critical, 2 high, 0 medium, 0 low");
    }

    #[test]
    fn table_has_one_row_per_issue() {
        let table = render_issues(&demo_audit_issues());
        assert_eq!(table.row_count(), 4);
    }
}
