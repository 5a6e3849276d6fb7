//! `repasse quiz` -- generate a remedial SAEB mini-quiz.

use clap::Args;

use repasse_types::QuizQuestion;

use crate::settings::Settings;

/// Arguments for `repasse quiz`.
#[derive(Args)]
pub struct QuizArgs {
    /// Grade the quiz targets (e.g. "5º Ano").
    #[arg(long)]
    pub grade: String,

    /// Subject (e.g. "Matemática", "Português").
    #[arg(long)]
    pub subject: String,

    /// The specific weak skill to drill (e.g. "Geometria").
    #[arg(long)]
    pub weakness: String,
}

pub async fn run(args: QuizArgs) -> anyhow::Result<()> {
    let settings = Settings::from_env();
    let gateway = settings.gateway(true);

    let questions = gateway
        .generate_intervention(&args.grade, &args.subject, &args.weakness)
        .await;

    if questions.is_empty() {
        if settings.credential_configured() {
            eprintln!("The service returned no questions. Try again later.");
        } else {
            eprintln!(
                "Quiz generation requires an inference credential; set {}.",
                crate::settings::API_KEY_ENV
            );
        }
        return Ok(());
    }

    for (number, question) in questions.iter().enumerate() {
        print!("{}", render_question(number + 1, question));
    }
    Ok(())
}

fn render_question(number: usize, question: &QuizQuestion) -> String {
    let mut out = format!(
        "Questão {number} [{}]\n{}\n",
        question.descriptor, question.question
    );
    for (idx, option) in question.options.iter().enumerate() {
        let letter = (b'a' + idx as u8) as char;
        let marker = if idx == question.correct_answer {
            " (correta)"
        } else {
            ""
        };
        out.push_str(&format!("  {letter}) {option}{marker}\n"));
    }
    out.push_str(&format!("  Explicação: {}\n\n", question.explanation));
    out
}
