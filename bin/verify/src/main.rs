use std::io::{self, BufRead, BufWriter, Write};

use anyhow::Context;
use chrono::Utc;
use ilc_session::{Scorecard, SessionSummary};
use ilc_verify::{MatchResult, QuestionCategory, Verifier};
use serde::{Deserialize, Serialize};

use crate::config::VerifyConfig;

mod config;
mod logging;

/// One learner answer to one question, as sent by the question source.
#[derive(Debug, Deserialize)]
struct AnswerSubmission {
    #[serde(default)]
    prompt: String,
    user_answer: String,
    answer_spec: String,
    #[serde(default)]
    category: Option<QuestionCategory>,
}

#[derive(Serialize)]
struct VerdictLine<'a> {
    prompt: &'a str,
    #[serde(flatten)]
    result: &'a MatchResult,
}

#[derive(Serialize)]
struct SummaryLine<'a> {
    summary: &'a SessionSummary,
}

fn main() -> anyhow::Result<()> {
    // Load configuration from environment variables
    dotenvy::dotenv().ok();
    let config = VerifyConfig::from_env().context("failed to load configuration")?;

    logging::init_tracing(&config.app_env);

    let verifier = Verifier::new(config.thresholds()).context("invalid similarity thresholds")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = run(&verifier, stdin.lock(), BufWriter::new(stdout.lock()))?;

    tracing::info!(
        total = summary.total_questions,
        correct = summary.correct_answers,
        accuracy = summary.accuracy,
        grade = summary.grade.message(),
        "Session finished"
    );

    Ok(())
}

/// Verify every submission read from `input`, writing one verdict per line and
/// a final summary line to `output`.
fn run(
    verifier: &Verifier,
    input: impl BufRead,
    mut output: impl Write,
) -> anyhow::Result<SessionSummary> {
    let mut scorecard = Scorecard::start(Utc::now());

    for (index, line) in input.lines().enumerate() {
        let line = line.context("failed to read submission")?;
        if line.trim().is_empty() {
            continue;
        }

        let submission: AnswerSubmission = match serde_json::from_str(&line) {
            Ok(submission) => submission,
            Err(e) => {
                tracing::warn!(line = index + 1, "Skipping malformed submission: {}", e);
                continue;
            }
        };

        let result = verifier.check(
            &submission.user_answer,
            &submission.answer_spec,
            submission.category.unwrap_or_default(),
        );

        serde_json::to_writer(
            &mut output,
            &VerdictLine {
                prompt: &submission.prompt,
                result: &result,
            },
        )?;
        writeln!(output)?;

        scorecard.record(submission.prompt, submission.user_answer, &result);
    }

    let summary = scorecard.summary(Utc::now());
    serde_json::to_writer(&mut output, &SummaryLine { summary: &summary })?;
    writeln!(output)?;
    output.flush().context("failed to flush verdicts")?;

    Ok(summary)
}
