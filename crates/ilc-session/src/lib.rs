//! Session scorecard for Italian drill sessions
//!
//! This crate accumulates the verdicts of one practice session in memory and
//! turns them into the accuracy, elapsed time and grade shown at the end of
//! the session. Storing sessions is left to the caller.

use chrono::{DateTime, Utc};
use ilc_verify::MatchResult;
use serde::{Deserialize, Serialize};

/// One answered question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub question: String,
    pub user_answer: String,
    /// The display answer of the verdict.
    pub correct_answer: String,
    pub is_correct: bool,
}

/// Grade band for a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    Excellent,
    Good,
    KeepPracticing,
    NeedsPractice,
}

impl Grade {
    /// Message shown next to the score.
    pub const fn message(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent!",
            Self::Good => "Good job!",
            Self::KeepPracticing => "Keep practicing!",
            Self::NeedsPractice => "More practice needed!",
        }
    }
}

/// Calculate the accuracy of a session as a percentage.
///
/// # Arguments
///
/// * `correct_answers` - Number of questions answered correctly
/// * `total_questions` - Number of questions answered
///
/// # Returns
///
/// The accuracy in `0.0..=100.0`; an empty session has an accuracy of `0.0`
pub fn calculate_accuracy(correct_answers: usize, total_questions: usize) -> f64 {
    if total_questions == 0 {
        return 0.0;
    }

    correct_answers as f64 / total_questions as f64 * 100.0
}

/// Get the grade band for an accuracy percentage.
///
/// # Bands
///
/// * Accuracy ≥ 90: Excellent
/// * Accuracy ≥ 75: Good
/// * Accuracy ≥ 60: Keep practicing
/// * Below 60: More practice needed
pub fn grade_for_accuracy(accuracy: f64) -> Grade {
    match accuracy {
        a if a >= 90.0 => Grade::Excellent,
        a if a >= 75.0 => Grade::Good,
        a if a >= 60.0 => Grade::KeepPracticing,
        _ => Grade::NeedsPractice,
    }
}

/// Totals for a finished session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub total_questions: usize,
    pub correct_answers: usize,
    /// Percentage of correct answers.
    pub accuracy: f64,
    pub time_spent_secs: i64,
    pub grade: Grade,
}

/// In-memory record of one practice session.
#[derive(Debug, Clone)]
pub struct Scorecard {
    started_at: DateTime<Utc>,
    records: Vec<AnswerRecord>,
}

impl Scorecard {
    /// Start a session at `now`.
    pub const fn start(now: DateTime<Utc>) -> Self {
        Self {
            started_at: now,
            records: Vec::new(),
        }
    }

    /// Record the verdict for one question.
    pub fn record(
        &mut self,
        question: impl Into<String>,
        user_answer: impl Into<String>,
        result: &MatchResult,
    ) -> &AnswerRecord {
        self.records.push(AnswerRecord {
            question: question.into(),
            user_answer: user_answer.into(),
            correct_answer: result.display_answer.clone(),
            is_correct: result.is_correct,
        });

        &self.records[self.records.len() - 1]
    }

    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn records(&self) -> &[AnswerRecord] {
        &self.records
    }

    pub fn correct_answers(&self) -> usize {
        self.records.iter().filter(|record| record.is_correct).count()
    }

    /// Summarize the session as of `now`.
    pub fn summary(&self, now: DateTime<Utc>) -> SessionSummary {
        let total_questions = self.records.len();
        let correct_answers = self.correct_answers();
        let accuracy = calculate_accuracy(correct_answers, total_questions);

        SessionSummary {
            total_questions,
            correct_answers,
            accuracy,
            // Clock adjustments must not produce negative durations
            time_spent_secs: (now - self.started_at).num_seconds().max(0),
            grade: grade_for_accuracy(accuracy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use ilc_verify::{QuestionCategory, check_answer};

    #[test]
    fn test_calculate_accuracy() {
        assert_eq!(calculate_accuracy(5, 10), 50.0);
        assert_eq!(calculate_accuracy(3, 4), 75.0);
        assert_eq!(calculate_accuracy(0, 3), 0.0);
        assert_eq!(calculate_accuracy(0, 0), 0.0);
    }

    #[test]
    fn test_grade_for_accuracy() {
        assert_eq!(grade_for_accuracy(100.0), Grade::Excellent);
        assert_eq!(grade_for_accuracy(90.0), Grade::Excellent);
        assert_eq!(grade_for_accuracy(89.9), Grade::Good);
        assert_eq!(grade_for_accuracy(75.0), Grade::Good);
        assert_eq!(grade_for_accuracy(74.9), Grade::KeepPracticing);
        assert_eq!(grade_for_accuracy(60.0), Grade::KeepPracticing);
        assert_eq!(grade_for_accuracy(59.9), Grade::NeedsPractice);
        assert_eq!(grade_for_accuracy(0.0), Grade::NeedsPractice);
    }

    #[test]
    fn test_record_uses_display_answer() {
        let mut scorecard = Scorecard::start(Utc::now());
        let result = check_answer("low", "small/low", QuestionCategory::Vocabulary);

        let record = scorecard.record("basso", "low", &result);
        assert_eq!(
            record,
            &AnswerRecord {
                question: "basso".to_string(),
                user_answer: "low".to_string(),
                correct_answer: "small".to_string(),
                is_correct: true,
            }
        );
    }

    #[test]
    fn test_summary() {
        let started_at = Utc::now();
        let mut scorecard = Scorecard::start(started_at);

        for (user, spec) in [
            ("caffe", "caffè"),
            ("to speak", "speak"),
            ("27", "twenty-seven"),
            ("tiny", "small/low"),
        ] {
            let result = check_answer(user, spec, QuestionCategory::Vocabulary);
            scorecard.record(spec, user, &result);
        }

        let summary = scorecard.summary(started_at + Duration::seconds(125));
        assert_eq!(summary.total_questions, 4);
        assert_eq!(summary.correct_answers, 3);
        assert_eq!(summary.accuracy, 75.0);
        assert_eq!(summary.time_spent_secs, 125);
        assert_eq!(summary.grade, Grade::Good);
    }

    #[test]
    fn test_empty_session() {
        let started_at = Utc::now();
        let summary = Scorecard::start(started_at).summary(started_at);

        assert_eq!(summary.total_questions, 0);
        assert_eq!(summary.accuracy, 0.0);
        assert_eq!(summary.grade, Grade::NeedsPractice);
    }

    #[test]
    fn test_time_spent_never_negative() {
        let started_at = Utc::now();
        let summary = Scorecard::start(started_at).summary(started_at - Duration::seconds(30));
        assert_eq!(summary.time_spent_secs, 0);
    }

    #[test]
    fn test_summary_serializes_grade_tag() {
        let started_at = Utc::now();
        let summary = Scorecard::start(started_at).summary(started_at);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["grade"], "needs_practice");
    }

    #[test]
    fn test_grade_messages() {
        assert_eq!(Grade::Excellent.message(), "Excellent!");
        assert_eq!(Grade::NeedsPractice.message(), "More practice needed!");
    }
}
