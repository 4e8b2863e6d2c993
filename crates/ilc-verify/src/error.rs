//! Errors raised while configuring the verifier or reading category tags.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VerifyError {
    /// The tag is not one of [`QuestionCategory::ALL`](crate::QuestionCategory::ALL).
    #[error("Unknown question category: '{0}'")]
    UnknownCategory(String),
    /// `name` is `forward` or `reverse`.
    #[error("Invalid {name} similarity threshold: {value} (must be between 0.0 and 1.0)")]
    InvalidThreshold { name: &'static str, value: f64 },
}
