//! Tunable cutoffs for sentence translation scoring.

use serde::{Deserialize, Serialize};

use crate::error::VerifyError;

/// Share of the correct answer's content words the learner must hit.
pub const DEFAULT_FORWARD_THRESHOLD: f64 = 0.5;

/// Share of the learner's content words that must appear in the correct answer.
pub const DEFAULT_REVERSE_THRESHOLD: f64 = 0.6;

/// Acceptance cutoffs for sentence translation scoring.
///
/// Changing either value changes how learners are graded, so the defaults
/// are kept exactly as tuned.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimilarityThresholds {
    pub forward: f64,
    pub reverse: f64,
}

impl Default for SimilarityThresholds {
    fn default() -> Self {
        Self {
            forward: DEFAULT_FORWARD_THRESHOLD,
            reverse: DEFAULT_REVERSE_THRESHOLD,
        }
    }
}

impl SimilarityThresholds {
    /// Both thresholds must be ratios in `[0.0, 1.0]`.
    pub fn validate(&self) -> Result<(), VerifyError> {
        for (name, value) in [("forward", self.forward), ("reverse", self.reverse)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(VerifyError::InvalidThreshold { name, value });
            }
        }

        Ok(())
    }
}
