//! Answer verification for Italian drill questions.
//!
//! Decides whether a free-form learner answer matches an answer specification
//! such as `"small/low"` or `"to eat/to consume"`, forgiving accents, casing,
//! the English infinitive marker, digits versus number words, curated synonyms
//! and, for whole sentences, missing punctuation or partially matching wording.
//!
//! ```
//! use ilc_verify::{QuestionCategory, check_answer};
//!
//! let result = check_answer("low", "small/low", QuestionCategory::Vocabulary);
//! assert!(result.is_correct);
//! assert_eq!(result.display_answer, "small");
//! ```

pub mod category;
pub mod config;
pub mod error;
pub mod normalization;
pub mod numbers;
pub mod similarity;
pub mod synonyms;
pub mod variants;
pub mod verdict;

pub use category::{MatchPolicy, QuestionCategory};
pub use config::SimilarityThresholds;
pub use error::VerifyError;
pub use synonyms::SynonymTable;
pub use verdict::{MatchResult, MatchRule, Verifier, check_answer};
