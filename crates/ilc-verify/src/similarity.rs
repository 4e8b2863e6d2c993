//! Content-word similarity for free sentence translation.
//!
//! Both texts are normalized, number words become digits, punctuation is
//! dropped and English/Italian function words are filtered out. What remains
//! are the content words, which are compared in both directions.

use std::{collections::HashSet, sync::LazyLock};

use crate::{
    config::SimilarityThresholds,
    normalization::{normalize, strip_punctuation},
    numbers::words_to_digits,
    synonyms::SynonymTable,
};

/// English and Italian function words ignored by the scorer.
pub const STOPWORDS: &[&str] = &[
    // English
    "the", "a", "an", "is", "am", "are", "was", "were", "be", "been", "being",
    // Italian articles
    "il", "lo", "la", "i", "gli", "le", "l'", "un", "una", "uno",
    // Italian prepositions
    "di", "da", "in", "con", "su", "per", "tra", "fra",
    // English prepositions
    "to", "at", "on", "of", "from", "with", "by", "for",
];

static STOPWORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOPWORDS.iter().copied().collect());

/// Tokens of `text` that survive normalization and stopword filtering.
///
/// Duplicates are kept; each occurrence counts separately when scoring.
pub fn content_words(text: &str) -> Vec<String> {
    let prepared = strip_punctuation(&words_to_digits(&normalize(text)));

    prepared
        .split_whitespace()
        .filter(|token| !STOPWORD_SET.contains(token))
        .map(str::to_string)
        .collect()
}

/// Forward and reverse content-word overlap.
///
/// A ratio is `None` when its denominator side has no content words.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarityScore {
    /// Share of the correct content words found in the learner's answer.
    pub forward: Option<f64>,
    /// Share of the learner's content words found in the correct answer.
    pub reverse: Option<f64>,
}

impl SimilarityScore {
    /// Accept when either ratio reaches its threshold.
    pub fn accepts(&self, thresholds: &SimilarityThresholds) -> bool {
        self.forward.is_some_and(|forward| forward >= thresholds.forward)
            || self.reverse.is_some_and(|reverse| reverse >= thresholds.reverse)
    }
}

/// Score a learner's sentence against one correct sentence.
pub fn score(user_text: &str, correct_text: &str, synonyms: &SynonymTable) -> SimilarityScore {
    let content_user = content_words(user_text);
    let content_correct = content_words(correct_text);

    let user_set: HashSet<&str> = content_user.iter().map(String::as_str).collect();
    let correct_set: HashSet<&str> = content_correct.iter().map(String::as_str).collect();

    let forward = ratio(
        content_correct
            .iter()
            .filter(|token| {
                user_set.contains(token.as_str())
                    || synonyms
                        .synonyms_of(token)
                        .any(|synonym| user_set.contains(synonym))
            })
            .count(),
        content_correct.len(),
    );

    let reverse = ratio(
        content_user
            .iter()
            .filter(|token| {
                correct_set.contains(token.as_str())
                    || synonyms
                        .synonyms_of(token)
                        .any(|synonym| correct_set.contains(synonym))
            })
            .count(),
        content_user.len(),
    );

    tracing::trace!(
        ?content_user,
        ?content_correct,
        ?forward,
        ?reverse,
        "scored sentence translation"
    );

    SimilarityScore { forward, reverse }
}

fn ratio(matches: usize, total: usize) -> Option<f64> {
    (total > 0).then(|| matches as f64 / total as f64)
}
