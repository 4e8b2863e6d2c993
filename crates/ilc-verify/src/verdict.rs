//! The verdict composer: decides whether a learner's answer is correct.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
    category::{MatchPolicy, QuestionCategory},
    config::SimilarityThresholds,
    error::VerifyError,
    normalization::{collapse_whitespace, normalize, strip_punctuation},
    numbers::{digits_to_words, words_to_digits},
    similarity,
    synonyms::SynonymTable,
    variants::{display_answer, expand, split_alternatives},
};

/// The rule that accepted an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchRule {
    /// Normalized answer equals a normalized alternative.
    Exact,
    /// Infinitive marker or number form of an alternative.
    Variant,
    /// Curated synonym of an alternative, with or without its marker.
    Synonym,
    /// All the alternative's words plus extra ones.
    SubsetExtension,
    /// Enough content words shared in both directions.
    SentenceSimilarity,
    /// Same sentence once punctuation is ignored.
    NegationExact,
    /// Answer spec has no alternatives and the answer equals it literally.
    LiteralSpec,
}

/// Outcome of checking one answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// `true` exactly when `matched_by` is set.
    pub is_correct: bool,
    /// First alternative of the answer spec, whichever alternative matched.
    pub display_answer: String,
    /// Omitted from JSON when the answer is rejected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_by: Option<MatchRule>,
}

/// Answer checker configured with sentence similarity thresholds.
///
/// Holds no mutable state; one instance can be shared across threads.
#[derive(Debug, Clone, Copy)]
pub struct Verifier {
    thresholds: SimilarityThresholds,
    synonyms: &'static SynonymTable,
}

impl Default for Verifier {
    fn default() -> Self {
        Self {
            thresholds: SimilarityThresholds::default(),
            synonyms: SynonymTable::curated(),
        }
    }
}

impl Verifier {
    /// Create a verifier with custom thresholds.
    pub fn new(thresholds: SimilarityThresholds) -> Result<Self, VerifyError> {
        thresholds.validate()?;

        Ok(Self {
            thresholds,
            ..Self::default()
        })
    }

    pub const fn thresholds(&self) -> SimilarityThresholds {
        self.thresholds
    }

    /// Check `user_answer` against `answer_spec` under the policy of `category`.
    pub fn check(
        &self,
        user_answer: &str,
        answer_spec: &str,
        category: QuestionCategory,
    ) -> MatchResult {
        let matched_by = self.decide(user_answer, answer_spec, category);

        match matched_by {
            Some(rule) => tracing::debug!(%category, ?rule, "answer accepted"),
            None => tracing::debug!(%category, "answer rejected"),
        }

        MatchResult {
            is_correct: matched_by.is_some(),
            display_answer: display_answer(answer_spec, category.policy()),
            matched_by,
        }
    }

    fn decide(
        &self,
        user_answer: &str,
        answer_spec: &str,
        category: QuestionCategory,
    ) -> Option<MatchRule> {
        let policy = category.policy();
        let alternatives = split_alternatives(answer_spec, policy);
        let user = normalize(user_answer);

        if alternatives.is_empty() {
            return (user == normalize(answer_spec)).then_some(MatchRule::LiteralSpec);
        }

        match policy {
            MatchPolicy::SentenceTranslation => {
                let accepted = alternatives.iter().any(|alternative| {
                    similarity::score(user_answer, alternative, self.synonyms)
                        .accepts(&self.thresholds)
                });
                if accepted {
                    return Some(MatchRule::SentenceSimilarity);
                }
            }
            MatchPolicy::Negation => {
                let user_bare = without_punctuation(&user);
                if alternatives
                    .iter()
                    .any(|alternative| without_punctuation(&normalize(alternative)) == user_bare)
                {
                    return Some(MatchRule::NegationExact);
                }
            }
            MatchPolicy::Standard => {}
        }

        self.standard_match(&user, answer_spec, category, &alternatives)
    }

    fn standard_match(
        &self,
        user: &str,
        answer_spec: &str,
        category: QuestionCategory,
        alternatives: &[&str],
    ) -> Option<MatchRule> {
        let alternatives: Vec<String> = alternatives.iter().map(|alt| normalize(alt)).collect();

        if alternatives.iter().any(|alternative| alternative == user) {
            return Some(MatchRule::Exact);
        }

        let accepted = expand(answer_spec, category);
        let user_forms = [user.to_string(), words_to_digits(user), digits_to_words(user)];
        if user_forms.iter().any(|form| accepted.contains(form)) {
            return Some(MatchRule::Variant);
        }

        if alternatives
            .iter()
            .any(|alternative| self.synonyms.resolves(user, alternative))
        {
            return Some(MatchRule::Synonym);
        }

        if alternatives
            .iter()
            .any(|alternative| extends_with_extra_words(user, alternative))
        {
            return Some(MatchRule::SubsetExtension);
        }

        None
    }
}

/// Check an answer with the default thresholds and the curated synonym table.
pub fn check_answer(
    user_answer: &str,
    answer_spec: &str,
    category: QuestionCategory,
) -> MatchResult {
    Verifier::default().check(user_answer, answer_spec, category)
}

fn without_punctuation(text: &str) -> String {
    collapse_whitespace(&strip_punctuation(text))
}

/// The learner supplied every word of `correct` plus at least one more.
fn extends_with_extra_words(user: &str, correct: &str) -> bool {
    let correct: HashSet<&str> = correct.split_whitespace().collect();
    let user: HashSet<&str> = user.split_whitespace().collect();

    !correct.is_empty() && correct.is_subset(&user) && user.len() > correct.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(user: &str, spec: &str, category: QuestionCategory) -> Option<MatchRule> {
        check_answer(user, spec, category).matched_by
    }

    #[test]
    fn test_exact_and_variant_rules() {
        assert_eq!(
            rule("Speak", "speak", QuestionCategory::Generic),
            Some(MatchRule::Exact)
        );
        assert_eq!(
            rule("speak", "to speak", QuestionCategory::Generic),
            Some(MatchRule::Variant)
        );
        assert_eq!(
            rule("27", "twenty-seven", QuestionCategory::Generic),
            Some(MatchRule::Variant)
        );
    }

    #[test]
    fn test_synonym_rule() {
        assert_eq!(
            rule("little", "small/low", QuestionCategory::Vocabulary),
            Some(MatchRule::Synonym)
        );
        assert_eq!(
            rule("to talk", "to speak", QuestionCategory::Vocabulary),
            Some(MatchRule::Synonym)
        );
    }

    #[test]
    fn test_subset_extension_rule() {
        assert_eq!(
            rule("the beach and the sea", "the beach", QuestionCategory::Generic),
            Some(MatchRule::SubsetExtension)
        );
        assert_eq!(
            rule("the beach", "the beach and the sea", QuestionCategory::Generic),
            None
        );
    }

    #[test]
    fn test_spec_without_alternatives_matches_literally() {
        assert_eq!(
            rule("/", "/", QuestionCategory::Generic),
            Some(MatchRule::LiteralSpec)
        );
        assert_eq!(
            rule(" / ", "/", QuestionCategory::Negation),
            Some(MatchRule::LiteralSpec)
        );
        assert_eq!(
            rule("", "", QuestionCategory::Generic),
            Some(MatchRule::LiteralSpec)
        );
        assert_eq!(rule("x", "/", QuestionCategory::Generic), None);
    }

    #[test]
    fn test_stacked_accent_marks_match_plain_vowel() {
        assert_eq!(
            rule("caffè\u{301}", "caffe", QuestionCategory::Generic),
            Some(MatchRule::Exact)
        );
        assert_eq!(
            rule("caffe", "caffè\u{301}", QuestionCategory::Vocabulary),
            Some(MatchRule::Exact)
        );
    }

    #[test]
    fn test_extends_with_extra_words() {
        assert!(extends_with_extra_words("a big house", "big house"));
        assert!(!extends_with_extra_words("big house", "big house"));
        assert!(!extends_with_extra_words("house", "big house"));
        assert!(!extends_with_extra_words("anything", ""));
        // Repeated words do not make the answer larger
        assert!(!extends_with_extra_words("house house", "house"));
    }

    #[test]
    fn test_without_punctuation() {
        assert_eq!(
            without_punctuation("non vado mai al cinema."),
            "non vado mai al cinema"
        );
        assert_eq!(without_punctuation("no , grazie !"), "no grazie");
    }

    #[test]
    fn test_new_rejects_invalid_thresholds() {
        let invalid = SimilarityThresholds {
            forward: 2.0,
            reverse: 0.6,
        };
        assert!(Verifier::new(invalid).is_err());

        let strict = SimilarityThresholds {
            forward: 0.9,
            reverse: 0.9,
        };
        assert_eq!(Verifier::new(strict).map(|v| v.thresholds()), Ok(strict));
    }

    #[test]
    fn test_verifier_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Verifier>();
    }
}
