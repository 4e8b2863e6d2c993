//! Expansion of an answer specification into every accepted surface form.

use std::collections::HashSet;

use crate::{
    category::{MatchPolicy, QuestionCategory},
    normalization::normalize,
    numbers::{digits_to_words, words_to_digits},
};

/// English infinitive marker, including its trailing space.
pub const INFINITIVE_MARKER: &str = "to ";

/// English definite article, including its trailing space.
pub const DEFINITE_ARTICLE: &str = "the ";

/// Italian definite articles that mark an alternative as a noun phrase.
const ITALIAN_ARTICLES: &[&str] = &["il ", "la ", "i ", "gli ", "le ", "l'"];

/// Split an answer specification into its non-empty, trimmed alternatives.
///
/// `/` always separates alternatives. `", "` does too when no `/` is present,
/// except for sentence-level policies where commas belong to the sentence.
pub fn split_alternatives(answer_spec: &str, policy: MatchPolicy) -> Vec<&str> {
    let pieces: Vec<&str> = if answer_spec.contains('/') {
        answer_spec.split('/').collect()
    } else if policy == MatchPolicy::Standard {
        answer_spec.split(", ").collect()
    } else {
        vec![answer_spec]
    };

    pieces
        .into_iter()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect()
}

/// The answer shown back to the learner: the first alternative, unnormalized.
pub fn display_answer(answer_spec: &str, policy: MatchPolicy) -> String {
    split_alternatives(answer_spec, policy)
        .first()
        .copied()
        .unwrap_or_else(|| answer_spec.trim())
        .to_string()
}

/// Heuristic for "this alternative is probably a bare English verb".
///
/// A normalized alternative qualifies when it is a single token, does not
/// already carry the infinitive marker and does not start with an Italian
/// definite article. Nouns such as `"month"` qualify too, which only widens
/// the accepted set with a harmless `"to month"`.
pub fn looks_like_bare_infinitive(alternative: &str) -> bool {
    !alternative.is_empty()
        && !alternative.starts_with(INFINITIVE_MARKER)
        && !alternative.contains(char::is_whitespace)
        && !ITALIAN_ARTICLES
            .iter()
            .any(|article| alternative.starts_with(article))
}

/// Build the full acceptance set for an answer specification.
///
/// Every alternative contributes its normalized form plus its digit and number
/// word forms. Alternatives starting with `"to "` also contribute the bare verb;
/// bare verbs also contribute the `"to "` form.
pub fn expand(answer_spec: &str, category: QuestionCategory) -> HashSet<String> {
    let mut accepted = HashSet::new();

    for alternative in split_alternatives(answer_spec, category.policy()) {
        let alternative = normalize(alternative);

        if let Some(bare) = alternative.strip_prefix(INFINITIVE_MARKER) {
            insert_with_number_forms(&mut accepted, bare.trim_start());
        } else if looks_like_bare_infinitive(&alternative) {
            insert_with_number_forms(&mut accepted, &format!("{INFINITIVE_MARKER}{alternative}"));
        }

        insert_with_number_forms(&mut accepted, &alternative);
    }

    tracing::trace!(answer_spec, forms = accepted.len(), "expanded answer spec");

    accepted
}

fn insert_with_number_forms(accepted: &mut HashSet<String>, form: &str) {
    accepted.insert(words_to_digits(form));
    accepted.insert(digits_to_words(form));
    accepted.insert(form.to_string());
}
