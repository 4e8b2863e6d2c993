//! Curated table of interchangeable words and short phrases.

use std::{
    collections::{HashMap, HashSet},
    sync::LazyLock,
};

use crate::variants::{DEFINITE_ARTICLE, INFINITIVE_MARKER};

/// Hand-curated entries. Not every entry lists its reverse; the table built
/// from them is closed under symmetry.
const CURATED_ENTRIES: &[(&str, &[&str])] = &[
    // Sentence translation
    ("cinema", &["movies", "movie", "theater", "theatre"]),
    ("movies", &["cinema", "movie", "theater", "theatre"]),
    ("movie", &["cinema", "movies", "theater", "theatre"]),
    ("theater", &["cinema", "movies", "movie", "theatre"]),
    ("go", &["going", "went"]),
    ("went", &["go", "going"]),
    ("going", &["go", "went"]),
    ("tired", &["sleepy", "exhausted"]),
    ("hungry", &["starving"]),
    ("thirsty", &["parched"]),
    // Vocabulary
    ("begin", &["start", "commence"]),
    ("finish", &["end", "complete"]),
    ("speak", &["talk"]),
    ("small", &["little"]),
    ("big", &["large"]),
    ("beautiful", &["pretty", "lovely"]),
    ("quickly", &["fast"]),
    ("car", &["automobile"]),
    ("house", &["home"]),
    ("shop", &["store"]),
    ("look for", &["search for"]),
    ("nobody", &["no one", "no-one"]),
    ("anymore", &["any more", "any longer"]),
];

static CURATED: LazyLock<SynonymTable> = LazyLock::new(|| {
    SynonymTable::from_entries(
        CURATED_ENTRIES
            .iter()
            .map(|&(key, synonyms)| (key, synonyms.iter().copied())),
    )
});

/// Immutable mapping from a token or phrase to its interchangeable forms.
#[derive(Debug, Clone, Default)]
pub struct SynonymTable {
    entries: HashMap<String, HashSet<String>>,
}

impl SynonymTable {
    /// Build a table from `(key, synonyms)` entries.
    ///
    /// Whenever `a` lists `b`, `b` also lists `a`, so lookups never depend on
    /// the direction an entry was written in.
    pub fn from_entries<'a, I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, S)>,
        S: IntoIterator<Item = &'a str>,
    {
        let mut table: HashMap<String, HashSet<String>> = HashMap::new();

        for (key, synonyms) in entries {
            for synonym in synonyms {
                if synonym == key {
                    continue;
                }
                table
                    .entry(key.to_string())
                    .or_default()
                    .insert(synonym.to_string());
                table
                    .entry(synonym.to_string())
                    .or_default()
                    .insert(key.to_string());
            }
        }

        Self { entries: table }
    }

    /// The curated table shared by every verifier.
    pub fn curated() -> &'static Self {
        &CURATED
    }

    /// Interchangeable forms of `token`; empty when the token is unknown.
    pub fn synonyms_of(&self, token: &str) -> impl Iterator<Item = &str> + '_ {
        self.entries
            .get(token)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// Whether `synonym` is listed as interchangeable with `token`.
    pub fn contains(&self, token: &str, synonym: &str) -> bool {
        self.entries
            .get(token)
            .is_some_and(|synonyms| synonyms.contains(synonym))
    }

    /// Whether two forms are interchangeable, checked in both directions.
    pub fn are_synonyms(&self, a: &str, b: &str) -> bool {
        self.contains(a, b) || self.contains(b, a)
    }

    /// Resolve a normalized learner answer against one normalized alternative.
    ///
    /// Checks, in order: exact equality, equality without the infinitive
    /// marker, equality without the definite article, then the synonym table.
    pub fn resolves(&self, user: &str, alternative: &str) -> bool {
        if user == alternative {
            return true;
        }

        let user = strip_marker(user, INFINITIVE_MARKER);
        let alternative = strip_marker(alternative, INFINITIVE_MARKER);
        if user == alternative {
            return true;
        }

        let user = strip_marker(user, DEFINITE_ARTICLE);
        let alternative = strip_marker(alternative, DEFINITE_ARTICLE);
        if user == alternative {
            return true;
        }

        !user.is_empty() && self.are_synonyms(user, alternative)
    }

    /// Number of keys in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn strip_marker<'a>(text: &'a str, marker: &str) -> &'a str {
    text.strip_prefix(marker).map_or(text, str::trim_start)
}
