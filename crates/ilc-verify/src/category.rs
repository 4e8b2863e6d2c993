//! Question categories and the matching policy each one selects.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::VerifyError;

/// Tag attached to every generated question.
///
/// The tag never changes for a given question and decides which matching
/// policy the verifier applies to the learner's answer.
///
/// Serializes as the snake_case wire tag. Deserialization goes through
/// [`FromStr`], so `"Negation"` and `" negation "` are accepted too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum QuestionCategory {
    /// No tag supplied by the question source.
    #[default]
    Generic,
    /// Single word or short phrase translations.
    Vocabulary,
    /// Present tense forms.
    VerbConjugation,
    IrregularPassato,
    FuturoSemplice,
    /// Reflexive pronoun plus verb, e.g. `mi lavo`.
    ReflexiveVerb,
    /// Preposition fused with an article, e.g. `nella`. Tagged `articulated_prep`.
    #[serde(rename = "articulated_prep")]
    ArticulatedPreposition,
    /// `da`, `per`, `fa` and friends in time expressions.
    TimePreposition,
    /// `essere` or `avere` in compound tenses.
    AuxiliaryChoice,
    FillInBlank,
    MultipleChoice,
    TextInput,
    /// Full Italian sentences built around `non ... mai`, `non ... più`, etc.
    Negation,
    /// Free translation of a whole sentence, graded on content words.
    SentenceTranslation,
}

/// How an answer is compared against its answer specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPolicy {
    /// Variant expansion, synonyms and the subset extension rule.
    Standard,
    /// Punctuation-insensitive sentence equality, then the standard path.
    Negation,
    /// Content-word similarity scoring, then the standard path.
    SentenceTranslation,
}

impl QuestionCategory {
    /// Every category, in the order the question source introduces them.
    pub const ALL: [Self; 14] = [
        Self::Generic,
        Self::Vocabulary,
        Self::VerbConjugation,
        Self::IrregularPassato,
        Self::FuturoSemplice,
        Self::ReflexiveVerb,
        Self::ArticulatedPreposition,
        Self::TimePreposition,
        Self::AuxiliaryChoice,
        Self::FillInBlank,
        Self::MultipleChoice,
        Self::TextInput,
        Self::Negation,
        Self::SentenceTranslation,
    ];

    /// The matching policy for this category.
    pub const fn policy(self) -> MatchPolicy {
        match self {
            Self::Generic
            | Self::Vocabulary
            | Self::VerbConjugation
            | Self::IrregularPassato
            | Self::FuturoSemplice
            | Self::ReflexiveVerb
            | Self::ArticulatedPreposition
            | Self::TimePreposition
            | Self::AuxiliaryChoice
            | Self::FillInBlank
            | Self::MultipleChoice
            | Self::TextInput => MatchPolicy::Standard,
            Self::Negation => MatchPolicy::Negation,
            Self::SentenceTranslation => MatchPolicy::SentenceTranslation,
        }
    }

    /// The wire tag used by the question source.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Vocabulary => "vocabulary",
            Self::VerbConjugation => "verb_conjugation",
            Self::IrregularPassato => "irregular_passato",
            Self::FuturoSemplice => "futuro_semplice",
            Self::ReflexiveVerb => "reflexive_verb",
            Self::ArticulatedPreposition => "articulated_prep",
            Self::TimePreposition => "time_preposition",
            Self::AuxiliaryChoice => "auxiliary_choice",
            Self::FillInBlank => "fill_in_blank",
            Self::MultipleChoice => "multiple_choice",
            Self::TextInput => "text_input",
            Self::Negation => "negation",
            Self::SentenceTranslation => "sentence_translation",
        }
    }
}

impl FromStr for QuestionCategory {
    type Err = VerifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| VerifyError::UnknownCategory(s.to_string()))
    }
}

impl TryFrom<String> for QuestionCategory {
    type Error = VerifyError;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        tag.parse()
    }
}

impl fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
