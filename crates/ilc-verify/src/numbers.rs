//! Digit and English number word equivalence.
//!
//! Learners may type `27` where the answer reads `twenty-seven`, or the other way
//! around. Both directions rewrite whole words only and are used to build
//! equivalence classes for comparison, never for display, so a round trip is not
//! required to reproduce the input as typed.

use std::{collections::HashMap, sync::LazyLock};

use regex::{Captures, Regex};

const UNITS: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [(&str, u32); 8] = [
    ("twenty", 20),
    ("thirty", 30),
    ("forty", 40),
    ("fifty", 50),
    ("sixty", 60),
    ("seventy", 70),
    ("eighty", 80),
    ("ninety", 90),
];

/// Bidirectional table covering 0 to 100.
struct NumberMap {
    word_to_digits: HashMap<String, String>,
    digits_to_word: HashMap<String, String>,
    words: Regex,
    digits: Regex,
}

static NUMBER_MAP: LazyLock<NumberMap> = LazyLock::new(NumberMap::new);

impl NumberMap {
    fn new() -> Self {
        let mut pairs: Vec<(String, String)> = UNITS
            .iter()
            .enumerate()
            .map(|(value, word)| (word.to_string(), value.to_string()))
            .collect();

        for (tens, value) in TENS {
            pairs.push((tens.to_string(), value.to_string()));
            // Hyphenated compounds: twenty-one .. ninety-nine
            for (offset, unit) in UNITS[1..10].iter().enumerate() {
                let compound_value = value + offset as u32 + 1;
                pairs.push((format!("{tens}-{unit}"), compound_value.to_string()));
            }
        }
        pairs.push(("hundred".to_string(), "100".to_string()));

        let words = word_boundary_alternation(pairs.iter().map(|(word, _)| word.as_str()));
        let digits = word_boundary_alternation(pairs.iter().map(|(_, digits)| digits.as_str()));
        let digits_to_word = pairs
            .iter()
            .map(|(word, digits)| (digits.clone(), word.clone()))
            .collect();

        Self {
            word_to_digits: pairs.into_iter().collect(),
            digits_to_word,
            words,
            digits,
        }
    }
}

/// Build `\b(?:k1|k2|...)\b` with longer keys first.
///
/// The regex engine takes the first alternative that matches at a position, so
/// `twenty-seven` must be tried before `twenty` and `seven`.
fn word_boundary_alternation<'a>(keys: impl Iterator<Item = &'a str>) -> Regex {
    let mut keys: Vec<&str> = keys.collect();
    keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let alternation = keys
        .into_iter()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|");

    Regex::new(&format!(r"\b(?:{alternation})\b")).expect("number pattern is valid")
}

/// Replace whole-word number words with their digit strings.
///
/// `"twenty-seven"` becomes `"27"`; `"someone"` is left untouched.
pub fn words_to_digits(text: &str) -> String {
    let map = &*NUMBER_MAP;
    map.words
        .replace_all(text, |caps: &Captures<'_>| {
            map.word_to_digits
                .get(&caps[0])
                .cloned()
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Replace whole digit strings from 0 to 100 with their number words.
///
/// `"27"` becomes `"twenty-seven"`, never `"2seven"`; numbers outside the table
/// such as `"2024"` are left untouched.
pub fn digits_to_words(text: &str) -> String {
    let map = &*NUMBER_MAP;
    map.digits
        .replace_all(text, |caps: &Captures<'_>| {
            map.digits_to_word
                .get(&caps[0])
                .cloned()
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
