//! Syllable estimation.
//!
//! Two estimators are available, selected with [`SyllableMethod`]:
//!
//! - [`SyllableMethod::Heuristic`] (default) counts runs of `a e i o u y`,
//!   drops a trailing `e` when an earlier vowel run remains ("like" → 1,
//!   "value" → 1), and floors at one syllable.
//! - [`SyllableMethod::Patterns`] counts runs of `a e i o u`, then applies
//!   the add/deduct tables in [`dictionaries::syllable_patterns`].
//!
//! Both are approximations. Irregular words ("table", "create") are
//! misestimated, and no pronunciation dictionary is consulted.
//!
//! [`dictionaries::syllable_patterns`]: crate::dictionaries::syllable_patterns

use std::sync::LazyLock;

use regex::{RegexSet, RegexSetBuilder};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dictionaries::syllable_patterns::{ADD_PATTERNS, DEDUCT_PATTERNS};
use crate::text;

static ADD_SET: LazyLock<RegexSet> = LazyLock::new(|| pattern_set(ADD_PATTERNS));

static DEDUCT_SET: LazyLock<RegexSet> = LazyLock::new(|| pattern_set(DEDUCT_PATTERNS));

fn pattern_set(patterns: &[&str]) -> RegexSet {
    RegexSetBuilder::new(patterns)
        .case_insensitive(true)
        .build()
        .expect("valid regex set")
}

/// Syllable estimation strategy.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum SyllableMethod {
    /// Vowel runs (including `y`) with silent-e correction.
    #[default]
    Heuristic,
    /// Vowel runs adjusted by add/deduct spelling patterns.
    Patterns,
}

impl SyllableMethod {
    /// Returns the method name as used in config files and on the CLI.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Heuristic => "heuristic",
            Self::Patterns => "patterns",
        }
    }
}

impl std::fmt::Display for SyllableMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Syllable count for one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WordSyllables {
    /// The word as it appears in the text.
    pub word: String,
    /// Estimated syllables.
    pub syllables: usize,
}

/// Per-word syllable breakdown of a text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SyllableReport {
    /// Estimator used.
    pub method: SyllableMethod,
    /// Words in text order.
    pub words: Vec<WordSyllables>,
    /// Sum of all word counts.
    pub total: usize,
}

const fn is_heuristic_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

const fn is_pattern_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Count maximal runs of characters satisfying `is_vowel`, ignoring ASCII case.
fn vowel_runs(word: &str, is_vowel: fn(char) -> bool) -> usize {
    let mut runs = 0;
    let mut previous_was_vowel = false;
    for ch in word.chars() {
        let vowel = is_vowel(ch.to_ascii_lowercase());
        if vowel && !previous_was_vowel {
            runs += 1;
        }
        previous_was_vowel = vowel;
    }
    runs
}

/// The word without its trailing `e`, if it ends in one (ASCII case ignored).
fn strip_trailing_e(word: &str) -> Option<&str> {
    word.strip_suffix(['e', 'E'])
}

fn estimate_heuristic(word: &str) -> usize {
    let runs = vowel_runs(word, is_heuristic_vowel);
    // Silent e: the rest of the word must still carry a vowel run.
    let silent_e = strip_trailing_e(word)
        .is_some_and(|rest| vowel_runs(rest, is_heuristic_vowel) >= 1);
    runs.saturating_sub(usize::from(silent_e)).max(1)
}

fn estimate_patterns(word: &str) -> usize {
    let groups = vowel_runs(word, is_pattern_vowel);
    let add = ADD_SET.matches(word).iter().count();
    let deduct = DEDUCT_SET.matches(word).iter().count();
    (groups + add).saturating_sub(deduct).max(1)
}

/// Estimate the syllables in a single word with the default heuristic.
///
/// Returns 0 for an empty word and at least 1 otherwise.
pub fn count_syllables(word: &str) -> usize {
    count_syllables_with(word, SyllableMethod::Heuristic)
}

/// Estimate the syllables in a single word with the given method.
pub fn count_syllables_with(word: &str, method: SyllableMethod) -> usize {
    if word.is_empty() {
        return 0;
    }
    match method {
        SyllableMethod::Heuristic => estimate_heuristic(word),
        SyllableMethod::Patterns => estimate_patterns(word),
    }
}

/// Total syllables over every word of `text`, using the default heuristic.
pub fn syllables_in_text(text: &str) -> usize {
    syllables_in_text_with(text, SyllableMethod::Heuristic)
}

/// Total syllables over every word of `text`.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn syllables_in_text_with(text: &str, method: SyllableMethod) -> usize {
    text::words(text)
        .map(|word| count_syllables_with(word, method))
        .sum()
}

/// Break `text` down into words with their syllable counts.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn syllable_breakdown(text: &str, method: SyllableMethod) -> SyllableReport {
    let words: Vec<WordSyllables> = text::words(text)
        .map(|word| WordSyllables {
            word: word.to_string(),
            syllables: count_syllables_with(word, method),
        })
        .collect();
    let total = words.iter().map(|w| w.syllables).sum();
    tracing::debug!(words = words.len(), total, "syllable breakdown complete");

    SyllableReport {
        method,
        words,
        total,
    }
}
