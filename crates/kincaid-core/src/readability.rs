//! Readability scoring.
//!
//! Flesch Reading Ease:
//! `206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)`
//!
//! Flesch-Kincaid Grade Level:
//! `0.39 * (words/sentences) + 11.8 * (syllables/words) - 15.59`
//!
//! Higher reading ease = easier text; lower grade = easier text. Neither
//! score is clamped. Both are NaN when the text has no words or no
//! sentences, and callers decide how to display that.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::markdown;
use crate::syllables::{self, SyllableMethod};
use crate::text;

pub use crate::syllables::syllables_in_text;
pub use crate::text::{sentence_count, word_count};

/// Word, sentence, and syllable totals for a text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TextStats {
    /// Number of words.
    pub words: usize,
    /// Number of sentences.
    pub sentences: usize,
    /// Total syllables across all words.
    pub syllables: usize,
}

impl TextStats {
    /// Tokenize `text` once and collect its totals.
    #[tracing::instrument(skip(text), fields(text_len = text.len()))]
    pub fn from_text(text: &str, method: SyllableMethod) -> Self {
        let (words, syllables) = text::words(text).fold((0, 0), |(words, syllables), word| {
            (
                words + 1,
                syllables + syllables::count_syllables_with(word, method),
            )
        });
        let sentences = text::sentence_count(text);
        tracing::debug!(words, sentences, syllables, "text stats collected");

        Self {
            words,
            sentences,
            syllables,
        }
    }

    /// Words per sentence and syllables per word, or `None` when either
    /// denominator is zero.
    fn ratios(&self) -> Option<(f64, f64)> {
        if self.words == 0 || self.sentences == 0 {
            return None;
        }
        let words_per_sentence = self.words as f64 / self.sentences as f64;
        let syllables_per_word = self.syllables as f64 / self.words as f64;
        Some((words_per_sentence, syllables_per_word))
    }

    /// Flesch Reading Ease for these totals (NaN when undefined).
    pub fn reading_ease(&self) -> f64 {
        self.ratios().map_or(f64::NAN, |(wps, spw)| {
            (-84.6f64).mul_add(spw, (-1.015f64).mul_add(wps, 206.835))
        })
    }

    /// Flesch-Kincaid Grade Level for these totals (NaN when undefined).
    pub fn grade(&self) -> f64 {
        self.ratios()
            .map_or(f64::NAN, |(wps, spw)| 0.39f64.mul_add(wps, 11.8 * spw) - 15.59)
    }
}

/// Flesch Reading Ease score of `text`.
///
/// Returns NaN when the text contains no words or no sentences.
pub fn flesch_reading_ease_score(text: &str) -> f64 {
    TextStats::from_text(text, SyllableMethod::Heuristic).reading_ease()
}

/// Flesch-Kincaid Grade Level of `text`.
///
/// Returns NaN when the text contains no words or no sentences.
pub fn flesch_kincaid_grade(text: &str) -> f64 {
    TextStats::from_text(text, SyllableMethod::Heuristic).grade()
}

/// Options for [`check_readability`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadabilityOptions {
    /// Strip markdown formatting before analysis.
    pub strip_markdown: bool,
    /// Syllable estimator.
    pub method: SyllableMethod,
    /// Minimum acceptable reading ease score.
    pub min_score: Option<f64>,
}

/// Result of readability analysis.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityReport {
    /// Number of words detected.
    pub words: usize,
    /// Number of sentences detected.
    pub sentences: usize,
    /// Total syllable count.
    pub syllables: usize,
    /// Flesch Reading Ease score (`None` when the text has no words or no sentences).
    pub reading_ease: Option<f64>,
    /// Flesch-Kincaid Grade Level (`None` when the text has no words or no sentences).
    pub grade: Option<f64>,
    /// Syllable estimator used.
    pub syllable_method: SyllableMethod,
    /// Minimum acceptable reading ease (if provided).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_score: Option<f64>,
    /// Whether the score is undefined or below the minimum.
    pub below_min: bool,
}

impl ReadabilityReport {
    /// The word, sentence, and syllable totals of this report.
    pub const fn stats(&self) -> TextStats {
        TextStats {
            words: self.words,
            sentences: self.sentences,
            syllables: self.syllables,
        }
    }
}

fn defined(score: f64) -> Option<f64> {
    (!score.is_nan()).then_some(score)
}

/// Score the readability of `text`.
#[tracing::instrument(skip(text, options), fields(text_len = text.len(), strip_md = options.strip_markdown))]
pub fn check_readability(text: &str, options: &ReadabilityOptions) -> ReadabilityReport {
    let prose = if options.strip_markdown {
        markdown::strip_to_prose(text)
    } else {
        text.to_string()
    };

    let stats = TextStats::from_text(&prose, options.method);
    let reading_ease = defined(stats.reading_ease());
    let grade = defined(stats.grade());

    let below_min = options
        .min_score
        .is_some_and(|min| reading_ease.is_none_or(|score| score < min));

    ReadabilityReport {
        words: stats.words,
        sentences: stats.sentences,
        syllables: stats.syllables,
        reading_ease,
        grade,
        syllable_method: options.method,
        min_score: options.min_score,
        below_min,
    }
}
