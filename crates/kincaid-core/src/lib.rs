//! Core library for kincaid.
//!
//! Readability metrics over plain text: word count, sentence count,
//! syllable count, Flesch Reading Ease, and Flesch-Kincaid Grade Level.
//! Every metric is a pure function of its input string.
//!
//! # Modules
//!
//! - [`text`] - Word and sentence segmentation
//! - [`syllables`] - Syllable estimation
//! - [`readability`] - Score formulas and reports
//! - [`markdown`] - Prose extraction from markdown
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use kincaid_core::{flesch_reading_ease_score, sentence_count, syllables_in_text, word_count};
//!
//! let text = "The cat sat on the mat.";
//! assert_eq!(word_count(text), 6);
//! assert_eq!(sentence_count(text), 1);
//! assert_eq!(syllables_in_text(text), 6);
//! assert!(flesch_reading_ease_score(text) > 100.0);
//! assert!(flesch_reading_ease_score("").is_nan());
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod dictionaries;
pub mod error;
pub mod markdown;
pub mod readability;
pub mod syllables;
pub mod text;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{ConfigError, ConfigResult};
pub use readability::{
    ReadabilityOptions, ReadabilityReport, TextStats, check_readability, flesch_kincaid_grade,
    flesch_reading_ease_score,
};
pub use syllables::{
    SyllableMethod, count_syllables, count_syllables_with, syllables_in_text,
    syllables_in_text_with,
};
pub use text::{sentence_count, tokenize_sentences, tokenize_words, word_count};

/// Default maximum input size in bytes (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
