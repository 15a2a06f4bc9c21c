//! Data tables for text analysis.
//!
//! Holds the fixed pattern lists used by the pattern-based syllable
//! estimator.

pub mod syllable_patterns;
