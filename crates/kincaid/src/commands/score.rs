//! Score command: word, sentence, and syllable counts plus Flesch Reading Ease.

use anyhow::bail;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use kincaid_core::config::DEFAULT_PRECISION;
use kincaid_core::readability::{self, ReadabilityOptions};
use kincaid_core::syllables::SyllableMethod;

use super::{InputArgs, MAX_PRECISION, display_score};

/// Arguments for the `score` subcommand.
#[derive(Args, Debug, Default)]
pub struct ScoreArgs {
    /// Input source.
    #[command(flatten)]
    pub input: InputArgs,

    /// Syllable estimator.
    #[arg(long = "syllables", value_enum, value_name = "METHOD")]
    pub method: Option<SyllableMethod>,

    /// Minimum acceptable Flesch Reading Ease.
    #[arg(long, allow_negative_numbers = true)]
    pub min_score: Option<f64>,

    /// Decimal digits shown for scores (0-15).
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_PRECISION)))]
    pub precision: Option<u32>,
}

/// Defaults for `score` that come from configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreDefaults {
    /// Syllable estimator.
    pub method: Option<SyllableMethod>,
    /// Minimum acceptable reading ease.
    pub min_score: Option<f64>,
    /// Decimal digits shown for scores.
    pub precision: Option<u32>,
    /// Input size limit in bytes.
    pub max_input_bytes: Option<usize>,
}

/// Score the readability of a file or stdin.
#[instrument(name = "cmd_score", skip_all, fields(source = %args.input.source_name()))]
pub fn cmd_score(
    args: ScoreArgs,
    global_json: bool,
    defaults: ScoreDefaults,
) -> anyhow::Result<()> {
    debug!(
        method = ?args.method,
        min_score = ?args.min_score,
        "executing score command"
    );

    let content = args.input.read(defaults.max_input_bytes)?;
    let source = args.input.source_name();

    let options = ReadabilityOptions {
        strip_markdown: args.input.strip_markdown(),
        method: args.method.or(defaults.method).unwrap_or_default(),
        min_score: args.min_score.or(defaults.min_score),
    };
    let precision = args
        .precision
        .or(defaults.precision)
        .unwrap_or(DEFAULT_PRECISION);

    let report = readability::check_readability(&content, &options);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}: {}", "Words".dimmed(), report.words);
        println!("{}: {}", "Sentences".dimmed(), report.sentences);
        println!("{}: {}", "Syllables".dimmed(), report.syllables);
        println!(
            "{}: {}",
            "Flesch Reading Ease".dimmed(),
            display_score(report.reading_ease, precision)
        );
        println!(
            "{}: {}",
            "Flesch-Kincaid Grade".dimmed(),
            display_score(report.grade, precision)
        );
    }

    match (report.min_score, report.reading_ease) {
        (Some(min), None) if report.below_min => {
            bail!("{source} has no scorable text (min: {min}).");
        }
        (Some(min), Some(score)) if report.below_min => {
            bail!(
                "{source} scores {} (min: {min}). Shorten sentences or use simpler words.",
                display_score(Some(score), precision),
            );
        }
        (Some(min), Some(score)) if !global_json => {
            println!(
                "{} {source} scores {} (min: {min})",
                "PASS:".green(),
                display_score(Some(score), precision),
            );
        }
        _ => {}
    }

    Ok(())
}
