//! Syllables command: per-word syllable breakdown.

use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use kincaid_core::markdown;
use kincaid_core::syllables::{self, SyllableMethod};

use super::InputArgs;

/// Arguments for the `syllables` subcommand.
#[derive(Args, Debug, Default)]
pub struct SyllablesArgs {
    /// Input source.
    #[command(flatten)]
    pub input: InputArgs,

    /// Syllable estimator.
    #[arg(long = "syllables", value_enum, value_name = "METHOD")]
    pub method: Option<SyllableMethod>,
}

/// Print the estimated syllables of every word in a file or stdin.
#[instrument(name = "cmd_syllables", skip_all, fields(source = %args.input.source_name()))]
pub fn cmd_syllables(
    args: SyllablesArgs,
    global_json: bool,
    config_method: Option<SyllableMethod>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(method = ?args.method, "executing syllables command");

    let content = args.input.read(max_input_bytes)?;
    let prose = if args.input.strip_markdown() {
        markdown::strip_to_prose(&content)
    } else {
        content
    };
    let method = args.method.or(config_method).unwrap_or_default();

    let report = syllables::syllable_breakdown(&prose, method);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let width = report
        .words
        .iter()
        .map(|w| w.word.chars().count())
        .max()
        .unwrap_or(0);
    for entry in &report.words {
        println!("{:<width$}  {}", entry.word, entry.syllables);
    }
    println!(
        "{}: {} ({} words, {})",
        "Total".bold(),
        report.total,
        report.words.len(),
        report.method.dimmed()
    );

    Ok(())
}
