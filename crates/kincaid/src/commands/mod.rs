//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;

pub mod info;
pub mod score;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod syllables;

/// Input arguments shared by the text-analysis commands.
#[derive(Args, Debug, Default)]
pub struct InputArgs {
    /// File to analyze (reads stdin when omitted or `-`).
    pub file: Option<Utf8PathBuf>,

    /// Strip markdown before analysis (implied for `.md` files).
    #[arg(long)]
    pub markdown: bool,
}

impl InputArgs {
    /// Human-readable name of the input source.
    pub fn source_name(&self) -> &str {
        self.file_path().map_or("<stdin>", Utf8Path::as_str)
    }

    /// Whether markdown should be stripped before scoring.
    pub fn strip_markdown(&self) -> bool {
        self.markdown
            || self
                .file_path()
                .is_some_and(|path| matches!(path.extension(), Some("md" | "markdown")))
    }

    /// Read the input text, enforcing the size limit.
    pub fn read(&self, max_bytes: Option<usize>) -> anyhow::Result<String> {
        match self.file_path() {
            Some(path) => read_input_file(path, max_bytes),
            None => read_stdin(max_bytes),
        }
    }

    fn file_path(&self) -> Option<&Utf8Path> {
        self.file
            .as_deref()
            .filter(|path| path.as_str() != "-")
    }
}

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    std::fs::read_to_string(path.as_std_path()).with_context(|| format!("failed to read {path}"))
}

/// Read all of stdin, failing once the size limit is exceeded.
fn read_stdin(max_bytes: Option<usize>) -> anyhow::Result<String> {
    let mut content = String::new();
    let stdin = std::io::stdin().lock();
    match max_bytes {
        Some(max) => {
            // One byte past the limit is enough to know it was exceeded.
            let limit = u64::try_from(max).unwrap_or(u64::MAX).saturating_add(1);
            stdin
                .take(limit)
                .read_to_string(&mut content)
                .context("failed to read stdin")?;
            if content.len() > max {
                anyhow::bail!("input too large: stdin exceeds {max} bytes");
            }
        }
        None => {
            let mut stdin = stdin;
            stdin
                .read_to_string(&mut content)
                .context("failed to read stdin")?;
        }
    }
    Ok(content)
}

/// Most decimal digits a score is shown with; `f64` holds no more.
pub const MAX_PRECISION: u32 = 15;

/// Truncate `value` toward zero to `digits` decimal places.
///
/// `digits` is clamped to [`MAX_PRECISION`]. NaN passes through unchanged.
pub fn truncate_decimals(value: f64, digits: u32) -> f64 {
    let digits = digits.min(MAX_PRECISION);
    let multiplier = 10f64.powi(i32::try_from(digits).unwrap_or(i32::MAX));
    (value * multiplier).trunc() / multiplier
}

/// Format an optional score for display: truncated to `digits` decimal
/// places, or `0` when the score is undefined.
pub fn display_score(score: Option<f64>, digits: u32) -> String {
    score.map_or_else(
        || "0".to_string(),
        |value| {
            let truncated = truncate_decimals(value, digits);
            // Avoid printing "-0" for small negative values truncated to zero.
            let truncated = if truncated == 0.0 { 0.0 } else { truncated };
            format!("{truncated}")
        },
    )
}
