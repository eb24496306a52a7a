//! Icon stylesheet trimming pipeline: scan -> parse -> subset -> write.

mod compile_options;
mod watch;

pub use compile_options::CompileOptions;
pub use watch::Watcher;

use std::{collections::BTreeSet, path::PathBuf};

use anyhow::{Context, Result};
use css_subsetter::{IconFont, Subsetter, parse_with, write};
use log::info;

use crate::{
    config::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, DEFAULT_SCAN_PATHS, DEFAULT_USAGE_PATTERN},
    io::StylesheetFile,
};

/// Everything one trim run needs; nothing is read from global state.
#[derive(Debug, Clone)]
pub struct TrimOptions {
    /// Directories (or files) searched for icon references.
    pub paths: Vec<PathBuf>,
    /// Full icon stylesheet.
    pub input: PathBuf,
    /// Trimmed stylesheet, replaced on every run.
    pub output: PathBuf,
    /// Where to write the icon list for the font build, if anywhere.
    pub compile_options: Option<PathBuf>,
    /// Regex matching a marker and an icon class, e.g. `ti ti-home`.
    pub pattern: String,
    pub icon_font: IconFont,
}

impl Default for TrimOptions {
    fn default() -> Self {
        Self {
            paths: DEFAULT_SCAN_PATHS.iter().map(PathBuf::from).collect(),
            input: PathBuf::from(DEFAULT_INPUT_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            compile_options: None,
            pattern: DEFAULT_USAGE_PATTERN.to_string(),
            icon_font: IconFont::tabler(),
        }
    }
}

/// Outcome of a trim run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrimReport {
    /// Selectors written to the output, base rule included.
    pub kept: Vec<String>,
    /// Requested icon names with no rule in the input stylesheet.
    pub unmatched: Vec<String>,
    pub input_bytes: u64,
    pub output_bytes: u64,
}

impl TrimReport {
    /// Percentage of the input removed.
    pub fn reduction(&self) -> f64 {
        if self.input_bytes == 0 {
            return 0.0;
        }
        (1.0 - self.output_bytes as f64 / self.input_bytes as f64) * 100.0
    }
}

/// Trim `options.input` down to the icons in `allowed` and write `options.output`.
///
/// The output is only touched once the trimmed stylesheet is complete, so a
/// parse or subset failure leaves any previous output in place.
pub fn trim(options: &TrimOptions, allowed: &BTreeSet<String>) -> Result<TrimReport> {
    let input = StylesheetFile::new(&options.input);
    let output = StylesheetFile::new(&options.output);

    let source = input.read()?;
    let doc = parse_with(&source, &options.icon_font)
        .with_context(|| format!("Failed to parse {}", input.path().display()))?;

    let subsetter = Subsetter::new()
        .with_icon_font(options.icon_font.clone())
        .with_classes(allowed.iter().cloned());
    let trimmed = subsetter
        .subset(&doc)
        .with_context(|| format!("Failed to subset {}", input.path().display()))?;

    output.ensure_parent_dir()?;
    write(&trimmed, output.path())
        .with_context(|| format!("Failed to write stylesheet: {}", output.path().display()))?;

    let report = TrimReport {
        kept: trimmed.selectors().map(str::to_owned).collect(),
        unmatched: subsetter
            .unmatched(&doc)
            .into_iter()
            .map(str::to_owned)
            .collect(),
        input_bytes: source.len() as u64,
        output_bytes: output.size()?,
    };

    info!(
        "Trimmed {} -> {} ({} of {} rules, {:.1} KB -> {:.1} KB, {:.1}% reduction)",
        input.path().display(),
        output.path().display(),
        report.kept.len(),
        doc.rules.len(),
        report.input_bytes as f64 / 1024.0,
        report.output_bytes as f64 / 1024.0,
        report.reduction()
    );

    Ok(report)
}
