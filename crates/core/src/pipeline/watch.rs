//! Repeated trimming driven by changes in icon usage.

use std::{collections::BTreeSet, thread::sleep, time::Duration};

use anyhow::{Context, Result};
use log::debug;
use usage_scanner::Scanner;

use super::{CompileOptions, TrimOptions, TrimReport, trim};

/// Rescans the content tree and re-trims the stylesheet when the set of used
/// icons changes.
#[derive(Debug)]
pub struct Watcher {
    options: TrimOptions,
    scanner: Scanner,
    previous: Option<BTreeSet<String>>,
}

impl Watcher {
    pub fn new(options: TrimOptions) -> Result<Self> {
        let scanner = Scanner::new(&options.pattern)
            .with_context(|| format!("Invalid usage pattern: {}", options.pattern))?;
        Ok(Self {
            options,
            scanner,
            previous: None,
        })
    }

    pub fn options(&self) -> &TrimOptions {
        &self.options
    }

    /// Icon names seen by the last run that wrote output.
    pub fn previous(&self) -> Option<&BTreeSet<String>> {
        self.previous.as_ref()
    }

    /// Scan once and trim if the icon set differs from the previous run.
    ///
    /// The first call always trims. Returns `None` when nothing changed.
    pub fn run_once(&mut self) -> Result<Option<TrimReport>> {
        let names = self
            .scanner
            .collect_class_names(&self.options.paths, self.options.icon_font.class_prefix())
            .context("Failed to scan for icon usage")?;
        debug!("Icons in use: {names:?}");

        if self.previous.as_ref() == Some(&names) {
            debug!("Icon usage unchanged, skipping");
            return Ok(None);
        }

        let report = trim(&self.options, &names)?;

        let added: Vec<&str> = names
            .iter()
            .filter(|name| self.previous.as_ref().is_none_or(|prev| !prev.contains(*name)))
            .map(String::as_str)
            .collect();
        println!(
            "These new classes {added:?} are synced to {}",
            self.options.output.display()
        );

        if let Some(path) = &self.options.compile_options {
            let compile_options = CompileOptions::from_names(&names);
            compile_options.write(path)?;
            println!(
                "Compile options for {} icons written to {}",
                compile_options.include_icons.len(),
                path.display()
            );
        }

        self.previous = Some(names);
        Ok(Some(report))
    }

    /// Run forever, pausing `interval` between scans. Returns only on error.
    pub fn watch(&mut self, interval: Duration) -> Result<()> {
        println!(
            "Watching {} every {:.1}s",
            self.options
                .paths
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", "),
            interval.as_secs_f64()
        );
        loop {
            self.run_once()?;
            sleep(interval);
        }
    }
}
