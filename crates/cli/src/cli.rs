//! CLI definitions and command dispatch.

use std::{path::PathBuf, time::Duration};

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::{Builder, Env};

use piatto_core::{
    TrimOptions,
    config::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, DEFAULT_SCAN_PATHS},
};

use crate::commands::{find_matches, run_trim};

#[derive(Parser)]
#[command(name = "piatto", version)]
#[command(about = "Keep the Tabler Icons stylesheet down to the icons a site actually uses")]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, clap::Args)]
pub struct TrimArgs {
    /// Directories searched for `ti ti-*` classes [default: layouts exampleSite]
    #[arg(value_name = "PATHS")]
    pub paths: Vec<PathBuf>,
    /// Full tabler-icons.min.css
    #[arg(short, long, default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,
    /// Trimmed stylesheet to write
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,
    /// Also write the icon list for compiling the icon font
    #[arg(long, value_name = "PATH")]
    pub compile_options: Option<PathBuf>,
    /// Rescan every SECONDS and re-trim when icon usage changes
    #[arg(short, long, value_name = "SECONDS", value_parser = parse_interval)]
    pub watch: Option<Duration>,
}

impl TrimArgs {
    pub fn options(&self) -> TrimOptions {
        let paths = if self.paths.is_empty() {
            DEFAULT_SCAN_PATHS.iter().map(PathBuf::from).collect()
        } else {
            self.paths.clone()
        };
        TrimOptions {
            paths,
            input: self.input.clone(),
            output: self.output.clone(),
            compile_options: self.compile_options.clone(),
            ..Default::default()
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Trim tabler-icons.min.css to the classes used under PATHS
    Trim {
        #[command(flatten)]
        args: TrimArgs,
    },
    /// List icon classes found under PATHS [default: .]
    Match {
        #[arg(value_name = "PATHS")]
        paths: Vec<PathBuf>,
        /// Print each class once, without file locations
        #[arg(short, long)]
        name_only: bool,
    },
}

impl Commands {
    pub fn run(self) -> Result<()> {
        match self {
            Commands::Trim { args } => run_trim(&args)?,
            Commands::Match { paths, name_only } => find_matches(&paths, name_only)?,
        }
        Ok(())
    }
}

/// Log `info` and above by default, `debug` with `--verbose`; `RUST_LOG` wins.
pub fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn parse_interval(s: &str) -> Result<Duration, String> {
    let secs: f64 = s
        .parse()
        .map_err(|_| format!("`{s}` is not a number of seconds"))?;
    if !secs.is_finite() || secs <= 0.0 {
        return Err(format!("watch interval must be positive, got {s}"));
    }
    let interval = Duration::try_from_secs_f64(secs)
        .map_err(|e| format!("invalid watch interval {s}: {e}"))?;
    if interval.is_zero() {
        return Err(format!("watch interval {s} rounds down to zero"));
    }
    Ok(interval)
}
