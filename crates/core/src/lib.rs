//! Piatto Core - icon stylesheet trimming for the Piatto Hugo theme.

pub mod config;
pub mod io;
pub mod pipeline;

pub use pipeline::{CompileOptions, TrimOptions, TrimReport, Watcher, trim};

pub use css_subsetter::{IconFont, StylesheetDocument, Subsetter};
pub use usage_scanner::{Scanner, UsageMatch};
