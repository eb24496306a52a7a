//! Icon usage scanning.
//!
//! Walks content and template directories and collects the icon classes they
//! reference through a two-token marker such as `ti ti-home` (the `class`
//! attribute Tabler Icons expects). The result is the allow-list for
//! stylesheet subsetting.

mod error;
mod scanner;

pub use error::{Error, Result};
pub use scanner::{Scanner, TABLER_PATTERN, TEXT_EXTENSIONS, UsageMatch, is_text_file};
