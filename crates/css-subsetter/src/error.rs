//! Error types for stylesheet subsetting.

use std::{fmt, io, path::PathBuf, result};

/// Header or footer comment block of a stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    LeadingComment,
    TrailingComment,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::LeadingComment => f.write_str("leading comment"),
            Section::TrailingComment => f.write_str("trailing comment"),
        }
    }
}

/// Errors that can occur while parsing, subsetting or writing a stylesheet.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("stylesheet must be wrapped in a header and a footer comment, found {found} comment block(s)")]
    MalformedInput { found: usize },

    #[error("no base rule `{selector}` in stylesheet")]
    MissingBaseRule { selector: String },

    #[error("cannot serialize stylesheet without a {section} block")]
    EmptySection { section: Section },

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = result::Result<T, Error>;
