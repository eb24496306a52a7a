//! Error types for usage scanning.

use std::{io, path::PathBuf, result};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid usage pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("invalid directory pattern: {0}")]
    Glob(#[from] glob::PatternError),

    #[error("directory not found: {}", .0.display())]
    MissingRoot(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = result::Result<T, Error>;
