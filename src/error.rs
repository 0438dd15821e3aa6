use crate::record::ParseError;
use std::path::PathBuf;
use thiserror::Error;

/// Per-file pipeline failure. The driver reports these and moves on to the
/// next input; none of them abort the batch.
#[derive(Debug, Error)]
pub enum BindError {
    #[error("file {} does not exist", path.display())]
    MissingFile { path: PathBuf },

    #[error("{}: {}", path.display(), source)]
    MalformedLine {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("{}: no records to summarize", path.display())]
    EmptyInput { path: PathBuf },

    #[error("{}: {}", path.display(), source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Zero records reached a statistic that is undefined on empty input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no records to summarize")]
pub struct EmptyInput;
