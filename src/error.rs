use std::path::PathBuf;
use thiserror::Error;

/// Failures of the outer surface: files, configuration, strict parsing.
///
/// The spell checking core itself never fails; bad input degrades to
/// "not correct" or an empty suggestion list.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration error: {0}")]
    Config(#[from] confy::ConfyError),

    #[error("unknown language code: {0:?}")]
    UnknownLanguage(String),
}

pub type Result<T> = std::result::Result<T, Error>;
