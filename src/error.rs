use std::path::PathBuf;

use thiserror::Error;

/// Error conditions of the data layer.
///
/// The variants mirror the distinct user-facing failure messages: an
/// unreadable directory means the share/VPN mount is gone, while a missing
/// `NPI` column means the export format changed — the UI must not collapse
/// the two.
#[derive(Debug, Error)]
pub enum Error {
    /// The export directory could not be listed (missing, unmounted, or
    /// permission denied).
    #[error("export directory unavailable: {path}: {source}")]
    DirectoryUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The configured filename pattern is not a valid glob.
    #[error("invalid filename pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: globset::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A search mode required a column the loaded file does not have.
    #[error("the loaded file does not contain a '{0}' column")]
    MissingColumn(String),
}

pub type Result<T> = std::result::Result<T, Error>;
