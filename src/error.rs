//! Error types for Portico.

use std::fmt;
use std::io;

/// Result type alias for Portico operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for catalog loading.
///
/// Both variants are fatal to the load attempt that produced them: there is
/// no retry and no partial catalog. An empty filter result is not an error
/// and is represented in the render tree instead.
#[derive(Debug)]
pub enum Error {
    /// I/O failure while fetching the catalog document.
    Io(io::Error),
    /// The catalog document did not decode as a catalog.
    Parse(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "catalog fetch failed: {e}"),
            Self::Parse(e) => write!(f, "catalog document is malformed: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}
