use std::fmt;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// Where a record or line came from, used in diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin(pub String);

impl Origin {
    pub fn unnamed() -> Self {
        Origin("<stream>".to_string())
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "\"{}\"", self.0)
    }
}

impl From<&std::path::Path> for Origin {
    fn from(path: &std::path::Path) -> Self {
        Origin(path.display().to_string())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Input file does not exist: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("Output directory does not exist: {}", path.display())]
    OutputDirectory { path: PathBuf },

    #[error("Invalid text encoding on line {line} in {origin}: {source}")]
    Decode {
        origin: Origin,
        line: usize,
        source: std::string::FromUtf8Error,
    },

    #[error("Malformed record ending on line {line} in {origin}: {reason}")]
    MalformedRecord {
        origin: Origin,
        line: usize,
        reason: String,
    },

    #[error("{0}")]
    Validation(String),

    #[error("Read \"{id}\" from the mapped reads is missing from the raw reads")]
    LookupMiss { id: String },

    #[error("Scaffold \"{name}\" not found")]
    ScaffoldNotFound { name: String },

    #[error("Scaffold \"{name}\" has no sequence lines")]
    EmptyScaffold { name: String },

    #[error("Scaffold \"{name}\" line {line} has length {found}, expected {expected}; wraparound addressing needs equal line lengths")]
    IrregularLineLength {
        name: String,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Error {context}: {source}")]
    Io {
        context: String,
        source: std::io::Error,
    },

    #[error("Error detecting compression: {0}")]
    Compression(#[from] niffler::Error),
}

impl Error {
    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            context: context.into(),
            source,
        }
    }
}
