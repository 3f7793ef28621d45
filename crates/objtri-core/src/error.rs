//! Error types for OBJ conversion.
//!
//! Only failures that abort a file's conversion live here. Faces with an
//! unsupported vertex count and missing batch inputs are reported through
//! [`ConversionStats`](crate::ConversionStats) and
//! [`BatchReport`](crate::BatchReport) instead.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a conversion.
#[derive(Error, Debug)]
pub enum ObjTriError {
    /// The input file could not be opened or read.
    ///
    /// Non-UTF-8 content also ends up here, since lines are read as text.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// Input path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The output file could not be created or written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// Output path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A config file exists but is unreadable or is not valid TOML.
    #[error("invalid config {}: {message}", .path.display())]
    Config {
        /// Config file path.
        path: PathBuf,
        /// Reader or TOML parser message.
        message: String,
    },

    /// The directory holding the running executable could not be resolved.
    #[error("cannot determine program directory: {0}")]
    NoProgramDir(#[source] io::Error),
}

impl ObjTriError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for objtri operations.
pub type Result<T> = std::result::Result<T, ObjTriError>;
