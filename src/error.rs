// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
}

/// Failures of the local preference store.
///
/// None of these reach the user: the locale store logs them and keeps going
/// with its in-memory value. They stay out of [`Error`] for that reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// No data directory could be resolved on this platform.
    Unavailable,

    /// The preference file exists but could not be read.
    Read(String),

    /// The preference file could not be decoded.
    Decode(String),

    /// The preference file could not be written.
    Write(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable => write!(f, "no storage location available"),
            StorageError::Read(msg) => write!(f, "read failed: {}", msg),
            StorageError::Decode(msg) => write!(f, "decode failed: {}", msg),
            StorageError::Write(msg) => write!(f, "write failed: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(msg) => write!(f, "I/O Error: {}", msg),
            Error::Config(msg) => write!(f, "Config Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}


pub type Result<T> = std::result::Result<T, Error>;
