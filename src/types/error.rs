//! Error types for the library circulation engine
//!
//! This module defines all error types that can occur while loading input
//! files and writing the transaction log. Business-rule outcomes (penalty
//! blocks, capacity limits, type restrictions) are never errors — they are
//! reported as transaction-log lines and processing continues.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: File not found, permission denied, etc. (fatal)
//! - **Record Errors**: Malformed fields in a delimited-text record — the
//!   record is skipped and processing continues with the next one

use thiserror::Error;

/// Main error type for the circulation engine
///
/// This enum represents all possible errors that can occur while loading
/// catalog/patron/command files or writing output. Each variant includes
/// relevant context to help diagnose and resolve the issue.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LibraryError {
    /// The input file could not be opened
    ///
    /// This is a fatal error that prevents processing from starting.
    #[error("Failed to open file '{path}': {message}")]
    FileOpen {
        /// The path that could not be opened
        path: String,
        /// Description of the underlying failure
        message: String,
    },

    /// I/O error occurred while reading or writing
    ///
    /// This is typically a fatal error (file permissions, disk full, etc.).
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// A record could not be parsed from the delimited-text input
    ///
    /// This is a recoverable error - the malformed record is skipped
    /// and processing continues with the next record.
    #[error("Record error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Record {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// A date field did not match the `dd/mm/yyyy` wire format
    ///
    /// This is a recoverable error - the command is skipped.
    #[error("Invalid date '{value}'{}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    InvalidDate {
        /// The unparseable date string
        value: String,
        /// Line number where the error occurred (if available)
        line: Option<u64>,
    },

    /// A numeric field (student grade, DVD runtime) could not be parsed
    ///
    /// This is a recoverable error - the record is skipped.
    #[error("Invalid number '{value}' for field '{field}'{}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    InvalidNumber {
        /// The unparseable value
        value: String,
        /// Name of the field being parsed
        field: String,
        /// Line number where the error occurred (if available)
        line: Option<u64>,
    },
}

// Conversion from io::Error to LibraryError
impl From<std::io::Error> for LibraryError {
    fn from(error: std::io::Error) -> Self {
        LibraryError::Io {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to LibraryError
impl From<csv::Error> for LibraryError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        LibraryError::Record {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl LibraryError {
    /// Create a FileOpen error
    pub fn file_open(path: &std::path::Path, source: &std::io::Error) -> Self {
        LibraryError::FileOpen {
            path: path.display().to_string(),
            message: source.to_string(),
        }
    }

    /// Create a Record error
    pub fn record(line: Option<u64>, message: impl Into<String>) -> Self {
        LibraryError::Record {
            line,
            message: message.into(),
        }
    }

    /// Create an InvalidDate error
    pub fn invalid_date(value: &str, line: Option<u64>) -> Self {
        LibraryError::InvalidDate {
            value: value.to_string(),
            line,
        }
    }

    /// Create an InvalidNumber error
    pub fn invalid_number(value: &str, field: &str, line: Option<u64>) -> Self {
        LibraryError::InvalidNumber {
            value: value.to_string(),
            field: field.to_string(),
            line,
        }
    }
}
