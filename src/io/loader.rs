//! Streaming readers for the three delimited-text input files
//!
//! Each reader wraps a `csv::Reader` configured for the library wire format
//! (no header row, variable field counts, whitespace-trimmed fields) and
//! implements `Iterator`, yielding one domain value per recognized record.
//!
//! # Error Handling
//!
//! - Fatal errors (file not found) are returned from `open()`
//! - Individual record errors are yielded as `Err` variants in the iterator
//!   with line numbers for debugging; unrecognized records are skipped
//!   silently inside the iterator
//!
//! # Memory Efficiency
//!
//! Readers stream one record at a time; memory usage is O(1) per record,
//! not O(file size).

use crate::io::record_format::{
    convert_command_record, convert_item_record, convert_patron_record,
};
use crate::types::{Command, Item, LibraryError, Patron};
use csv::{Reader, ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::path::Path;

/// Open a delimited-text file with the library wire-format configuration
fn open_reader(path: &Path) -> Result<Reader<File>, LibraryError> {
    let file = File::open(path).map_err(|e| LibraryError::file_open(path, &e))?;

    Ok(ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .buffer_capacity(8 * 1024)
        .from_reader(file))
}

/// Read the next raw record, with its line number attached to errors
fn next_raw(
    reader: &mut Reader<File>,
) -> Option<Result<(StringRecord, Option<u64>), LibraryError>> {
    let mut record = StringRecord::new();
    match reader.read_record(&mut record) {
        Ok(true) => {
            let line = record.position().map(|pos| pos.line());
            Some(Ok((record, line)))
        }
        Ok(false) => None,
        Err(e) => Some(Err(e.into())),
    }
}

/// Streaming reader over catalog item records
#[derive(Debug)]
pub struct ItemReader {
    reader: Reader<File>,
}

impl ItemReader {
    /// Open an item file for streaming iteration
    pub fn open(path: &Path) -> Result<Self, LibraryError> {
        Ok(Self {
            reader: open_reader(path)?,
        })
    }
}

impl Iterator for ItemReader {
    type Item = Result<Item, LibraryError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match next_raw(&mut self.reader)? {
                Ok((record, line)) => match convert_item_record(&record, line) {
                    Ok(Some(item)) => return Some(Ok(item)),
                    Ok(None) => continue,
                    Err(e) => return Some(Err(e)),
                },
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

/// Streaming reader over patron records
#[derive(Debug)]
pub struct PatronReader {
    reader: Reader<File>,
}

impl PatronReader {
    /// Open a patron file for streaming iteration
    pub fn open(path: &Path) -> Result<Self, LibraryError> {
        Ok(Self {
            reader: open_reader(path)?,
        })
    }
}

impl Iterator for PatronReader {
    type Item = Result<Patron, LibraryError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match next_raw(&mut self.reader)? {
                Ok((record, line)) => match convert_patron_record(&record, line) {
                    Ok(Some(patron)) => return Some(Ok(patron)),
                    Ok(None) => continue,
                    Err(e) => return Some(Err(e)),
                },
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

/// Streaming reader over command records
#[derive(Debug)]
pub struct CommandReader {
    reader: Reader<File>,
}

impl CommandReader {
    /// Open a command file for streaming iteration
    pub fn open(path: &Path) -> Result<Self, LibraryError> {
        Ok(Self {
            reader: open_reader(path)?,
        })
    }
}

impl Iterator for CommandReader {
    type Item = Result<Command, LibraryError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match next_raw(&mut self.reader)? {
                Ok((record, line)) => match convert_command_record(&record, line) {
                    Ok(Some(command)) => return Some(Ok(command)),
                    Ok(None) => continue,
                    Err(e) => return Some(Err(e)),
                },
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
