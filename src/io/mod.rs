//! I/O module
//!
//! Handles delimited-text input parsing and transaction-log output.
//!
//! # Components
//!
//! - `record_format` - Record format handling (record conversion, log
//!   serialization)
//! - `loader` - Streaming readers with iterator interfaces for the item,
//!   patron and command files

pub mod loader;
pub mod record_format;

pub use loader::{CommandReader, ItemReader, PatronReader};
pub use record_format::{
    convert_command_record, convert_item_record, convert_patron_record, write_log,
};
