//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `item`: Lendable item variants and loan state
//! - `patron`: Patron account variants, capacity and penalty state
//! - `command`: The circulation command set
//! - `error`: Error types for the circulation engine

pub mod command;
pub mod error;
pub mod item;
pub mod patron;

pub use command::Command;
pub use error::LibraryError;
pub use item::{Item, ItemId, ItemKind, Loan};
pub use patron::{HeldLoan, Patron, PatronId, PatronKind, OVERDUE_PENALTY, PENALTY_THRESHOLD};

/// Wire format for every date in the system (`dd/mm/yyyy`)
pub const DATE_FMT: &str = "%d/%m/%Y";
