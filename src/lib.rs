//! Library Circulation Engine
//! # Overview
//!
//! This library provides a deterministic, single-threaded command processor
//! for library circulation: borrowing, returning, penalty payment and state
//! reporting over an in-memory catalog and user registry.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Item, Patron, Command, etc.)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::engine`] - Command dispatch, business-rule ordering, logging
//!   - [`core::catalog`] - Insertion-ordered item storage
//!   - [`core::registry`] - Insertion-ordered patron storage
//! - [`io`] - Delimited-text input parsing and log output
//! - [`pipeline`] - End-to-end run orchestration
//!
//! # Commands
//!
//! The engine supports five commands:
//!
//! - **borrow**: Lend an item to a user on a given date, after an overdue
//!   scan of everything the user already holds
//! - **return**: Take a held item back
//! - **pay**: Clear a user's accrued penalty
//! - **displayUsers** / **displayItems**: Append every user/item rendering
//!   to the transaction log
//!
//! # Business Rules
//!
//! Each user variant fixes a borrow capacity (student 5, academic staff 3,
//! guest 1) and an overdue limit in days (30/15/7). Loans held past the
//! limit are force-returned during the next borrow's overdue scan, adding
//! 2.0 to the penalty per item; a penalty of 6.0 or more blocks all
//! borrowing until paid. Item eligibility layers on top: "reference" books
//! never circulate, students are refused anything tagged "reference", and
//! guests are refused "rare" and "limited" items.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod pipeline;
pub mod types;

pub use crate::core::{Catalog, CirculationEngine, PatronRegistry};
pub use crate::io::write_log;
pub use crate::types::{
    Command, Item, ItemId, ItemKind, LibraryError, Patron, PatronId, PatronKind,
};
