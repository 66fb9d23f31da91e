//! Command types for the circulation engine
//!
//! Commands arrive already tokenized from the command file, one per record,
//! and are processed strictly in presentation order.

use crate::types::item::ItemId;
use crate::types::patron::PatronId;
use chrono::NaiveDate;

/// A single circulation command
///
/// Only borrow commands carry a date; return and pay commands reuse the most
/// recently seen borrow date (see the engine's carry-over rule).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Lend an item to a patron on the given date
    Borrow {
        patron: PatronId,
        item: ItemId,
        date: NaiveDate,
    },
    /// Return a held item
    Return { patron: PatronId, item: ItemId },
    /// Clear a patron's penalty balance
    Pay { patron: PatronId },
    /// Append every patron rendering to the log
    DisplayUsers,
    /// Append every item rendering to the log
    DisplayItems,
}
