//! Library patron types for the circulation engine
//!
//! A [`Patron`] is an account with a borrow-capacity limit, an overdue-day
//! threshold, an accruing penalty balance, and an insertion-ordered set of
//! currently held loans. The account variant ([`PatronKind`]) fixes the two
//! per-variant constants and layers extra eligibility checks on top of the
//! shared borrow logic.

use crate::types::item::{Item, ItemId};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Patron identifier
pub type PatronId = String;

/// Accrued penalty at or above which all borrowing is blocked until paid
pub const PENALTY_THRESHOLD: Decimal = Decimal::from_parts(6, 0, 0, false, 0);

/// Fixed penalty added for each overdue auto-return event (2.0)
pub const OVERDUE_PENALTY: Decimal = Decimal::from_parts(20, 0, 0, false, 1);

/// A held loan: the borrowed item and the date it was borrowed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeldLoan {
    /// Identifier of the borrowed item
    pub item_id: ItemId,
    /// Date the loan was recorded
    pub borrowed_on: NaiveDate,
}

/// Patron account variants and their profile fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatronKind {
    /// A student: up to 5 items, 30-day overdue limit
    Student {
        department: String,
        faculty: String,
        grade: i32,
    },
    /// Academic staff: up to 3 items, 15-day overdue limit
    AcademicStaff {
        department: String,
        faculty: String,
        title: String,
    },
    /// A guest: a single item, 7-day overdue limit
    Guest { occupation: String },
}

impl PatronKind {
    /// Maximum number of simultaneously held items for this variant
    pub fn max_items(&self) -> usize {
        match self {
            PatronKind::Student { .. } => 5,
            PatronKind::AcademicStaff { .. } => 3,
            PatronKind::Guest { .. } => 1,
        }
    }

    /// Days a loan may run before it is forcibly returned with a penalty
    pub fn overdue_limit_days(&self) -> i64 {
        match self {
            PatronKind::Student { .. } => 30,
            PatronKind::AcademicStaff { .. } => 15,
            PatronKind::Guest { .. } => 7,
        }
    }
}

/// A library account with capacity, overdue and penalty state
///
/// Identity is immutable for the lifetime of a run; only the penalty balance
/// and the held-loan set change. The held set is insertion-ordered and the
/// overdue scan evaluates it in that order.
#[derive(Debug, Clone, PartialEq)]
pub struct Patron {
    /// Unique patron identifier
    pub id: PatronId,
    /// Display name
    pub name: String,
    /// Contact phone number
    pub phone: String,
    /// Accrued penalty balance, non-negative
    ///
    /// Increased only by overdue auto-returns, reset only by a pay command.
    pub penalty: Decimal,
    /// Currently held loans in insertion order, no duplicates
    pub loans: Vec<HeldLoan>,
    /// Account variant with its profile fields
    pub kind: PatronKind,
}

impl Patron {
    /// Create a new patron with no loans and a zero penalty
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        phone: impl Into<String>,
        kind: PatronKind,
    ) -> Self {
        Patron {
            id: id.into(),
            name: name.into(),
            phone: phone.into(),
            penalty: Decimal::ZERO,
            loans: Vec::new(),
            kind,
        }
    }

    /// Whether the patron may take another loan
    ///
    /// Requires the penalty balance to be under the blocking threshold and
    /// the held count to be under the variant's capacity.
    pub fn can_borrow(&self) -> bool {
        self.penalty < PENALTY_THRESHOLD && self.loans.len() < self.kind.max_items()
    }

    /// Remove and return every overdue loan, accruing penalties
    ///
    /// A loan is overdue when the elapsed days from its borrow date to
    /// `current` reach the variant's overdue limit. Expired loans are
    /// returned in held-set insertion order and each adds the fixed
    /// [`OVERDUE_PENALTY`] to the balance. The caller (the engine) clears
    /// the corresponding items' loan slots and emits the auto-return lines;
    /// this bypasses the custody validation of a normal return.
    pub fn expire_overdue(&mut self, current: NaiveDate) -> Vec<HeldLoan> {
        let limit = self.kind.overdue_limit_days();
        let (expired, kept): (Vec<HeldLoan>, Vec<HeldLoan>) = self
            .loans
            .drain(..)
            .partition(|loan| (current - loan.borrowed_on).num_days() >= limit);
        self.loans = kept;

        for _ in &expired {
            self.penalty += OVERDUE_PENALTY;
        }
        expired
    }

    /// Attempt to borrow an item
    ///
    /// Variant-specific eligibility is checked first: students refuse items
    /// whose lending category is "reference" (so the restriction also covers
    /// non-book items carrying that label), guests refuse "rare" and
    /// "limited" items. Then the shared gate ([`Patron::can_borrow`]) and the
    /// item's own eligibility ([`Item::try_borrow`]) apply. On success the
    /// loan joins the held set.
    ///
    /// The overdue scan is expected to have run for this date already; the
    /// engine performs it immediately before delegating here.
    pub fn borrow_item(&mut self, item: &mut Item, date: NaiveDate) -> bool {
        match &self.kind {
            PatronKind::Student { .. } if item.category.eq_ignore_ascii_case("reference") => {
                return false;
            }
            PatronKind::Guest { .. }
                if item.category.eq_ignore_ascii_case("rare")
                    || item.category.eq_ignore_ascii_case("limited") =>
            {
                return false;
            }
            _ => {}
        }

        if !self.can_borrow() {
            return false;
        }
        if !item.try_borrow(&self.id, date) {
            return false;
        }

        self.loans.push(HeldLoan {
            item_id: item.id.clone(),
            borrowed_on: date,
        });
        true
    }

    /// Return a held item
    ///
    /// Succeeds only when the item is currently in this patron's held set;
    /// the item's loan slot is cleared and the held entry removed.
    pub fn return_item(&mut self, item: &mut Item) -> bool {
        let Some(position) = self.loans.iter().position(|loan| loan.item_id == item.id) else {
            return false;
        };

        item.return_item();
        self.loans.remove(position);
        true
    }

    /// Reset the penalty balance to zero
    pub fn clear_penalty(&mut self) {
        self.penalty = Decimal::ZERO;
    }

    /// Render the fixed multi-line description of the patron
    ///
    /// Like the item renderings, these templates are a stable output
    /// contract. The penalty balance is deliberately absent.
    pub fn render(&self) -> String {
        match &self.kind {
            PatronKind::Student {
                department,
                faculty,
                grade,
            } => format!(
                "------ User Information for {} ------\n\
                 Name: {} Phone: {}\n\
                 Faculty: {} Department: {} Grade: {}th",
                self.id, self.name, self.phone, faculty, department, grade
            ),
            PatronKind::AcademicStaff {
                department,
                faculty,
                title,
            } => format!(
                "------ User Information for {} ------\n\
                 Name: {} {} Phone: {}\n\
                 Faculty: {} Department: {}",
                self.id, title, self.name, self.phone, faculty, department
            ),
            PatronKind::Guest { occupation } => format!(
                "------ User Information for {} ------\n\
                 Name: {} Phone: {}\n\
                 Occupation: {}",
                self.id, self.name, self.phone, occupation
            ),
        }
    }
}
