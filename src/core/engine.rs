//! Circulation command processing engine
//!
//! This module provides the CirculationEngine that applies borrow, return,
//! pay and display commands to the catalog and patron registry, in the exact
//! order the commands are presented, appending lines to the transaction log.
//!
//! The engine enforces business rules such as:
//! - Overdue detection and forced auto-return before every borrow
//! - The penalty threshold that blocks all borrowing until paid
//! - Guest restrictions on rare and limited items
//! - The fixed precedence of borrow-failure diagnoses
//!
//! Nothing a command does is fatal: unresolvable identifiers are skipped
//! silently and every business-rule violation becomes a log line, never an
//! error that aborts the run.

use crate::core::catalog::Catalog;
use crate::core::registry::PatronRegistry;
use crate::types::{Command, Item, Patron, PatronKind, DATE_FMT, PENALTY_THRESHOLD};
use chrono::{Local, NaiveDate};

/// Why a borrow attempt was refused
///
/// Each reason maps to a specific log message. Diagnosis runs in a fixed
/// order, so an attempt refused for several reasons at once reports the
/// first one in [`CirculationEngine::diagnose_refusal`]'s sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BorrowRefusal {
    /// The item is already on loan
    NotAvailable,
    /// The patron holds as many items as their variant allows
    LimitReached,
    /// The item carries the "reference" lending category
    ReferenceRestricted,
    /// None of the diagnosable reasons apply
    Other,
}

/// Circulation command processor
///
/// Owns no entities: it receives exclusive mutable access to the catalog and
/// the patron registry for the duration of a command run. The transaction
/// log — an append-only ordered sequence of strings — is the run's sole
/// artifact besides the final state of the entities themselves.
pub struct CirculationEngine<'a> {
    catalog: &'a mut Catalog,
    registry: &'a mut PatronRegistry,
    log: Vec<String>,
    /// Date of the most recent borrow command, if any
    current_date: Option<NaiveDate>,
}

impl<'a> CirculationEngine<'a> {
    /// Create an engine over a catalog and a registry
    pub fn new(catalog: &'a mut Catalog, registry: &'a mut PatronRegistry) -> Self {
        CirculationEngine {
            catalog,
            registry,
            log: Vec::new(),
            current_date: None,
        }
    }

    /// Process a single command
    ///
    /// Commands never fail: each one either completes, emits a diagnostic
    /// log line, or is a silent no-op (unresolvable identifiers).
    pub fn process(&mut self, command: &Command) {
        match command {
            Command::Borrow { patron, item, date } => self.process_borrow(patron, item, *date),
            Command::Return { patron, item } => self.process_return(patron, item),
            Command::Pay { patron } => self.process_pay(patron),
            Command::DisplayUsers => self.display_users(),
            Command::DisplayItems => self.display_items(),
        }
    }

    /// The date undated commands operate on
    ///
    /// Return and pay commands carry no date of their own: they reuse the
    /// date of the most recent borrow command, falling back to the system
    /// date when no borrow has occurred yet in the run.
    pub fn working_date(&self) -> NaiveDate {
        self.current_date
            .unwrap_or_else(|| Local::now().date_naive())
    }

    /// Date set by the most recent borrow command, if any
    pub fn current_date(&self) -> Option<NaiveDate> {
        self.current_date
    }

    /// Lines appended so far
    pub fn log(&self) -> &[String] {
        &self.log
    }

    /// Consume the engine, appending the final catalog dump
    ///
    /// Every run ends with a rendering of every catalog item (one rendering
    /// plus one blank entry each, in catalog insertion order), whether or
    /// not a displayItems command already appeared.
    pub fn into_log(mut self) -> Vec<String> {
        self.append_catalog_dump();
        self.log
    }

    /// Apply a borrow command
    ///
    /// The checks run in a fixed order: overdue scan, penalty threshold,
    /// guest hard blocks, then the borrow attempt itself with its
    /// fixed-order failure diagnosis.
    fn process_borrow(&mut self, patron_id: &str, item_id: &str, date: NaiveDate) {
        // The command's date becomes the run's working date even when the
        // identifiers below fail to resolve.
        self.current_date = Some(date);

        if !self.registry.contains(patron_id) || !self.catalog.contains(item_id) {
            return;
        }

        self.run_overdue_scan(patron_id, date);

        let Some(patron) = self.registry.get(patron_id) else {
            return;
        };
        let Some(item) = self.catalog.get(item_id) else {
            return;
        };
        let name = patron.name.clone();
        let title = item.title.clone();

        if patron.penalty >= PENALTY_THRESHOLD {
            let owed = patron.penalty.trunc();
            self.log.push(format!(
                "{name} cannot borrow {title}, you must first pay the penalty amount! {owed}$"
            ));
            return;
        }

        if matches!(patron.kind, PatronKind::Guest { .. }) {
            if item.category.eq_ignore_ascii_case("rare") {
                self.log.push(format!("{name} cannot borrow rare item!"));
                return;
            }
            if item.category.eq_ignore_ascii_case("limited") {
                self.log.push(format!("{name} cannot borrow limited item!"));
                return;
            }
        }

        let (Some(patron), Some(item)) = (
            self.registry.get_mut(patron_id),
            self.catalog.get_mut(item_id),
        ) else {
            return;
        };

        if patron.borrow_item(item, date) {
            self.log.push(format!("{name} successfully borrowed! {title}"));
        } else {
            let message = match Self::diagnose_refusal(patron, item) {
                BorrowRefusal::NotAvailable => {
                    format!("{name} cannot borrow {title}, it is not available!")
                }
                // Reference refusals share the borrow-limit wording.
                BorrowRefusal::LimitReached | BorrowRefusal::ReferenceRestricted => {
                    format!("{name} cannot borrow {title}, since the borrow limit has been reached!")
                }
                BorrowRefusal::Other => format!("{name} failed to borrow {title}"),
            };
            self.log.push(message);
        }
    }

    /// Force-return every overdue loan held by a patron
    ///
    /// Runs to completion over the held set (insertion order) before the
    /// triggering borrow is evaluated, appending one auto-return line per
    /// expired loan. The item-side return bypasses custody validation.
    fn run_overdue_scan(&mut self, patron_id: &str, date: NaiveDate) {
        let Some(patron) = self.registry.get_mut(patron_id) else {
            return;
        };

        for loan in patron.expire_overdue(date) {
            if let Some(item) = self.catalog.get_mut(&loan.item_id) {
                item.return_item();
            }
            self.log.push(format!(
                "Auto-return: User {} auto-returned item {} on {} due to overdue, penalty applied",
                patron_id,
                loan.item_id,
                date.format(DATE_FMT)
            ));
        }
    }

    /// Determine the reported reason for a failed borrow
    ///
    /// The order is part of the output contract: availability first, then
    /// capacity, then the reference restriction.
    fn diagnose_refusal(patron: &Patron, item: &Item) -> BorrowRefusal {
        if item.is_borrowed() {
            BorrowRefusal::NotAvailable
        } else if patron.loans.len() >= patron.kind.max_items() {
            BorrowRefusal::LimitReached
        } else if item.category.eq_ignore_ascii_case("reference") {
            BorrowRefusal::ReferenceRestricted
        } else {
            BorrowRefusal::Other
        }
    }

    /// Apply a return command
    fn process_return(&mut self, patron_id: &str, item_id: &str) {
        let (Some(patron), Some(item)) = (
            self.registry.get_mut(patron_id),
            self.catalog.get_mut(item_id),
        ) else {
            return;
        };

        let name = patron.name.clone();
        let title = item.title.clone();
        if patron.return_item(item) {
            self.log.push(format!("{name} successfully returned {title}"));
        } else {
            self.log.push(format!("{name} failed to return {title}"));
        }
    }

    /// Apply a pay command: the penalty resets to exactly zero
    fn process_pay(&mut self, patron_id: &str) {
        let Some(patron) = self.registry.get_mut(patron_id) else {
            return;
        };

        patron.clear_penalty();
        let name = patron.name.clone();
        self.log.push(format!("{name} has paid penalty"));
    }

    /// Append every patron rendering, with the report's blank-line framing
    fn display_users(&mut self) {
        self.log.push(String::new());
        self.log.push(String::new());
        for patron in self.registry.iter() {
            self.log.push(patron.render());
            self.log.push(String::new());
        }
        self.log.push(String::new());
    }

    /// Append every item rendering, with the report's blank-line framing
    fn display_items(&mut self) {
        self.log.push(String::new());
        self.log.push(String::new());
        self.append_catalog_dump();
    }

    /// One rendering plus one blank entry per item, insertion order
    fn append_catalog_dump(&mut self) {
        for item in self.catalog.iter() {
            self.log.push(item.render());
            self.log.push(String::new());
        }
    }
}
