//! Lendable item types for the circulation engine
//!
//! An [`Item`] is a catalog entry with a single active-loan slot. The
//! structural variant ([`ItemKind`]) carries the display fields; lending
//! eligibility is governed by the free-text `category` label shared by all
//! variants ("reference", "rare", "limited", "regular", ...).

use crate::types::DATE_FMT;
use chrono::NaiveDate;

/// Item identifier
pub type ItemId = String;

/// An active loan on an item
///
/// The borrower and the borrow date always travel together: an item is
/// borrowed if and only if its loan slot is occupied, and both fields are
/// cleared atomically on return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loan {
    /// Identifier of the patron holding the item
    pub borrowed_by: String,
    /// Date the loan was recorded
    pub borrowed_on: NaiveDate,
}

/// Structural item variants and their display fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKind {
    /// A book with an author and a genre
    Book { author: String, genre: String },
    /// A magazine with a publisher and a display category
    Magazine { publisher: String, category: String },
    /// A DVD with a director, a display category and a runtime in minutes
    Dvd {
        director: String,
        category: String,
        runtime_minutes: u32,
    },
}

/// A catalog entry with type-specific lending eligibility
///
/// Identity (`id`) is assigned at creation and never changes. The lending
/// `category` label governs eligibility independently of the structural
/// variant: "reference" blocks books at the item level (and students at the
/// patron level), "rare"/"limited" block guests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Unique item identifier
    pub id: ItemId,
    /// Display title
    pub title: String,
    /// Free-text lending category governing eligibility
    pub category: String,
    /// Active loan, if the item is currently borrowed
    pub loan: Option<Loan>,
    /// Structural variant with its display fields
    pub kind: ItemKind,
}

impl Item {
    /// Create a new item with an empty loan slot
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
        kind: ItemKind,
    ) -> Self {
        Item {
            id: id.into(),
            title: title.into(),
            category: category.into(),
            loan: None,
            kind,
        }
    }

    /// Whether the item is currently on loan
    pub fn is_borrowed(&self) -> bool {
        self.loan.is_some()
    }

    /// Attempt to lend the item to a patron
    ///
    /// Books refuse when their lending category is "reference"
    /// (case-insensitive) or when already on loan; magazines and DVDs refuse
    /// only when already on loan. On success the loan slot records the
    /// borrower and the date.
    ///
    /// # Returns
    ///
    /// `true` if the loan was recorded, `false` if the item refused
    pub fn try_borrow(&mut self, patron_id: &str, date: NaiveDate) -> bool {
        match self.kind {
            ItemKind::Book { .. } => {
                if self.category.eq_ignore_ascii_case("reference") || self.loan.is_some() {
                    return false;
                }
            }
            ItemKind::Magazine { .. } | ItemKind::Dvd { .. } => {
                if self.loan.is_some() {
                    return false;
                }
            }
        }

        self.loan = Some(Loan {
            borrowed_by: patron_id.to_string(),
            borrowed_on: date,
        });
        true
    }

    /// Clear the loan slot unconditionally
    ///
    /// Custody validation (was this item actually lent to the requesting
    /// patron?) is the engine's responsibility, not the item's.
    pub fn return_item(&mut self) {
        self.loan = None;
    }

    /// Render the fixed multi-line description of the item
    ///
    /// The template is a stable output contract: consuming reports compare
    /// these renderings textually, so the per-variant wording and spacing
    /// must not drift. Note the magazine variant folds the borrowed clause
    /// into the status position while books and DVDs append it after the
    /// status word.
    pub fn render(&self) -> String {
        match &self.kind {
            ItemKind::Book { author, genre } => {
                let status = if self.loan.is_some() {
                    "Borrowed"
                } else {
                    "Available"
                };
                let extra = self.borrowed_suffix();
                format!(
                    "------ Item Information for {} ------\n\
                     ID: {} Name: {} Status: {}{}\n\
                     Author: {} Genre: {}",
                    self.id, self.id, self.title, status, extra, author, genre
                )
            }
            ItemKind::Magazine {
                publisher,
                category,
            } => {
                let status = match &self.loan {
                    Some(loan) => format!(
                        "Borrowed Borrowed Date: {} Borrowed by: {}",
                        loan.borrowed_on.format(DATE_FMT),
                        loan.borrowed_by
                    ),
                    None => "Available".to_string(),
                };
                format!(
                    "------ Item Information for {} ------\n\
                     ID: {} Name: {} Status: {}\n\
                     Publisher: {} Category: {}",
                    self.id, self.id, self.title, status, publisher, category
                )
            }
            ItemKind::Dvd {
                director,
                category,
                runtime_minutes,
            } => {
                let status = if self.loan.is_some() {
                    "Borrowed"
                } else {
                    "Available"
                };
                let extra = self.borrowed_suffix();
                format!(
                    "------ Item Information for {} ------\n\
                     ID: {} Name: {} Status: {}{}\n\
                     Director: {} Category: {} Runtime: {} min",
                    self.id, self.id, self.title, status, extra, director, category, runtime_minutes
                )
            }
        }
    }

    /// The " Borrowed Date: ... Borrowed by: ..." suffix, or empty when free
    fn borrowed_suffix(&self) -> String {
        match &self.loan {
            Some(loan) => format!(
                " Borrowed Date: {} Borrowed by: {}",
                loan.borrowed_on.format(DATE_FMT),
                loan.borrowed_by
            ),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32, m: u32, y: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn book(category: &str) -> Item {
        Item::new(
            "B1",
            "Dune",
            category,
            ItemKind::Book {
                author: "Frank Herbert".to_string(),
                genre: "SciFi".to_string(),
            },
        )
    }

    #[test]
    fn test_new_item_is_available() {
        let item = book("regular");
        assert!(!item.is_borrowed());
        assert_eq!(item.loan, None);
    }

    #[test]
    fn test_borrow_records_loan_info() {
        let mut item = book("regular");

        assert!(item.try_borrow("U1", date(1, 1, 2024)));

        assert!(item.is_borrowed());
        let loan = item.loan.as_ref().unwrap();
        assert_eq!(loan.borrowed_by, "U1");
        assert_eq!(loan.borrowed_on, date(1, 1, 2024));
    }

    #[test]
    fn test_borrow_refuses_when_already_borrowed() {
        let mut item = book("regular");
        assert!(item.try_borrow("U1", date(1, 1, 2024)));

        assert!(!item.try_borrow("U2", date(2, 1, 2024)));

        // Original loan untouched
        assert_eq!(item.loan.as_ref().unwrap().borrowed_by, "U1");
    }

    #[test]
    fn test_reference_book_refuses_borrowing() {
        let mut item = book("reference");
        assert!(!item.try_borrow("U1", date(1, 1, 2024)));
        assert!(!item.is_borrowed());
    }

    #[test]
    fn test_reference_check_is_case_insensitive() {
        let mut item = book("Reference");
        assert!(!item.try_borrow("U1", date(1, 1, 2024)));
    }

    #[test]
    fn test_magazine_ignores_reference_category() {
        let mut item = Item::new(
            "M1",
            "Nature",
            "reference",
            ItemKind::Magazine {
                publisher: "Springer".to_string(),
                category: "Science".to_string(),
            },
        );

        assert!(item.try_borrow("U1", date(1, 1, 2024)));
    }

    #[test]
    fn test_dvd_ignores_reference_category() {
        let mut item = Item::new(
            "D1",
            "Alien",
            "reference",
            ItemKind::Dvd {
                director: "Ridley Scott".to_string(),
                category: "Horror".to_string(),
                runtime_minutes: 117,
            },
        );

        assert!(item.try_borrow("U1", date(1, 1, 2024)));
    }

    #[test]
    fn test_return_clears_loan_state() {
        let mut item = book("regular");
        item.try_borrow("U1", date(1, 1, 2024));

        item.return_item();

        assert!(!item.is_borrowed());
        assert_eq!(item.loan, None);
    }

    #[test]
    fn test_book_render_available() {
        let item = book("regular");
        assert_eq!(
            item.render(),
            "------ Item Information for B1 ------\n\
             ID: B1 Name: Dune Status: Available\n\
             Author: Frank Herbert Genre: SciFi"
        );
    }

    #[test]
    fn test_book_render_borrowed() {
        let mut item = book("regular");
        item.try_borrow("U1", date(5, 3, 2024));
        assert_eq!(
            item.render(),
            "------ Item Information for B1 ------\n\
             ID: B1 Name: Dune Status: Borrowed Borrowed Date: 05/03/2024 Borrowed by: U1\n\
             Author: Frank Herbert Genre: SciFi"
        );
    }

    #[test]
    fn test_magazine_render_available() {
        let item = Item::new(
            "M1",
            "Nature",
            "regular",
            ItemKind::Magazine {
                publisher: "Springer".to_string(),
                category: "Science".to_string(),
            },
        );
        assert_eq!(
            item.render(),
            "------ Item Information for M1 ------\n\
             ID: M1 Name: Nature Status: Available\n\
             Publisher: Springer Category: Science"
        );
    }

    #[test]
    fn test_magazine_render_borrowed() {
        let mut item = Item::new(
            "M1",
            "Nature",
            "regular",
            ItemKind::Magazine {
                publisher: "Springer".to_string(),
                category: "Science".to_string(),
            },
        );
        item.try_borrow("U9", date(12, 11, 2023));
        assert_eq!(
            item.render(),
            "------ Item Information for M1 ------\n\
             ID: M1 Name: Nature Status: Borrowed Borrowed Date: 12/11/2023 Borrowed by: U9\n\
             Publisher: Springer Category: Science"
        );
    }

    #[test]
    fn test_dvd_render_borrowed() {
        let mut item = Item::new(
            "D1",
            "Alien",
            "regular",
            ItemKind::Dvd {
                director: "Ridley Scott".to_string(),
                category: "Horror".to_string(),
                runtime_minutes: 117,
            },
        );
        item.try_borrow("U2", date(1, 2, 2024));
        assert_eq!(
            item.render(),
            "------ Item Information for D1 ------\n\
             ID: D1 Name: Alien Status: Borrowed Borrowed Date: 01/02/2024 Borrowed by: U2\n\
             Director: Ridley Scott Category: Horror Runtime: 117 min"
        );
    }
}
