//! Catalog of lendable items
//!
//! This module provides the `Catalog` struct which maintains every item in
//! the library, keyed by item identifier, in first-seen insertion order.
//! Insertion order matters: final-state reporting and the displayItems
//! command walk the catalog in the order items were loaded.

use crate::types::Item;
use std::collections::HashMap;

/// Insertion-ordered map of item identifiers to items
///
/// Lookups go through a side index; iteration walks the underlying vector,
/// so the first-seen order of identifiers is stable across the run.
#[derive(Debug, Default)]
pub struct Catalog {
    /// Items in first-seen order
    items: Vec<Item>,
    /// Map of item identifier to position in `items`
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Catalog {
            items: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Insert an item, keyed by its identifier
    ///
    /// A duplicate identifier replaces the stored item in place, keeping its
    /// first-seen position in the iteration order.
    pub fn insert(&mut self, item: Item) {
        match self.index.get(&item.id) {
            Some(&position) => self.items[position] = item,
            None => {
                self.index.insert(item.id.clone(), self.items.len());
                self.items.push(item);
            }
        }
    }

    /// Whether an item with this identifier exists
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Get an immutable reference to an item by identifier
    pub fn get(&self, id: &str) -> Option<&Item> {
        self.index.get(id).map(|&position| &self.items[position])
    }

    /// Get a mutable reference to an item by identifier
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Item> {
        match self.index.get(id) {
            Some(&position) => self.items.get_mut(position),
            None => None,
        }
    }

    /// Iterate over all items in first-seen insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Number of items in the catalog
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ItemKind;

    fn book(id: &str, title: &str) -> Item {
        Item::new(
            id,
            title,
            "regular",
            ItemKind::Book {
                author: "A".to_string(),
                genre: "G".to_string(),
            },
        )
    }

    #[test]
    fn test_new_catalog_is_empty() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(!catalog.contains("B1"));
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut catalog = Catalog::new();
        catalog.insert(book("B1", "Dune"));

        assert!(catalog.contains("B1"));
        assert_eq!(catalog.get("B1").unwrap().title, "Dune");
        assert!(catalog.get("B2").is_none());
    }

    #[test]
    fn test_iteration_follows_insertion_order() {
        let mut catalog = Catalog::new();
        catalog.insert(book("C3", "Third id, first seen"));
        catalog.insert(book("A1", "First id, second seen"));
        catalog.insert(book("B2", "Second id, third seen"));

        let ids: Vec<&str> = catalog.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, ["C3", "A1", "B2"]);
    }

    #[test]
    fn test_duplicate_id_replaces_in_place() {
        let mut catalog = Catalog::new();
        catalog.insert(book("B1", "First"));
        catalog.insert(book("B2", "Other"));
        catalog.insert(book("B1", "Replacement"));

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("B1").unwrap().title, "Replacement");

        let ids: Vec<&str> = catalog.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, ["B1", "B2"]);
    }

    #[test]
    fn test_get_mut_allows_state_changes() {
        let mut catalog = Catalog::new();
        catalog.insert(book("B1", "Dune"));

        let date = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(catalog.get_mut("B1").unwrap().try_borrow("U1", date));

        assert!(catalog.get("B1").unwrap().is_borrowed());
    }
}
