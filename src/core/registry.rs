//! Patron registry
//!
//! The `PatronRegistry` mirrors the catalog's shape: an insertion-ordered
//! map of patron identifiers to accounts. The displayUsers command walks it
//! in first-seen order.

use crate::types::Patron;
use std::collections::HashMap;

/// Insertion-ordered map of patron identifiers to patrons
#[derive(Debug, Default)]
pub struct PatronRegistry {
    /// Patrons in first-seen order
    patrons: Vec<Patron>,
    /// Map of patron identifier to position in `patrons`
    index: HashMap<String, usize>,
}

impl PatronRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        PatronRegistry {
            patrons: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Insert a patron, keyed by their identifier
    ///
    /// A duplicate identifier replaces the stored patron in place, keeping
    /// their first-seen position in the iteration order.
    pub fn insert(&mut self, patron: Patron) {
        match self.index.get(&patron.id) {
            Some(&position) => self.patrons[position] = patron,
            None => {
                self.index.insert(patron.id.clone(), self.patrons.len());
                self.patrons.push(patron);
            }
        }
    }

    /// Whether a patron with this identifier exists
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Get an immutable reference to a patron by identifier
    pub fn get(&self, id: &str) -> Option<&Patron> {
        self.index.get(id).map(|&position| &self.patrons[position])
    }

    /// Get a mutable reference to a patron by identifier
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Patron> {
        match self.index.get(id) {
            Some(&position) => self.patrons.get_mut(position),
            None => None,
        }
    }

    /// Iterate over all patrons in first-seen insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Patron> {
        self.patrons.iter()
    }

    /// Number of patrons in the registry
    pub fn len(&self) -> usize {
        self.patrons.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.patrons.is_empty()
    }
}
