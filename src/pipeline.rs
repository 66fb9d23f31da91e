//! End-to-end processing pipeline
//!
//! Orchestrates a complete run: load the catalog and the patron registry,
//! stream the command file through one [`CirculationEngine`], and write the
//! transaction log to the output sink.
//!
//! # Error Handling
//!
//! Fatal errors (an input file that cannot be opened, an output that cannot
//! be written) are returned immediately. Individual record errors are
//! reported to stderr and processing continues with the next record, so a
//! single malformed line never aborts a run.

use crate::core::{Catalog, CirculationEngine, PatronRegistry};
use crate::io::loader::{CommandReader, ItemReader, PatronReader};
use crate::io::record_format::write_log;
use crate::types::LibraryError;
use std::io::Write;
use std::path::Path;

/// Process a complete run and write the transaction log to `output`
///
/// Items and patrons load in file order, which fixes the first-seen
/// iteration order of the catalog and the registry for the rest of the run.
/// Commands apply strictly in file order.
pub fn process_run(
    items_path: &Path,
    patrons_path: &Path,
    commands_path: &Path,
    output: &mut dyn Write,
) -> Result<(), LibraryError> {
    let mut catalog = Catalog::new();
    for result in ItemReader::open(items_path)? {
        match result {
            Ok(item) => catalog.insert(item),
            Err(e) => eprintln!("Item record error: {e}"),
        }
    }

    let mut registry = PatronRegistry::new();
    for result in PatronReader::open(patrons_path)? {
        match result {
            Ok(patron) => registry.insert(patron),
            Err(e) => eprintln!("Patron record error: {e}"),
        }
    }

    let mut engine = CirculationEngine::new(&mut catalog, &mut registry);
    for result in CommandReader::open(commands_path)? {
        match result {
            Ok(command) => engine.process(&command),
            Err(e) => eprintln!("Command record error: {e}"),
        }
    }

    write_log(&engine.into_log(), output)
}
