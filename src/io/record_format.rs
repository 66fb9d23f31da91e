//! Delimited-record format handling for catalog, patron and command files
//!
//! This module centralizes all record format concerns, providing:
//! - Conversion from raw delimited records to domain types
//! - Transaction-log output serialization
//!
//! All functions are pure (no I/O) for easy testing.
//!
//! Records are comma-delimited with no header row. The first field is a kind
//! tag (items: `B`/`M`/`D`, patrons: `S`/`A`/`G`, commands: the command
//! word), matched case-insensitively, and the remaining field count depends
//! on the tag. Converters return `Ok(None)` for records the loader should
//! skip silently (unknown tags, too few command fields) and `Err` for
//! records that are recognizably malformed (bad numbers, bad dates).

use crate::types::{Command, Item, ItemKind, LibraryError, Patron, PatronKind, DATE_FMT};
use chrono::NaiveDate;
use csv::StringRecord;
use std::io::Write;

/// Field accessor that treats missing positions as empty
fn field(record: &StringRecord, position: usize) -> &str {
    record.get(position).unwrap_or("")
}

/// Whether a record is a blank line artifact (no usable fields)
fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|f| f.is_empty())
}

/// Convert a raw record into a catalog item
///
/// Recognized layouts:
/// - `B,id,title,author,genre,category`
/// - `M,id,title,publisher,category,lending-category`
/// - `D,id,title,director,category,runtime,lending-category` (the runtime
///   field may carry units; digits are extracted before parsing)
/// - any other record with at least five fields loads as a magazine with
///   the fields read from position zero (legacy layout without a tag)
///
/// # Returns
///
/// * `Ok(Some(Item))` - a recognized, well-formed record
/// * `Ok(None)` - an unrecognized or blank record, to be skipped
/// * `Err(LibraryError)` - a recognized record with a malformed field
pub fn convert_item_record(
    record: &StringRecord,
    line: Option<u64>,
) -> Result<Option<Item>, LibraryError> {
    if is_blank(record) {
        return Ok(None);
    }

    let tag = field(record, 0);
    if tag.eq_ignore_ascii_case("B") && record.len() >= 6 {
        return Ok(Some(Item::new(
            field(record, 1),
            field(record, 2),
            field(record, 5),
            ItemKind::Book {
                author: field(record, 3).to_string(),
                genre: field(record, 4).to_string(),
            },
        )));
    }
    if tag.eq_ignore_ascii_case("M") && record.len() >= 6 {
        return Ok(Some(Item::new(
            field(record, 1),
            field(record, 2),
            field(record, 5),
            ItemKind::Magazine {
                publisher: field(record, 3).to_string(),
                category: field(record, 4).to_string(),
            },
        )));
    }
    if tag.eq_ignore_ascii_case("D") && record.len() >= 7 {
        let runtime_raw = field(record, 5);
        let digits: String = runtime_raw.chars().filter(char::is_ascii_digit).collect();
        let runtime_minutes: u32 = digits
            .parse()
            .map_err(|_| LibraryError::invalid_number(runtime_raw, "runtime", line))?;
        return Ok(Some(Item::new(
            field(record, 1),
            field(record, 2),
            field(record, 6),
            ItemKind::Dvd {
                director: field(record, 3).to_string(),
                category: field(record, 4).to_string(),
                runtime_minutes,
            },
        )));
    }
    // Legacy magazine layout: no kind tag, fields start at position zero.
    if record.len() >= 5 {
        return Ok(Some(Item::new(
            field(record, 0),
            field(record, 1),
            field(record, 4),
            ItemKind::Magazine {
                publisher: field(record, 2).to_string(),
                category: field(record, 3).to_string(),
            },
        )));
    }

    Ok(None)
}

/// Convert a raw record into a patron
///
/// Recognized layouts (note the name-before-id field order):
/// - `S,name,id,phone,department,faculty,grade`
/// - `A,name,id,phone,department,faculty,title`
/// - `G,name,id,phone,occupation`
///
/// # Returns
///
/// * `Ok(Some(Patron))` - a recognized, well-formed record
/// * `Ok(None)` - an unrecognized or blank record, to be skipped
/// * `Err(LibraryError)` - a recognized tag with missing or malformed fields
pub fn convert_patron_record(
    record: &StringRecord,
    line: Option<u64>,
) -> Result<Option<Patron>, LibraryError> {
    if is_blank(record) {
        return Ok(None);
    }

    let tag = field(record, 0);
    if tag.eq_ignore_ascii_case("S") {
        if record.len() < 7 {
            return Err(LibraryError::record(line, "student record requires 7 fields"));
        }
        let grade_raw = field(record, 6);
        let grade: i32 = grade_raw
            .parse()
            .map_err(|_| LibraryError::invalid_number(grade_raw, "grade", line))?;
        return Ok(Some(Patron::new(
            field(record, 2),
            field(record, 1),
            field(record, 3),
            PatronKind::Student {
                department: field(record, 4).to_string(),
                faculty: field(record, 5).to_string(),
                grade,
            },
        )));
    }
    if tag.eq_ignore_ascii_case("A") {
        if record.len() < 7 {
            return Err(LibraryError::record(line, "staff record requires 7 fields"));
        }
        return Ok(Some(Patron::new(
            field(record, 2),
            field(record, 1),
            field(record, 3),
            PatronKind::AcademicStaff {
                department: field(record, 4).to_string(),
                faculty: field(record, 5).to_string(),
                title: field(record, 6).to_string(),
            },
        )));
    }
    if tag.eq_ignore_ascii_case("G") {
        if record.len() < 5 {
            return Err(LibraryError::record(line, "guest record requires 5 fields"));
        }
        return Ok(Some(Patron::new(
            field(record, 2),
            field(record, 1),
            field(record, 3),
            PatronKind::Guest {
                occupation: field(record, 4).to_string(),
            },
        )));
    }

    Ok(None)
}

/// Convert a raw record into a command
///
/// The command word is matched case-insensitively. Unknown words and
/// commands with too few fields are skipped silently (`Ok(None)`); only a
/// borrow date that fails to parse is an error.
pub fn convert_command_record(
    record: &StringRecord,
    line: Option<u64>,
) -> Result<Option<Command>, LibraryError> {
    if is_blank(record) {
        return Ok(None);
    }

    match field(record, 0).to_lowercase().as_str() {
        "borrow" if record.len() >= 4 => {
            let date_raw = field(record, 3);
            let date = NaiveDate::parse_from_str(date_raw, DATE_FMT)
                .map_err(|_| LibraryError::invalid_date(date_raw, line))?;
            Ok(Some(Command::Borrow {
                patron: field(record, 1).to_string(),
                item: field(record, 2).to_string(),
                date,
            }))
        }
        "return" if record.len() >= 3 => Ok(Some(Command::Return {
            patron: field(record, 1).to_string(),
            item: field(record, 2).to_string(),
        })),
        "pay" if record.len() >= 2 => Ok(Some(Command::Pay {
            patron: field(record, 1).to_string(),
        })),
        "displayusers" => Ok(Some(Command::DisplayUsers)),
        "displayitems" => Ok(Some(Command::DisplayItems)),
        _ => Ok(None),
    }
}

/// Write the transaction log to an output sink
///
/// One log entry per `writeln!`; entries that contain embedded newlines
/// (item and patron renderings) therefore span several physical lines,
/// exactly as appended.
pub fn write_log(lines: &[String], output: &mut dyn Write) -> Result<(), LibraryError> {
    for line in lines {
        writeln!(output, "{line}")?;
    }
    output.flush()?;
    Ok(())
}
