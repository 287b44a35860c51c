//! The straight-line pipeline with masking at every stage boundary.
//!
//! Stages (read → parse → extract) are all-or-nothing; the mapping stage
//! isolates failures per element. Each `Err` is reported once on stderr and
//! replaced by the stage's default value, so downstream stages always receive
//! a validly-typed (if possibly empty) value and never fail because of an
//! upstream failure. Nothing here touches the process exit status.

use std::path::Path;

use serde_json::Map;

use crate::person::{self, Person};
use crate::{diag, extract, reader, tree};

/// Everything one run produces besides stderr diagnostics.
#[derive(Debug, Default)]
pub struct Report {
    /// Raw file text, echoed on stdout before the greetings.
    pub raw: String,
    /// One record per source element, in source order.
    pub people: Vec<Person>,
}

/// Run the whole pipeline for one document. Always returns a `Report`.
pub fn run(path: &Path) -> Report {
    let raw = reader::read_file(path).unwrap_or_else(|err| {
        diag::report(&err);
        String::new()
    });

    let root = tree::parse_document(&raw).unwrap_or_else(|err| {
        diag::report(&err);
        Map::new()
    });

    let elements = extract::people_array(&root).unwrap_or_else(|err| {
        diag::report(&err);
        Vec::new()
    });

    let people = elements
        .iter()
        .enumerate()
        .map(|(index, element)| {
            person::map_person(index, element).unwrap_or_else(|err| {
                diag::report(&err);
                Person::default()
            })
        })
        .collect();

    Report { raw, people }
}

// ------------------------------- Tests ------------------------------------ //
