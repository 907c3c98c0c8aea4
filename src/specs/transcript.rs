// src/specs/transcript.rs
//! Scraping *spec* for the CSRS "Student.html" transcript export.
//!
//! Page shape (loosely specified, header order varies between exports):
//! - one `<table class="form">` of `Key: | Value` rows (student profile);
//! - one or more `<table class="list">`, each a `<th>` header row followed by
//!   `<td>` grade rows. Column names come from the header text every time.
//!
//! Tolerances:
//! - No info table → empty [`StudentInfo`]. No grade tables → no records.
//! - Info rows with anything but two cells are skipped.
//! - Grade cells are zipped against the header names and truncated to the
//!   shorter side; rows without `<td>` cells are skipped.
//!
//! The only hard failure is input that isn't a text document at all.

use scraper::{ElementRef, Html};

use crate::config::options::ExtractOptions;
use crate::core::html::{decode_bytes, descendants_named, parse_document, tables_with_class, text_of};
use crate::core::sanitize::strip_trailing_colon;
use crate::error::TranscriptError;
use crate::record::{Fields, GradeRecord, StudentInfo};

/// Everything read from one transcript document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transcript {
    pub info: StudentInfo,
    /// All grade rows of all grade tables, in document order.
    pub records: Vec<GradeRecord>,
}

impl Transcript {
    /// Presentation layers show "no grades found" for this, not an error.
    pub fn has_grades(&self) -> bool {
        !self.records.is_empty()
    }
}

pub fn extract(doc: &str) -> Result<Transcript, TranscriptError> {
    extract_with(doc, &ExtractOptions::default())
}

pub fn extract_bytes(bytes: &[u8], opts: &ExtractOptions) -> Result<Transcript, TranscriptError> {
    let doc = decode_bytes(bytes)?;
    extract_with(&doc, opts)
}

pub fn extract_with(doc: &str, opts: &ExtractOptions) -> Result<Transcript, TranscriptError> {
    let html = parse_document(doc)?;
    Ok(Transcript {
        info: read_student_info(&html, &opts.info_class),
        records: read_grade_tables(&html, &opts.grade_class),
    })
}

/* ---------- student info ---------- */

fn read_student_info(html: &Html, class: &str) -> StudentInfo {
    let Some(table) = tables_with_class(html, class).next() else {
        logd!("No table.{class} found; student info left empty");
        return StudentInfo::default();
    };

    let mut fields = Fields::new();
    for tr in descendants_named(table, "tr") {
        let cells: Vec<ElementRef> = descendants_named(tr, "td").collect();
        if let [key, value] = cells.as_slice() {
            let key = strip_trailing_colon(&text_of(*key));
            fields.insert(key, text_of(*value));
        }
    }
    StudentInfo::new(fields)
}

/* ---------- grade tables ---------- */

fn read_grade_tables(html: &Html, class: &str) -> Vec<GradeRecord> {
    let mut records = Vec::new();
    let mut n_tables = 0usize;

    for table in tables_with_class(html, class) {
        n_tables += 1;
        let headers = read_header_names(table);
        if headers.is_empty() {
            logd!("Grade table #{n_tables} has no <th> headers; its rows map to nothing");
        }

        for tr in descendants_named(table, "tr") {
            if is_header_row(tr) { continue; }
            let cells: Vec<String> = descendants_named(tr, "td").map(text_of).collect();
            if cells.is_empty() { continue; }
            if cells.len() > headers.len() {
                logd!(
                    "Grade table #{n_tables}: row has {} cells for {} headers; extra cells dropped",
                    cells.len(),
                    headers.len()
                );
            }
            records.push(zip_row(&headers, cells));
        }
    }

    logd!("Read {} grade rows from {n_tables} grade table(s)", records.len());
    records
}

/// Header cells of a grade table, in document order.
/// Works even when the `<th>` cells aren't wrapped in a `<tr>`.
fn read_header_names(table: ElementRef<'_>) -> Vec<String> {
    descendants_named(table, "th").map(text_of).collect()
}

fn is_header_row(tr: ElementRef<'_>) -> bool {
    descendants_named(tr, "th").next().is_some()
}

/// Pair cells with header names by position; stops at the shorter side.
/// Repeated header names keep one entry holding the later cell's value.
fn zip_row(headers: &[String], cells: Vec<String>) -> GradeRecord {
    headers.iter().cloned().zip(cells).collect()
}
