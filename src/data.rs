// src/data.rs
//
// Headers + rows tables built from a GWA report, for printing and export.
// Numbers are rendered with Rust's shortest round-trip formatting; fixed
// decimals are left to the presentation layer (`cli`).

use crate::config::consts::*;
use crate::gwa::{GwaReport, ProcessedRecord, TermSummary};

pub const COL_UNITS_NUMERIC: &str = "UnitsNumeric";
pub const COL_GRADE_NUMERIC: &str = "GradeNumeric";
pub const COL_IS_INCLUDED: &str = "IsIncluded";
pub const COL_WEIGHTED_GRADE: &str = "WeightedGrade";

/// The columns a "grade history" view shows.
pub const HISTORY_COLUMNS: &[&str] = &[COL_COURSE, COL_GRADE, COL_UNITS, COL_YEAR, COL_SEMESTER];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Index of a header, if headers are present.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.as_ref()?.iter().position(|h| h == name)
    }
}

/// Empty string for "not a number".
pub fn fmt_num(v: Option<f64>) -> String {
    v.map(|x| x.to_string()).unwrap_or_default()
}

/// Union of all raw columns in first-seen order.
fn raw_columns(records: &[ProcessedRecord]) -> Vec<String> {
    let mut cols: Vec<String> = Vec::new();
    for r in records {
        for k in r.raw.fields().keys() {
            if !cols.iter().any(|c| c == k) {
                cols.push(s!(k));
            }
        }
    }
    cols
}

/// Full processed table: every raw column, then the derived ones.
/// Cells a row doesn't have are blank.
pub fn records_table(records: &[ProcessedRecord]) -> DataSet {
    let cols = raw_columns(records);

    let mut headers = cols.clone();
    headers.extend(strings![COL_UNITS_NUMERIC, COL_GRADE_NUMERIC, COL_IS_INCLUDED, COL_WEIGHTED_GRADE]);

    let rows = records
        .iter()
        .map(|r| {
            let mut row: Vec<String> = cols
                .iter()
                .map(|c| s!(r.raw.get(c).unwrap_or_default()))
                .collect();
            row.push(fmt_num(r.units_numeric));
            row.push(fmt_num(r.grade_numeric));
            row.push(r.is_included.to_string());
            row.push(fmt_num(r.weighted_grade));
            row
        })
        .collect();

    DataSet { headers: Some(headers), rows }
}

/// Course, Grade, Units, Year, Semester only.
pub fn history_table(records: &[ProcessedRecord]) -> DataSet {
    let rows = records
        .iter()
        .map(|r| {
            HISTORY_COLUMNS
                .iter()
                .map(|c| s!(r.raw.get(c).unwrap_or_default()))
                .collect()
        })
        .collect();
    DataSet {
        headers: Some(HISTORY_COLUMNS.iter().map(|c| s!(*c)).collect()),
        rows,
    }
}

pub fn terms_table(terms: &[TermSummary]) -> DataSet {
    let rows = terms
        .iter()
        .map(|t| {
            vec![
                t.year.clone(),
                t.semester.clone(),
                t.label.clone(),
                t.total_units.to_string(),
                t.gwa.to_string(),
            ]
        })
        .collect();
    DataSet {
        headers: Some(strings![COL_YEAR, COL_SEMESTER, "Term", COL_UNITS, "GWA"]),
        rows,
    }
}

/// Both tables of a report: (records, terms).
pub fn report_tables(report: &GwaReport) -> (DataSet, DataSet) {
    (records_table(&report.records), terms_table(&report.terms))
}
