// src/gwa.rs
//
// GWA aggregation over extracted grade rows.
//
// - Every row is classified (numeric grade/units, PE/NSTP exclusion).
// - Rows are grouped per (Year, Semester) in first-seen order; a term that
//   shows up again further down merges into its first group.
// - Rows without a Year or Semester cell belong to no term but still count
//   toward the cumulative figures.
// - Zero (or negative) included units give a GWA of 0.0, never NaN.

use std::collections::HashMap;

use crate::config::consts::*;
use crate::config::options::AggregateOptions;
use crate::core::numeric::{mul, sum_present, to_numeric, weighted_mean};
use crate::core::sanitize::starts_with_ci;
use crate::record::GradeRecord;

/// A grade row plus the values derived from it.
#[derive(Clone, Debug, PartialEq)]
pub struct ProcessedRecord {
    pub raw: GradeRecord,
    pub units_numeric: Option<f64>,
    pub grade_numeric: Option<f64>,
    pub is_included: bool,
    /// grade × units for every row; only meaningful when `is_included`.
    pub weighted_grade: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SemesterKind {
    First,
    Second,
    /// Summer / mid-year / anything else.
    Mid,
}

impl SemesterKind {
    /// Markers are matched as written: "First Semester" is `Mid`.
    pub fn classify(semester: &str) -> Self {
        if semester.contains(SEM_FIRST_MARKER) { SemesterKind::First }
        else if semester.contains(SEM_SECOND_MARKER) { SemesterKind::Second }
        else { SemesterKind::Mid }
    }

    pub fn short_label(&self) -> &'static str {
        match self {
            SemesterKind::First => SEM_FIRST_LABEL,
            SemesterKind::Second => SEM_SECOND_LABEL,
            SemesterKind::Mid => SEM_MID_LABEL,
        }
    }
}

/// "2023-2024" + "FIRST SEMESTER" → "2023-2024 1st Sem"
pub fn term_label(year: &str, semester: &str) -> String {
    join!(year, " ", SemesterKind::classify(semester).short_label())
}

#[derive(Clone, Debug, PartialEq)]
pub struct TermSummary {
    pub year: String,
    pub semester: String,
    pub kind: SemesterKind,
    pub label: String,
    pub total_units: f64,
    pub weighted_sum: f64,
    pub gwa: f64,
    /// Rows in the term, included or not.
    pub courses: usize,
    pub included: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GwaReport {
    pub records: Vec<ProcessedRecord>,
    pub terms: Vec<TermSummary>,
    pub overall_gwa: f64,
    /// Included units across all terms.
    pub total_units: f64,
}

impl GwaReport {
    pub fn included(&self) -> impl Iterator<Item = &ProcessedRecord> {
        self.records.iter().filter(|r| r.is_included)
    }
}

pub fn is_excluded_course(course: &str, prefixes: &[String]) -> bool {
    prefixes.iter().any(|p| starts_with_ci(course, p))
}

pub fn process_record(raw: &GradeRecord, opts: &AggregateOptions) -> ProcessedRecord {
    let units_numeric = raw.units().and_then(to_numeric);
    let grade_numeric = raw.grade().and_then(to_numeric);
    let excluded = raw
        .course()
        .is_some_and(|c| is_excluded_course(c, &opts.excluded_prefixes));

    ProcessedRecord {
        raw: raw.clone(),
        units_numeric,
        grade_numeric,
        is_included: !excluded && grade_numeric.is_some(),
        weighted_grade: mul(grade_numeric, units_numeric),
    }
}

pub fn aggregate(records: &[GradeRecord]) -> GwaReport {
    aggregate_with(records, &AggregateOptions::default())
}

pub fn aggregate_with(records: &[GradeRecord], opts: &AggregateOptions) -> GwaReport {
    let processed: Vec<ProcessedRecord> =
        records.iter().map(|r| process_record(r, opts)).collect();

    let terms = summarize_terms(&processed);

    let (weighted_sum, total_units) = included_sums(processed.iter());
    let overall_gwa = weighted_mean(weighted_sum, total_units);

    GwaReport { records: processed, terms, overall_gwa, total_units }
}

/// (Σ weighted, Σ units) over included rows; missing values add nothing.
fn included_sums<'a, I>(rows: I) -> (f64, f64)
where
    I: Iterator<Item = &'a ProcessedRecord> + Clone,
{
    let included = rows.filter(|r| r.is_included);
    let weighted = sum_present(included.clone().map(|r| r.weighted_grade));
    let units = sum_present(included.map(|r| r.units_numeric));
    (weighted, units)
}

fn summarize_terms(rows: &[ProcessedRecord]) -> Vec<TermSummary> {
    // Insertion-ordered grouping: key → slot in `groups`.
    let mut index: HashMap<(&str, &str), usize> = HashMap::new();
    let mut groups: Vec<((&str, &str), Vec<&ProcessedRecord>)> = Vec::new();

    for r in rows {
        let (Some(year), Some(sem)) = (r.raw.year(), r.raw.semester()) else {
            logd!("Row without Year/Semester kept out of term grouping: {:?}", r.raw.course());
            continue;
        };
        let slot = *index.entry((year, sem)).or_insert_with(|| {
            groups.push(((year, sem), Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(r);
    }

    groups
        .into_iter()
        .map(|((year, sem), members)| {
            let (weighted_sum, total_units) = included_sums(members.iter().copied());
            let kind = SemesterKind::classify(sem);
            TermSummary {
                year: s!(year),
                semester: s!(sem),
                kind,
                label: term_label(year, sem),
                total_units,
                weighted_sum,
                gwa: weighted_mean(weighted_sum, total_units),
                courses: members.len(),
                included: members.iter().filter(|r| r.is_included).count(),
            }
        })
        .collect()
}
