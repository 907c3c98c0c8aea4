// tests/aggregate.rs
//
// GWA aggregation: inclusion rules, term grouping, zero-unit fallback.
//
use csrs_gwa::config::options::AggregateOptions;
use csrs_gwa::gwa::SemesterKind;
use csrs_gwa::{aggregate, aggregate_with, extract, GradeRecord};

fn row(course: &str, grade: &str, units: &str, year: &str, sem: &str) -> GradeRecord {
    [("Course", course), ("Grade", grade), ("Units", units), ("Year", year), ("Semester", sem)]
        .into_iter()
        .collect()
}

#[test]
fn pe_is_left_out_of_the_term() {
    let report = aggregate(&[
        row("MATH1", "1.0", "3", "2023", "FIRST"),
        row("PE1", "1.0", "2", "2023", "FIRST"),
    ]);
    assert_eq!(report.terms.len(), 1);
    let t = &report.terms[0];
    assert_eq!((t.year.as_str(), t.semester.as_str()), ("2023", "FIRST"));
    assert_eq!(t.total_units, 3.0);
    assert_eq!(t.gwa, 1.0);
    assert_eq!(t.courses, 2);
    assert_eq!(t.included, 1);
}

#[test]
fn pe_and_nstp_never_included_any_case() {
    let report = aggregate(&[
        row("PE101", "1.0", "2", "2023", "FIRST"),
        row("nstp1", "1.0", "3", "2023", "FIRST"),
        row("Nstp 2", "2.0", "3", "2023", "FIRST"),
        row("pe 3", "1.25", "2", "2023", "FIRST"),
    ]);
    assert!(report.records.iter().all(|r| !r.is_included));
    assert_eq!(report.terms[0].gwa, 0.0);
    assert_eq!(report.overall_gwa, 0.0);
}

#[test]
fn unparseable_grades_never_included() {
    let report = aggregate(&[
        row("MATH 1", "INC", "3", "2023", "FIRST"),
        row("MATH 2", "DRP", "3", "2023", "FIRST"),
        row("MATH 3", "", "3", "2023", "FIRST"),
        row("MATH 4", "5.0*", "3", "2023", "FIRST"),
    ]);
    assert!(report.records.iter().all(|r| !r.is_included && r.grade_numeric.is_none()));
    assert!(report.records.iter().all(|r| r.weighted_grade.is_none()));
}

#[test]
fn zero_included_units_gives_exact_zero() {
    let report = aggregate(&[row("PE 1", "1.0", "2", "2023", "FIRST")]);
    let gwa = report.terms[0].gwa;
    assert!(!gwa.is_nan());
    assert_eq!(gwa.to_bits(), 0.0f64.to_bits());
}

#[test]
fn empty_input() {
    let report = aggregate(&[]);
    assert!(report.records.is_empty());
    assert!(report.terms.is_empty());
    assert_eq!(report.overall_gwa, 0.0);
    assert_eq!(report.total_units, 0.0);
}

#[test]
fn overall_is_weighted_sum_over_units() {
    let rows = [
        row("A", "1.25", "3", "2022", "FIRST"),
        row("B", "2.75", "4", "2022", "FIRST"),
        row("C", "1.5", "1.5", "2022", "SECOND"),
        row("D", "3.0", "2", "2022", "SECOND"),
    ];
    let report = aggregate(&rows);
    let weighted = 1.25 * 3.0 + 2.75 * 4.0 + 1.5 * 1.5 + 3.0 * 2.0;
    let units = 3.0 + 4.0 + 1.5 + 2.0;
    assert_eq!(report.overall_gwa, weighted / units);
    assert_eq!(report.total_units, units);
}

#[test]
fn terms_keep_first_seen_order_and_merge_repeats() {
    let report = aggregate(&[
        row("A", "2.0", "3", "2023", "SECOND"),
        row("B", "1.0", "3", "2022", "FIRST"),
        row("C", "1.0", "3", "2023", "SECOND"),
        row("D", "1.0", "3", "2023", "MIDYEAR"),
    ]);
    let labels: Vec<&str> = report.terms.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, vec!["2023 2nd Sem", "2022 1st Sem", "2023 Midsem"]);

    let merged = &report.terms[0];
    assert_eq!(merged.courses, 2);
    assert_eq!(merged.total_units, 6.0);
    assert_eq!(merged.gwa, 1.5);
    assert_eq!(report.terms[2].kind, SemesterKind::Mid);
}

#[test]
fn rows_without_term_still_count_overall() {
    let no_term: GradeRecord = [("Course", "X 1"), ("Grade", "3.0"), ("Units", "3")].into_iter().collect();
    let report = aggregate(&[row("A", "1.0", "3", "2023", "FIRST"), no_term]);
    assert_eq!(report.terms.len(), 1);
    assert_eq!(report.terms[0].gwa, 1.0);
    assert_eq!(report.overall_gwa, 2.0);
}

#[test]
fn aggregation_is_idempotent() {
    let rows = [
        row("A", "1.1", "3", "2022", "FIRST"),
        row("B", "2.3", "2.5", "2022", "FIRST"),
        row("C", "1.7", "0.5", "2023", "SECOND"),
    ];
    let a = aggregate(&rows);
    let b = aggregate(&rows);
    assert_eq!(a.overall_gwa.to_bits(), b.overall_gwa.to_bits());
    for (x, y) in a.terms.iter().zip(&b.terms) {
        assert_eq!(x.gwa.to_bits(), y.gwa.to_bits());
        assert_eq!(x.total_units.to_bits(), y.total_units.to_bits());
    }
    assert_eq!(a, b);
}

#[test]
fn configurable_prefixes() {
    let rows = [
        row("ROTC 1", "1.0", "3", "2023", "FIRST"),
        row("PE 1", "3.0", "2", "2023", "FIRST"),
    ];
    let opts = AggregateOptions::with_prefix_list("ROTC");
    let report = aggregate_with(&rows, &opts);
    assert!(!report.records[0].is_included);
    assert!(report.records[1].is_included);
    assert_eq!(report.overall_gwa, 3.0);
}

#[test]
fn fixture_end_to_end() {
    let t = extract(include_str!("fixtures/student.html")).unwrap();
    let report = aggregate(&t.records);

    let summary: Vec<(&str, f64, f64)> = report
        .terms
        .iter()
        .map(|t| (t.label.as_str(), t.total_units, t.gwa))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("2021-2022 1st Sem", 6.0, 1.625),
            ("2021-2022 2nd Sem", 6.0, 1.375),
            ("2021-2022 Midsem", 3.0, 1.5),
        ]
    );
    assert_eq!(report.total_units, 15.0);
    assert_eq!(report.overall_gwa, 1.5);
    assert_eq!(report.included().count(), 5);
}
