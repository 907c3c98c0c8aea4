// benches/transcript.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use csrs_gwa::{aggregate, extract};

/// Eight years × three terms × eight courses.
fn synthetic_doc() -> String {
    let mut doc = String::from(
        r#"<html><body><table class="form">
           <tr><td>Name:</td><td>Bench Student</td></tr>
           <tr><td>Student Number:</td><td>2000-00000</td></tr></table>"#,
    );
    for year in 2000..2008 {
        for sem in ["FIRST SEMESTER", "SECOND SEMESTER", "MIDYEAR"] {
            doc.push_str(r#"<table class="list"><tr><th>Course</th><th>Grade</th><th>Units</th><th>Year</th><th>Semester</th></tr>"#);
            for c in 0..8 {
                let course = if c == 7 { format!("PE {c}") } else { format!("CMSC {c}{year}") };
                let grade = if c == 6 { "INC".to_string() } else { format!("{:.2}", 1.0 + (c as f64) * 0.25) };
                doc.push_str(&format!(
                    "<tr><td>{course}</td><td>{grade}</td><td>3</td><td>{year}-{}</td><td>{sem}</td></tr>",
                    year + 1
                ));
            }
            doc.push_str("</table>");
        }
    }
    doc.push_str("</body></html>");
    doc
}

fn bench_transcript(c: &mut Criterion) {
    let doc = synthetic_doc();
    let records = extract(&doc).expect("synthetic doc parses").records;

    c.bench_function("extract", |b| {
        b.iter(|| {
            let t = extract(black_box(&doc)).expect("parse");
            black_box(t.records.len())
        })
    });

    c.bench_function("aggregate", |b| {
        b.iter(|| {
            let report = aggregate(black_box(&records));
            black_box(report.overall_gwa)
        })
    });
}

criterion_group!(benches, bench_transcript);
criterion_main!(benches);
