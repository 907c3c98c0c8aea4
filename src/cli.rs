// src/cli.rs
use std::{collections::HashMap, env, error::Error, path::PathBuf};

use crate::config::options::{AggregateOptions, AppOptions, ExportFormat};
use crate::core::sanitize::sanitize_file_stem;
use crate::data::{self, DataSet};
use crate::file;
use crate::pipeline::{self, Analysis};
use crate::progress::Progress;

#[derive(Clone, Debug, Default)]
pub struct Params {
    pub inputs: Vec<PathBuf>,
    pub options: AppOptions,
    pub export: bool,           // write grades/terms tables
    pub history: bool,          // print full grade history
    pub log_file: Option<PathBuf>,
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let params = parse_args(env::args().skip(1))?;
    run_with(&params)
}

pub fn run_with(params: &Params) -> Result<(), Box<dyn Error>> {
    if let Some(path) = &params.log_file {
        crate::log::init(path)?;
        logf!("Processing {} document(s)", params.inputs.len());
    }

    let mut progress = StderrProgress;
    let sink: Option<&mut dyn Progress> = if params.inputs.len() > 1 { Some(&mut progress) } else { None };
    let results = pipeline::process_files(&params.inputs, &params.options, sink);

    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut failures = 0usize;

    for (path, result) in results {
        let analysis = match result {
            Ok(a) => a,
            Err(e) => {
                failures += 1;
                eprintln!("{}: {e}", path.display());
                continue;
            }
        };

        print!("{}", render_analysis(&path, &analysis, params.history));

        if params.export && analysis.has_grades() {
            let fallback = path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_else(|| s!("transcript"));
            let stem = export_stem(&analysis, &fallback);
            let stem = file::resolve_unique_stem(&stem, &mut seen);
            match file::export_report(&params.options.export, Some(&stem), &analysis.report) {
                Ok(written) => {
                    for p in written {
                        println!("Wrote {}", p.display());
                    }
                }
                Err(e) => {
                    failures += 1;
                    loge!("Export failed for {}: {e}", path.display());
                    eprintln!("{}: export failed: {e}", path.display());
                }
            }
        }
    }

    if failures > 0 {
        return Err(format!("{failures} of {} document(s) failed", params.inputs.len()).into());
    }
    Ok(())
}

/// Student number if present, else name, else the input file stem.
fn export_stem(analysis: &Analysis, fallback: &str) -> String {
    let info = &analysis.info;
    let raw = info
        .get(crate::config::consts::INFO_STUDENT_NUMBER)
        .filter(|v| !v.is_empty())
        .or_else(|| info.get(crate::config::consts::INFO_NAME).filter(|v| !v.is_empty()))
        .unwrap_or(fallback);
    sanitize_file_stem(raw, "transcript")
}

/// Human-readable summary of one document.
pub fn render_analysis(path: &std::path::Path, analysis: &Analysis, history: bool) -> String {
    let mut out = String::new();
    let profile = analysis.info.profile();
    out.push_str(&format!("== {}\n", path.display()));
    out.push_str(&format!("Name:      {}\n", profile.name));
    out.push_str(&format!("Student #: {}\n", profile.student_number));
    out.push_str(&format!("Program:   {}\n", profile.program));

    if !analysis.has_grades() {
        out.push_str("No grades found in this file.\n\n");
        return out;
    }

    let report = &analysis.report;
    out.push_str(&format!("Cumulative GWA:       {:.4}\n", report.overall_gwa));
    out.push_str(&format!("Total academic units: {}\n\n", report.total_units));

    let terms = DataSet {
        headers: Some(strings!["Term", "GWA", "Units"]),
        rows: report
            .terms
            .iter()
            .map(|t| vec![t.label.clone(), format!("{:.4}", t.gwa), t.total_units.to_string()])
            .collect(),
    };
    out.push_str(&render_table(&terms));

    if history {
        out.push('\n');
        out.push_str(&render_table(&data::history_table(&report.records)));
    }
    out.push('\n');
    out
}

/// Left-aligned, space-padded text table.
pub fn render_table(ds: &DataSet) -> String {
    let ncols = ds
        .rows
        .iter()
        .map(Vec::len)
        .chain(ds.headers.iter().map(Vec::len))
        .max()
        .unwrap_or(0);
    let mut widths = vec![0usize; ncols];
    for row in ds.headers.iter().chain(ds.rows.iter()) {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let mut line = |row: &[String]| {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{:<w$}", c, w = widths[i]))
            .collect();
        out.push_str(cells.join("  ").trim_end());
        out.push('\n');
    };
    if let Some(h) = &ds.headers {
        line(h.as_slice());
    }
    for r in &ds.rows {
        line(r.as_slice());
    }
    out
}

pub fn parse_args<I: Iterator<Item = String>>(mut args: I) -> Result<Params, Box<dyn Error>> {
    let mut params = Params::default();

    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-i" | "--input" => params.inputs.push(PathBuf::from(args.next().ok_or("Missing input file")?)),
            "-o" | "--out" => {
                let v = args.next().ok_or("Missing output directory")?;
                params.options.export.set_out_dir(&v);
                params.export = true; }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.options.export.format = ExportFormat::parse(&v)
                    .ok_or_else(|| format!("Unknown format: {}", v))?; }
            "--no-headers" => params.options.export.include_headers = false,
            "--exclude" => {
                let v = args.next().ok_or("Missing value for --exclude")?;
                params.options.aggregate = AggregateOptions::with_prefix_list(&v); }
            "--info-class" => params.options.extract.info_class = args.next().ok_or("Missing value for --info-class")?,
            "--grade-class" => params.options.extract.grade_class = args.next().ok_or("Missing value for --grade-class")?,
            "--history" => params.history = true,
            "--log" => params.log_file = Some(PathBuf::from(args.next().ok_or("Missing log file")?)),
            "-h" | "--help" => {
                eprintln!("{}", include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            other if !other.starts_with('-') => params.inputs.push(PathBuf::from(other)),
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    if params.inputs.is_empty() {
        return Err("Specify at least one input: -i <Student.html>".into());
    }
    Ok(params)
}

/// Batch progress on stderr.
struct StderrProgress;

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) { eprintln!("Processing {total} documents…"); }
    fn item_failed(&mut self, _index: usize, name: &str) { eprintln!("  failed: {name}"); }
    fn finish(&mut self) { eprintln!("Done."); }
}
