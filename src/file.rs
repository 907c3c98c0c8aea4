// src/file.rs

use std::{
    collections::HashMap,
    fs::{self, File},
    io::{BufWriter, Read, Write},
    path::{Path, PathBuf},
};

use crate::config::consts::{RECORDS_STEM, TERMS_STEM};
use crate::config::options::ExportOptions;
use crate::csv::write_table;
use crate::data::{self, DataSet};
use crate::error::TranscriptError;
use crate::gwa::GwaReport;

/// Read a whole transcript file. The handle is closed when this returns,
/// whether or not the bytes later parse.
pub fn read_document(path: &Path) -> Result<Vec<u8>, TranscriptError> {
    let io_err = |source| TranscriptError::Io { path: path.to_path_buf(), source };

    let mut buf = Vec::new();
    {
        let mut f = File::open(path).map_err(io_err)?;
        f.read_to_end(&mut buf).map_err(io_err)?;
    }
    Ok(buf)
}

/// Write one table to `path` (parent dirs created, file truncated).
pub fn write_dataset(
    path: &Path,
    ds: &DataSet,
    include_headers: bool,
    sep: char,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    write_table(&mut out, ds, include_headers, sep)?;
    out.flush()?;
    Ok(())
}

/// Export processed records and term summaries of one report.
/// Returns `[records_path, terms_path]`.
pub fn export_report(
    export: &ExportOptions,
    prefix: Option<&str>,
    report: &GwaReport,
) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let (records, terms) = data::report_tables(report);
    let sep = export.format.delim();

    let records_path = export.out_path(prefix, RECORDS_STEM);
    write_dataset(&records_path, &records, export.include_headers, sep)?;

    let terms_path = export.out_path(prefix, TERMS_STEM);
    write_dataset(&terms_path, &terms, export.include_headers, sep)?;

    Ok(vec![records_path, terms_path])
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// Duplicate handling **only within this run**:
/// first `stem`, then `stem (2)`, `stem (3)`, …
pub fn resolve_unique_stem(stem: &str, seen: &mut HashMap<String, usize>) -> String {
    let count = seen.entry(stem.to_string()).or_insert(0);
    let out = if *count == 0 { s!(stem) } else { format!("{stem} ({})", *count + 1) };
    *count += 1;
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_stems_count_from_two() {
        let mut seen = HashMap::new();
        assert_eq!(resolve_unique_stem("2021-00001", &mut seen), "2021-00001");
        assert_eq!(resolve_unique_stem("2021-00001", &mut seen), "2021-00001 (2)");
        assert_eq!(resolve_unique_stem("2021-00001", &mut seen), "2021-00001 (3)");
        assert_eq!(resolve_unique_stem("other", &mut seen), "other");
    }

    #[test]
    fn missing_file_is_io_error() {
        let p = std::env::temp_dir().join("csrs_gwa_definitely_missing.html");
        let _ = fs::remove_file(&p);
        let err = read_document(&p).unwrap_err();
        assert!(matches!(err, TranscriptError::Io { .. }));
    }
}
