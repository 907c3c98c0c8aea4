// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub extract: ExtractOptions,
    pub aggregate: AggregateOptions,
    pub export: ExportOptions,
}

/// Which tables to read. Matched as whole class tokens on `<table>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractOptions {
    pub info_class: String,
    pub grade_class: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            info_class: s!(INFO_TABLE_CLASS),
            grade_class: s!(GRADE_TABLE_CLASS),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AggregateOptions {
    /// Course-code prefixes excluded from GWA (case-insensitive, start only).
    pub excluded_prefixes: Vec<String>,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        Self {
            excluded_prefixes: EXCLUDED_PREFIXES.iter().map(|p| s!(*p)).collect(),
        }
    }
}

impl AggregateOptions {
    /// Parse a `--exclude` list: `"PE,NSTP,ROTC"`. Blank entries are dropped.
    pub fn with_prefix_list(list: &str) -> Self {
        let excluded_prefixes = list
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(String::from)
            .collect();
        Self { excluded_prefixes }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "tsv" => Some(ExportFormat::Tsv),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    out_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

impl ExportOptions {
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Parse user text into a directory. Surrounding whitespace is ignored.
    pub fn set_out_dir(&mut self, text: &str) {
        self.out_dir = PathBuf::from(text.trim());
    }

    /// `<out_dir>/<prefix>_<stem>.<ext>`; no prefix → `<out_dir>/<stem>.<ext>`.
    pub fn out_path(&self, prefix: Option<&str>, stem: &str) -> PathBuf {
        let ext = self.format.ext();
        let file = match prefix {
            Some(p) if !p.is_empty() => join!(p, "_", stem, ".", ext),
            _ => join!(stem, ".", ext),
        };
        self.out_dir.join(file)
    }
}
