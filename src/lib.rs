// src/lib.rs
// #![allow(dead_code)]
// #![allow(unused)]

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod record;
pub mod specs;
pub mod gwa;

pub mod cli;
pub mod csv;
pub mod data;
pub mod file;
pub mod pipeline;
pub mod progress;

pub use error::TranscriptError;
pub use gwa::{aggregate, aggregate_with, GwaReport, ProcessedRecord, TermSummary};
pub use record::{GradeRecord, StudentInfo};
pub use specs::transcript::{extract, extract_bytes, extract_with, Transcript};
