// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Document-specific extraction specifications. Each spec focuses on one
//! export format and encodes *where the ground truth lives in the HTML* and
//! *how to extract it robustly*.
//!
//! ## What lives here
//! - **Pure HTML parsing** of an in-memory document (no IO, no network).
//! - **Table selection** by class marker (`table.form` vs `table.list`).
//! - **Tolerant extraction** via `core::html` helpers (class-token matching,
//!   `&nbsp;`-aware trimming, header-driven column mapping).
//! - **Light shaping** into small value types (`StudentInfo`, `GradeRecord`).
//!
//! ## What does **not** live here
//! - **GWA computation** – `gwa::aggregate` consumes the records.
//! - **File reading, export formatting, CLI output** – see `file`, `csv`, `cli`.
//!
//! ## Typical call chain
//! ```text
//! cli / pipeline → file::read_document → specs::transcript::extract_bytes
//!                                      ↘ Transcript { info, records }
//!                  gwa::aggregate(records) → GwaReport
//! ```
//!
//! ## Conventions & invariants
//! - Missing structure yields empty output, never an error.
//! - Header text is the column name; no fixed column set is assumed.
//!
//! ## Testing notes
//! - Specs are tested offline against inline fixtures.
pub mod transcript;
