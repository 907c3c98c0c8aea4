// src/config/consts.rs

// Transcript structure
pub const INFO_TABLE_CLASS: &str = "form";
pub const GRADE_TABLE_CLASS: &str = "list";

// Well-known grade columns (header text in the export)
pub const COL_COURSE: &str = "Course";
pub const COL_GRADE: &str = "Grade";
pub const COL_UNITS: &str = "Units";
pub const COL_YEAR: &str = "Year";
pub const COL_SEMESTER: &str = "Semester";

// Courses that never count toward GWA (matched at the start, any case)
pub const EXCLUDED_PREFIXES: &[&str] = &["PE", "NSTP"];

// Term labels
pub const SEM_FIRST_MARKER: &str = "FIRST";
pub const SEM_SECOND_MARKER: &str = "SECOND";
pub const SEM_FIRST_LABEL: &str = "1st Sem";
pub const SEM_SECOND_LABEL: &str = "2nd Sem";
pub const SEM_MID_LABEL: &str = "Midsem";

// Profile keys
pub const INFO_NAME: &str = "Name";
pub const INFO_STUDENT_NUMBER: &str = "Student Number";
pub const INFO_PROGRAM: &str = "Program";
pub const INFO_MISSING: &str = "N/A";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const RECORDS_STEM: &str = "grades";
pub const TERMS_STEM: &str = "terms";

// Batch
pub const WORKERS: usize = 4;
