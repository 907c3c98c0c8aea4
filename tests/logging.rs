// tests/logging.rs
//
// Own test binary: the log sink is process-global.
//
use std::fs;

use csrs_gwa::{extract, log};

#[test]
fn sink_is_opt_in() {
    let path = std::env::temp_dir().join("csrs_gwa_logging").join("debug.log");
    let _ = fs::remove_file(&path);

    assert!(!log::is_enabled());
    extract("<p>no tables</p>").unwrap();
    assert!(!path.exists());

    log::init(&path).unwrap();
    assert!(log::is_enabled());
    extract("<p>no tables</p>").unwrap();
    log::disable();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("][DEBUG] No table.form found"));
    assert!(text.contains("Read 0 grade rows from 0 grade table(s)"));
}
