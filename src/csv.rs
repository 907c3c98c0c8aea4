// src/csv.rs
use std::io::{self, Write};

use crate::data::DataSet;

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Write a whole table; the header line only when asked and present.
pub fn write_table<W: Write>(
    mut w: W,
    ds: &DataSet,
    include_headers: bool,
    sep: char,
) -> io::Result<()> {
    if include_headers {
        if let Some(h) = &ds.headers {
            write_row(&mut w, h, sep)?;
        }
    }
    for r in &ds.rows {
        write_row(&mut w, r, sep)?;
    }
    Ok(())
}

/// Stringify a table (Copy/Export).
pub fn to_export_string(ds: &DataSet, include_headers: bool, sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let _ = write_table(&mut buf, ds, include_headers, sep);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_only_when_needed() {
        let mut buf = Vec::new();
        write_row(&mut buf, &strings!["MATH 21", "Calc, I", "say \"hi\""], ',').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "MATH 21,\"Calc, I\",\"say \"\"hi\"\"\"\n");
    }

    #[test]
    fn tsv_leaves_commas_alone() {
        let mut buf = Vec::new();
        write_row(&mut buf, &strings!["Calc, I", "1.0"], '\t').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Calc, I\t1.0\n");
    }

    #[test]
    fn header_policy() {
        let ds = DataSet { headers: Some(strings!["A", "B"]), rows: vec![strings!["1", "2"]] };
        assert_eq!(to_export_string(&ds, true, ','), "A,B\n1,2\n");
        assert_eq!(to_export_string(&ds, false, ','), "1,2\n");
    }
}
