#![allow(dead_code)]

use std::io::{Error, Write};
use tempfile::NamedTempFile;

/// Writes a command script with the standard header.
pub fn commands_file(rows: &[[&str; 4]]) -> Result<NamedTempFile, Error> {
    let file = NamedTempFile::new()?;
    let mut wtr = csv::WriterBuilder::new().from_path(file.path())?;

    wtr.write_record(["command", "row", "col", "key"])?;
    for row in rows {
        wtr.write_record(row)?;
    }

    wtr.flush()?;
    Ok(file)
}

/// Writes a puzzle JSON file.
pub fn puzzle_file(json: &str) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    file.write_all(json.as_bytes())?;
    file.flush()?;
    Ok(file)
}

/// Commands that solve `tests/fixtures/cat_top.json`.
pub fn solve_cat_top() -> Vec<[&'static str; 4]> {
    vec![
        ["select", "0", "0", ""],
        ["type", "", "", "C"],
        ["type", "", "", "A"],
        ["type", "", "", "T"],
        ["select", "0", "2", ""],
        ["type", "", "", "T"],
        ["type", "", "", "O"],
        ["type", "", "", "P"],
        ["check", "", "", ""],
    ]
}
