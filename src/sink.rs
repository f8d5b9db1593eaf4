//! Delimited-file sink for extracted records.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::pipeline::Record;

/// Released column set. Graduation year and employer are computed upstream
/// but intentionally not emitted as columns (see DESIGN.md).
pub const COLUMNS: [&str; 3] = ["Name and Grad Year", "Career", "Image URL"];

/// Write header plus one row per record, quoting only where needed.
pub fn write_delimited(path: &Path, records: &[Record], sep: char) -> io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    write_row(&mut w, &COLUMNS.map(String::from), sep)?;
    for record in records {
        write_row(&mut w, &record.row(), sep)?;
    }
    w.flush()
}

/// Per-column count of empty cells, for the post-run quality report.
pub fn missing_by_column(records: &[Record]) -> [(&'static str, usize); 3] {
    let mut counts = [0usize; 3];
    for record in records {
        for (i, cell) in record.row().iter().enumerate() {
            if cell.is_empty() {
                counts[i] += 1;
            }
        }
    }
    [
        (COLUMNS[0], counts[0]),
        (COLUMNS[1], counts[1]),
        (COLUMNS[2], counts[2]),
    ]
}

fn needs_quotes(cell: &str, sep: char) -> bool {
    cell.contains(sep) || cell.contains('"') || cell.contains('\n') || cell.contains('\r')
}

fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first {
            write!(w, "{}", sep)?;
        } else {
            first = false;
        }
        if needs_quotes(cell, sep) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}
