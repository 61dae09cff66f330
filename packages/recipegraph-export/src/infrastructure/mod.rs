//! Export adapters

pub mod csv;
pub mod neo4j;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::domain::csv_line;
use crate::Result;

/// Write header + rows as one CSV file, buffered
pub(crate) fn write_csv_file<S: AsRef<str>>(
    path: &Path,
    header: &[S],
    rows: &[Vec<String>],
) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writeln!(writer, "{}", csv_line(header))?;
    for row in rows {
        writeln!(writer, "{}", csv_line(row))?;
    }
    writer.flush()?;
    Ok(())
}
