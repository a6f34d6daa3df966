//! Printing threshold tables.

use std::io::{self, Write};

use crate::ThresholdTable;

/// Writes one `i=<row> l=<threshold>` line per row, top row first.
///
/// Thresholds are printed in fixed-point notation with six fractional digits.
pub fn report<W: Write>(table: &ThresholdTable, mut writer: W) -> io::Result<()> {
    for (row, threshold) in table {
        writeln!(writer, "i={row} l={threshold:.6}")?;
    }
    writer.flush()
}

/// Writes the table and the config that produced it as pretty-printed JSON.
pub fn report_json<W: Write>(table: &ThresholdTable, mut writer: W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut writer, table)?;
    writeln!(writer)?;
    writer.flush()
}
