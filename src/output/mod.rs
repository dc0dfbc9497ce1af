// Output formatting: terminal display plus JSON and CSV emission.

pub mod terminal;

use std::io::Write;

use anyhow::Result;

use crate::pipeline::BulkReport;

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Unlike byte slicing (`&text[..120]`), this respects UTF-8 character boundaries
/// and will never panic on multi-byte characters like emoji or accented letters.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

/// Write the full report as pretty-printed JSON.
pub fn write_json<W: Write>(report: &BulkReport, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, report)?;
    writeln!(writer)?;
    Ok(())
}

/// Write the annotated table as CSV.
pub fn write_csv<W: Write>(report: &BulkReport, writer: W) -> Result<()> {
    report.table.write_csv(writer)
}
