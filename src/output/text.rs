use std::io::Write;

use crate::matching::aggregator::MatchAggregator;

/// Write the plain-text report: one `> QUERY` block per query
///
/// ```text
/// > ACGUACGU
///     Line:1204, Src: sonuclar_20_a.txt: 88
/// ```
///
/// # Errors
///
/// Returns any error raised by the underlying writer.
pub fn write<W: Write>(aggregator: &MatchAggregator, writer: &mut W) -> std::io::Result<()> {
    for (query, records) in aggregator.iter() {
        writeln!(writer, "> {query}")?;
        for record in records {
            writeln!(
                writer,
                "    Line:{}, Src: {}: {}",
                record.reference_line, record.source_file, record.source_line
            )?;
        }
    }
    Ok(())
}
