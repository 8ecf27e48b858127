// privacy-brush/src/ui/redaction_summary.rs
//! Prints the per-pattern redaction summary.

use std::io::{self, Write};

use privacy_brush_core::MaskReport;

use crate::ui::output_format::paint;
use crate::ui::theme::ThemeEntry;

pub const SUMMARY_HEADER: &str = "--- Redaction Summary ---";
pub const NO_REDACTIONS: &str = "No redactions applied.";

/// Writes the header followed by `<name> (<n> occurrences)` per pattern that
/// matched, or `No redactions applied.` when nothing did.
pub fn print_summary<W: Write>(report: &MaskReport, writer: &mut W, enable_colors: bool) -> io::Result<()> {
    writeln!(writer, "{}", paint(SUMMARY_HEADER, ThemeEntry::Header, enable_colors))?;

    if report.is_empty() {
        writeln!(writer, "{}", paint(NO_REDACTIONS, ThemeEntry::Info, enable_colors))?;
        return Ok(());
    }

    for item in &report.items {
        writeln!(
            writer,
            "{} ({} occurrences)",
            paint(&item.pattern_name, ThemeEntry::SummaryRuleName, enable_colors),
            paint(&item.occurrences.to_string(), ThemeEntry::SummaryOccurrences, enable_colors),
        )?;
    }
    Ok(())
}
