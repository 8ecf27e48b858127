// privacy-brush/src/ui/mod.rs
//! Terminal output helpers: coloured status messages, the redaction summary
//! and the built-in pattern table.

pub mod output_format;
pub mod pattern_table;
pub mod redaction_summary;
pub mod theme;
