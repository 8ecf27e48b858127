// privacy-brush/src/commands/list.rs
//! `--list-patterns`: prints the built-in patterns as a table.

use anyhow::Result;
use std::io::{self, Write};

use privacy_brush_core::MaskConfig;

use crate::ui::pattern_table::build_pattern_table;

pub fn run_list_patterns(config: &MaskConfig) -> Result<()> {
    let table = build_pattern_table(&config.enabled_patterns);
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{table}")?;
    Ok(())
}
