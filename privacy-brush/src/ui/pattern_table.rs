// privacy-brush/src/ui/pattern_table.rs
//! The `--list-patterns` table.

use comfy_table::{Cell, Color, ContentArrangement, Table};

use privacy_brush_core::BuiltinPattern;

/// One row per built-in pattern: name, description and whether `enabled`
/// lists it.
pub fn build_pattern_table(enabled: &[String]) -> Table {
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Name", "Description", "Enabled"]);

    for pattern in BuiltinPattern::ALL {
        let is_enabled = enabled.iter().any(|name| name == pattern.name());
        let flag = if is_enabled {
            Cell::new("yes").fg(Color::Green)
        } else {
            Cell::new("no").fg(Color::DarkGrey)
        };
        table.add_row(vec![
            Cell::new(pattern.name()),
            Cell::new(pattern.description()),
            flag,
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_every_builtin() {
        let rendered = build_pattern_table(&["uuid".to_string()]).to_string();
        for pattern in BuiltinPattern::ALL {
            assert!(rendered.contains(pattern.name()));
        }
    }
}
