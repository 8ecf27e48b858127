// privacy-brush/src/ui/output_format.rs
//! Writes prefixed status messages, coloured when the target supports it.

use owo_colors::OwoColorize;
use std::io::{self, Write};

use crate::ui::theme::ThemeEntry;

/// Applies the colour of `entry` to `text` when `enable_colors` is set.
pub fn paint(text: &str, entry: ThemeEntry, enable_colors: bool) -> String {
    if enable_colors {
        text.color(entry.color()).to_string()
    } else {
        text.to_string()
    }
}

fn print_message<W: Write>(
    writer: &mut W,
    prefix: &str,
    msg: &str,
    entry: ThemeEntry,
    enable_colors: bool,
) -> io::Result<()> {
    writeln!(writer, "{}", paint(&format!("{prefix}{msg}"), entry, enable_colors))
}

pub fn print_info_message<W: Write>(writer: &mut W, msg: &str, enable_colors: bool) -> io::Result<()> {
    print_message(writer, "", msg, ThemeEntry::Info, enable_colors)
}

pub fn print_prompt_message<W: Write>(writer: &mut W, msg: &str, enable_colors: bool) -> io::Result<()> {
    print_message(writer, "", msg, ThemeEntry::Prompt, enable_colors)
}

pub fn print_warn_message<W: Write>(writer: &mut W, msg: &str, enable_colors: bool) -> io::Result<()> {
    print_message(writer, "Warning: ", msg, ThemeEntry::Warn, enable_colors)
}

pub fn print_error_message<W: Write>(writer: &mut W, msg: &str, enable_colors: bool) -> io::Result<()> {
    print_message(writer, "Error: ", msg, ThemeEntry::Error, enable_colors)
}
