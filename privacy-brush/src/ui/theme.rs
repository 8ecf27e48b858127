// privacy-brush/src/ui/theme.rs
//! Fixed colour roles used for stderr output.

use owo_colors::AnsiColors;

/// The logical parts of the output that get a colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeEntry {
    /// Section headers such as the summary title.
    Header,
    Info,
    Warn,
    Error,
    /// Pattern names in the summary.
    SummaryRuleName,
    /// Occurrence counts in the summary.
    SummaryOccurrences,
    /// The "waiting for input" prompt.
    Prompt,
}

impl ThemeEntry {
    pub fn color(self) -> AnsiColors {
        match self {
            ThemeEntry::Header => AnsiColors::BrightCyan,
            ThemeEntry::Info => AnsiColors::Green,
            ThemeEntry::Warn => AnsiColors::Yellow,
            ThemeEntry::Error => AnsiColors::Red,
            ThemeEntry::SummaryRuleName => AnsiColors::Magenta,
            ThemeEntry::SummaryOccurrences => AnsiColors::BrightWhite,
            ThemeEntry::Prompt => AnsiColors::BrightBlack,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_is_red() {
        assert_eq!(ThemeEntry::Error.color(), AnsiColors::Red);
        assert_eq!(ThemeEntry::Warn.color(), AnsiColors::Yellow);
        assert_eq!(ThemeEntry::Prompt.color(), AnsiColors::BrightBlack);
    }
}
