// privacy-brush/src/cli.rs
//! Command-line interface definition for the `privacy-brush` binary.
//! License: MIT OR APACHE 2.0

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "privacy-brush",
    version = env!("CARGO_PKG_VERSION"),
    about = "Mask identifying details in terminal output before sharing it",
    long_about = "privacy-brush masks OS and browser version numbers, IPv4 addresses, UUIDs, MAC addresses, user names in /Users/<name>/ paths and any custom patterns you supply. Masking keeps the length of every value, so masked output keeps its column layout.",
    disable_version_flag = true
)]
pub struct Cli {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write masked output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output_file: Option<PathBuf>,

    /// Mask character.
    #[arg(long, short = 'm', value_name = "CHAR", help = "Character used to mask each hidden character (default: █).")]
    pub mask: Option<String>,

    /// Keep the first part of versions readable.
    #[arg(long, short = 'p', overrides_with = "no_preserve_first", help = "Keep the first part of version numbers readable (default).")]
    pub preserve_first: bool,

    /// Mask version numbers completely.
    #[arg(long = "no-preserve-first", overrides_with = "preserve_first", help = "Mask every part of version numbers.")]
    pub no_preserve_first: bool,

    /// Extra custom patterns, in `/body/flags` or bare form.
    #[arg(long = "pattern", short = 'r', value_name = "PATTERN", action = ArgAction::Append, help = "Add a custom pattern, e.g. '/sk-([a-z0-9]{20,})/i'. May be repeated.")]
    pub patterns: Vec<String>,

    /// Explicitly enable only these built-in pattern names (comma-separated).
    #[arg(long, short = 'e', value_delimiter = ',', help = "Explicitly enable only these built-in pattern names (comma-separated).")]
    pub enable: Vec<String>,

    /// Explicitly disable these built-in pattern names (comma-separated).
    #[arg(long, short = 'x', value_delimiter = ',', help = "Explicitly disable these built-in pattern names (comma-separated).")]
    pub disable: Vec<String>,

    /// Path to a YAML configuration file.
    #[arg(long = "config", value_name = "FILE", help = "Path to a YAML configuration file.")]
    pub config: Option<PathBuf>,

    /// List the built-in patterns and exit.
    #[arg(long = "list-patterns", help = "List the built-in patterns and exit.")]
    pub list_patterns: bool,

    /// Print a redaction summary to stderr.
    #[arg(long, help = "Print a per-pattern redaction summary to stderr.")]
    pub summary: bool,

    /// Enable debug logging.
    #[arg(long, help = "Enable debug logging of applied patterns.")]
    pub verbose: bool,

    /// Disable informational messages.
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Print version.
    #[arg(long, short = 'v', action = ArgAction::Version, help = "Print version.")]
    pub version: Option<bool>,
}

impl Cli {
    /// `Some(false)` for `--no-preserve-first`, `Some(true)` for
    /// `--preserve-first`, `None` when neither was given.
    pub fn preserve_first_part(&self) -> Option<bool> {
        if self.no_preserve_first {
            Some(false)
        } else if self.preserve_first {
            Some(true)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn last_preserve_flag_wins() {
        let cli = Cli::parse_from(["privacy-brush", "-p", "--no-preserve-first"]);
        assert_eq!(cli.preserve_first_part(), Some(false));

        let cli = Cli::parse_from(["privacy-brush", "--no-preserve-first", "-p"]);
        assert_eq!(cli.preserve_first_part(), Some(true));

        let cli = Cli::parse_from(["privacy-brush"]);
        assert_eq!(cli.preserve_first_part(), None);
    }

    #[test]
    fn pattern_lists_are_collected() {
        let cli = Cli::parse_from([
            "privacy-brush",
            "-r",
            "/a/",
            "--pattern",
            "b+",
            "-e",
            "ip_address,uuid",
            "-x",
            "uuid",
        ]);
        assert_eq!(cli.patterns, vec!["/a/", "b+"]);
        assert_eq!(cli.enable, vec!["ip_address", "uuid"]);
        assert_eq!(cli.disable, vec!["uuid"]);
    }
}
