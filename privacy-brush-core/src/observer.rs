//! The logging collaborator handed to an engine at construction time.
//!
//! The engine never reaches for a global verbosity switch. It reports what it
//! did to a `MaskObserver`, and the caller decides what to do with it.

use log::debug;
use std::fmt;

/// Env var that lets `LogObserver::from_env` print matched text verbatim.
pub const ALLOW_DEBUG_PII_ENV: &str = "PRIVACY_BRUSH_ALLOW_DEBUG_PII";

/// Receives engine events. Every hook defaults to doing nothing.
pub trait MaskObserver: Send + Sync + fmt::Debug {
    /// Called once per pattern per `mask()` call that found matches.
    fn pattern_applied(&self, _pattern: &str, _occurrences: usize) {}

    /// Called for every match of a custom pattern.
    fn custom_match(&self, _pattern: &str, _matched: &str, _group: Option<&str>) {}

    /// Called by the stream adapter after each chunk is masked.
    fn chunk_masked(&self, _bytes_in: usize, _bytes_out: usize) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl MaskObserver for NoopObserver {}

/// Forwards events to the `log` facade at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver {
    pub verbose: bool,
    pub allow_pii: bool,
}

impl LogObserver {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            allow_pii: false,
        }
    }

    /// Like `new`, with `allow_pii` read from `PRIVACY_BRUSH_ALLOW_DEBUG_PII`.
    pub fn from_env(verbose: bool) -> Self {
        let allow_pii = std::env::var(ALLOW_DEBUG_PII_ENV)
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        Self { verbose, allow_pii }
    }

    fn loggable(&self, sensitive: &str) -> String {
        if self.allow_pii {
            sensitive.to_string()
        } else {
            redact_sensitive(sensitive)
        }
    }
}

impl MaskObserver for LogObserver {
    fn pattern_applied(&self, pattern: &str, occurrences: usize) {
        if self.verbose {
            debug!("Pattern '{}' masked {} occurrence(s).", pattern, occurrences);
        }
    }

    fn custom_match(&self, pattern: &str, matched: &str, group: Option<&str>) {
        if self.verbose {
            debug!(
                "Custom pattern '{}' matched: match='{}', group={:?}",
                pattern,
                self.loggable(matched),
                group.map(|g| self.loggable(g))
            );
        }
    }

    fn chunk_masked(&self, bytes_in: usize, bytes_out: usize) {
        if self.verbose {
            debug!("[transform] chunk of {} bytes -> {} bytes", bytes_in, bytes_out);
        }
    }
}

/// Stand-in for sensitive text in log lines.
pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    let len = s.chars().count();
    if len <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", len)
    }
}
