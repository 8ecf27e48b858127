//! errors.rs - Custom error types for the privacy-brush-core library.
//!
//! Every failure here is a configuration-time failure: once a `MaskingEngine`
//! exists, masking itself cannot fail.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// All error types raised while building a masking engine.
///
/// `#[non_exhaustive]` keeps room for new variants without breaking callers
/// that match on this enum.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum BrushError {
    /// A custom pattern body is not a valid expression for the `regex` crate.
    #[error("Failed to compile pattern '{name}' from `{source_text}`: {source}")]
    PatternCompileError {
        name: String,
        source_text: String,
        #[source]
        source: regex::Error,
    },

    #[error("Pattern '{name}': unsupported flag '{flag}'")]
    UnsupportedFlag { name: String, flag: char },

    #[error("Pattern '{0}': source length ({1}) exceeds maximum allowed ({2})")]
    PatternLengthExceeded(String, usize, usize),

    /// Not a single character, or one a built-in pattern would match again.
    #[error("Mask must be exactly one character other than a hex digit or one of `.:-/`, got {0:?}")]
    InvalidMaskChar(String),
}
