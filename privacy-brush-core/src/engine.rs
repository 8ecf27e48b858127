// privacy-brush-core/src/engine.rs
//! Defines the core `Masker` trait.
//!
//! The stream adapter and the file/buffer facade only need something that
//! turns text into masked text. Putting that behind a trait keeps them
//! independent of how the patterns are matched.
//!
//! License: MIT OR APACHE 2.0

use crate::report::MaskReport;

/// Something that can mask sensitive substrings in text.
///
/// Implementations must be pure: the same input always yields the same
/// output, and concurrent calls on one instance are allowed.
pub trait Masker: Send + Sync {
    /// Masks `text`. Never fails; text without matches comes back unchanged.
    fn mask(&self, text: &str) -> String;

    /// Masks `text` and reports how many times each pattern fired.
    fn mask_with_report(&self, text: &str) -> (String, MaskReport);

    /// Names of the active patterns, in evaluation order.
    fn pattern_names(&self) -> Vec<&str>;
}
