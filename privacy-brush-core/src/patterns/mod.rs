//! Pattern definitions: the built-in detectors and the compiler for
//! user-supplied ones.
//!
//! A `Pattern` is an immutable record of a name, a compiled matcher and the
//! rule that turns a match into its masked replacement.

pub mod builtin;
pub mod compiler;

use regex::{Captures, Regex};

use crate::masking::{mask_span, MaskStyle};
use builtin::BuiltinPattern;

/// Which replacement rule a pattern uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    Builtin(BuiltinPattern),
    /// User-supplied: masks capture group 1 if it matched, else the whole match.
    Custom,
}

/// A named matcher plus its replacement rule.
#[derive(Debug, Clone)]
pub struct Pattern {
    name: String,
    regex: Regex,
    kind: PatternKind,
}

impl Pattern {
    pub fn builtin(pattern: BuiltinPattern) -> Self {
        Self {
            name: pattern.name().to_string(),
            regex: pattern.regex().clone(),
            kind: PatternKind::Builtin(pattern),
        }
    }

    pub fn custom(name: impl Into<String>, regex: Regex) -> Self {
        Self {
            name: name.into(),
            regex,
            kind: PatternKind::Custom,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    pub fn is_custom(&self) -> bool {
        self.kind == PatternKind::Custom
    }

    /// Produces the replacement text for a single match.
    pub fn replace(&self, caps: &Captures<'_>, style: &MaskStyle) -> String {
        match self.kind {
            PatternKind::Builtin(builtin) => builtin.replace(caps, style),
            PatternKind::Custom => replace_custom(caps, style),
        }
    }
}

fn replace_custom(caps: &Captures<'_>, style: &MaskStyle) -> String {
    let whole = &caps[0];
    match (caps.get(0), caps.get(1)) {
        (Some(m), Some(group)) => mask_span(
            whole,
            group.start() - m.start(),
            group.end() - m.start(),
            style,
        ),
        _ => style.cover(whole),
    }
}
