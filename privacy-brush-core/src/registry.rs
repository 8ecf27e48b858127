//! The ordered pattern registry.
//!
//! Enabled built-ins come first, in declaration order, followed by custom
//! patterns in the order supplied. Patterns run one after another over the
//! partially masked text, so order is part of the contract.
//!
//! License: MIT OR APACHE 2.0

use log::debug;

use crate::config::MaskConfig;
use crate::errors::BrushError;
use crate::patterns::builtin::BuiltinPattern;
use crate::patterns::compiler::{compile_custom_patterns, PatternSource};
use crate::patterns::Pattern;

#[derive(Debug, Clone, Default)]
pub struct PatternRegistry {
    patterns: Vec<Pattern>,
}

impl PatternRegistry {
    /// Builds the registry from `config`, appending `extra` matchers after
    /// the configured custom patterns.
    pub fn build(config: &MaskConfig, extra: Vec<PatternSource>) -> Result<Self, BrushError> {
        let mut patterns: Vec<Pattern> = BuiltinPattern::ALL
            .into_iter()
            .filter(|builtin| config.enabled_patterns.iter().any(|name| name == builtin.name()))
            .map(Pattern::builtin)
            .collect();

        for name in &config.enabled_patterns {
            if name.parse::<BuiltinPattern>().is_err() {
                debug!("Skipping unknown built-in pattern '{}'.", name);
            }
        }

        let sources = config
            .custom_patterns
            .iter()
            .cloned()
            .map(PatternSource::Text)
            .chain(extra);
        patterns.extend(compile_custom_patterns(sources, 1)?);

        debug!(
            "Pattern registry built: [{}]",
            patterns.iter().map(Pattern::name).collect::<Vec<_>>().join(", ")
        );
        Ok(Self { patterns })
    }

    pub fn from_config(config: &MaskConfig) -> Result<Self, BrushError> {
        Self::build(config, Vec::new())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pattern> {
        self.patterns.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.patterns.iter().map(Pattern::name).collect()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl<'a> IntoIterator for &'a PatternRegistry {
    type Item = &'a Pattern;
    type IntoIter = std::slice::Iter<'a, Pattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
