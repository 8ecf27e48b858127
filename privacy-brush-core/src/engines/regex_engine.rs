// privacy-brush-core/src/engines/regex_engine.rs
//! A `Masker` implementation that runs the pattern registry over the input
//! with regular expressions.
//! License: MIT OR APACHE 2.0

use std::borrow::Cow;
use std::sync::Arc;

use log::debug;
use regex::Captures;

use crate::config::MaskConfig;
use crate::engine::Masker;
use crate::errors::BrushError;
use crate::masking::MaskStyle;
use crate::observer::{MaskObserver, NoopObserver};
use crate::patterns::compiler::PatternSource;
use crate::registry::PatternRegistry;
use crate::report::MaskReport;

/// Construction-time extras that do not belong in a serialized config.
#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// Logging collaborator. Defaults to `NoopObserver`.
    pub observer: Arc<dyn MaskObserver>,
    /// Custom matchers appended after `MaskConfig::custom_patterns`.
    pub extra_patterns: Vec<PatternSource>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            observer: Arc::new(NoopObserver),
            extra_patterns: Vec::new(),
        }
    }
}

impl EngineOptions {
    pub fn with_observer(observer: Arc<dyn MaskObserver>) -> Self {
        Self {
            observer,
            ..Self::default()
        }
    }
}

#[derive(Debug)]
pub struct MaskingEngine {
    registry: PatternRegistry,
    style: MaskStyle,
    observer: Arc<dyn MaskObserver>,
}

impl MaskingEngine {
    pub fn new(config: MaskConfig) -> Result<Self, BrushError> {
        Self::with_options(config, EngineOptions::default())
    }

    pub fn with_options(config: MaskConfig, options: EngineOptions) -> Result<Self, BrushError> {
        let style = MaskStyle::new(config.mask_char()?, config.preserve_first_part);
        let registry = PatternRegistry::build(&config, options.extra_patterns)?;
        debug!(
            "MaskingEngine ready with {} pattern(s), mask {:?}, preserve_first_part={}",
            registry.len(),
            style.mask_char,
            style.preserve_first_part
        );
        Ok(Self {
            registry,
            style,
            observer: options.observer,
        })
    }

    pub fn registry(&self) -> &PatternRegistry {
        &self.registry
    }

    pub fn style(&self) -> &MaskStyle {
        &self.style
    }

    fn apply(&self, text: &str) -> (String, MaskReport) {
        let mut current = text.to_string();
        let mut report = MaskReport::default();

        for pattern in &self.registry {
            let mut occurrences = 0usize;
            let replaced = pattern.regex().replace_all(&current, |caps: &Captures<'_>| {
                let replacement = pattern.replace(caps, &self.style);
                // Matches over already-masked text are not counted.
                if replacement == caps[0] {
                    return replacement;
                }
                occurrences += 1;
                if pattern.is_custom() {
                    self.observer.custom_match(
                        pattern.name(),
                        &caps[0],
                        caps.get(1).map(|g| g.as_str()),
                    );
                }
                replacement
            });
            let next = match replaced {
                Cow::Owned(masked) => Some(masked),
                Cow::Borrowed(_) => None,
            };
            if let Some(masked) = next {
                current = masked;
            }

            if occurrences > 0 {
                self.observer.pattern_applied(pattern.name(), occurrences);
            }
            report.record(pattern.name(), occurrences);
        }

        (current, report)
    }
}

impl Masker for MaskingEngine {
    fn mask(&self, text: &str) -> String {
        self.apply(text).0
    }

    fn mask_with_report(&self, text: &str) -> (String, MaskReport) {
        self.apply(text)
    }

    fn pattern_names(&self) -> Vec<&str> {
        self.registry.names()
    }
}
