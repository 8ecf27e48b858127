//! Per-pattern match counts collected during a `mask_with_report` call.

use serde::Serialize;

/// How many times one pattern fired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternSummary {
    pub pattern_name: String,
    pub occurrences: usize,
}

/// Summary of one masking pass. Only patterns that changed the text are
/// listed, in registry order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MaskReport {
    pub items: Vec<PatternSummary>,
}

impl MaskReport {
    pub(crate) fn record(&mut self, pattern_name: &str, occurrences: usize) {
        if occurrences > 0 {
            self.items.push(PatternSummary {
                pattern_name: pattern_name.to_string(),
                occurrences,
            });
        }
    }

    /// Total matches over all patterns.
    pub fn total(&self) -> usize {
        self.items.iter().map(|item| item.occurrences).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn occurrences_of(&self, pattern_name: &str) -> usize {
        self.items
            .iter()
            .find(|item| item.pattern_name == pattern_name)
            .map_or(0, |item| item.occurrences)
    }
}
