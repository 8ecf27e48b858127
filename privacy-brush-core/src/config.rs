//! Configuration management for `privacy-brush-core`.
//!
//! `MaskConfig` is the serializable description of an engine: the mask
//! character, the preserve-first-part switch, which built-in patterns run and
//! which custom patterns are appended after them. It can be loaded from YAML,
//! discovered in the user's config directory, and adjusted with CLI-style
//! enable/disable lists.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::errors::BrushError;
use crate::patterns::builtin::{builtin_names, is_reserved_char, BuiltinPattern};
use crate::patterns::compiler::compile_source;

/// Mask character used when none is configured.
pub const DEFAULT_MASK_CHAR: &str = "█";

const CONFIG_DIR_NAME: &str = "privacy-brush";
const CONFIG_FILE_NAME: &str = "config.yaml";

/// Engine configuration. Immutable once an engine is built from it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MaskConfig {
    /// Exactly one character, repeated once per masked character.
    pub mask_char: String,
    /// Leave the first dot-separated part of versions readable.
    pub preserve_first_part: bool,
    /// Built-in patterns to run. Unknown names are ignored.
    pub enabled_patterns: Vec<String>,
    /// Custom pattern sources, `/body/flags` or a bare body.
    pub custom_patterns: Vec<String>,
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            mask_char: DEFAULT_MASK_CHAR.to_string(),
            preserve_first_part: true,
            enabled_patterns: builtin_names(),
            custom_patterns: Vec::new(),
        }
    }
}

impl MaskConfig {
    /// Loads a configuration from a YAML file and validates it.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: MaskConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        debug!(
            "Loaded config with {} enabled and {} custom patterns.",
            config.enabled_patterns.len(),
            config.custom_patterns.len()
        );
        Ok(config)
    }

    /// `<config dir>/privacy-brush/config.yaml`, if the platform has a config dir.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Loads `explicit` if given, else the default config file if it exists,
    /// else the built-in defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }
        match Self::default_config_path() {
            Some(path) if path.is_file() => Self::load_from_file(path),
            _ => {
                debug!("No config file found, using defaults.");
                Ok(Self::default())
            }
        }
    }

    /// The validated mask character. Hex digits and the `.:-/` separators are
    /// refused, since a later built-in pattern would match them again.
    pub fn mask_char(&self) -> Result<char, BrushError> {
        let mut chars = self.mask_char.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !is_reserved_char(c) => Ok(c),
            _ => Err(BrushError::InvalidMaskChar(self.mask_char.clone())),
        }
    }

    /// Checks the mask character and compiles every custom pattern once.
    pub fn validate(&self) -> Result<(), BrushError> {
        self.mask_char()?;
        for (index, source) in self.custom_patterns.iter().enumerate() {
            compile_source(&format!("custom_{}", index + 1), source)?;
        }
        Ok(())
    }

    /// Applies enable/disable lists as given on the command line.
    ///
    /// A non-empty `enable` list replaces the enabled set; `disable` then
    /// removes names from it.
    pub fn set_active_patterns(&mut self, enable: &[String], disable: &[String]) {
        if !enable.is_empty() {
            self.enabled_patterns = enable.to_vec();
        }

        let disable_set: HashSet<&str> = disable.iter().map(String::as_str).collect();
        self.enabled_patterns
            .retain(|name| !disable_set.contains(name.as_str()));

        for name in enable.iter().chain(disable) {
            if name.parse::<BuiltinPattern>().is_err() {
                debug!("Ignoring unknown built-in pattern name '{}'.", name);
            }
        }
        debug!("Active built-in patterns: {:?}", self.enabled_patterns);
    }
}
