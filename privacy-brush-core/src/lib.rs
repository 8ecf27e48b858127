// privacy-brush-core/src/lib.rs
//! # privacy-brush core library
//!
//! `privacy-brush-core` masks identifying details in text before it is
//! shared: OS and browser version numbers, IPv4 addresses, UUIDs, MAC
//! addresses, user names in `/Users/<name>/` paths, and any custom patterns
//! the caller supplies.
//!
//! Masking is length preserving. Every masked character is replaced by one
//! mask character, so masked terminal output keeps its column layout.
//!
//! ## Modules
//!
//! * `config`: `MaskConfig`, its YAML loading and CLI-style overrides.
//! * `patterns`: the built-in detectors and the custom pattern compiler.
//! * `registry`: the ordered list of patterns an engine runs.
//! * `masking`: the per-value masking rules (versions, UUIDs, MACs, spans).
//! * `engine`: the `Masker` trait.
//! * `engines`: `MaskingEngine`, the regex-backed `Masker`.
//! * `observer`: the logging collaborator passed to an engine.
//! * `stream`: chunk-by-chunk masking over live byte streams.
//! * `decode`: best-effort UTF-8 decoding of raw input.
//! * `headless`: one-shot string and file helpers.
//!
//! ## Usage Example
//!
//! ```rust
//! use privacy_brush_core::{MaskConfig, MaskingEngine, Masker};
//!
//! # fn main() -> Result<(), privacy_brush_core::BrushError> {
//! let config = MaskConfig {
//!     custom_patterns: vec!["/sk-([a-z0-9]{20,})/".to_string()],
//!     ..MaskConfig::default()
//! };
//! let engine = MaskingEngine::new(config)?;
//!
//! let masked = engine.mask("Google Chrome 144.0.7559.60 at 192.168.1.7");
//! assert_eq!(masked, "Google Chrome 144.█.████.██ at ███.███.█.█");
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Building an engine returns `BrushError` for an invalid mask character or a
//! custom pattern that does not compile. Masking itself never fails.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod decode;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod masking;
pub mod observer;
pub mod patterns;
pub mod registry;
pub mod report;
pub mod stream;

/// Re-exports the configuration type and its defaults.
pub use config::{MaskConfig, DEFAULT_MASK_CHAR};

pub use errors::BrushError;

pub use engine::Masker;
pub use engines::regex_engine::{EngineOptions, MaskingEngine};

pub use masking::{mask_dotted, mask_mac, mask_span, mask_uuid, mask_version, MaskStyle};

pub use observer::{LogObserver, MaskObserver, NoopObserver};

pub use patterns::builtin::BuiltinPattern;
pub use patterns::compiler::{compile_custom_patterns, PatternSource, MAX_PATTERN_LENGTH};
pub use patterns::{Pattern, PatternKind};
pub use registry::PatternRegistry;

pub use report::{MaskReport, PatternSummary};

pub use stream::{pipe, pipe_blocking, MaskStream, StreamStats, DEFAULT_CHUNK_SIZE};

pub use headless::{mask_file, mask_file_to, mask_string};
