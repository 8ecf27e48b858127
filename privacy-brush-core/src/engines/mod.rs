// privacy-brush-core/src/engines/mod.rs
//! Concrete `Masker` implementations.
//!
//! # License
//! MIT OR APACHE 2.0

pub mod regex_engine;
