// privacy-brush/src/lib.rs
//! # privacy-brush CLI
//!
//! Command-line front end for `privacy-brush-core`. Reads terminal output from
//! stdin or a file, masks identifying details and writes the result to stdout
//! or a file.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
