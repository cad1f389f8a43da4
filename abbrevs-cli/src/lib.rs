//! Abbrevs CLI library
//!
//! This library provides the command-line interface for querying the
//! per-language abbreviation token lists.

pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use error::{CliError, CliResult};
