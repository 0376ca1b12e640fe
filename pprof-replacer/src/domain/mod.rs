//! Domain model for pprof-replacer
//!
//! This module contains the core domain types and errors:
//! - The replacement request passed through the pipeline
//! - Structured error handling shared by every stage

pub mod errors;
pub mod types;

pub use errors::ReplacerError;
pub use types::Replacement;
