//! Command handlers.
//!
//! Handlers are thin wrappers that:
//! 1. Call the reader (through `GgufInspectorPort`) or its lookup tables
//! 2. Format output for stdout
//!
//! They take the output writer as an argument so tests can capture it.

pub mod inspect;
pub mod tables;
