//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (filesystem, transports).
//!
//! # Structure
//!
//! - `gguf` - GGUF inspection result types

pub mod gguf;

pub use gguf::{GgufInfo, KV_KEYS_SAMPLE_LIMIT, QkvTypes};
