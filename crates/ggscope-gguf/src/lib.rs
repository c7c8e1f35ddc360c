#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

// Dev-dependency used only by the integration tests
#[cfg(test)]
use serde_json as _;

mod aggregate;
mod cursor;
mod error;
mod format;
mod metadata;
mod parser;
mod tensors;
mod value;

// =============================================================================
// Public API: entry points + core re-exports (minimal surface)
// =============================================================================

/// The inspector and its free-function entry points.
pub use parser::{GgufInspector, read_gguf_info, scan_gguf};

/// Lookup tables and format constants, for diagnostics and display.
pub use format::{
    FILE_TYPE_GUESSED, FILE_TYPE_NAMES, GGML_TYPE_NAMES, MAX_SAFE_INTEGER, MAX_STRING_LEN,
    file_type_name, ggml_type_name,
};

// Re-export domain types and port from core for convenience
pub use ggscope_core::{
    GgufError, GgufErrorKind, GgufInfo, GgufInfoResponse, GgufInspectorPort, GgufStage,
    QkvTypes,
};
