//! Internal error types for GGUF scanning.
//!
//! These errors carry the low-level detail (raw type codes, the source
//! `io::Error`) and convert to `GgufErrorKind` from `ggscope-core` for the
//! port API, where the path and failing stage are attached.

use std::io;

use ggscope_core::GgufErrorKind;
use thiserror::Error;

/// Internal errors that can occur while scanning a GGUF file.
#[derive(Debug, Error)]
pub enum GgufInternalError {
    /// The file does not exist or cannot be opened.
    #[error("file not found: {0}")]
    FileNotFound(String),

    /// The file does not start with the GGUF magic number.
    #[error("invalid GGUF magic {0:02x?}")]
    InvalidMagic([u8; 4]),

    /// The header version is outside the supported range.
    #[error("unsupported GGUF version: {0}")]
    UnsupportedVersion(u32),

    /// A read or skip would run past the end of the source.
    #[error("unexpected end of file at offset {offset} (wanted {requested}, have {available})")]
    UnexpectedEof {
        offset: u64,
        requested: u64,
        available: u64,
    },

    /// A 64-bit count or length cannot be represented safely.
    #[error("integer overflow: {0}")]
    IntegerOverflow(u64),

    /// A declared string length is above the safety ceiling.
    #[error("string too large: {length} bytes (limit {limit})")]
    StringTooLarge { length: u64, limit: u64 },

    /// An unknown value type code.
    #[error("unknown GGUF value type: {0}")]
    InvalidValueType(u32),

    /// An array whose element type is itself an array.
    #[error("nested arrays are not supported")]
    NestedArray,

    /// An I/O error other than not-found or end-of-file.
    #[error("I/O error: {0}")]
    Io(#[source] io::Error),
}

impl From<io::Error> for GgufInternalError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
                Self::FileNotFound(err.to_string())
            }
            _ => Self::Io(err),
        }
    }
}

/// Convert internal errors to the domain-facing error kind.
impl From<GgufInternalError> for GgufErrorKind {
    fn from(err: GgufInternalError) -> Self {
        match err {
            GgufInternalError::FileNotFound(msg) => Self::NotFound(msg),
            GgufInternalError::InvalidMagic(magic) => Self::BadMagic(magic),
            GgufInternalError::UnsupportedVersion(v) => Self::UnsupportedVersion(v),
            GgufInternalError::UnexpectedEof {
                offset,
                requested,
                available,
            } => Self::UnexpectedEof {
                offset,
                requested,
                available,
            },
            GgufInternalError::IntegerOverflow(v) => Self::IntegerOverflow(v),
            GgufInternalError::StringTooLarge { length, limit } => {
                Self::StringTooLarge { length, limit }
            }
            GgufInternalError::InvalidValueType(t) => {
                Self::UnsupportedValueType(format!("unknown type code {t}"))
            }
            GgufInternalError::NestedArray => {
                Self::UnsupportedValueType("array of arrays".to_string())
            }
            GgufInternalError::Io(e) => Self::Io(e.to_string()),
        }
    }
}

/// Result type for internal GGUF operations.
pub type GgufResult<T> = Result<T, GgufInternalError>;
