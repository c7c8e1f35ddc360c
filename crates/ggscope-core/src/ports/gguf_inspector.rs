//! GGUF inspector port definition.
//!
//! This port abstracts reading GGUF metadata, so transports (CLI, HTTP,
//! desktop IPC) depend on the trait and the composition root injects the
//! concrete reader.
//!
//! # Design
//!
//! - The result record (`GgufInfo`) is defined in `domain::gguf`
//! - This port defines the trait and the error taxonomy
//! - The implementation lives in the `ggscope-gguf` crate

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub use crate::domain::gguf::GgufInfo;

/// What went wrong while scanning a GGUF file.
///
/// Every kind is terminal: a scan stops at the first error and never
/// returns partial results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GgufErrorKind {
    /// The path does not exist or cannot be opened for reading.
    #[error("file not found or unreadable: {0}")]
    NotFound(String),

    /// The first four bytes are not `GGUF`.
    #[error("not a GGUF file (magic bytes {0:02x?})")]
    BadMagic([u8; 4]),

    /// The header declares a container version this reader cannot walk.
    #[error("unsupported GGUF version {0}")]
    UnsupportedVersion(u32),

    /// A read or skip ran past the end of the file.
    #[error(
        "unexpected end of file: needed {requested} bytes at offset {offset}, {available} available"
    )]
    UnexpectedEof {
        offset: u64,
        requested: u64,
        available: u64,
    },

    /// A 64-bit count or length is too large to be handled safely.
    #[error("integer value {0} exceeds the safe range for counts and lengths")]
    IntegerOverflow(u64),

    /// A declared string length is above the safety ceiling.
    #[error("string of {length} bytes exceeds the {limit} byte limit")]
    StringTooLarge { length: u64, limit: u64 },

    /// A value type code is unknown, or an array nests another array.
    #[error("unsupported value type: {0}")]
    UnsupportedValueType(String),

    /// Any other I/O failure.
    #[error("I/O error: {0}")]
    Io(String),
}

/// The scanning stage that was running when an error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GgufStage {
    /// Opening the file.
    Open,
    /// Magic, version and section counts.
    Header,
    /// The key/value metadata section.
    Metadata,
    /// The tensor descriptor directory.
    TensorDirectory,
}

impl fmt::Display for GgufStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Open => "open",
            Self::Header => "header",
            Self::Metadata => "metadata",
            Self::TensorDirectory => "tensor directory",
        };
        f.write_str(name)
    }
}

/// A failed scan: the file that was being read, where, and why.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}: {kind} (while reading {stage})", .path.display())]
pub struct GgufError {
    pub path: PathBuf,
    pub stage: GgufStage,
    #[source]
    pub kind: GgufErrorKind,
}

impl GgufError {
    pub fn new(path: impl Into<PathBuf>, stage: GgufStage, kind: GgufErrorKind) -> Self {
        Self {
            path: path.into(),
            stage,
            kind,
        }
    }

    /// Path of the file that failed to scan.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The error kind without the path wrapper.
    pub const fn kind(&self) -> &GgufErrorKind {
        &self.kind
    }
}

/// Port for reading GGUF metadata.
///
/// # Port Signature Rules
///
/// - All types in signatures are from `ggscope-core`
/// - No `ggscope-gguf` symbols appear in signatures
/// - Implementations must be safe to call concurrently; each call is
///   independent and shares no state with any other
pub trait GgufInspectorPort: Send + Sync {
    /// Read the header, metadata and tensor directory of a GGUF file.
    ///
    /// Blocks on file I/O. Async callers should run it on a blocking
    /// worker.
    fn inspect(&self, path: &Path) -> Result<GgufInfo, GgufError>;
}
