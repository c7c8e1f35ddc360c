//! GGUF inspector implementation.
//!
//! This module drives the scan (header, metadata section, tensor directory,
//! aggregation) and provides `GgufInspector`, the implementation of the
//! `GgufInspectorPort` trait from `ggscope-core`.

use std::io::{Read, Seek};
use std::path::Path;

use ggscope_core::{GgufError, GgufErrorKind, GgufInfo, GgufInspectorPort, GgufStage};
use tracing::{debug, warn};

use crate::aggregate::assemble;
use crate::cursor::ByteCursor;
use crate::error::GgufInternalError;
use crate::metadata::{MetadataSummary, read_header, scan_metadata};
use crate::tensors::{TensorTally, scan_tensors};

/// GGUF metadata inspector.
///
/// Stateless: every call opens its own file handle and cursor, so one
/// instance can serve concurrent callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct GgufInspector;

impl GgufInspector {
    /// Create a new inspector.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl GgufInspectorPort for GgufInspector {
    fn inspect(&self, path: &Path) -> Result<GgufInfo, GgufError> {
        read_gguf_info(path)
    }
}

/// Read the metadata summary of the GGUF file at `path`.
///
/// Reads the header, the KV section and the tensor directory, never the
/// tensor payload. The file is closed before this returns, on success and
/// on every error path.
pub fn read_gguf_info(path: impl AsRef<Path>) -> Result<GgufInfo, GgufError> {
    let path = path.as_ref();
    let cursor = ByteCursor::open(path).map_err(|e| failure(path, GgufStage::Open, e))?;
    scan(cursor, path)
}

/// Scan GGUF data from any seekable source.
///
/// `path` is only echoed into the result or error.
pub fn scan_gguf<R: Read + Seek>(
    source: R,
    path: impl AsRef<Path>,
) -> Result<GgufInfo, GgufError> {
    let path = path.as_ref();
    let cursor = ByteCursor::new(source).map_err(|e| failure(path, GgufStage::Open, e))?;
    scan(cursor, path)
}

fn scan<R: Read + Seek>(mut cursor: ByteCursor<R>, path: &Path) -> Result<GgufInfo, GgufError> {
    let header = read_header(&mut cursor).map_err(|e| failure(path, GgufStage::Header, e))?;
    debug!(
        target: "ggscope.gguf",
        path = %path.display(),
        version = header.version,
        tensor_count = header.tensor_count,
        kv_count = header.kv_count,
        "Read GGUF header"
    );

    let mut metadata = MetadataSummary::default();
    scan_metadata(&mut cursor, header.kv_count, &mut metadata)
        .map_err(|e| failure(path, GgufStage::Metadata, e))?;
    debug!(
        target: "ggscope.gguf",
        offset = cursor.offset(),
        file_type_id = ?metadata.file_type_id,
        "Scanned metadata section"
    );

    let mut tally = TensorTally::default();
    scan_tensors(&mut cursor, header.tensor_count, &mut tally)
        .map_err(|e| failure(path, GgufStage::TensorDirectory, e))?;
    debug!(
        target: "ggscope.gguf",
        offset = cursor.offset(),
        distinct_types = tally.tensor_types.len(),
        "Scanned tensor directory"
    );

    Ok(assemble(path, &header, metadata, tally))
}

fn failure(path: &Path, stage: GgufStage, err: GgufInternalError) -> GgufError {
    let err = GgufError::new(path, stage, GgufErrorKind::from(err));
    warn!(
        target: "ggscope.gguf",
        path = %path.display(),
        stage = %stage,
        error = %err.kind,
        "GGUF scan failed"
    );
    err
}
