//! Transport contract for GGUF inspection results.
//!
//! Every transport (CLI, HTTP endpoint, desktop IPC) relays the same JSON
//! envelope, so it is defined once here with no framework-specific types.
//!
//! Success:
//!
//! ```json
//! { "ok": true, "filePath": "...", "ggufVersion": 3, "fileTypeId": 15,
//!   "fileTypeName": "MOSTLY_Q4_K_M", "tensorTypes": { "Q4_K": 193 },
//!   "qkv": { "q": "Q4_K", "k": "Q4_K", "v": "Q6_K" }, "kvKeysSample": [] }
//! ```
//!
//! Failure:
//!
//! ```json
//! { "ok": false, "filePath": "...", "error": "..." }
//! ```

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::gguf::{GgufInfo, serialize_path_lossy};
use crate::ports::gguf_inspector::GgufError;

/// JSON envelope for one inspection result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum GgufInfoResponse {
    Success(GgufInfoSuccess),
    Failure(GgufInfoFailure),
}

/// Successful inspection: `ok: true` plus every `GgufInfo` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GgufInfoSuccess {
    ok: bool,
    #[serde(flatten)]
    pub info: GgufInfo,
}

/// Failed inspection: `ok: false`, the requested path and a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GgufInfoFailure {
    ok: bool,
    #[serde(serialize_with = "serialize_path_lossy")]
    pub file_path: PathBuf,
    pub error: String,
}

impl GgufInfoResponse {
    /// Failure envelope for errors raised outside the scan itself
    /// (for example a caller-side timeout).
    pub fn failure(file_path: impl Into<PathBuf>, error: impl Into<String>) -> Self {
        Self::Failure(GgufInfoFailure {
            ok: false,
            file_path: file_path.into(),
            error: error.into(),
        })
    }

    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

impl From<GgufInfo> for GgufInfoResponse {
    fn from(info: GgufInfo) -> Self {
        Self::Success(GgufInfoSuccess { ok: true, info })
    }
}

impl From<GgufError> for GgufInfoResponse {
    fn from(err: GgufError) -> Self {
        let error = err.kind.to_string();
        Self::failure(err.path, error)
    }
}

impl From<Result<GgufInfo, GgufError>> for GgufInfoResponse {
    fn from(result: Result<GgufInfo, GgufError>) -> Self {
        match result {
            Ok(info) => info.into(),
            Err(err) => err.into(),
        }
    }
}
