//! GGUF inspection result types.
//!
//! This module contains the domain-facing record produced by a metadata
//! scan. Scanning logic lives in `ggscope-gguf`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};

/// Maximum number of metadata key names kept in [`GgufInfo::kv_keys_sample`].
pub const KV_KEYS_SAMPLE_LIMIT: usize = 64;

// =============================================================================
// Attention roles
// =============================================================================

/// Element types of the first attention Query/Key/Value weight tensors.
///
/// Each slot holds the GGML type name of the first tensor whose name matched
/// that role, or `None` when no tensor matched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QkvTypes {
    pub q: Option<String>,
    pub k: Option<String>,
    pub v: Option<String>,
}

/// Serialize a path as a JSON string. Non-UTF-8 bytes become U+FFFD.
pub(crate) fn serialize_path_lossy<P, S>(path: &P, serializer: S) -> Result<S::Ok, S::Error>
where
    P: AsRef<Path>,
    S: Serializer,
{
    serializer.serialize_str(&path.as_ref().to_string_lossy())
}

// =============================================================================
// Scan result
// =============================================================================

/// Metadata summary of a single GGUF file.
///
/// Built once per scan and never mutated afterwards. Tensor payload bytes
/// are never read to produce it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GgufInfo {
    /// Path the scan was asked to read (echoed back verbatim).
    #[serde(serialize_with = "serialize_path_lossy")]
    pub file_path: PathBuf,
    /// Container format version from the header.
    pub gguf_version: u32,
    /// Raw `general.file_type` value, when present as a 32-bit integer.
    pub file_type_id: Option<i64>,
    /// Human-readable quantization scheme for `file_type_id`.
    pub file_type_name: Option<String>,
    /// Tensor count per GGML element type name.
    pub tensor_types: BTreeMap<String, u64>,
    /// First-seen element types of the attention Q/K/V weights.
    pub qkv: QkvTypes,
    /// The first [`KV_KEYS_SAMPLE_LIMIT`] metadata keys, in file order.
    pub kv_keys_sample: Vec<String>,
}

impl GgufInfo {
    /// Path the scan was asked to read.
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Total number of tensors tallied across all element types.
    pub fn tensor_count(&self) -> u64 {
        self.tensor_types.values().sum()
    }

    /// Element type shared by most tensors, ties broken by name order.
    pub fn dominant_tensor_type(&self) -> Option<&str> {
        self.tensor_types
            .iter()
            .fold(None, |best: Option<(&String, u64)>, (name, &count)| match best {
                Some((_, best_count)) if best_count >= count => best,
                _ => Some((name, count)),
            })
            .map(|(name, _)| name.as_str())
    }
}
