//! Header and key/value metadata scanning.
//!
//! Validates the magic and version, reads the section counts, then walks
//! every KV entry. Only `general.file_type` is decoded; every other value
//! is skipped structurally. On success the cursor sits at the first tensor
//! descriptor.

use std::io::{Read, Seek};

use ggscope_core::KV_KEYS_SAMPLE_LIMIT;

use crate::cursor::ByteCursor;
use crate::error::{GgufInternalError, GgufResult};
use crate::format::{FILE_TYPE_KEY, GGUF_MAGIC, SUPPORTED_VERSIONS};

/// Fixed-size GGUF header fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GgufHeader {
    pub version: u32,
    pub tensor_count: u64,
    pub kv_count: u64,
}

/// What the metadata scan keeps from the KV section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataSummary {
    /// `general.file_type`, when stored as UINT32 or INT32.
    pub file_type_id: Option<i64>,
    /// The first [`KV_KEYS_SAMPLE_LIMIT`] keys, in file order.
    pub kv_keys_sample: Vec<String>,
}

impl MetadataSummary {
    fn record_key(&mut self, key: &[u8]) {
        if self.kv_keys_sample.len() < KV_KEYS_SAMPLE_LIMIT {
            self.kv_keys_sample
                .push(String::from_utf8_lossy(key).into_owned());
        }
    }
}

/// Read and validate the magic, version and section counts.
pub fn read_header<R: Read + Seek>(cursor: &mut ByteCursor<R>) -> GgufResult<GgufHeader> {
    let magic: [u8; 4] = cursor.read_array()?;
    if magic != GGUF_MAGIC {
        return Err(GgufInternalError::InvalidMagic(magic));
    }

    let version = cursor.read_u32_le()?;
    if !SUPPORTED_VERSIONS.contains(&version) {
        return Err(GgufInternalError::UnsupportedVersion(version));
    }

    let tensor_count = cursor.read_u64_le()?;
    let kv_count = cursor.read_u64_le()?;

    Ok(GgufHeader {
        version,
        tensor_count,
        kv_count,
    })
}

/// Walk `kv_count` metadata entries, filling `summary` as it goes.
///
/// `summary` is updated entry by entry, so on error it reflects every entry
/// that was fully consumed before the failure.
pub fn scan_metadata<R: Read + Seek>(
    cursor: &mut ByteCursor<R>,
    kv_count: u64,
    summary: &mut MetadataSummary,
) -> GgufResult<()> {
    for _ in 0..kv_count {
        let key = cursor.read_string_bytes()?;
        let value_type = cursor.read_value_type()?;

        let decoded = if key == FILE_TYPE_KEY {
            cursor.read_i32_value(value_type)?
        } else {
            None
        };

        match decoded {
            Some(id) => summary.file_type_id = Some(id),
            None => cursor.skip_value(value_type)?,
        }

        summary.record_key(&key);
    }
    Ok(())
}
