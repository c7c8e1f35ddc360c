//! Tensor directory scanning and classification.
//!
//! Each descriptor is read in full (name, dimensions, element type, payload
//! offset) so the cursor stays aligned, but only the name and element type
//! are kept. The payload itself is never touched.

use std::collections::BTreeMap;
use std::io::{Read, Seek};

use ggscope_core::QkvTypes;

use crate::cursor::ByteCursor;
use crate::error::GgufResult;
use crate::format::ggml_type_name;

/// Name patterns (lowercase substrings) for the attention Query weight.
const QUERY_PATTERNS: &[&str] = &["attn_q", "q_proj", "wq", "query"];
/// Name patterns (lowercase substrings) for the attention Key weight.
const KEY_PATTERNS: &[&str] = &["attn_k", "k_proj", "wk", "key"];
/// Name patterns (lowercase substrings) for the attention Value weight.
const VALUE_PATTERNS: &[&str] = &["attn_v", "v_proj", "wv", "value"];

/// The parts of a tensor descriptor kept after it is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TensorDescriptor {
    pub name: String,
    pub ggml_type: i32,
}

/// Attention weight role inferred from a tensor name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttentionRole {
    Query,
    Key,
    Value,
}

impl AttentionRole {
    const fn patterns(self) -> &'static [&'static str] {
        match self {
            Self::Query => QUERY_PATTERNS,
            Self::Key => KEY_PATTERNS,
            Self::Value => VALUE_PATTERNS,
        }
    }

    /// Whether a lowercased tensor name matches this role.
    fn matches(self, lowercase_name: &str) -> bool {
        self.patterns()
            .iter()
            .any(|pattern| lowercase_name.contains(pattern))
    }
}

/// Running per-type counts and first-seen Q/K/V element types.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TensorTally {
    pub tensor_types: BTreeMap<String, u64>,
    pub qkv: QkvTypes,
}

impl TensorTally {
    /// Count one tensor and fill at most one unresolved attention role.
    ///
    /// Roles are checked in Q, K, V order; a role that is already filled is
    /// passed over so a later role can still claim this tensor.
    pub fn record(&mut self, descriptor: &TensorDescriptor) {
        let type_name = ggml_type_name(descriptor.ggml_type).into_owned();
        *self.tensor_types.entry(type_name.clone()).or_insert(0) += 1;

        let name = descriptor.name.to_lowercase();
        if self.qkv.q.is_none() && AttentionRole::Query.matches(&name) {
            self.qkv.q = Some(type_name);
        } else if self.qkv.k.is_none() && AttentionRole::Key.matches(&name) {
            self.qkv.k = Some(type_name);
        } else if self.qkv.v.is_none() && AttentionRole::Value.matches(&name) {
            self.qkv.v = Some(type_name);
        }
    }
}

/// Read one tensor descriptor, consuming its dimensions and payload offset.
pub fn read_descriptor<R: Read + Seek>(
    cursor: &mut ByteCursor<R>,
) -> GgufResult<TensorDescriptor> {
    let name = cursor.read_string_lossy()?;

    let n_dims = cursor.read_u32_le()?;
    for _ in 0..n_dims {
        cursor.read_u64_le()?;
    }

    let ggml_type = cursor.read_i32_le()?;
    let _offset = cursor.read_u64_le()?;

    Ok(TensorDescriptor { name, ggml_type })
}

/// Walk `tensor_count` descriptors into `tally`.
pub fn scan_tensors<R: Read + Seek>(
    cursor: &mut ByteCursor<R>,
    tensor_count: u64,
    tally: &mut TensorTally,
) -> GgufResult<()> {
    for _ in 0..tensor_count {
        let descriptor = read_descriptor(cursor)?;
        tally.record(&descriptor);
    }
    Ok(())
}
