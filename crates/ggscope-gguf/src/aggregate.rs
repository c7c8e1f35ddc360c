//! Result aggregation.
//!
//! Folds the header, metadata summary and tensor tally into the immutable
//! `GgufInfo` record.

use std::path::Path;

use ggscope_core::GgufInfo;

use crate::format::file_type_name;
use crate::metadata::{GgufHeader, MetadataSummary};
use crate::tensors::TensorTally;

/// Build the final record for a fully scanned file.
pub fn assemble(
    path: &Path,
    header: &GgufHeader,
    metadata: MetadataSummary,
    tally: TensorTally,
) -> GgufInfo {
    let file_type_name = metadata
        .file_type_id
        .map(|id| file_type_name(id).into_owned());

    GgufInfo {
        file_path: path.to_path_buf(),
        gguf_version: header.version,
        file_type_id: metadata.file_type_id,
        file_type_name,
        tensor_types: tally.tensor_types,
        qkv: tally.qkv,
        kv_keys_sample: metadata.kv_keys_sample,
    }
}
