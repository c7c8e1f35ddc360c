//! GGUF format constants and lookup tables.
//!
//! Magic number, supported versions, safety ceilings, and the two static
//! tables that turn numeric codes into display names.

use std::borrow::Cow;

/// GGUF magic number (4 bytes): "GGUF".
pub const GGUF_MAGIC: [u8; 4] = *b"GGUF";

/// Container versions with 64-bit counts and string lengths.
pub const SUPPORTED_VERSIONS: std::ops::RangeInclusive<u32> = 2..=3;

/// Largest string length (in bytes) the reader will accept.
pub const MAX_STRING_LEN: u64 = 4 * 1024 * 1024;

/// Largest 64-bit count or length accepted: 2^53 - 1.
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// Metadata key holding the overall quantization scheme.
pub const FILE_TYPE_KEY: &[u8] = b"general.file_type";

/// Modifier bit on `general.file_type`, unrelated to the base scheme.
pub const FILE_TYPE_GUESSED: i64 = 1024;

/// GGML tensor element types, by type id.
pub const GGML_TYPE_NAMES: &[(i32, &str)] = &[
    (0, "F32"),
    (1, "F16"),
    (2, "Q4_0"),
    (3, "Q4_1"),
    (6, "Q5_0"),
    (7, "Q5_1"),
    (8, "Q8_0"),
    (9, "Q8_1"),
    (10, "Q2_K"),
    (11, "Q3_K"),
    (12, "Q4_K"),
    (13, "Q5_K"),
    (14, "Q6_K"),
    (15, "Q8_K"),
    (16, "IQ2_XXS"),
    (17, "IQ2_XS"),
    (18, "IQ3_XXS"),
    (19, "IQ1_S"),
    (20, "IQ4_NL"),
    (21, "IQ3_S"),
    (22, "IQ2_S"),
    (23, "IQ4_XS"),
    (24, "I8"),
    (25, "I16"),
    (26, "I32"),
    (27, "I64"),
    (28, "F64"),
    (29, "IQ1_M"),
    (30, "BF16"),
    (34, "TQ1_0"),
    (35, "TQ2_0"),
    (39, "MXFP4"),
];

/// llama.cpp model file types (`general.file_type`), by id.
pub const FILE_TYPE_NAMES: &[(i64, &str)] = &[
    (0, "ALL_F32"),
    (1, "MOSTLY_F16"),
    (2, "MOSTLY_Q4_0"),
    (3, "MOSTLY_Q4_1"),
    (4, "MOSTLY_Q4_1_SOME_F16"),
    (7, "MOSTLY_Q8_0"),
    (8, "MOSTLY_Q5_0"),
    (9, "MOSTLY_Q5_1"),
    (10, "MOSTLY_Q2_K"),
    (11, "MOSTLY_Q3_K_S"),
    (12, "MOSTLY_Q3_K_M"),
    (13, "MOSTLY_Q3_K_L"),
    (14, "MOSTLY_Q4_K_S"),
    (15, "MOSTLY_Q4_K_M"),
    (16, "MOSTLY_Q5_K_S"),
    (17, "MOSTLY_Q5_K_M"),
    (18, "MOSTLY_Q6_K"),
    (19, "MOSTLY_IQ2_XXS"),
    (20, "MOSTLY_IQ2_XS"),
    (21, "MOSTLY_Q2_K_S"),
    (22, "MOSTLY_IQ3_XS"),
    (23, "MOSTLY_IQ3_XXS"),
    (24, "MOSTLY_IQ1_S"),
    (25, "MOSTLY_IQ4_NL"),
    (26, "MOSTLY_IQ3_S"),
    (27, "MOSTLY_IQ3_M"),
    (28, "MOSTLY_IQ2_S"),
    (29, "MOSTLY_IQ2_M"),
    (30, "MOSTLY_IQ4_XS"),
    (31, "MOSTLY_IQ1_M"),
    (32, "MOSTLY_BF16"),
    (36, "MOSTLY_TQ1_0"),
    (37, "MOSTLY_TQ2_0"),
    (38, "MOSTLY_MXFP4_MOE"),
];

/// Display name for a GGML element type id; unknown ids render `TYPE_<id>`.
pub fn ggml_type_name(type_id: i32) -> Cow<'static, str> {
    GGML_TYPE_NAMES
        .iter()
        .find(|(id, _)| *id == type_id)
        .map_or_else(|| Cow::Owned(format!("TYPE_{type_id}")), |(_, name)| Cow::Borrowed(*name))
}

/// Display name for a `general.file_type` value.
///
/// The guessed-type bit is masked off before the lookup. Unknown ids render
/// `FTYPE_<id>` with the id as stored.
pub fn file_type_name(file_type_id: i64) -> Cow<'static, str> {
    let base = file_type_id & !FILE_TYPE_GUESSED;
    FILE_TYPE_NAMES
        .iter()
        .find(|(id, _)| *id == base)
        .map_or_else(
            || Cow::Owned(format!("FTYPE_{file_type_id}")),
            |(_, name)| Cow::Borrowed(*name),
        )
}
