#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

pub mod contracts;
pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use contracts::{GgufInfoFailure, GgufInfoResponse, GgufInfoSuccess};
pub use domain::{GgufInfo, KV_KEYS_SAMPLE_LIMIT, QkvTypes};
pub use ports::{GgufError, GgufErrorKind, GgufInspectorPort, GgufStage};
