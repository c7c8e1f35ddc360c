//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that transports expect from infrastructure.
//! They contain no implementation details and use only domain types.

pub mod gguf_inspector;

pub use gguf_inspector::{GgufError, GgufErrorKind, GgufInspectorPort, GgufStage};
