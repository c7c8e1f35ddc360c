//! Synthetic GGUF file builder for integration tests.
//!
//! Produces header + KV section + tensor directory, optionally followed by
//! payload bytes that the reader must never need.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

pub const UINT8: u32 = 0;
pub const INT8: u32 = 1;
pub const UINT16: u32 = 2;
pub const INT16: u32 = 3;
pub const UINT32: u32 = 4;
pub const INT32: u32 = 5;
pub const FLOAT32: u32 = 6;
pub const BOOL: u32 = 7;
pub const STRING: u32 = 8;
pub const ARRAY: u32 = 9;
pub const UINT64: u32 = 10;
pub const INT64: u32 = 11;
pub const FLOAT64: u32 = 12;

fn encode_string(out: &mut Vec<u8>, s: &str) {
    out.extend_from_slice(&(s.len() as u64).to_le_bytes());
    out.extend_from_slice(s.as_bytes());
}

/// Builder for in-memory GGUF images.
#[derive(Debug, Clone)]
pub struct GgufBuilder {
    version: u32,
    kv_count: Option<u64>,
    tensor_count: Option<u64>,
    kvs: Vec<Vec<u8>>,
    tensors: Vec<Vec<u8>>,
    payload: Vec<u8>,
}

impl Default for GgufBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GgufBuilder {
    pub fn new() -> Self {
        Self {
            version: 3,
            kv_count: None,
            tensor_count: None,
            kvs: Vec::new(),
            tensors: Vec::new(),
            payload: Vec::new(),
        }
    }

    pub fn version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    /// Override the KV count written in the header.
    pub fn declared_kv_count(mut self, count: u64) -> Self {
        self.kv_count = Some(count);
        self
    }

    /// Override the tensor count written in the header.
    pub fn declared_tensor_count(mut self, count: u64) -> Self {
        self.tensor_count = Some(count);
        self
    }

    /// Add a KV entry with an arbitrary type code and pre-encoded value.
    pub fn kv_raw(mut self, key: &str, type_code: u32, value: &[u8]) -> Self {
        let mut entry = Vec::new();
        encode_string(&mut entry, key);
        entry.extend_from_slice(&type_code.to_le_bytes());
        entry.extend_from_slice(value);
        self.kvs.push(entry);
        self
    }

    pub fn kv_u8(self, key: &str, value: u8) -> Self {
        self.kv_raw(key, UINT8, &[value])
    }

    pub fn kv_bool(self, key: &str, value: bool) -> Self {
        self.kv_raw(key, BOOL, &[u8::from(value)])
    }

    pub fn kv_u32(self, key: &str, value: u32) -> Self {
        self.kv_raw(key, UINT32, &value.to_le_bytes())
    }

    pub fn kv_i32(self, key: &str, value: i32) -> Self {
        self.kv_raw(key, INT32, &value.to_le_bytes())
    }

    pub fn kv_f32(self, key: &str, value: f32) -> Self {
        self.kv_raw(key, FLOAT32, &value.to_le_bytes())
    }

    pub fn kv_u64(self, key: &str, value: u64) -> Self {
        self.kv_raw(key, UINT64, &value.to_le_bytes())
    }

    pub fn kv_f64(self, key: &str, value: f64) -> Self {
        self.kv_raw(key, FLOAT64, &value.to_le_bytes())
    }

    pub fn kv_string(self, key: &str, value: &str) -> Self {
        let mut encoded = Vec::new();
        encode_string(&mut encoded, value);
        self.kv_raw(key, STRING, &encoded)
    }

    /// Add a string whose declared length differs from the bytes written.
    pub fn kv_string_declared(self, key: &str, declared_len: u64, bytes: &[u8]) -> Self {
        let mut encoded = declared_len.to_le_bytes().to_vec();
        encoded.extend_from_slice(bytes);
        self.kv_raw(key, STRING, &encoded)
    }

    pub fn kv_string_array(self, key: &str, values: &[&str]) -> Self {
        let mut encoded = STRING.to_le_bytes().to_vec();
        encoded.extend_from_slice(&(values.len() as u64).to_le_bytes());
        for value in values {
            encode_string(&mut encoded, value);
        }
        self.kv_raw(key, ARRAY, &encoded)
    }

    pub fn kv_f32_array(self, key: &str, values: &[f32]) -> Self {
        let mut encoded = FLOAT32.to_le_bytes().to_vec();
        encoded.extend_from_slice(&(values.len() as u64).to_le_bytes());
        for value in values {
            encoded.extend_from_slice(&value.to_le_bytes());
        }
        self.kv_raw(key, ARRAY, &encoded)
    }

    pub fn kv_i32_array(self, key: &str, values: &[i32]) -> Self {
        let mut encoded = INT32.to_le_bytes().to_vec();
        encoded.extend_from_slice(&(values.len() as u64).to_le_bytes());
        for value in values {
            encoded.extend_from_slice(&value.to_le_bytes());
        }
        self.kv_raw(key, ARRAY, &encoded)
    }

    /// Add an array header with no elements following it.
    pub fn kv_array_header(self, key: &str, element_type: u32, count: u64) -> Self {
        let mut encoded = element_type.to_le_bytes().to_vec();
        encoded.extend_from_slice(&count.to_le_bytes());
        self.kv_raw(key, ARRAY, &encoded)
    }

    pub fn tensor(mut self, name: &str, dims: &[u64], ggml_type: i32, offset: u64) -> Self {
        let mut entry = Vec::new();
        encode_string(&mut entry, name);
        entry.extend_from_slice(&u32::try_from(dims.len()).unwrap().to_le_bytes());
        for dim in dims {
            entry.extend_from_slice(&dim.to_le_bytes());
        }
        entry.extend_from_slice(&ggml_type.to_le_bytes());
        entry.extend_from_slice(&offset.to_le_bytes());
        self.tensors.push(entry);
        self
    }

    /// Bytes appended after the tensor directory.
    pub fn payload(mut self, payload: Vec<u8>) -> Self {
        self.payload = payload;
        self
    }

    /// Length of header + KV section + tensor directory.
    pub fn directory_len(&self) -> usize {
        24 + self.kvs.iter().map(Vec::len).sum::<usize>()
            + self.tensors.iter().map(Vec::len).sum::<usize>()
    }

    pub fn build(&self) -> Vec<u8> {
        let mut out = b"GGUF".to_vec();
        out.extend_from_slice(&self.version.to_le_bytes());
        let tensor_count = self.tensor_count.unwrap_or(self.tensors.len() as u64);
        let kv_count = self.kv_count.unwrap_or(self.kvs.len() as u64);
        out.extend_from_slice(&tensor_count.to_le_bytes());
        out.extend_from_slice(&kv_count.to_le_bytes());
        for kv in &self.kvs {
            out.extend_from_slice(kv);
        }
        for tensor in &self.tensors {
            out.extend_from_slice(tensor);
        }
        out.extend_from_slice(&self.payload);
        out
    }

    /// Write the image to `dir/name` and return the path.
    pub fn write_to(&self, dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, self.build()).unwrap();
        path
    }
}

/// A small but realistic llama-style model image.
pub fn llama_like() -> GgufBuilder {
    let mut builder = GgufBuilder::new()
        .kv_string("general.architecture", "llama")
        .kv_string("general.name", "TinyLlama")
        .kv_u32("llama.context_length", 2048)
        .kv_u32("llama.embedding_length", 64)
        .kv_u32("llama.block_count", 2)
        .kv_f32("llama.attention.layer_norm_rms_epsilon", 1e-5)
        .kv_u32("general.file_type", 15)
        .kv_string("tokenizer.ggml.model", "llama")
        .kv_string_array("tokenizer.ggml.tokens", &["<unk>", "<s>", "</s>", "hello"])
        .kv_f32_array("tokenizer.ggml.scores", &[0.0, 0.0, 0.0, -1.5])
        .kv_i32_array("tokenizer.ggml.token_type", &[2, 3, 3, 1])
        .kv_bool("tokenizer.ggml.add_bos_token", true)
        .kv_u64("general.parameter_count", 1_100_000_000)
        .kv_f64("general.some_float", 0.25)
        .kv_u8("general.quantization_version", 2)
        .tensor("token_embd.weight", &[64, 32000], 12, 0)
        .tensor("output_norm.weight", &[64], 0, 1_000_000);

    for block in 0..2 {
        builder = builder
            .tensor(&format!("blk.{block}.attn_norm.weight"), &[64], 0, 0)
            .tensor(&format!("blk.{block}.attn_q.weight"), &[64, 64], 12, 0)
            .tensor(&format!("blk.{block}.attn_k.weight"), &[64, 64], 12, 0)
            .tensor(&format!("blk.{block}.attn_v.weight"), &[64, 64], 14, 0)
            .tensor(&format!("blk.{block}.attn_output.weight"), &[64, 64], 12, 0)
            .tensor(&format!("blk.{block}.ffn_down.weight"), &[172, 64], 14, 0)
            .tensor(&format!("blk.{block}.ffn_up.weight"), &[64, 172], 12, 0);
    }

    builder
        .tensor("output.weight", &[64, 32000], 14, 0)
        .payload(vec![0xA5; 4096])
}
