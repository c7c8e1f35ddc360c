//! GGUF metadata value types and the value decoder.
//!
//! The decoder either decodes a value (strings, and the 32-bit integers used
//! for `general.file_type`) or skips it. Either way the cursor ends exactly
//! at the start of whatever follows the value.

use std::fmt;
use std::io::{Read, Seek};

use crate::cursor::ByteCursor;
use crate::error::{GgufInternalError, GgufResult};
use crate::format::{MAX_SAFE_INTEGER, MAX_STRING_LEN};

/// The 13 GGUF metadata value type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    UInt8,
    Int8,
    UInt16,
    Int16,
    UInt32,
    Int32,
    Float32,
    Bool,
    String,
    Array,
    UInt64,
    Int64,
    Float64,
}

/// How a value of a given type is laid out on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueLayout {
    /// Fixed number of bytes.
    Fixed(u64),
    /// u64 length prefix followed by that many bytes.
    String,
    /// u32 element type, u64 count, then the elements.
    Array,
}

impl ValueType {
    /// On-disk layout of this type.
    pub const fn layout(self) -> ValueLayout {
        match self {
            Self::UInt8 | Self::Int8 | Self::Bool => ValueLayout::Fixed(1),
            Self::UInt16 | Self::Int16 => ValueLayout::Fixed(2),
            Self::UInt32 | Self::Int32 | Self::Float32 => ValueLayout::Fixed(4),
            Self::UInt64 | Self::Int64 | Self::Float64 => ValueLayout::Fixed(8),
            Self::String => ValueLayout::String,
            Self::Array => ValueLayout::Array,
        }
    }

    /// Numeric type code as stored in the file.
    #[cfg(test)]
    pub const fn code(self) -> u32 {
        match self {
            Self::UInt8 => 0,
            Self::Int8 => 1,
            Self::UInt16 => 2,
            Self::Int16 => 3,
            Self::UInt32 => 4,
            Self::Int32 => 5,
            Self::Float32 => 6,
            Self::Bool => 7,
            Self::String => 8,
            Self::Array => 9,
            Self::UInt64 => 10,
            Self::Int64 => 11,
            Self::Float64 => 12,
        }
    }
}

impl TryFrom<u32> for ValueType {
    type Error = GgufInternalError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::UInt8),
            1 => Ok(Self::Int8),
            2 => Ok(Self::UInt16),
            3 => Ok(Self::Int16),
            4 => Ok(Self::UInt32),
            5 => Ok(Self::Int32),
            6 => Ok(Self::Float32),
            7 => Ok(Self::Bool),
            8 => Ok(Self::String),
            9 => Ok(Self::Array),
            10 => Ok(Self::UInt64),
            11 => Ok(Self::Int64),
            12 => Ok(Self::Float64),
            _ => Err(GgufInternalError::InvalidValueType(code)),
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::UInt8 => "UINT8",
            Self::Int8 => "INT8",
            Self::UInt16 => "UINT16",
            Self::Int16 => "INT16",
            Self::UInt32 => "UINT32",
            Self::Int32 => "INT32",
            Self::Float32 => "FLOAT32",
            Self::Bool => "BOOL",
            Self::String => "STRING",
            Self::Array => "ARRAY",
            Self::UInt64 => "UINT64",
            Self::Int64 => "INT64",
            Self::Float64 => "FLOAT64",
        };
        f.write_str(name)
    }
}

impl<R: Read + Seek> ByteCursor<R> {
    /// Read a value type tag.
    pub fn read_value_type(&mut self) -> GgufResult<ValueType> {
        ValueType::try_from(self.read_u32_le()?)
    }

    fn read_string_len(&mut self) -> GgufResult<u64> {
        let length = self.read_u64_le()?;
        if length > MAX_STRING_LEN {
            return Err(GgufInternalError::StringTooLarge {
                length,
                limit: MAX_STRING_LEN,
            });
        }
        Ok(length)
    }

    /// Read a length-prefixed string as raw bytes.
    pub fn read_string_bytes(&mut self) -> GgufResult<Vec<u8>> {
        let length = self.read_string_len()?;
        self.read_exact(length)
    }

    /// Read a length-prefixed string, replacing invalid UTF-8.
    pub fn read_string_lossy(&mut self) -> GgufResult<String> {
        let bytes = self.read_string_bytes()?;
        Ok(String::from_utf8(bytes)
            .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned()))
    }

    /// Skip a length-prefixed string.
    pub fn skip_string(&mut self) -> GgufResult<()> {
        let length = self.read_string_len()?;
        self.skip(length)
    }

    /// Decode a 32-bit integer value, if `value_type` is one.
    ///
    /// Returns `None` without consuming anything for any other type.
    pub fn read_i32_value(&mut self, value_type: ValueType) -> GgufResult<Option<i64>> {
        match value_type {
            ValueType::UInt32 => Ok(Some(i64::from(self.read_u32_le()?))),
            ValueType::Int32 => Ok(Some(i64::from(self.read_i32_le()?))),
            _ => Ok(None),
        }
    }

    /// Consume and discard a value of the given type.
    pub fn skip_value(&mut self, value_type: ValueType) -> GgufResult<()> {
        match value_type.layout() {
            ValueLayout::Fixed(width) => self.skip(width),
            ValueLayout::String => self.skip_string(),
            ValueLayout::Array => self.skip_array(),
        }
    }

    fn skip_array(&mut self) -> GgufResult<()> {
        let element_type = self.read_value_type()?;
        let count = self.read_u64_le()?;

        match element_type.layout() {
            ValueLayout::Fixed(width) => {
                let total = count
                    .checked_mul(width)
                    .filter(|total| *total <= MAX_SAFE_INTEGER)
                    .ok_or(GgufInternalError::IntegerOverflow(count))?;
                self.skip(total)
            }
            ValueLayout::String => {
                for _ in 0..count {
                    self.skip_string()?;
                }
                Ok(())
            }
            ValueLayout::Array => Err(GgufInternalError::NestedArray),
        }
    }
}
