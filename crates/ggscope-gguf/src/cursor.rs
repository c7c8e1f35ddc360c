//! Bounded, forward-only byte cursor.
//!
//! Every read and skip is checked against the source length before the
//! source is touched, so a truncated file fails with `UnexpectedEof` instead
//! of yielding short or garbage data. The offset only moves forward.

use std::fs::File;
use std::io::{self, BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use crate::error::{GgufInternalError, GgufResult};
use crate::format::MAX_SAFE_INTEGER;

/// Sequential little-endian reader over a seekable source.
pub struct ByteCursor<R> {
    inner: BufReader<R>,
    offset: u64,
    len: u64,
}

impl ByteCursor<File> {
    /// Open a file for scanning.
    pub fn open(path: &Path) -> GgufResult<Self> {
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
                GgufInternalError::FileNotFound(format!("{}: {e}", path.display()))
            }
            _ => GgufInternalError::Io(e),
        })?;

        let metadata = file.metadata()?;
        if !metadata.is_file() {
            return Err(GgufInternalError::FileNotFound(format!(
                "{} is not a regular file",
                path.display()
            )));
        }

        Ok(Self {
            inner: BufReader::new(file),
            offset: 0,
            len: metadata.len(),
        })
    }
}

impl<R: Read + Seek> ByteCursor<R> {
    /// Wrap any seekable source, starting at its beginning.
    pub fn new(mut source: R) -> GgufResult<Self> {
        let len = source.seek(SeekFrom::End(0))?;
        source.seek(SeekFrom::Start(0))?;
        Ok(Self {
            inner: BufReader::new(source),
            offset: 0,
            len,
        })
    }

    /// Current position from the start of the source.
    pub const fn offset(&self) -> u64 {
        self.offset
    }

    /// Bytes left between the current position and the end of the source.
    pub const fn remaining(&self) -> u64 {
        self.len.saturating_sub(self.offset)
    }

    fn ensure_available(&self, requested: u64) -> GgufResult<()> {
        let available = self.remaining();
        if requested > available {
            return Err(GgufInternalError::UnexpectedEof {
                offset: self.offset,
                requested,
                available,
            });
        }
        Ok(())
    }

    /// Map an I/O failure during a checked read, e.g. the file shrinking
    /// underneath us.
    fn read_failed(&self, err: io::Error, requested: u64) -> GgufInternalError {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            GgufInternalError::UnexpectedEof {
                offset: self.offset,
                requested,
                available: self.remaining(),
            }
        } else {
            GgufInternalError::Io(err)
        }
    }

    /// Read a fixed-size byte array.
    pub fn read_array<const N: usize>(&mut self) -> GgufResult<[u8; N]> {
        let requested = N as u64;
        self.ensure_available(requested)?;
        let mut buf = [0u8; N];
        self.inner
            .read_exact(&mut buf)
            .map_err(|e| self.read_failed(e, requested))?;
        self.offset += requested;
        Ok(buf)
    }

    /// Read exactly `n` bytes.
    ///
    /// Callers bound `n` (string lengths are capped before reaching here);
    /// the availability check still runs before anything is allocated.
    pub fn read_exact(&mut self, n: u64) -> GgufResult<Vec<u8>> {
        self.ensure_available(n)?;
        let len = usize::try_from(n).map_err(|_| GgufInternalError::IntegerOverflow(n))?;
        let mut buf = vec![0u8; len];
        self.inner
            .read_exact(&mut buf)
            .map_err(|e| self.read_failed(e, n))?;
        self.offset += n;
        Ok(buf)
    }

    /// Advance `n` bytes without reading them.
    pub fn skip(&mut self, n: u64) -> GgufResult<()> {
        self.ensure_available(n)?;
        let delta = i64::try_from(n).map_err(|_| GgufInternalError::IntegerOverflow(n))?;
        self.inner.seek_relative(delta)?;
        self.offset += n;
        Ok(())
    }

    /// Read a u32 value (little-endian).
    pub fn read_u32_le(&mut self) -> GgufResult<u32> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    /// Read an i32 value (little-endian).
    pub fn read_i32_le(&mut self) -> GgufResult<i32> {
        Ok(i32::from_le_bytes(self.read_array()?))
    }

    /// Read a u64 count or length (little-endian), rejecting values above
    /// [`MAX_SAFE_INTEGER`].
    pub fn read_u64_le(&mut self) -> GgufResult<u64> {
        let value = u64::from_le_bytes(self.read_array()?);
        if value > MAX_SAFE_INTEGER {
            return Err(GgufInternalError::IntegerOverflow(value));
        }
        Ok(value)
    }

    /// Read an i64 value (little-endian), rejecting magnitudes above
    /// [`MAX_SAFE_INTEGER`].
    #[allow(dead_code)] // No signed 64-bit field is read by the scan
    pub fn read_i64_le(&mut self) -> GgufResult<i64> {
        let value = i64::from_le_bytes(self.read_array()?);
        if value.unsigned_abs() > MAX_SAFE_INTEGER {
            return Err(GgufInternalError::IntegerOverflow(value.unsigned_abs()));
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    fn cursor(data: &[u8]) -> ByteCursor<Cursor<Vec<u8>>> {
        ByteCursor::new(Cursor::new(data.to_vec())).unwrap()
    }

    #[test]
    fn test_read_u32() {
        let mut c = cursor(&[0x01, 0x02, 0x03, 0x04]);
        assert_eq!(c.read_u32_le().unwrap(), 0x0403_0201);
        assert_eq!(c.offset(), 4);
        assert_eq!(c.remaining(), 0);
    }

    #[test]
    fn test_read_i32_negative() {
        let mut c = cursor(&(-7i32).to_le_bytes());
        assert_eq!(c.read_i32_le().unwrap(), -7);
    }

    #[test]
    fn test_read_u64_at_safe_limit() {
        let mut c = cursor(&MAX_SAFE_INTEGER.to_le_bytes());
        assert_eq!(c.read_u64_le().unwrap(), MAX_SAFE_INTEGER);
    }

    #[test]
    fn test_read_u64_above_safe_limit_overflows() {
        let mut c = cursor(&(MAX_SAFE_INTEGER + 1).to_le_bytes());
        assert!(matches!(
            c.read_u64_le(),
            Err(GgufInternalError::IntegerOverflow(v)) if v == MAX_SAFE_INTEGER + 1
        ));

        let mut c = cursor(&u64::MAX.to_le_bytes());
        assert!(matches!(
            c.read_u64_le(),
            Err(GgufInternalError::IntegerOverflow(u64::MAX))
        ));
    }

    #[test]
    fn test_read_i64_checks_magnitude() {
        let mut c = cursor(&(-42i64).to_le_bytes());
        assert_eq!(c.read_i64_le().unwrap(), -42);

        let mut c = cursor(&i64::MIN.to_le_bytes());
        assert!(matches!(
            c.read_i64_le(),
            Err(GgufInternalError::IntegerOverflow(_))
        ));
    }

    #[test]
    fn test_short_read_is_unexpected_eof() {
        let mut c = cursor(&[0x01, 0x02, 0x03]);
        assert!(matches!(
            c.read_u32_le(),
            Err(GgufInternalError::UnexpectedEof {
                offset: 0,
                requested: 4,
                available: 3
            })
        ));
        // Nothing was consumed.
        assert_eq!(c.offset(), 0);
    }

    #[test]
    fn test_read_exact_and_skip_advance() {
        let mut c = cursor(b"abcdefgh");
        assert_eq!(c.read_exact(2).unwrap(), b"ab");
        c.skip(3).unwrap();
        assert_eq!(c.offset(), 5);
        assert_eq!(c.read_exact(3).unwrap(), b"fgh");
        assert_eq!(c.read_exact(0).unwrap(), b"");
    }

    #[test]
    fn test_skip_past_end_fails() {
        let mut c = cursor(b"abcd");
        c.skip(2).unwrap();
        assert!(matches!(
            c.skip(3),
            Err(GgufInternalError::UnexpectedEof {
                offset: 2,
                requested: 3,
                available: 2
            })
        ));
    }

    #[test]
    fn test_huge_skip_does_not_allocate_or_seek() {
        let mut c = cursor(b"abcd");
        assert!(matches!(
            c.skip(MAX_SAFE_INTEGER),
            Err(GgufInternalError::UnexpectedEof { .. })
        ));
        assert!(matches!(
            c.read_exact(MAX_SAFE_INTEGER),
            Err(GgufInternalError::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ByteCursor::open(&dir.path().join("absent.gguf"));
        assert!(matches!(result, Err(GgufInternalError::FileNotFound(_))));
    }

    #[test]
    fn test_open_directory_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let result = ByteCursor::open(dir.path());
        assert!(matches!(result, Err(GgufInternalError::FileNotFound(_))));
    }

    #[test]
    fn test_open_reads_file_length() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"GGUF\x03\x00\x00\x00").unwrap();
        file.flush().unwrap();

        let mut c = ByteCursor::open(file.path()).unwrap();
        assert_eq!(c.remaining(), 8);
        assert_eq!(c.read_exact(4).unwrap(), b"GGUF");
        assert_eq!(c.read_u32_le().unwrap(), 3);
    }
}
