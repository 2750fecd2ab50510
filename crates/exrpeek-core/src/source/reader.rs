use std::io::{BufRead, Read};

use super::error::SourceError;

/// Forward-only cursor over a buffered byte source.
///
/// The cursor counts every byte it hands out so callers can attach absolute
/// offsets to diagnostics. There is no way to seek backwards.
///
/// # Examples
/// ```
/// use exrpeek_core::ByteCursor;
///
/// let mut cursor = ByteCursor::new(&b"int\0\x2a\x00\x00\x00"[..]);
/// assert_eq!(cursor.read_null_terminated_bytes()?, b"int");
/// assert_eq!(cursor.read_i32_le()?, 42);
/// assert_eq!(cursor.position(), 8);
/// # Ok::<(), exrpeek_core::SourceError>(())
/// ```
pub struct ByteCursor<R> {
    inner: R,
    position: u64,
}

impl<R: BufRead> ByteCursor<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, position: 0 }
    }

    /// Number of bytes consumed so far.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Read exactly `n` bytes.
    ///
    /// The buffer grows with the data actually present, so a bogus length
    /// near the end of a short source does not allocate `n` bytes up front.
    ///
    /// # Errors
    /// Returns `SourceError::UnexpectedEof` when the source ends first.
    pub fn read_exact(&mut self, n: usize) -> Result<Vec<u8>, SourceError> {
        let offset = self.position;
        let mut buf = Vec::new();
        let read = (&mut self.inner).take(n as u64).read_to_end(&mut buf)?;
        self.position += read as u64;
        if read < n {
            return Err(SourceError::UnexpectedEof {
                offset,
                needed: n as u64,
                available: read as u64,
            });
        }
        Ok(buf)
    }

    /// Read bytes up to the next `0x00` and skip the terminator.
    ///
    /// # Errors
    /// Returns `SourceError::UnexpectedEof` when no terminator is found
    /// before the source ends.
    pub fn read_null_terminated_bytes(&mut self) -> Result<Vec<u8>, SourceError> {
        let offset = self.position;
        let mut buf = Vec::new();
        let read = self.inner.read_until(0, &mut buf)?;
        self.position += read as u64;
        if buf.pop() != Some(0) {
            return Err(SourceError::UnexpectedEof {
                offset,
                needed: read as u64 + 1,
                available: read as u64,
            });
        }
        Ok(buf)
    }

    pub fn read_u32_le(&mut self) -> Result<u32, SourceError> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    pub fn read_i32_le(&mut self) -> Result<i32, SourceError> {
        Ok(i32::from_le_bytes(self.read_array()?))
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], SourceError> {
        let bytes = self.read_exact(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(&bytes);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::ByteCursor;
    use crate::source::error::SourceError;

    #[test]
    fn read_exact_advances_position() {
        let mut cursor = ByteCursor::new(&[1u8, 2, 3, 4, 5][..]);
        assert_eq!(cursor.read_exact(2).unwrap(), vec![1, 2]);
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.read_exact(3).unwrap(), vec![3, 4, 5]);
        assert_eq!(cursor.position(), 5);
    }

    #[test]
    fn read_exact_zero_bytes_at_end() {
        let mut cursor = ByteCursor::new(&[][..]);
        assert!(cursor.read_exact(0).unwrap().is_empty());
    }

    #[test]
    fn read_exact_too_short() {
        let mut cursor = ByteCursor::new(&[1u8, 2][..]);
        let err = cursor.read_exact(4).unwrap_err();
        assert!(matches!(
            err,
            SourceError::UnexpectedEof {
                offset: 0,
                needed: 4,
                available: 2
            }
        ));
    }

    #[test]
    fn null_terminated_skips_terminator() {
        let mut cursor = ByteCursor::new(&b"name\0rest"[..]);
        assert_eq!(cursor.read_null_terminated_bytes().unwrap(), b"name");
        assert_eq!(cursor.position(), 5);
        assert_eq!(cursor.read_exact(4).unwrap(), b"rest");
    }

    #[test]
    fn null_terminated_empty_string() {
        let mut cursor = ByteCursor::new(&[0u8][..]);
        assert!(cursor.read_null_terminated_bytes().unwrap().is_empty());
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn null_terminated_missing_terminator() {
        let mut cursor = ByteCursor::new(&b"abc"[..]);
        let err = cursor.read_null_terminated_bytes().unwrap_err();
        assert!(err.is_eof());
    }

    #[test]
    fn little_endian_words() {
        let mut cursor = ByteCursor::new(&[0x76, 0x2f, 0x31, 0x01, 0xff, 0xff, 0xff, 0xff][..]);
        assert_eq!(cursor.read_u32_le().unwrap(), 0x0131_2f76);
        assert_eq!(cursor.read_i32_le().unwrap(), -1);
    }
}
