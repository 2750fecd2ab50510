use super::error::AttributeError;

/// Sequential little-endian reader over one attribute's bytes.
///
/// Offsets are local to the attribute span, starting at 0.
pub struct AttributeReader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> AttributeReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    pub fn is_exhausted(&self) -> bool {
        self.offset >= self.data.len()
    }

    /// Reject a value whose declared size differs from its fixed layout.
    pub fn require_exact_len(
        &self,
        type_tag: &'static str,
        expected: usize,
    ) -> Result<(), AttributeError> {
        if self.data.len() != expected {
            return Err(AttributeError::SizeMismatch {
                type_tag,
                expected,
                actual: self.data.len(),
            });
        }
        Ok(())
    }

    pub fn read_slice(&mut self, len: usize) -> Result<&'a [u8], AttributeError> {
        let data = self.data;
        let bytes = self
            .offset
            .checked_add(len)
            .and_then(|end| data.get(self.offset..end))
            .ok_or(AttributeError::TooShort {
                needed: len,
                actual: self.remaining(),
            })?;
        self.offset += len;
        Ok(bytes)
    }

    /// Read up to the next `0x00` inside the span and skip the terminator.
    ///
    /// Returns `None` when the span ends without a terminator; the offset is
    /// left unchanged in that case.
    pub fn read_null_terminated(&mut self) -> Option<&'a [u8]> {
        let data = self.data;
        let rest = data.get(self.offset..)?;
        let end = rest.iter().position(|&b| b == 0)?;
        self.offset += end + 1;
        Some(&rest[..end])
    }

    pub fn read_u8(&mut self) -> Result<u8, AttributeError> {
        Ok(self.read_array::<1>()?[0])
    }

    pub fn read_i32_le(&mut self) -> Result<i32, AttributeError> {
        Ok(i32::from_le_bytes(self.read_array()?))
    }

    pub fn read_u32_le(&mut self) -> Result<u32, AttributeError> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    pub fn read_f32_le(&mut self) -> Result<f32, AttributeError> {
        Ok(f32::from_le_bytes(self.read_array()?))
    }

    pub fn read_f64_le(&mut self) -> Result<f64, AttributeError> {
        Ok(f64::from_le_bytes(self.read_array()?))
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], AttributeError> {
        let bytes = self.read_slice(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }
}
