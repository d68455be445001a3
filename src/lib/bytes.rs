//! Byte and string specializations of the buffer types.
//!
//! Strings are appended byte by byte. Input is treated as NUL-terminated: bytes
//! after the first NUL, if any, are ignored.

use crate::buffer::ByteBuffer;
use crate::errors::Result;
use crate::nested::NestedByteBuffer;

/// Bytes of `s` up to (not including) the first NUL.
#[inline]
fn until_nul(s: &[u8]) -> &[u8] {
    s.iter().position(|&b| b == 0).map_or(s, |end| &s[..end])
}

impl ByteBuffer {
    /// Create a buffer holding the bytes of `s`, with capacity equal to its length.
    #[must_use]
    pub fn from_string(s: impl AsRef<[u8]>) -> Self {
        Self::from(until_nul(s.as_ref()))
    }

    /// Append each byte of `s` as an individual element.
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::BufferError::Capacity`] if growth fails.
    pub fn append_string(&mut self, s: impl AsRef<[u8]>) -> Result<()> {
        self.append(until_nul(s.as_ref()))
    }

    /// The live bytes.
    #[inline]
    #[must_use]
    pub fn as_raw(&self) -> &[u8] {
        self.as_slice()
    }

    /// The live bytes as logical values; any non-zero byte is `true`.
    #[must_use]
    pub fn as_logical(&self) -> Vec<bool> {
        self.iter().map(|&b| b != 0).collect()
    }

    /// The live bytes decoded as UTF-8, replacing invalid sequences.
    #[must_use]
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(self.as_slice()).into_owned()
    }
}

impl NestedByteBuffer {
    /// Append a new inner buffer holding the bytes of `s`.
    pub fn append_string(&mut self, s: impl AsRef<[u8]>) -> Result<()> {
        self.push(&ByteBuffer::from_string(s))
    }

    /// Each inner buffer decoded as UTF-8, replacing invalid sequences.
    #[must_use]
    pub fn to_strings(&self) -> Vec<String> {
        self.iter().map(ByteBuffer::to_string_lossy).collect()
    }
}
