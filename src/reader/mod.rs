#![doc = r#"
Positional reading over an in-memory MIDI buffer.

The [`Reader`] is a cursor over an immutable byte slice. Every read either
returns the requested data and advances the cursor, or fails with
[`ReaderErrorKind::Truncated`] if the slice ends first. Multi-byte integers in
MIDI files are always big-endian.

# Variable-length quantities

Delta times are stored as variable-length quantities: seven bits per byte,
most significant group first, with the high bit of each byte set when another
byte follows.

```text
value        encoding
0x00000000   00
0x0000007F   7F
0x00000080   81 00
0x00003FFF   FF 7F
0x0FFFFFFF   FF FF FF 7F
```

# Example
```rust
# use midiline::reader::Reader;
let bytes = [0x81, 0x00, 0x01, 0xE0];
let mut reader = Reader::from_byte_slice(&bytes);

assert_eq!(reader.read_varlen().unwrap(), 0x80);
assert_eq!(reader.read_u16().unwrap(), 480);
assert!(reader.is_at_end());
```
"#]

mod error;
pub use error::*;

/// A cursor over a byte slice.
///
/// Positions reported in errors are absolute: a reader created over a
/// sub-slice with [`Reader::with_offset`] reports positions relative to the
/// enclosing buffer.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    data: &'a [u8],
    position: usize,
    offset: usize,
}

impl<'a> Reader<'a> {
    /// Create a reader at the start of `data`.
    pub const fn from_byte_slice(data: &'a [u8]) -> Self {
        Self::with_offset(data, 0)
    }

    /// Create a reader over `data`, which begins at `offset` in some larger buffer.
    pub const fn with_offset(data: &'a [u8], offset: usize) -> Self {
        Self {
            data,
            position: 0,
            offset,
        }
    }

    /// The absolute position of the cursor
    pub const fn buffer_position(&self) -> usize {
        self.offset + self.position
    }

    /// Bytes left to read
    pub const fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    /// True once every byte has been consumed
    pub const fn is_at_end(&self) -> bool {
        self.position >= self.data.len()
    }

    /// Look at the next byte without consuming it.
    pub fn peek(&self) -> Option<u8> {
        self.data.get(self.position).copied()
    }

    /// Read one byte.
    pub fn read_next(&mut self) -> ReadResult<u8> {
        let byte = self.peek().ok_or_else(|| self.truncated())?;
        self.position += 1;
        Ok(byte)
    }

    /// Read `len` raw bytes.
    pub fn read_exact(&mut self, len: usize) -> ReadResult<&'a [u8]> {
        let end = self
            .position
            .checked_add(len)
            .filter(|end| *end <= self.data.len())
            .ok_or_else(|| self.truncated())?;
        let slice = &self.data[self.position..end];
        self.position = end;
        Ok(slice)
    }

    /// Read exactly `N` bytes into an array.
    pub fn read_exact_size<const N: usize>(&mut self) -> ReadResult<[u8; N]> {
        let mut bytes = [0; N];
        bytes.copy_from_slice(self.read_exact(N)?);
        Ok(bytes)
    }

    /// Read a single unsigned byte.
    pub fn read_u8(&mut self) -> ReadResult<u8> {
        self.read_next()
    }

    /// Read a big-endian `u16`.
    pub fn read_u16(&mut self) -> ReadResult<u16> {
        self.read_exact_size().map(u16::from_be_bytes)
    }

    /// Read a big-endian `u32`.
    pub fn read_u32(&mut self) -> ReadResult<u32> {
        self.read_exact_size().map(u32::from_be_bytes)
    }

    /// Read a big-endian unsigned integer `width` bytes wide.
    ///
    /// Widths over four bytes keep only the low 32 bits.
    pub fn read_be(&mut self, width: usize) -> ReadResult<u32> {
        let bytes = self.read_exact(width)?;
        Ok(bytes
            .iter()
            .fold(0u32, |acc, byte| (acc << 8) | *byte as u32))
    }

    /// Read a variable-length quantity.
    ///
    /// There is no limit on the number of continuation bytes. Bits that do not
    /// fit in 32 bits are shifted out.
    pub fn read_varlen(&mut self) -> ReadResult<u32> {
        let mut value: u32 = 0;
        loop {
            let byte = self.read_next()?;
            value = (value << 7) | (byte & 0x7F) as u32;
            if byte & 0x80 == 0 {
                return Ok(value);
            }
        }
    }

    /// Produce an error of `kind` at the current position.
    pub(crate) fn error(&self, kind: impl Into<ReaderErrorKind>) -> ReaderError {
        ReaderError::new(self.buffer_position(), kind.into())
    }

    fn truncated(&self) -> ReaderError {
        ReaderError::truncated(self.buffer_position())
    }
}
