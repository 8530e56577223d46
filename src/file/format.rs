use num_enum::{IntoPrimitive, TryFromPrimitive};

#[doc = r#"
The format code of a MIDI file header.

```text
0   a single track holding every channel
1   several tracks played at the same time
2   several independent single-track patterns
```

Only [`FormatType::Simultaneous`] files can be decoded.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum FormatType {
    /// Format 0
    SingleMultiChannel = 0,
    /// Format 1
    Simultaneous = 1,
    /// Format 2
    SequentiallyIndependent = 2,
}

impl FormatType {
    /// True if files of this format can be decoded
    pub const fn is_supported(&self) -> bool {
        matches!(self, Self::Simultaneous)
    }
}
