#[doc = r#"
Options controlling how forgiving the decoder is.

In strict mode (the default) an unknown meta event subtype or an unknown status
byte aborts the decode with
[`ReaderErrorKind::UnrecognizedEvent`](crate::reader::ReaderErrorKind::UnrecognizedEvent).
In lenient mode unknown meta events are skipped over using their length prefix and
unknown status bytes become no-op events.

Leniency never applies to structural problems: a bad header, a malformed track chunk
or a buffer that ends early are always fatal.

# Example
```rust
# use midiline::prelude::*;
let config = ParseConfig::lenient();
assert!(!config.is_strict());
assert_eq!(ParseConfig::default(), ParseConfig::strict());
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseConfig {
    strict: bool,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self::strict()
    }
}

impl ParseConfig {
    /// Reject anything the decoder does not recognize.
    pub const fn strict() -> Self {
        Self { strict: true }
    }

    /// Skip unknown meta events and ignore unknown status bytes.
    pub const fn lenient() -> Self {
        Self { strict: false }
    }

    /// Set strictness
    pub const fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// True if unknown events are errors
    pub const fn is_strict(&self) -> bool {
        self.strict
    }
}
