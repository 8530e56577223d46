//! System exclusive messages

/// An opaque system exclusive message.
///
/// In a file the `0xF0` status is followed by a one byte length and then that
/// many bytes, which are kept here untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemExclusiveMessage<'a>(&'a [u8]);

impl<'a> SystemExclusiveMessage<'a> {
    /// Wrap a payload
    pub const fn new(data: &'a [u8]) -> Self {
        Self(data)
    }

    /// The payload bytes
    pub const fn data(&self) -> &'a [u8] {
        self.0
    }

    /// The manufacturer ID, if the payload has one
    pub fn manufacturer(&self) -> Option<u8> {
        self.0.first().copied()
    }
}
