use thiserror::Error;

#[doc = r#"
A set of errors that can occur while decoding a MIDI file.

Every error is fatal for the decode that produced it: there is no partially
decoded file.
"#]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Reading at Position {position}, {kind}")]
pub struct ReaderError {
    position: usize,
    pub(crate) kind: ReaderErrorKind,
}

/// A kind of error that decoding can produce
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReaderErrorKind {
    /// The file or one of its chunk headers is not what a MIDI file looks like
    #[error("Invalid file: {0}")]
    InvalidFile(#[from] HeaderError),
    /// The format code is known but not supported. Only format 1 is decoded.
    #[error("Unsupported format {0}")]
    Unsupported(u16),
    /// A track chunk is malformed
    #[error("Unreadable track: {0}")]
    UnreadableTrack(#[from] TrackError),
    /// The buffer ended before a read completed
    #[error("Read out of bounds!")]
    Truncated,
    /// Strict decoding met an event it does not know
    #[error("Unrecognized event: {0}")]
    UnrecognizedEvent(#[from] EventError),
}

/// Problems with the file header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeaderError {
    /// The file does not start with `MThd`
    #[error("expected MThd, found {0:02X?}")]
    Magic([u8; 4]),
    /// The header declares zero ticks per quarter note
    #[error("ticks per quarter note is zero")]
    ZeroTicksPerQuarterNote,
    /// A file was built without a header
    #[error("no header")]
    Missing,
    /// A second header was given
    #[error("duplicate header")]
    Duplicate,
    /// The number of tracks read differs from the header's count
    #[error("header declares {declared} tracks, found {found}")]
    TrackCount {
        /// Tracks the header declares
        declared: u16,
        /// Tracks that were read
        found: usize,
    },
}

/// Problems with a track chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TrackError {
    /// The chunk does not start with `MTrk`
    #[error("expected MTrk, found {0:02X?}")]
    Magic([u8; 4]),
    /// A meta event's payload is shorter than its fixed shape
    #[error("meta event {kind:#04X} needs {expected} bytes, found {found}")]
    MetaLength {
        /// The meta subtype
        kind: u8,
        /// Bytes the payload needs
        expected: usize,
        /// Bytes the payload has
        found: usize,
    },
}

/// Events the strict decoder refuses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EventError {
    /// An unknown meta subtype
    #[error("meta type {0:#04X}")]
    MetaType(u8),
    /// A status byte that is not a channel voice, meta or system exclusive status
    #[error("status {0:#04X}")]
    Status(u8),
    /// A data byte appeared before any status byte in the track
    #[error("data byte {0:#04X} without running status")]
    NoRunningStatus(u8),
}

impl ReaderError {
    /// Create a reader error from a position and kind
    pub const fn new(position: usize, kind: ReaderErrorKind) -> Self {
        Self { position, kind }
    }
    /// Create a new out of bounds error
    pub const fn truncated(position: usize) -> Self {
        Self {
            position,
            kind: ReaderErrorKind::Truncated,
        }
    }
    /// Returns the error kind of the reader.
    pub fn error_kind(&self) -> &ReaderErrorKind {
        &self.kind
    }
    /// Returns the position where the read error occurred.
    pub fn position(&self) -> usize {
        self.position
    }
    /// True if the buffer ended early
    pub const fn is_truncated(&self) -> bool {
        matches!(self.kind, ReaderErrorKind::Truncated)
    }
    /// True for a bad file or chunk header
    pub const fn is_invalid_file(&self) -> bool {
        matches!(self.kind, ReaderErrorKind::InvalidFile(_))
    }
    /// True for a format this crate does not decode
    pub const fn is_unsupported(&self) -> bool {
        matches!(self.kind, ReaderErrorKind::Unsupported(_))
    }
    /// True for a malformed track
    pub const fn is_unreadable_track(&self) -> bool {
        matches!(self.kind, ReaderErrorKind::UnreadableTrack(_))
    }
    /// True if strict decoding refused an event
    pub const fn is_unrecognized_event(&self) -> bool {
        matches!(self.kind, ReaderErrorKind::UnrecognizedEvent(_))
    }
}

/// The Read Result type (see [`ReaderError`])
pub type ReadResult<T> = Result<T, ReaderError>;
