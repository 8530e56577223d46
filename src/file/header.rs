use crate::{
    file::FormatType,
    reader::{HeaderError, ReadResult, Reader, ReaderError, ReaderErrorKind},
};

const HEADER_MAGIC: &[u8; 4] = b"MThd";

#[doc = r#"
The header chunk of a MIDI file.

```text
4D 54 68 64   "MThd"
00 00 00 06   length
00 01         format
00 02         number of tracks
01 E0         ticks per quarter note
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MidiFileHeader {
    length: u32,
    format: FormatType,
    num_tracks: u16,
    ticks_per_quarter_note: u16,
}

impl MidiFileHeader {
    /// Create a new header
    pub const fn new(
        length: u32,
        format: FormatType,
        num_tracks: u16,
        ticks_per_quarter_note: u16,
    ) -> Self {
        Self {
            length,
            format,
            num_tracks,
            ticks_per_quarter_note,
        }
    }

    /// The header's length field. Track chunks start right after the six
    /// header bytes whatever this says.
    pub const fn length(&self) -> u32 {
        self.length
    }

    /// The file format
    pub const fn format_type(&self) -> FormatType {
        self.format
    }

    /// The number of tracks the header declares
    pub const fn num_tracks(&self) -> u16 {
        self.num_tracks
    }

    /// Ticks per quarter note
    pub const fn ticks_per_quarter_note(&self) -> u16 {
        self.ticks_per_quarter_note
    }

    /// Read and validate the header at the start of a file
    pub fn read(reader: &mut Reader<'_>) -> ReadResult<Self> {
        let start = reader.buffer_position();
        // a file too short to hold the magic is not a MIDI file
        let mut magic = [0; 4];
        let available = reader.remaining().min(4);
        magic[..available].copy_from_slice(reader.read_exact(available)?);
        if available < 4 || &magic != HEADER_MAGIC {
            return Err(ReaderError::new(start, HeaderError::Magic(magic).into()));
        }

        let length = reader.read_u32()?;
        let format_position = reader.buffer_position();
        let code = reader.read_u16()?;
        let format = FormatType::try_from(code)
            .ok()
            .filter(FormatType::is_supported)
            .ok_or(ReaderError::new(
                format_position,
                ReaderErrorKind::Unsupported(code),
            ))?;
        let num_tracks = reader.read_u16()?;
        let ticks_per_quarter_note = reader.read_u16()?;
        if ticks_per_quarter_note == 0 {
            return Err(reader.error(HeaderError::ZeroTicksPerQuarterNote));
        }

        Ok(Self {
            length,
            format,
            num_tracks,
            ticks_per_quarter_note,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn header(format: u16, tracks: u16, tpqn: u16) -> alloc::vec::Vec<u8> {
        let mut bytes = alloc::vec::Vec::from(*b"MThd");
        bytes.extend_from_slice(&6u32.to_be_bytes());
        bytes.extend_from_slice(&format.to_be_bytes());
        bytes.extend_from_slice(&tracks.to_be_bytes());
        bytes.extend_from_slice(&tpqn.to_be_bytes());
        bytes
    }

    #[test]
    fn reads_format_one() {
        let bytes = header(1, 3, 96);
        let mut reader = Reader::from_byte_slice(&bytes);
        let header = MidiFileHeader::read(&mut reader).unwrap();

        assert_eq!(header, MidiFileHeader::new(6, FormatType::Simultaneous, 3, 96));
        assert_eq!(reader.buffer_position(), 14);
    }

    #[test]
    fn rejects_other_formats() {
        for format in [0, 2, 3, 0xFFFF] {
            let bytes = header(format, 1, 96);
            let err = MidiFileHeader::read(&mut Reader::from_byte_slice(&bytes)).unwrap_err();
            assert_eq!(err.error_kind(), &ReaderErrorKind::Unsupported(format));
            assert_eq!(err.position(), 8);
        }
    }

    #[test]
    fn rejects_bad_magic() {
        let mut bytes = header(1, 1, 96);
        bytes[..4].copy_from_slice(b"RIFF");
        let err = MidiFileHeader::read(&mut Reader::from_byte_slice(&bytes)).unwrap_err();
        assert_eq!(
            err.error_kind(),
            &ReaderErrorKind::InvalidFile(HeaderError::Magic(*b"RIFF"))
        );

        let err = MidiFileHeader::read(&mut Reader::from_byte_slice(b"MT")).unwrap_err();
        assert!(err.is_invalid_file());
    }

    #[test]
    fn short_header_is_truncated() {
        let bytes = header(1, 1, 96);
        let err = MidiFileHeader::read(&mut Reader::from_byte_slice(&bytes[..11])).unwrap_err();
        assert!(err.is_truncated());
    }

    #[test]
    fn zero_resolution_is_invalid() {
        let bytes = header(1, 1, 0);
        let err = MidiFileHeader::read(&mut Reader::from_byte_slice(&bytes)).unwrap_err();
        assert!(err.is_invalid_file());
    }
}
