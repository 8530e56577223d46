mod common;

use common::*;
use midiline::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn reads_every_declared_track() {
    let tracks = [
        track(&[track_name("Conductor"), set_tempo(0, 600_000)]),
        track(&[track_name("Lead"), note_on(0, 64, 90), note_off(96, 64)]),
        track(&[]),
    ];
    let bytes = create_midi(1, 96, &tracks);
    let file = MidiFile::parse(&bytes).unwrap();

    assert!(file.is_loaded());
    assert_eq!(file.header().num_tracks(), 3);
    assert_eq!(file.header().format_type(), FormatType::Simultaneous);
    assert_eq!(file.tracks().len(), 3);
    for track in file.tracks() {
        let ends = track
            .events()
            .iter()
            .filter(|event| event.is_end_of_track())
            .count();
        assert_eq!(ends, 1);
        assert!(track.events().last().unwrap().is_end_of_track());
    }

    let names: Vec<_> = file.tracks().iter().map(|t| t.name()).collect();
    assert_eq!(names, [Some("Conductor"), Some("Lead"), None]);
    assert_eq!(file.tracks()[2].sequence_number(), 2);
    assert_eq!(file.bytes().len(), bytes.len());
}

#[test]
fn rejects_single_track_and_multi_song_formats() {
    for format in [0, 2] {
        let bytes = create_midi(format, 96, &[track(&[])]);
        let err = MidiFile::parse(&bytes).unwrap_err();
        assert_eq!(err.error_kind(), &ReaderErrorKind::Unsupported(format));
    }
}

#[test]
fn rejects_files_without_header_magic() {
    let mut bytes = create_midi(1, 96, &[track(&[])]);
    bytes[..4].copy_from_slice(b"RIFF");
    let err = MidiFile::parse(&bytes).unwrap_err();
    assert!(err.is_invalid_file());
    assert_eq!(err.position(), 0);

    assert!(MidiFile::parse(&[]).unwrap_err().is_invalid_file());
}

#[test]
fn missing_track_is_truncated() {
    let mut bytes = create_midi(1, 96, &[track(&[])]);
    // declare two tracks
    bytes[11] = 2;
    let err = MidiFile::parse(&bytes).unwrap_err();
    assert!(err.is_truncated());
}

#[test]
fn bad_track_magic_is_unreadable() {
    let mut bytes = create_midi(1, 96, &[track(&[])]);
    bytes[14..18].copy_from_slice(b"MTrx");
    let err = MidiFile::parse(&bytes).unwrap_err();
    assert!(err.is_unreadable_track());
    assert_eq!(err.position(), 14);
}

#[test]
fn track_without_end_is_truncated() {
    let bytes = create_midi(1, 96, &[note_on(0, 60, 64)]);
    let err = MidiFile::parse(&bytes).unwrap_err();
    assert!(err.is_truncated());
}

#[test]
fn running_status_across_a_file() {
    let explicit = track(&[note_on(0, 60, 64), note_on(96, 60, 0)]);
    let mut omitted = note_on(0, 60, 64);
    omitted.extend_from_slice(&[0x60, 60, 0]);
    let omitted = track(&[omitted]);

    let a = create_midi(1, 96, &[explicit]);
    let b = create_midi(1, 96, &[omitted]);
    let a = MidiFile::parse(&a).unwrap();
    let b = MidiFile::parse(&b).unwrap();

    assert_eq!(a.tracks()[0].events(), b.tracks()[0].events());
    assert_eq!(
        a.tracks()[0].played_notes(),
        b.tracks()[0].played_notes()
    );
}

#[test]
fn strict_refuses_what_lenient_skips() {
    let events = track(&[
        vec![0x00, 0xF1],
        vec![0x00, 0xFF, 0x60, 0x02, 0xAA, 0xBB],
        note_on(0, 60, 64),
        note_off(96, 60),
    ]);
    let bytes = create_midi(1, 96, &[events]);

    let err = MidiFile::parse(&bytes).unwrap_err();
    assert!(err.is_unrecognized_event());

    let file = MidiFile::parse_with(&bytes, ParseConfig::lenient()).unwrap();
    let events = file.tracks()[0].events();
    assert_eq!(events[0].event(), &TrackMessage::Unrecognized(0xF1));
    assert_eq!(
        events[1].event(),
        &TrackMessage::Meta(MetaMessage::Unknown {
            kind: 0x60,
            data: &[0xAA, 0xBB]
        })
    );
    assert_eq!(file.tracks()[0].played_notes().len(), 1);
}

#[test]
fn tolerated_meta_types_pass_strict_decoding() {
    let events = track(&[
        vec![0x00, 0xFF, 0x21, 0x01, 0x00],
        vec![0x00, 0xFF, 0x48, 0x00],
    ]);
    let bytes = create_midi(1, 96, &[events]);
    let file = MidiFile::parse(&bytes).unwrap();
    assert_eq!(file.tracks()[0].events().len(), 3);
}

#[test]
fn meta_payloads() {
    let events = track(&[
        vec![0x00, 0xFF, 0x58, 0x04, 0x06, 0x03, 0x18, 0x08],
        vec![0x00, 0xFF, 0x59, 0x02, 0xFE, 0x01],
        vec![0x00, 0xFF, 0x02, 0x03, b'(', b'c', b')'],
    ]);
    let bytes = create_midi(1, 96, &[events]);
    let file = MidiFile::parse(&bytes).unwrap();
    let events = file.tracks()[0].events();

    let TrackMessage::Meta(MetaMessage::TimeSignature(time)) = events[0].event() else {
        panic!("expected a time signature, found {:?}", events[0]);
    };
    assert_eq!(time.numerator(), 6);
    assert_eq!(time.denominator(), Some(8));

    let TrackMessage::Meta(MetaMessage::KeySignature(key)) = events[1].event() else {
        panic!("expected a key signature, found {:?}", events[1]);
    };
    assert_eq!(key.accidentals(), -2);
    assert!(key.is_minor());

    let TrackMessage::Meta(copyright) = events[2].event() else {
        panic!("expected a meta event, found {:?}", events[2]);
    };
    assert_eq!(copyright.text().as_deref(), Some("(c)"));
}

#[test]
fn short_tempo_payload_is_unreadable() {
    let events = track(&[vec![0x00, 0xFF, 0x51, 0x02, 0x07, 0xA1]]);
    let bytes = create_midi(1, 96, &[events]);
    let err = MidiFile::parse(&bytes).unwrap_err();
    assert!(err.is_unreadable_track());
}
