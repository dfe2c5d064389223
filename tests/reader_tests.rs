mod common;

use std::io::Cursor;

use common::{ChunkedReader, FaultyReader, InterruptingReader, pcm};
use pcm_peak_meter::{ConfigError, MeterError, SampleBuffer, StreamReader};

#[test]
fn buffer_capacity_must_be_whole_frames() {
    assert_eq!(SampleBuffer::new(7).err(), Some(ConfigError::BufferSize(7)));
    assert_eq!(SampleBuffer::new(0).err(), Some(ConfigError::BufferSize(0)));

    let buf = SampleBuffer::new(16).unwrap();
    assert_eq!(buf.capacity(), 16);
    assert!(buf.is_empty());
}

#[test]
fn short_reads_are_looped_until_full() {
    let data: Vec<u8> = (0..64).collect();
    let mut reader = StreamReader::new(ChunkedReader::new(data.clone(), 3));
    let mut buf = SampleBuffer::new(32).unwrap();

    assert_eq!(reader.fill(&mut buf).unwrap(), 32);
    assert!(buf.is_full());
    assert_eq!(buf.as_bytes(), &data[..32]);
    assert!(!reader.is_ended());
    // 32 bytes in chunks of at most 3.
    assert_eq!(reader.get_ref().reads, 11);

    assert_eq!(reader.fill(&mut buf).unwrap(), 32);
    assert_eq!(buf.as_bytes(), &data[32..]);
    assert_eq!(reader.bytes_read(), 64);
}

#[test]
fn end_of_input_returns_partial_count() {
    let data = pcm(&[(1, 2), (3, 4)]);
    let mut input = data.clone();
    input.extend_from_slice(&[9, 9]);

    let mut reader = StreamReader::new(Cursor::new(input));
    let mut buf = SampleBuffer::new(16).unwrap();

    assert_eq!(reader.fill(&mut buf).unwrap(), 10);
    assert!(reader.is_ended());
    assert_eq!(buf.remainder(), 2);
    assert_eq!(buf.frames().count(), 2);

    // Nothing more after the end.
    assert_eq!(reader.fill(&mut buf).unwrap(), 0);
    assert!(buf.is_empty());
}

#[test]
fn empty_stream_fills_nothing() {
    let mut reader = StreamReader::new(Cursor::new(Vec::<u8>::new()));
    let mut buf = SampleBuffer::new(8).unwrap();
    assert_eq!(reader.fill(&mut buf).unwrap(), 0);
    assert!(reader.is_ended());
}

#[test]
fn interrupted_reads_are_retried() {
    let data: Vec<u8> = (0..8).collect();
    let mut reader = StreamReader::new(InterruptingReader::new(data.clone()));
    let mut buf = SampleBuffer::new(8).unwrap();

    assert_eq!(reader.fill(&mut buf).unwrap(), 8);
    assert_eq!(buf.as_bytes(), &data[..]);
}

#[test]
fn io_error_is_a_stream_fault() {
    let mut reader = StreamReader::new(FaultyReader::new(vec![0; 6]));
    let mut buf = SampleBuffer::new(8).unwrap();

    let err = reader.fill(&mut buf).unwrap_err();
    assert!(matches!(err, MeterError::StreamFault(ref e) if e.kind() == std::io::ErrorKind::BrokenPipe));
    assert!(!err.is_config());
    assert!(!reader.is_ended());
}
