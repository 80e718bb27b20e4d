//! Assertion helpers for tests.

use bi::{CodecError, Image};
use pretty_assertions::assert_eq;

/// Assert two images match pixel for pixel, reporting the first difference
pub fn assert_same_image(actual: &Image, expected: &Image) {
    assert_eq!(
        (actual.width(), actual.height()),
        (expected.width(), expected.height()),
        "Image dimensions differ"
    );
    for y in 0..expected.height() {
        for x in 0..expected.width() {
            assert_eq!(
                actual.pixel(x, y),
                expected.pixel(x, y),
                "Pixel ({}, {}) differs",
                x,
                y
            );
        }
    }
}

/// Assert a stream is UTF-8 with the given header and one line per row
pub fn assert_stream_shape(stream: &[u8], header: &str, width: usize, height: usize) {
    let text = std::str::from_utf8(stream).expect("Stream should be UTF-8");
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some(header), "Unexpected header line");

    let rows: Vec<&str> = lines.collect();
    assert_eq!(rows.len(), height, "Unexpected row count");
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(row.split(',').count(), width, "Row {} has wrong width", i);
    }
}

/// Assert a decode result failed with a row length mismatch on `row`
pub fn assert_row_mismatch(result: Result<Image, CodecError>, row: usize) {
    match result {
        Err(CodecError::RowLengthMismatch { row: actual, .. }) => assert_eq!(actual, row),
        other => panic!("Expected RowLengthMismatch on row {}, got {:?}", row, other),
    }
}
