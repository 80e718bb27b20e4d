//! Row tokenizer for the stream body.
//!
//! Every line is one pixel row and every delimiter-separated field one pixel.
//! Fields are trimmed of surrounding whitespace, which also absorbs the `\r`
//! of CRLF line endings and the space after the comma in older streams.

use std::io::BufRead;

use super::header::DELIMITER;
use crate::error::CodecError;

/// Split one body line into trimmed fields.
///
/// An empty line is one empty field: the reserved transparent name.
pub(crate) fn split_fields(line: &str) -> impl Iterator<Item = &str> {
    line.split(DELIMITER).map(str::trim)
}

/// Read the remaining stream as lines.
///
/// Blank lines at the end of a stream whose first row has several fields are
/// dropped. In a one-column stream a blank line is a transparent pixel and is
/// kept.
pub(crate) fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>, CodecError> {
    let mut lines = reader.lines().collect::<std::io::Result<Vec<_>>>()?;
    let multi_column = lines.first().is_some_and(|first| first.contains(DELIMITER));
    if multi_column {
        while lines.last().is_some_and(|line| line.trim().is_empty()) {
            lines.pop();
        }
    }
    Ok(lines)
}

/// Check that every row has as many fields as the first one.
///
/// Returns `(width, height)`. A body without rows is `(0, 0)`.
pub(crate) fn measure_rows(lines: &[String]) -> Result<(usize, usize), CodecError> {
    let Some(first) = lines.first() else {
        return Ok((0, 0));
    };
    let width = first.split(DELIMITER).count();

    for (row, line) in lines.iter().enumerate().skip(1) {
        let actual = line.split(DELIMITER).count();
        if actual != width {
            return Err(CodecError::RowLengthMismatch {
                row,
                expected: width,
                actual,
            });
        }
    }

    Ok((width, lines.len()))
}
