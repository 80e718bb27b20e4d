//! Stream header: `<magic>,<model-name>\n`.

use std::io::{BufRead, Read, Write};

use crate::error::CodecError;

/// Magic token opening every plain BI stream.
pub const MAGIC: &str = "bi";

/// Magic line opening a gzip-wrapped BI stream.
pub const COMPRESSED_MAGIC: &str = "biz";

/// Field separator for the header and for pixel rows.
pub const DELIMITER: char = ',';

/// Default bound on the header line, including its line break.
pub const DEFAULT_MAX_HEADER_LEN: usize = 128;

/// Write the header line naming `model`.
pub(crate) fn write_header<W: Write>(writer: &mut W, model: &str) -> std::io::Result<()> {
    writer.write_all(format!("{MAGIC}{DELIMITER}{model}\n").as_bytes())
}

/// Read one line of at most `limit` bytes, line break included.
///
/// The line break (and a `\r` before it) is stripped from the result.
/// Fails with [`CodecError::TruncatedHeader`] if the stream ends or the
/// bound is reached before a `\n` shows up.
pub(crate) fn read_header_line<R: BufRead>(
    reader: &mut R,
    limit: usize,
) -> Result<Vec<u8>, CodecError> {
    let mut line = Vec::new();
    reader.by_ref().take(limit as u64).read_until(b'\n', &mut line)?;

    if line.last() != Some(&b'\n') {
        return Err(CodecError::TruncatedHeader { limit });
    }
    line.pop();
    if line.last() == Some(&b'\r') {
        line.pop();
    }
    Ok(line)
}

/// Validate a header line and return the model name it carries.
pub(crate) fn parse_header(line: &[u8]) -> Result<&str, CodecError> {
    let line = std::str::from_utf8(line)
        .map_err(|_| CodecError::MalformedHeader("header is not valid UTF-8".to_string()))?;

    let tokens: Vec<&str> = line.split(DELIMITER).collect();
    if tokens[0] != MAGIC {
        return Err(CodecError::BadMagic {
            expected: MAGIC,
            found: tokens[0].to_string(),
        });
    }
    match tokens.len() {
        2 if !tokens[1].is_empty() => Ok(tokens[1]),
        1 | 2 => Err(CodecError::MalformedHeader(
            "expected color model name not found".to_string(),
        )),
        n => Err(CodecError::MalformedHeader(format!(
            "expected 2 tokens, found {n}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::BufReader;

    fn read(input: &[u8], limit: usize) -> Result<Vec<u8>, CodecError> {
        let mut reader = BufReader::new(input);
        read_header_line(&mut reader, limit)
    }

    #[test]
    fn test_write_header() {
        let mut buf = Vec::new();
        write_header(&mut buf, "v1").unwrap();
        assert_eq!(buf, b"bi,v1\n");
    }

    #[test]
    fn test_read_header_line_leaves_body() {
        let mut reader = BufReader::new(&b"bi,hex\n#FF0000FF\n"[..]);
        let line = read_header_line(&mut reader, DEFAULT_MAX_HEADER_LEN).unwrap();
        assert_eq!(line, b"bi,hex");

        let mut rest = String::new();
        reader.read_to_string(&mut rest).unwrap();
        assert_eq!(rest, "#FF0000FF\n");
    }

    #[test]
    fn test_read_header_line_strips_cr() {
        assert_eq!(read(b"bi,v1\r\nred\r\n", 128).unwrap(), b"bi,v1");
    }

    #[test]
    fn test_read_header_line_eof() {
        assert!(matches!(
            read(b"bi,v1", 128),
            Err(CodecError::TruncatedHeader { limit: 128 })
        ));
        assert!(matches!(
            read(b"", 128),
            Err(CodecError::TruncatedHeader { .. })
        ));
    }

    #[test]
    fn test_read_header_line_bound() {
        // 7 bytes including the line break fits a 7-byte bound, not a 6-byte one
        assert!(read(b"bi,v12\n", 7).is_ok());
        assert!(matches!(
            read(b"bi,v12\n", 6),
            Err(CodecError::TruncatedHeader { limit: 6 })
        ));

        let long = format!("bi,{}\n", "x".repeat(200));
        assert!(matches!(
            read(long.as_bytes(), DEFAULT_MAX_HEADER_LEN),
            Err(CodecError::TruncatedHeader { limit: 128 })
        ));
    }

    #[test]
    fn test_parse_header_ok() {
        assert_eq!(parse_header(b"bi,v1").unwrap(), "v1");
        assert_eq!(parse_header(b"bi,hex").unwrap(), "hex");
    }

    #[test]
    fn test_parse_header_bad_magic() {
        for line in [&b"magic,hex"[..], b"BI,v1", b"", b"biz"] {
            assert!(
                matches!(parse_header(line), Err(CodecError::BadMagic { .. })),
                "{:?}",
                String::from_utf8_lossy(line)
            );
        }
    }

    #[test]
    fn test_parse_header_malformed() {
        for line in [&b"bi"[..], b"bi,", b"bi,v1,extra", b"bi,,"] {
            assert!(
                matches!(parse_header(line), Err(CodecError::MalformedHeader(_))),
                "{:?}",
                String::from_utf8_lossy(line)
            );
        }
        assert!(matches!(
            parse_header(b"bi,\xff"),
            Err(CodecError::MalformedHeader(_))
        ));
    }
}
