//! Plain vs. gzip-wrapped stream detection.

use std::path::Path;

use super::header::{COMPRESSED_MAGIC, DELIMITER, MAGIC};

/// File extension for plain streams.
pub const BI_EXTENSION: &str = "bi";

/// File extension for gzip-wrapped streams.
pub const BIZ_EXTENSION: &str = "biz";

/// On-disk flavor of a BI stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// `bi,<model>` header followed by text rows
    Plain,
    /// `biz` line followed by a gzip member holding a plain stream
    Compressed,
}

impl Format {
    /// Identify a stream from its first bytes.
    ///
    /// Returns `None` if the prefix is neither a compressed wrapper line
    /// (`biz\n` or `biz\r\n`, as the decoder accepts both) nor the start of a
    /// plain header. Five bytes are enough to decide.
    ///
    /// ```
    /// use bi::Format;
    ///
    /// assert_eq!(Format::detect(b"bi,v1\nred\n"), Some(Format::Plain));
    /// assert_eq!(Format::detect(b"biz\n\x1f\x8b"), Some(Format::Compressed));
    /// assert_eq!(Format::detect(b"\x89PNG"), None);
    /// ```
    pub fn detect(prefix: &[u8]) -> Option<Self> {
        let magic = MAGIC.as_bytes();
        let compressed = COMPRESSED_MAGIC.as_bytes();

        if let Some(rest) = prefix.strip_prefix(compressed) {
            if rest.starts_with(b"\n") || rest.starts_with(b"\r\n") {
                return Some(Format::Compressed);
            }
        }
        if prefix.starts_with(magic) && prefix.get(magic.len()) == Some(&(DELIMITER as u8)) {
            return Some(Format::Plain);
        }
        None
    }

    /// Pick a format from a file extension (case-insensitive).
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?;
        if ext.eq_ignore_ascii_case(BIZ_EXTENSION) {
            Some(Format::Compressed)
        } else if ext.eq_ignore_ascii_case(BI_EXTENSION) {
            Some(Format::Plain)
        } else {
            None
        }
    }

    /// The file extension for this format, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Format::Plain => BI_EXTENSION,
            Format::Compressed => BIZ_EXTENSION,
        }
    }

    /// The magic token opening a stream of this format.
    pub fn magic(self) -> &'static str {
        match self {
            Format::Plain => MAGIC,
            Format::Compressed => COMPRESSED_MAGIC,
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Plain => write!(f, "plain"),
            Format::Compressed => write!(f, "compressed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect() {
        assert_eq!(Format::detect(b"bi,hex\n"), Some(Format::Plain));
        assert_eq!(Format::detect(b"biz\n"), Some(Format::Compressed));
        assert_eq!(Format::detect(b"biz\r\n"), Some(Format::Compressed));
        assert_eq!(Format::detect(b"biz\r"), None);
        assert_eq!(Format::detect(b"bi"), None);
        assert_eq!(Format::detect(b""), None);
        assert_eq!(Format::detect(b"bizarre,v1\n"), None);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(Format::from_path("out/cat.bi"), Some(Format::Plain));
        assert_eq!(Format::from_path("cat.BIZ"), Some(Format::Compressed));
        assert_eq!(Format::from_path("cat.png"), None);
        assert_eq!(Format::from_path("cat"), None);
    }

    #[test]
    fn test_extension_and_magic() {
        assert_eq!(Format::Plain.extension(), "bi");
        assert_eq!(Format::Compressed.extension(), "biz");
        assert_eq!(Format::Plain.magic(), "bi");
        assert_eq!(Format::Compressed.magic(), "biz");
        assert_eq!(Format::Compressed.to_string(), "compressed");
    }
}
