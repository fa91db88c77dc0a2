//! Text decoding schemes for file content
//!
//! Files are read as raw bytes and decoded under a configured scheme so that
//! an undecodable file can be classified as inaccessible rather than
//! producing mangled output.

/// Supported text decoding schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// UTF-8 (the default). Decoding fails on invalid byte sequences.
    #[default]
    Utf8,
    /// ISO-8859-1. Every byte maps to the code point of the same value,
    /// so decoding never fails.
    Latin1,
}

impl Encoding {
    /// Decode raw file bytes into a string, or `None` if the bytes are not
    /// valid under this scheme.
    pub fn decode(self, bytes: Vec<u8>) -> Option<String> {
        match self {
            Encoding::Utf8 => String::from_utf8(bytes).ok(),
            Encoding::Latin1 => Some(bytes.into_iter().map(char::from).collect()),
        }
    }
}
