use crate::{HTAB, SP};

//
//
//
/// One line taken off a byte source, without its CRLF.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct Line {
    pub bytes: Vec<u8>,
    /// `false` when the source ended before a CRLF was seen.
    pub delimited: bool,
}

impl Line {
    pub fn new(bytes: Vec<u8>, delimited: bool) -> Self {
        Self { bytes, delimited }
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// End of source with nothing read.
    pub fn is_eof(&self) -> bool {
        !self.delimited && self.bytes.is_empty()
    }

    pub fn to_text(&self) -> String {
        decode_line(&self.bytes)
    }
}

/// Decodes line bytes as ISO-8859-1, which is the identity on ASCII and never fails.
pub fn decode_line(bytes: &[u8]) -> String {
    bytes.iter().map(|b| char::from(*b)).collect()
}

/// Inverse of [`decode_line`], `None` if a char lies outside ISO-8859-1.
pub fn encode_text(text: &str, buf: &mut Vec<u8>) -> Option<()> {
    for c in text.chars() {
        buf.push(u8::try_from(u32::from(c)).ok()?);
    }
    Some(())
}

pub fn is_ows(c: char) -> bool {
    c == char::from(SP) || c == char::from(HTAB)
}

pub fn trim_ows(s: &str) -> &str {
    s.trim_matches(is_ows)
}
