use std::{error, fmt, io};

use crate::line::decode_line;

//
//
//
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ParseError {
    MalformedStatusLine(String),
    MalformedHeaderBlock(String),
    MalformedChunkSize(String),
    UnexpectedBytesAfterChunk(Vec<u8>),
    Truncated { expected: usize, received: usize },
    /// The source ended where more framing was required.
    UnexpectedEndOfSource(&'static str),
    TooLongLine(usize),
    TooLongHeaders(usize),
    TooLongBody(usize),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedStatusLine(line) => write!(f, "malformed status line: {line:?}"),
            Self::MalformedHeaderBlock(line) => write!(f, "malformed header line: {line:?}"),
            Self::MalformedChunkSize(line) => write!(f, "malformed chunk size line: {line:?}"),
            Self::UnexpectedBytesAfterChunk(bytes) => write!(
                f,
                "unexpected bytes after chunk data: {:?}",
                decode_line(bytes)
            ),
            Self::Truncated { expected, received } => write!(
                f,
                "source ended after {received} of {expected} declared bytes"
            ),
            Self::UnexpectedEndOfSource(expecting) => {
                write!(f, "source ended while expecting {expecting}")
            }
            Self::TooLongLine(max) => write!(f, "line exceeds {max} bytes"),
            Self::TooLongHeaders(max) => write!(f, "header block exceeds {max} bytes"),
            Self::TooLongBody(max) => write!(f, "body exceeds {max} bytes"),
        }
    }
}

impl error::Error for ParseError {}

impl From<ParseError> for io::Error {
    fn from(err: ParseError) -> io::Error {
        let kind = match err {
            ParseError::Truncated { .. } | ParseError::UnexpectedEndOfSource(_) => {
                io::ErrorKind::UnexpectedEof
            }
            _ => io::ErrorKind::InvalidData,
        };
        io::Error::new(kind, err.to_string())
    }
}
