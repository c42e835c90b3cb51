use core::fmt;
use std::{error, io};

use http1_response_spec::ParseError;

//
//
//
#[derive(Debug)]
pub enum ReadResponseError {
    /// The source failed to produce bytes, including `ErrorKind::TimedOut`.
    ReadError(io::Error),
    Parse(ParseError),
    /// The read was aborted from outside before the response was complete.
    Cancelled,
}

impl fmt::Display for ReadResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadError(err) => write!(f, "read error: {err}"),
            Self::Parse(err) => write!(f, "{err}"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl error::Error for ReadResponseError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::ReadError(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Cancelled => None,
        }
    }
}

impl From<io::Error> for ReadResponseError {
    fn from(err: io::Error) -> Self {
        Self::ReadError(err)
    }
}

impl From<ParseError> for ReadResponseError {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

impl From<ReadResponseError> for io::Error {
    fn from(err: ReadResponseError) -> io::Error {
        match err {
            ReadResponseError::ReadError(err) => err,
            ReadResponseError::Parse(err) => err.into(),
            ReadResponseError::Cancelled => io::Error::new(io::ErrorKind::Interrupted, "cancelled"),
        }
    }
}

impl ReadResponseError {
    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
