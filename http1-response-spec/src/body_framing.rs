use http::StatusCode;

use crate::{error::ParseError, headers::Headers};

//
//
//
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum BodyFraming {
    ContentLength(usize),
    Chunked,
    /// No declared length, the body runs to the end of the source.
    Neither,
}

pub trait BodyFramingDetector {
    fn detect(&self) -> Result<BodyFraming, ParseError>;
}

/// Framing from the fields alone.
impl BodyFramingDetector for Headers {
    fn detect(&self) -> Result<BodyFraming, ParseError> {
        if self.is_chunked() {
            return Ok(BodyFraming::Chunked);
        }

        match self.content_length()? {
            Some(n) => Ok(BodyFraming::ContentLength(n)),
            None => Ok(BodyFraming::Neither),
        }
    }
}

/// Like the fields alone, except that 1xx, 204 and 304 never carry a body.
impl BodyFramingDetector for (&Headers, &StatusCode) {
    fn detect(&self) -> Result<BodyFraming, ParseError> {
        let (headers, status_code) = *self;

        if status_code.is_informational()
            || status_code == &StatusCode::NO_CONTENT
            || status_code == &StatusCode::NOT_MODIFIED
        {
            return Ok(BodyFraming::ContentLength(0));
        }

        headers.detect()
    }
}
