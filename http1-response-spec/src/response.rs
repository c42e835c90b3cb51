use std::io;

use http::{response::Parts as ResponseParts, HeaderName, HeaderValue, Response as HttpResponse};

use crate::{headers::Headers, line::encode_text, status_line::StatusLine, ReasonPhrase};

//
//
//
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Response {
    pub status_line: StatusLine,
    pub headers: Headers,
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(status_line: StatusLine, headers: Headers, body: Vec<u8>) -> Self {
        Self {
            status_line,
            headers,
            body,
        }
    }

    /// Fails for versions and header fields `http` cannot represent. Repeated fields are
    /// appended, and the reason phrase is kept in the extensions as [`ReasonPhrase`].
    pub fn to_response_parts(&self) -> io::Result<ResponseParts> {
        let (mut parts, _) = HttpResponse::new(()).into_parts();
        parts.status = self.status_line.status_code;
        parts.version = self.status_line.version.to_version().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("unsupported version {}", self.status_line.version),
            )
        })?;
        for field in &self.headers {
            let name = HeaderName::from_bytes(field.name.as_bytes())
                .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
            let mut value_bytes = Vec::with_capacity(field.value.len());
            encode_text(&field.value, &mut value_bytes).ok_or_else(|| {
                io::Error::new(io::ErrorKind::InvalidInput, "header value out of latin-1")
            })?;
            let value = HeaderValue::from_bytes(&value_bytes)
                .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
            parts.headers.append(name, value);
        }
        let reason_phrase: ReasonPhrase = if self.status_line.reason_phrase.is_empty() {
            None
        } else {
            let mut buf = Vec::with_capacity(self.status_line.reason_phrase.len());
            encode_text(&self.status_line.reason_phrase, &mut buf).ok_or_else(|| {
                io::Error::new(io::ErrorKind::InvalidInput, "reason phrase out of latin-1")
            })?;
            Some(buf)
        };
        parts.extensions.insert(reason_phrase);
        Ok(parts)
    }

    pub fn into_http_response(self) -> io::Result<HttpResponse<Vec<u8>>> {
        let parts = self.to_response_parts()?;
        Ok(HttpResponse::from_parts(parts, self.body))
    }
}
