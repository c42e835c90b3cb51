use std::io::{self, Write as _};

use crate::{
    body_framing::BodyFraming, line::encode_text, response::Response, COLON, CR, CRLF, LF, SP,
};

//
//
//
const CHUNK_DEFAULT_LEN: usize = 512;

//
//
//
/// Writes a [`Response`] back to wire bytes.
///
/// Header fields are written as they are; keeping `Content-Length` / `Transfer-Encoding`
/// consistent with `body_framing` is up to the caller.
#[derive(Debug, Clone)]
pub struct ResponseRenderer {
    chunk_len: usize,
}
impl Default for ResponseRenderer {
    fn default() -> Self {
        Self {
            chunk_len: CHUNK_DEFAULT_LEN,
        }
    }
}

impl ResponseRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_chunk_len(chunk_len: usize) -> Self {
        Self {
            chunk_len: chunk_len.max(1),
        }
    }

    pub fn render(
        &self,
        response: &Response,
        body_framing: &BodyFraming,
        buf: &mut Vec<u8>,
    ) -> io::Result<()> {
        self.render_head(response, buf)?;

        match body_framing {
            BodyFraming::ContentLength(n) => {
                if n != &response.body.len() {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!(
                            "Content-Length {} does not match body of {} bytes",
                            n,
                            response.body.len()
                        ),
                    ));
                }
                buf.extend_from_slice(&response.body);
            }
            BodyFraming::Chunked => self.render_chunked_body(&response.body, buf)?,
            BodyFraming::Neither => buf.extend_from_slice(&response.body),
        }

        Ok(())
    }

    pub fn render_head(&self, response: &Response, buf: &mut Vec<u8>) -> io::Result<()> {
        let status_line = &response.status_line;

        write!(
            buf,
            "{} {} ",
            status_line.version,
            status_line.status_code.as_str()
        )?;
        encode_line_text(&status_line.reason_phrase, buf)?;
        buf.extend_from_slice(CRLF);

        for field in &response.headers {
            encode_line_text(&field.name, buf)?;
            buf.extend_from_slice(&[COLON, SP]);
            encode_line_text(&field.value, buf)?;
            buf.extend_from_slice(CRLF);
        }

        buf.extend_from_slice(CRLF);

        Ok(())
    }

    /// Data chunks of at most `chunk_len` bytes, then the last chunk with no trailers.
    pub fn render_chunked_body(&self, body: &[u8], buf: &mut Vec<u8>) -> io::Result<()> {
        for chunk in body.chunks(self.chunk_len) {
            write!(buf, "{:X}", chunk.len())?;
            buf.extend_from_slice(CRLF);
            buf.extend_from_slice(chunk);
            buf.extend_from_slice(CRLF);
        }
        buf.extend_from_slice(b"0");
        buf.extend_from_slice(CRLF);
        buf.extend_from_slice(CRLF);

        Ok(())
    }
}

fn encode_line_text(text: &str, buf: &mut Vec<u8>) -> io::Result<()> {
    if text.contains(|c: char| c == char::from(CR) || c == char::from(LF)) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("line break in {text:?}"),
        ));
    }
    encode_text(text, buf).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{text:?} out of latin-1"),
        )
    })
}
