use http1_response_spec::{
    body_framing::BodyFraming, config::ReadConfig, headers::Headers, ParseError,
};
use log::warn;

use crate::{
    byte_source::{next_byte, ByteSource},
    chunked_body_reader::ChunkedBodyReader,
    content_length_body_reader::ContentLengthBodyReader,
    error::ReadResponseError,
};

//
//
//
const BODY_RESERVE_MAX_LEN: usize = 65536;

//
//
//
#[derive(Debug, PartialEq, Eq)]
pub enum BodyReadOutput {
    Completed(usize),
    Partial(usize),
}

//
//
//
/// Reads the body selected by `body_framing` into `body_buf` and returns any trailer fields.
pub async fn read_body<S>(
    source: &mut S,
    body_framing: &BodyFraming,
    config: &ReadConfig,
    body_buf: &mut Vec<u8>,
) -> Result<Headers, ReadResponseError>
where
    S: ByteSource + ?Sized,
{
    match body_framing {
        BodyFraming::Chunked => ChunkedBodyReader::new().read(source, body_buf, config).await,
        BodyFraming::ContentLength(content_length) => {
            let content_length = *content_length;
            if content_length > config.get_body_max_len() {
                return Err(ParseError::TooLongBody(config.get_body_max_len()).into());
            }

            body_buf.reserve(content_length.min(BODY_RESERVE_MAX_LEN));
            let mut p = ContentLengthBodyReader::new();
            p.set_length(content_length);
            if let BodyReadOutput::Partial(n) = p.read(source, body_buf).await? {
                if !config.get_allow_truncated_body() {
                    return Err(ParseError::Truncated {
                        expected: content_length,
                        received: n,
                    }
                    .into());
                }
                warn!("body truncated at {n} of {content_length} bytes");
            }

            Ok(Headers::new())
        }
        BodyFraming::Neither => {
            read_to_end(source, config.get_body_max_len(), body_buf).await?;

            Ok(Headers::new())
        }
    }
}

/// Appends everything up to the end of the source.
pub async fn read_to_end<S>(
    source: &mut S,
    max_len: usize,
    body_buf: &mut Vec<u8>,
) -> Result<usize, ReadResponseError>
where
    S: ByteSource + ?Sized,
{
    let mut n = 0_usize;

    while let Some(byte) = next_byte(source).await? {
        if n >= max_len {
            return Err(ParseError::TooLongBody(max_len).into());
        }
        body_buf.push(byte);
        n += 1;
    }

    Ok(n)
}
