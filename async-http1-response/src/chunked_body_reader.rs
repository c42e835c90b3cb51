use http1_response_spec::{chunk::ChunkDescriptor, config::ReadConfig, headers::Headers, ParseError};
use log::trace;

use crate::{
    body_reader::BodyReadOutput,
    byte_source::ByteSource,
    content_length_body_reader::ContentLengthBodyReader,
    error::ReadResponseError,
    head_reader::read_header_block,
    line_reader::{match_required_line, read_line_bytes},
};

//
//
//
#[derive(Default)]
pub struct ChunkedBodyReader {
    data_reader: ContentLengthBodyReader,
}

impl ChunkedBodyReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes chunks into `body_buf` up to the last chunk, then reads and returns the
    /// trailer fields.
    pub async fn read<S>(
        &mut self,
        source: &mut S,
        body_buf: &mut Vec<u8>,
        config: &ReadConfig,
    ) -> Result<Headers, ReadResponseError>
    where
        S: ByteSource + ?Sized,
    {
        loop {
            let chunk = match_required_line(
                source,
                config.get_line_max_len(),
                "chunk size line",
                ChunkDescriptor::parse,
            )
            .await?;
            trace!("parsed chunk {chunk:?}");

            if chunk.is_last() {
                break;
            }

            if body_buf.len().saturating_add(chunk.size) > config.get_body_max_len() {
                return Err(ParseError::TooLongBody(config.get_body_max_len()).into());
            }
            self.data_reader.set_length(chunk.size);
            if let BodyReadOutput::Partial(n) = self.data_reader.read(source, body_buf).await? {
                return Err(ParseError::Truncated {
                    expected: chunk.size,
                    received: n,
                }
                .into());
            }

            let line = read_line_bytes(source, config.get_line_max_len()).await?;
            if !line.is_empty() {
                return Err(ParseError::UnexpectedBytesAfterChunk(line.bytes).into());
            }
            if !line.delimited {
                return Err(ParseError::UnexpectedEndOfSource("CRLF after chunk data").into());
            }
        }

        let trailers = read_header_block(source, config).await?;
        trace!("parsed {} trailer fields", trailers.len());

        Ok(trailers)
    }
}
