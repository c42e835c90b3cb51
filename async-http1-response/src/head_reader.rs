use http1_response_spec::{
    config::ReadConfig, header_block::HeaderBlockParser, headers::Headers, ParseError, StatusLine,
};
use log::{trace, warn};

use crate::{
    byte_source::ByteSource,
    error::ReadResponseError,
    line_reader::{match_line, read_line_bytes},
};

//
//
//
pub async fn read_status_line<S>(
    source: &mut S,
    config: &ReadConfig,
) -> Result<StatusLine, ReadResponseError>
where
    S: ByteSource + ?Sized,
{
    let status_line = match_line(source, config.get_line_max_len(), StatusLine::parse).await?;
    trace!("parsed status line {status_line}");

    Ok(status_line)
}

/// Reads header lines up to the empty line that ends the block.
///
/// The end of the source also ends the block. Used for both the head and the trailers of a
/// chunked body.
pub async fn read_header_block<S>(
    source: &mut S,
    config: &ReadConfig,
) -> Result<Headers, ReadResponseError>
where
    S: ByteSource + ?Sized,
{
    let mut p = HeaderBlockParser::new();
    let mut block_len = 0_usize;

    loop {
        let line = read_line_bytes(source, config.get_line_max_len()).await?;

        block_len += line.bytes.len() + 2;
        if block_len > config.get_headers_max_len() {
            return Err(ParseError::TooLongHeaders(config.get_headers_max_len()).into());
        }

        if line.is_empty() {
            if !line.delimited {
                warn!("header block ended by end of source");
            }
            break;
        }

        let text = line.to_text();
        trace!("parsed header line {text:?}");
        p.push_line(&text)?;

        if !line.delimited {
            warn!("header block ended by end of source");
            break;
        }
    }

    Ok(p.finish())
}
