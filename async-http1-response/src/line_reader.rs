use http1_response_spec::{line::Line, sliding_window::SlidingWindowMask, ParseError};

use crate::{
    byte_source::{next_byte, ByteSource},
    error::ReadResponseError,
};

//
//
//
/// Reads up to and including the next CRLF, or to the end of the source.
///
/// Reaching the end without a CRLF is not an error; the bytes read so far form the line.
pub async fn read_line_bytes<S>(source: &mut S, max_len: usize) -> Result<Line, ReadResponseError>
where
    S: ByteSource + ?Sized,
{
    let mut window = SlidingWindowMask::crlf();
    let mut bytes = Vec::new();

    while let Some(byte) = next_byte(source).await? {
        if window.slide(&byte) {
            break;
        }
        bytes.push(byte);
        // The pending CR of a CRLF does not count against the limit.
        if bytes.len() > max_len.saturating_add(1) {
            return Err(ParseError::TooLongLine(max_len).into());
        }
    }

    // LF was never pushed, only the CR before it.
    let delimited = window.is_masked();
    if delimited {
        bytes.pop();
    }
    if bytes.len() > max_len {
        return Err(ParseError::TooLongLine(max_len).into());
    }

    Ok(Line::new(bytes, delimited))
}

pub async fn read_line<S>(source: &mut S, max_len: usize) -> Result<String, ReadResponseError>
where
    S: ByteSource + ?Sized,
{
    Ok(read_line_bytes(source, max_len).await?.to_text())
}

/// Reads one line and runs it through `grammar`, whose error carries the offending line.
pub async fn match_line<S, T, F>(
    source: &mut S,
    max_len: usize,
    grammar: F,
) -> Result<T, ReadResponseError>
where
    S: ByteSource + ?Sized,
    F: FnOnce(&str) -> Result<T, ParseError>,
{
    let line = read_line(source, max_len).await?;
    Ok(grammar(&line)?)
}

/// Like [`match_line`], but an exhausted source fails with
/// [`ParseError::UnexpectedEndOfSource`] naming `expecting` instead of reaching `grammar`.
pub async fn match_required_line<S, T, F>(
    source: &mut S,
    max_len: usize,
    expecting: &'static str,
    grammar: F,
) -> Result<T, ReadResponseError>
where
    S: ByteSource + ?Sized,
    F: FnOnce(&str) -> Result<T, ParseError>,
{
    let line = read_line_bytes(source, max_len).await?;
    if line.is_eof() {
        return Err(ParseError::UnexpectedEndOfSource(expecting).into());
    }
    Ok(grammar(&line.to_text())?)
}
