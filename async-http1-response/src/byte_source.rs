use core::{marker::PhantomData, mem, time::Duration};
use std::io::{Error as IoError, ErrorKind as IoErrorKind};

use async_sleep::{rw::AsyncReadWithTimeoutExt as _, Sleepble};
use async_trait::async_trait;
use futures_io::AsyncRead;

//
//
//
const BUF_DEFAULT_CAPACITY: usize = 4096;

//
//
//
/// A pull-based producer of bytes.
///
/// `buffered_next` hands out bytes already in memory and never suspends; `fill_buf` is the
/// only suspension point and returns `Ok(0)` once the data has definitely ended.
#[async_trait]
pub trait ByteSource {
    fn buffered_next(&mut self) -> Option<u8>;

    async fn fill_buf(&mut self) -> Result<usize, IoError>;
}

/// Advances the source by one byte, `Ok(None)` at end of data.
pub async fn next_byte<S>(source: &mut S) -> Result<Option<u8>, IoError>
where
    S: ByteSource + ?Sized,
{
    if let Some(byte) = source.buffered_next() {
        return Ok(Some(byte));
    }
    if source.fill_buf().await? == 0 {
        return Ok(None);
    }
    Ok(source.buffered_next())
}

//
//
//
#[async_trait]
impl<'a> ByteSource for &'a [u8] {
    fn buffered_next(&mut self) -> Option<u8> {
        let (first, rest) = self.split_first()?;
        *self = rest;
        Some(*first)
    }

    async fn fill_buf(&mut self) -> Result<usize, IoError> {
        Ok(self.len())
    }
}

//
//
//
/// Reads from an [`AsyncRead`] into an owned buffer, one read with timeout at a time.
///
/// Bytes read past the end of a response stay in the buffer, so the next response on the
/// same connection starts from them.
pub struct StreamSource<S, SLEEP> {
    stream: S,
    buf: Vec<u8>,
    offset_read: usize,
    offset_parsed: usize,
    read_timeout: Duration,
    phantom: PhantomData<SLEEP>,
}

impl<S, SLEEP> StreamSource<S, SLEEP>
where
    S: AsyncRead + Unpin,
    SLEEP: Sleepble,
{
    pub fn new(stream: S) -> Self {
        Self::with_capacity(BUF_DEFAULT_CAPACITY, stream)
    }

    pub fn with_capacity(buf_capacity: usize, stream: S) -> Self {
        Self {
            stream,
            buf: vec![0u8; buf_capacity.max(1)],
            offset_read: 0,
            offset_parsed: 0,
            read_timeout: Duration::from_secs(5),
            phantom: PhantomData,
        }
    }

    pub fn set_read_timeout(&mut self, dur: Duration) {
        self.read_timeout = dur;
    }
    pub fn get_read_timeout(&self) -> Duration {
        self.read_timeout
    }

    pub fn has_unparsed_bytes(&self) -> bool {
        self.offset_read > self.offset_parsed
    }
    pub fn unparsed_bytes(&self) -> &[u8] {
        &self.buf[self.offset_parsed..self.offset_read]
    }
    pub fn discard_unparsed_bytes(&mut self) {
        self.offset_read = 0;
        self.offset_parsed = 0;
    }

    pub fn get_ref(&self) -> &S {
        &self.stream
    }
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.stream
    }

    /// Fails when read-ahead bytes would be lost.
    pub fn into_inner(self) -> Result<S, IoError> {
        if self.has_unparsed_bytes() {
            return Err(IoError::new(
                IoErrorKind::Other,
                "unparsed bytes would be dropped",
            ));
        }
        Ok(self.stream)
    }

    pub fn into_parts(mut self) -> (S, Vec<u8>) {
        let mut buf = mem::take(&mut self.buf);
        buf.truncate(self.offset_read);
        buf.drain(..self.offset_parsed);
        (self.stream, buf)
    }
}

#[async_trait]
impl<S, SLEEP> ByteSource for StreamSource<S, SLEEP>
where
    S: AsyncRead + Unpin + Send,
    SLEEP: Sleepble + Send,
{
    fn buffered_next(&mut self) -> Option<u8> {
        if !self.has_unparsed_bytes() {
            return None;
        }
        let byte = self.buf[self.offset_parsed];
        self.offset_parsed += 1;
        Some(byte)
    }

    async fn fill_buf(&mut self) -> Result<usize, IoError> {
        if self.has_unparsed_bytes() {
            return Ok(self.offset_read - self.offset_parsed);
        }
        self.discard_unparsed_bytes();

        let n_read = self
            .stream
            .read_with_timeout::<SLEEP>(&mut self.buf[..], self.read_timeout)
            .await?;
        self.offset_read = n_read;
        Ok(n_read)
    }
}
