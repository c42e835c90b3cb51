use futures_util::future::{AbortRegistration, Abortable};
use http1_response_spec::{
    body_framing::BodyFramingDetector as _, config::ReadConfig, Response,
};
use log::{debug, trace};

use crate::{
    body_reader::read_body,
    byte_source::ByteSource,
    error::ReadResponseError,
    head_reader::{read_header_block, read_status_line},
};

//
//
//
/// Assembles one response from a byte source: status line, header block, then body.
///
/// The source is left at the first byte after the response.
#[derive(Debug, Default, Clone)]
pub struct Http1ResponseReader {
    config: ReadConfig,
}

impl Http1ResponseReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ReadConfig) -> Self {
        Self { config }
    }

    pub fn get_config(&self) -> &ReadConfig {
        &self.config
    }

    pub async fn read<S>(&self, source: &mut S) -> Result<Response, ReadResponseError>
    where
        S: ByteSource + ?Sized,
    {
        let status_line = read_status_line(source, &self.config).await?;

        let mut headers = read_header_block(source, &self.config).await?;

        let body_framing = if self.config.get_empty_body_for_bodiless_status() {
            (&headers, &status_line.status_code).detect()?
        } else {
            headers.detect()?
        };
        trace!("detected body framing {body_framing:?}");

        let mut body = Vec::new();
        let trailers = read_body(source, &body_framing, &self.config, &mut body).await?;
        headers.extend(trailers);

        debug!(
            "read response {} with {} header fields and {} body bytes",
            status_line,
            headers.len(),
            body.len()
        );

        Ok(Response::new(status_line, headers, body))
    }

    /// Like [`read`](Self::read), but fails with [`ReadResponseError::Cancelled`] once the
    /// matching `AbortHandle` fires. Whatever was consumed from the source by then is lost.
    pub async fn read_abortable<S>(
        &self,
        source: &mut S,
        abort_registration: AbortRegistration,
    ) -> Result<Response, ReadResponseError>
    where
        S: ByteSource + ?Sized,
    {
        match Abortable::new(self.read(source), abort_registration).await {
            Ok(ret) => ret,
            Err(_) => {
                debug!("read response aborted");
                Err(ReadResponseError::Cancelled)
            }
        }
    }
}

/// Reads one response with the default [`ReadConfig`].
pub async fn read_response<S>(source: &mut S) -> Result<Response, ReadResponseError>
where
    S: ByteSource + ?Sized,
{
    Http1ResponseReader::new().read(source).await
}
