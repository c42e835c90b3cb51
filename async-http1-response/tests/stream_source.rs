use core::{
    pin::Pin,
    task::{Context, Poll},
    time::Duration,
};
use std::{error, io};

use async_sleep::impl_async_io::Timer;
use futures_io::AsyncRead;
use futures_lite::{future::block_on, io::Cursor};
use http::StatusCode;

use async_http1_response::{
    http1_response_spec::ParseError, read_response, ReadResponseError, StreamSource,
};

/// Never yields a byte.
struct Stalled;

impl AsyncRead for Stalled {
    fn poll_read(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        _buf: &mut [u8],
    ) -> Poll<io::Result<usize>> {
        Poll::Pending
    }
}

#[test]
fn responses_in_sequence() -> Result<(), Box<dyn error::Error>> {
    block_on(async {
        let stream = Cursor::new(
            b"HTTP/1.1 200 OK\r\nContent-Length: 2\r\n\r\nhiHTTP/1.1 404 Not Found\r\nTransfer-Encoding: chunked\r\n\r\n3\r\nabc\r\n0\r\n\r\n"
                .to_vec(),
        );
        let mut source = StreamSource::<_, Timer>::with_capacity(7, stream);

        let response = read_response(&mut source).await?;
        assert_eq!(response.status_line.status_code, StatusCode::OK);
        assert_eq!(response.body, b"hi");

        let response = read_response(&mut source).await?;
        assert_eq!(response.status_line.status_code, StatusCode::NOT_FOUND);
        assert_eq!(response.body, b"abc");
        assert!(!source.has_unparsed_bytes());

        let err = read_response(&mut source).await.err().unwrap();
        assert_eq!(
            err.parse_error(),
            Some(&ParseError::MalformedStatusLine("".to_owned()))
        );

        Ok(())
    })
}

#[test]
fn leftover_bytes() -> Result<(), Box<dyn error::Error>> {
    block_on(async {
        let stream = Cursor::new(b"HTTP/1.1 200 OK\r\nContent-Length: 2\r\n\r\nhiXYZ".to_vec());
        let mut source = StreamSource::<_, Timer>::new(stream);

        let response = read_response(&mut source).await?;
        assert_eq!(response.body, b"hi");
        assert!(source.has_unparsed_bytes());
        assert_eq!(source.unparsed_bytes(), b"XYZ");

        let (_stream, leftover) = source.into_parts();
        assert_eq!(leftover, b"XYZ");

        Ok(())
    })
}

#[test]
fn into_inner() -> Result<(), Box<dyn error::Error>> {
    block_on(async {
        let stream = Cursor::new(b"HTTP/1.1 200 OK\r\nContent-Length: 2\r\n\r\nhiXYZ".to_vec());
        let mut source = StreamSource::<_, Timer>::new(stream);
        read_response(&mut source).await?;
        assert!(source.into_inner().is_err());

        let stream = Cursor::new(b"HTTP/1.1 200 OK\r\nContent-Length: 2\r\n\r\nhi".to_vec());
        let mut source = StreamSource::<_, Timer>::new(stream);
        read_response(&mut source).await?;
        let stream = source.into_inner()?;
        assert_eq!(stream.position(), 40);

        Ok(())
    })
}

#[test]
fn read_timeout() {
    block_on(async {
        let mut source = StreamSource::<_, Timer>::new(Stalled);
        source.set_read_timeout(Duration::from_millis(50));
        assert_eq!(source.get_read_timeout(), Duration::from_millis(50));

        match read_response(&mut source).await {
            Err(ReadResponseError::ReadError(err)) => {
                assert_eq!(err.kind(), io::ErrorKind::TimedOut)
            }
            ret => panic!("unexpected {ret:?}"),
        }
    })
}
