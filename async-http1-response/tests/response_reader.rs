use std::error;

use futures_lite::future::block_on;
use futures_util::future::AbortHandle;
use http::StatusCode;

use async_http1_response::{
    http1_response_spec::{status_line::HttpVersion, ParseError},
    read_response, Http1ResponseReader, ReadConfig, ReadResponseError,
};

fn parse_error(err: ReadResponseError) -> ParseError {
    match err {
        ReadResponseError::Parse(err) => err,
        err => panic!("unexpected error {err:?}"),
    }
}

#[test]
fn simple() -> Result<(), Box<dyn error::Error>> {
    block_on(async {
        let mut source: &[u8] = b"HTTP/1.1 404 Not Found\r\n\r\n";

        let response = read_response(&mut source).await?;
        assert_eq!(response.status_line.version, HttpVersion::HTTP_11);
        assert_eq!(response.status_line.status_code, StatusCode::NOT_FOUND);
        assert_eq!(response.status_line.reason_phrase, "Not Found");
        assert!(response.headers.is_empty());
        assert!(response.body.is_empty());
        assert!(source.is_empty());

        Ok(())
    })
}

#[test]
fn folded_and_repeated_fields() -> Result<(), Box<dyn error::Error>> {
    block_on(async {
        let mut source: &[u8] = b"HTTP/1.1 200 OK\r\nX-Long: a\r\n b\r\nSet-Cookie: x=1\r\nSet-Cookie: y=2\r\nContent-Length: 0\r\n\r\n";

        let response = read_response(&mut source).await?;
        assert_eq!(response.headers.len(), 4);
        assert_eq!(response.headers.get("x-long"), Some("a b"));
        assert_eq!(
            response.headers.get_all("set-cookie").collect::<Vec<_>>(),
            vec!["x=1", "y=2"]
        );
        assert!(response.body.is_empty());

        Ok(())
    })
}

#[test]
fn malformed_status_line() {
    block_on(async {
        let mut source: &[u8] = b"GARBAGE\r\n\r\n";
        let err = read_response(&mut source).await.err().unwrap();
        assert_eq!(
            parse_error(err),
            ParseError::MalformedStatusLine("GARBAGE".to_owned())
        );

        let mut source: &[u8] = b"";
        let err = read_response(&mut source).await.err().unwrap();
        assert_eq!(
            parse_error(err),
            ParseError::MalformedStatusLine("".to_owned())
        );
    })
}

#[test]
fn malformed_header_line() {
    block_on(async {
        let mut source: &[u8] = b"HTTP/1.1 200 OK\r\nno colon here\r\n\r\n";
        let err = read_response(&mut source).await.err().unwrap();
        assert_eq!(
            parse_error(err),
            ParseError::MalformedHeaderBlock("no colon here".to_owned())
        );
    })
}

#[test]
fn content_length() -> Result<(), Box<dyn error::Error>> {
    block_on(async {
        let mut source: &[u8] = b"HTTP/1.1 200 OK\r\nContent-Length: 5\r\n\r\nhelloXXXX";

        let response = read_response(&mut source).await?;
        assert_eq!(response.body, b"hello");
        assert_eq!(source, b"XXXX");

        Ok(())
    })
}

#[test]
fn content_length_truncated() -> Result<(), Box<dyn error::Error>> {
    block_on(async {
        let mut source: &[u8] = b"HTTP/1.1 200 OK\r\nContent-Length: 5\r\n\r\nhe";
        let err = read_response(&mut source).await.err().unwrap();
        assert_eq!(
            parse_error(err),
            ParseError::Truncated {
                expected: 5,
                received: 2
            }
        );

        let mut config = ReadConfig::default();
        config.set_allow_truncated_body(true);
        let mut source: &[u8] = b"HTTP/1.1 200 OK\r\nContent-Length: 5\r\n\r\nhe";
        let response = Http1ResponseReader::with_config(config)
            .read(&mut source)
            .await?;
        assert_eq!(response.body, b"he");

        Ok(())
    })
}

#[test]
fn content_length_not_a_number() {
    block_on(async {
        let mut source: &[u8] = b"HTTP/1.1 200 OK\r\nContent-Length: abc\r\n\r\nhello";
        let err = read_response(&mut source).await.err().unwrap();
        assert_eq!(
            parse_error(err),
            ParseError::MalformedHeaderBlock("Content-Length: abc".to_owned())
        );

        let mut source: &[u8] = b"HTTP/1.1 200 OK\r\nContent-Length: +2\r\n\r\nhi";
        let err = read_response(&mut source).await.err().unwrap();
        assert_eq!(
            parse_error(err),
            ParseError::MalformedHeaderBlock("Content-Length: +2".to_owned())
        );
    })
}

#[test]
fn body_to_end_of_source() -> Result<(), Box<dyn error::Error>> {
    block_on(async {
        let mut source: &[u8] = b"HTTP/1.0 200 OK\r\nServer: x\r\n\r\nabc\r\ndef";

        let response = read_response(&mut source).await?;
        assert_eq!(response.status_line.version, HttpVersion::HTTP_10);
        assert_eq!(response.body, b"abc\r\ndef");
        assert!(source.is_empty());

        Ok(())
    })
}

#[test]
fn header_block_ended_by_end_of_source() -> Result<(), Box<dyn error::Error>> {
    block_on(async {
        let mut source: &[u8] = b"HTTP/1.1 200 OK\r\nA: b";

        let response = read_response(&mut source).await?;
        assert_eq!(response.headers.get("a"), Some("b"));
        assert!(response.body.is_empty());

        Ok(())
    })
}

#[test]
fn bodiless_status() -> Result<(), Box<dyn error::Error>> {
    block_on(async {
        let mut config = ReadConfig::default();
        config.set_empty_body_for_bodiless_status(true);
        let reader = Http1ResponseReader::with_config(config);

        let mut source: &[u8] =
            b"HTTP/1.1 204 No Content\r\n\r\nHTTP/1.1 200 OK\r\nContent-Length: 2\r\n\r\nhi";

        let response = reader.read(&mut source).await?;
        assert_eq!(response.status_line.status_code, StatusCode::NO_CONTENT);
        assert!(response.body.is_empty());

        let response = reader.read(&mut source).await?;
        assert_eq!(response.status_line.status_code, StatusCode::OK);
        assert_eq!(response.body, b"hi");

        let mut source: &[u8] = b"HTTP/1.1 304 Not Modified\r\nContent-Length: 5\r\n\r\nhello";
        let response = reader.read(&mut source).await?;
        assert!(response.body.is_empty());
        assert_eq!(source, b"hello");

        Ok(())
    })
}

#[test]
fn bodiless_status_framed_by_fields_by_default() -> Result<(), Box<dyn error::Error>> {
    block_on(async {
        let mut source: &[u8] = b"HTTP/1.1 304 Not Modified\r\nContent-Length: 5\r\n\r\nhello";

        let response = read_response(&mut source).await?;
        assert_eq!(response.status_line.status_code, StatusCode::NOT_MODIFIED);
        assert_eq!(response.body, b"hello");
        assert!(source.is_empty());

        Ok(())
    })
}

#[test]
fn limits() {
    block_on(async {
        let mut config = ReadConfig::default();
        config.set_line_max_len(8);
        let mut source: &[u8] = b"HTTP/1.1 200 OK\r\n\r\n";
        let err = Http1ResponseReader::with_config(config)
            .read(&mut source)
            .await
            .err()
            .unwrap();
        assert_eq!(parse_error(err), ParseError::TooLongLine(8));

        let mut config = ReadConfig::default();
        config.set_headers_max_len(10);
        let mut source: &[u8] = b"HTTP/1.1 200 OK\r\nA: bbbbbbbbbb\r\n\r\n";
        let err = Http1ResponseReader::with_config(config)
            .read(&mut source)
            .await
            .err()
            .unwrap();
        assert_eq!(parse_error(err), ParseError::TooLongHeaders(10));

        let mut config = ReadConfig::default();
        config.set_body_max_len(3);
        let reader = Http1ResponseReader::with_config(config);

        let mut source: &[u8] = b"HTTP/1.1 200 OK\r\nContent-Length: 5\r\n\r\nhello";
        let err = reader.read(&mut source).await.err().unwrap();
        assert_eq!(parse_error(err), ParseError::TooLongBody(3));

        let mut source: &[u8] = b"HTTP/1.1 200 OK\r\n\r\nhello";
        let err = reader.read(&mut source).await.err().unwrap();
        assert_eq!(parse_error(err), ParseError::TooLongBody(3));

        let mut source: &[u8] =
            b"HTTP/1.1 200 OK\r\nTransfer-Encoding: chunked\r\n\r\n2\r\nab\r\n2\r\ncd\r\n0\r\n\r\n";
        let err = reader.read(&mut source).await.err().unwrap();
        assert_eq!(parse_error(err), ParseError::TooLongBody(3));
    })
}

#[test]
fn abortable() -> Result<(), Box<dyn error::Error>> {
    block_on(async {
        let reader = Http1ResponseReader::new();

        let (abort_handle, abort_registration) = AbortHandle::new_pair();
        abort_handle.abort();
        let mut source: &[u8] = b"HTTP/1.1 200 OK\r\n\r\n";
        let err = reader
            .read_abortable(&mut source, abort_registration)
            .await
            .err()
            .unwrap();
        assert!(err.is_cancelled());

        let (_abort_handle, abort_registration) = AbortHandle::new_pair();
        let mut source: &[u8] = b"HTTP/1.1 200 OK\r\nContent-Length: 2\r\n\r\nhi";
        let response = reader.read_abortable(&mut source, abort_registration).await?;
        assert_eq!(response.body, b"hi");

        Ok(())
    })
}

#[test]
fn into_http_response() -> Result<(), Box<dyn error::Error>> {
    block_on(async {
        let mut source: &[u8] =
            b"HTTP/1.1 200 Okay\r\nContent-Type: text/plain\r\nContent-Length: 2\r\n\r\nhi";

        let response = read_response(&mut source).await?.into_http_response()?;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.version(), http::Version::HTTP_11);
        assert_eq!(response.headers().get("content-type").unwrap(), "text/plain");
        assert_eq!(response.body(), b"hi");

        Ok(())
    })
}
