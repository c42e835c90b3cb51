pub mod body_framing;
pub mod chunk;
pub mod config;
pub mod error;
pub mod header_block;
pub mod headers;
pub mod line;
pub mod response;
pub mod response_renderer;
pub mod sliding_window;
pub mod status_line;

pub use http;

pub use error::ParseError;
pub use headers::{HeaderField, Headers};
pub use response::Response;
pub use status_line::{HttpVersion, StatusLine};

//
//
//
pub const SP: u8 = b' ';
pub const HTAB: u8 = b'\t';
pub const HTTP_VERSION_PREFIX: &[u8] = b"HTTP/";
pub const COLON: u8 = b':';
pub const SEMICOLON: u8 = b';';
pub const CR: u8 = b'\r';
pub const LF: u8 = b'\n';
pub const CRLF: &[u8] = b"\r\n";

pub type ReasonPhrase = Option<Vec<u8>>;

pub const CHUNKED: &str = "chunked";
