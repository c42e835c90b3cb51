pub mod body_reader;
pub mod byte_source;
pub mod chunked_body_reader;
pub mod content_length_body_reader;
pub mod error;
pub mod head_reader;
pub mod line_reader;
pub mod response_reader;

pub use byte_source::{ByteSource, StreamSource};
pub use error::ReadResponseError;
pub use response_reader::{read_response, Http1ResponseReader};

//
//
//
pub use http::{StatusCode, Version};
pub use http1_response_spec;
pub use http1_response_spec::{config::ReadConfig, HeaderField, Headers, Response, StatusLine};
