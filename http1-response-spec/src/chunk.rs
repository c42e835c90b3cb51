use crate::{error::ParseError, SEMICOLON};

//
//
//
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ChunkDescriptor {
    pub size: usize,
    pub has_extension: bool,
}

impl ChunkDescriptor {
    /// Parses `<hex-digits>[;extension]`, CRLF already stripped.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let malformed = || ParseError::MalformedChunkSize(line.to_owned());

        let (size, has_extension) = match line.as_bytes().iter().position(|b| b == &SEMICOLON) {
            Some(i) => (&line[..i], true),
            None => (line, false),
        };
        if size.is_empty() || !size.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(malformed());
        }
        let size = usize::from_str_radix(size, 16).map_err(|_| malformed())?;

        Ok(Self {
            size,
            has_extension,
        })
    }

    /// The zero-size chunk that ends the body. A zero-size chunk carrying an extension
    /// does not.
    pub fn is_last(&self) -> bool {
        self.size == 0 && !self.has_extension
    }
}
