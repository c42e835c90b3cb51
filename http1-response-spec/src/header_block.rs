use crate::{
    error::ParseError,
    headers::{HeaderField, Headers},
    line::{is_ows, trim_ows},
};

//
//
//
#[derive(Debug, PartialEq, Eq)]
pub enum HeaderLine<'a> {
    /// Obsolete line folding, the continuation text with OWS trimmed. A blank continuation
    /// still adds its separating space.
    Folded(&'a str),
    Field { name: &'a str, value: &'a str },
}

impl<'a> HeaderLine<'a> {
    /// Classifies one non-empty header line, CRLF already stripped.
    pub fn parse(line: &'a str) -> Result<Self, ParseError> {
        if line.starts_with(is_ows) {
            return Ok(Self::Folded(trim_ows(line)));
        }

        let (name, value) = line
            .split_once(':')
            .ok_or_else(|| ParseError::MalformedHeaderBlock(line.to_owned()))?;
        let name = trim_ows(name);
        if name.is_empty() {
            return Err(ParseError::MalformedHeaderBlock(line.to_owned()));
        }

        Ok(Self::Field {
            name,
            value: trim_ows(value),
        })
    }
}

//
//
//
/// Accumulates header lines into fields, joining folded lines onto the field in progress.
#[derive(Debug, Default)]
pub struct HeaderBlockParser {
    headers: Headers,
    current: Option<HeaderField>,
}

impl HeaderBlockParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_line(&mut self, line: &str) -> Result<(), ParseError> {
        match HeaderLine::parse(line)? {
            HeaderLine::Folded(continuation) => {
                let field = self
                    .current
                    .as_mut()
                    .ok_or_else(|| ParseError::MalformedHeaderBlock(line.to_owned()))?;
                field.value.push(' ');
                field.value.push_str(continuation);
            }
            HeaderLine::Field { name, value } => {
                self.commit();
                self.current = Some(HeaderField::new(name, value));
            }
        }

        Ok(())
    }

    fn commit(&mut self) {
        if let Some(field) = self.current.take() {
            self.headers.push(field);
        }
    }

    pub fn finish(mut self) -> Headers {
        self.commit();
        self.headers
    }
}
