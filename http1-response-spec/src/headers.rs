use core::slice;

use http::header::{CONTENT_LENGTH, TRANSFER_ENCODING};

use crate::{error::ParseError, line::trim_ows, CHUNKED};

//
//
//
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct HeaderField {
    pub name: String,
    pub value: String,
}

impl HeaderField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

//
//
//
/// Header fields in arrival order. Repeated names stay separate entries.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct Headers {
    fields: Vec<HeaderField>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: HeaderField) {
        self.fields.push(field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, HeaderField> {
        self.fields.iter()
    }

    /// First value for `name`, compared case-insensitively.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.name.eq_ignore_ascii_case(name))
            .map(|field| field.value.as_str())
    }

    pub fn get_all<'a, 'b>(&'a self, name: &'b str) -> impl Iterator<Item = &'a str> + 'b
    where
        'a: 'b,
    {
        self.fields
            .iter()
            .filter(move |field| field.name.eq_ignore_ascii_case(name))
            .map(|field| field.value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// `Ok(None)` when absent; the first field wins when repeated. The value must be
    /// `1*DIGIT`.
    pub fn content_length(&self) -> Result<Option<usize>, ParseError> {
        let value = match self.get(CONTENT_LENGTH.as_str()) {
            Some(value) => value,
            None => return Ok(None),
        };
        let malformed = || ParseError::MalformedHeaderBlock(format!("Content-Length: {value}"));

        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        value.parse().map(Some).map_err(|_| malformed())
    }

    /// Whether any Transfer-Encoding field lists the chunked coding.
    pub fn is_chunked(&self) -> bool {
        self.get_all(TRANSFER_ENCODING.as_str()).any(|value| {
            value
                .split(',')
                .any(|coding| trim_ows(coding).eq_ignore_ascii_case(CHUNKED))
        })
    }
}

impl Extend<HeaderField> for Headers {
    fn extend<I: IntoIterator<Item = HeaderField>>(&mut self, iter: I) {
        self.fields.extend(iter)
    }
}

impl FromIterator<HeaderField> for Headers {
    fn from_iter<I: IntoIterator<Item = HeaderField>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Headers {
    type Item = HeaderField;
    type IntoIter = std::vec::IntoIter<HeaderField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a Headers {
    type Item = &'a HeaderField;
    type IntoIter = slice::Iter<'a, HeaderField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
