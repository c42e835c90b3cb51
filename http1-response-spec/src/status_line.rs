use core::fmt;

use http::{StatusCode, Version};

use crate::{error::ParseError, HTTP_VERSION_PREFIX, SP};

//
//
//
const STATUS_CODE_LEN: usize = 3;

//
//
//
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct HttpVersion {
    pub major: u8,
    pub minor: u8,
}

impl HttpVersion {
    pub const HTTP_10: Self = Self::new(1, 0);
    pub const HTTP_11: Self = Self::new(1, 1);

    pub const fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }

    pub fn to_version(&self) -> Option<Version> {
        match (self.major, self.minor) {
            (0, 9) => Some(Version::HTTP_09),
            (1, 0) => Some(Version::HTTP_10),
            (1, 1) => Some(Version::HTTP_11),
            (2, 0) => Some(Version::HTTP_2),
            (3, 0) => Some(Version::HTTP_3),
            _ => None,
        }
    }
}

impl fmt::Display for HttpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP/{}.{}", self.major, self.minor)
    }
}

//
//
//
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct StatusLine {
    pub version: HttpVersion,
    pub status_code: StatusCode,
    pub reason_phrase: String,
}

impl StatusLine {
    /// Parses `HTTP/<digit>.<digit> SP <3-digit-code> SP <reason-phrase>`, CRLF already
    /// stripped.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let malformed = || ParseError::MalformedStatusLine(line.to_owned());

        let bytes = line.as_bytes();
        let rest = bytes
            .strip_prefix(HTTP_VERSION_PREFIX)
            .ok_or_else(malformed)?;

        let (version, rest) = match rest {
            [major, b'.', minor, SP, rest @ ..]
                if major.is_ascii_digit() && minor.is_ascii_digit() =>
            {
                (HttpVersion::new(major - b'0', minor - b'0'), rest)
            }
            _ => return Err(malformed()),
        };

        if rest.len() < STATUS_CODE_LEN + 1 || rest[STATUS_CODE_LEN] != SP {
            return Err(malformed());
        }
        let code = &rest[..STATUS_CODE_LEN];
        if !code.iter().all(u8::is_ascii_digit) {
            return Err(malformed());
        }
        let status_code = StatusCode::from_bytes(code).map_err(|_| malformed())?;
        if !(100..=599).contains(&status_code.as_u16()) {
            return Err(malformed());
        }

        // Everything up to here is ASCII, so the offset is a char boundary.
        let reason_phrase = line[HTTP_VERSION_PREFIX.len() + 4 + STATUS_CODE_LEN + 1..].to_owned();

        Ok(Self {
            version,
            status_code,
            reason_phrase,
        })
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.version,
            self.status_code.as_str(),
            self.reason_phrase
        )
    }
}
