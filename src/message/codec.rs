use std::fmt;
use std::str::FromStr;

use crate::message::{HeaderList, MessageParseError, MessageParser, produce_message};

/// Line length limit of RFC 5321 text line, CRLF included.
pub const RFC5322_LINE_LENGTH: usize = 1000;

/// Line length RFC 5322 recommends to fold at, CRLF included.
pub const RFC5322_RECOMMENDED_LINE_LENGTH: usize = 80;

/// Message is ordered list of headers and a body.
///
/// Raw data is turned into message with `parse` and back with `produce`.
/// Headers are US-ASCII text, body is kept as bytes and is never validated.
/// `max_line_length` limits length of lines while parsing and is folding width while producing.
/// Zero means no limit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Message {
    headers: HeaderList,
    body: Vec<u8>,
    max_line_length: usize,
}

impl Message {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_line_length(max_line_length: usize) -> Self {
        Self {
            max_line_length,
            ..Self::default()
        }
    }

    /// parse replaces headers and body with ones found in text.
    /// On error message is left untouched.
    #[inline]
    pub fn parse(&mut self, text: &str) -> Result<(), MessageParseError> {
        self.parse_bytes(text.as_bytes())
    }

    /// parse_bytes works like `parse` but accepts raw bytes.
    /// Body may contain any bytes, header lines have to be US-ASCII.
    pub fn parse_bytes(&mut self, data: &[u8]) -> Result<(), MessageParseError> {
        let parsed = MessageParser::parse(data, self.max_line_length)?;
        self.headers = parsed.headers;
        self.body = parsed.body;
        Ok(())
    }

    /// produce renders message as CRLF terminated data, folded when line length is set.
    pub fn produce(&self) -> Vec<u8> {
        produce_message(&self.headers, &self.body, self.max_line_length)
    }

    #[inline]
    pub fn get_headers(&self) -> &HeaderList {
        &self.headers
    }

    #[inline]
    pub fn has_header(&self, name: &str) -> bool {
        self.headers.contains(name)
    }

    /// get_header_value returns value of first header with given name.
    #[inline]
    pub fn get_header_value(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>, replace: bool) {
        self.headers.set(name, value, replace)
    }

    pub fn remove_header(&mut self, name: &str) {
        self.headers.remove(name);
    }

    #[inline]
    pub fn get_body(&self) -> &[u8] {
        &self.body
    }

    /// get_body_str returns body if it's valid UTF-8.
    pub fn get_body_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }

    pub fn set_body(&mut self, body: impl Into<Vec<u8>>) {
        self.body = body.into();
    }

    #[inline]
    pub fn get_line_length(&self) -> usize {
        self.max_line_length
    }

    /// set_line_length affects following parse and produce calls only.
    pub fn set_line_length(&mut self, max_line_length: usize) {
        self.max_line_length = max_line_length;
    }
}

impl FromStr for Message {
    type Err = MessageParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut msg = Message::new();
        msg.parse(s)?;
        Ok(msg)
    }
}

/// Non UTF-8 body bytes are displayed as replacement chars.
impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.produce()))
    }
}
