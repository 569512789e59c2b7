use std::str;

use tracing::{debug, trace};

use crate::message::{CrlfLines, Header, HeaderList, Line, MessageParseError};
use crate::utils::cc::{is_field_name, is_field_value, trim_space, trim_space_str};

/// ParsedMessage is result of successful parse, ready to be moved into `Message`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedMessage {
    pub headers: HeaderList,
    pub body: Vec<u8>,
}

/// MessageParser consumes lines one by one and builds headers and body.
/// Nothing it collected is visible outside until `finish` is called,
/// so a failing line never leaves half parsed message behind.
///
/// Header lines must be US-ASCII. Body bytes are taken as they are.
pub struct MessageParser {
    max_line_length: usize,
    headers: HeaderList,
    body: Vec<u8>,
    is_in_body: bool,
    line_index: usize,
}

impl MessageParser {
    pub fn new(max_line_length: usize) -> Self {
        Self {
            max_line_length,
            headers: HeaderList::new(),
            body: Vec::new(),
            is_in_body: false,
            line_index: 0,
        }
    }

    pub fn parse(data: &[u8], max_line_length: usize) -> Result<ParsedMessage, MessageParseError> {
        let mut parser = Self::new(max_line_length);
        for line in CrlfLines::new(data) {
            if let Err(e) = parser.feed_line(line) {
                debug!(error = %e, "rejected message");
                return Err(e);
            }
        }
        Ok(parser.finish())
    }

    pub fn feed_line(&mut self, line: Line<'_>) -> Result<(), MessageParseError> {
        let index = self.line_index;
        self.line_index += 1;
        line.check_length(index, self.max_line_length)?;

        let data = line.data;
        if data.is_empty() {
            if !self.is_in_body {
                trace!(line = index, "end of headers");
            }
            self.is_in_body = true;
            return Ok(());
        }
        if self.is_in_body {
            self.body.extend_from_slice(data);
            return Ok(());
        }

        match data.iter().position(|b| *b == b':') {
            None => self.take_continuation(index, data),
            Some(offset) => self.take_header(index, &data[..offset], &data[offset + 1..]),
        }
    }

    fn take_continuation(&mut self, index: usize, data: &[u8]) -> Result<(), MessageParseError> {
        let text = field_value(index, data)?;
        let header = match self.headers.last_mut() {
            Some(h) => h,
            None => return Err(MessageParseError::OrphanContinuation { line: index }),
        };
        trace!(line = index, name = %header.name, "continuation line");
        header.value.push_str(text);
        Ok(())
    }

    fn take_header(&mut self, index: usize, name: &[u8], value: &[u8]) -> Result<(), MessageParseError> {
        if name.is_empty() {
            return Err(MessageParseError::EmptyHeaderName { line: index });
        }
        if !is_field_name(name) {
            return Err(MessageParseError::InvalidHeaderName { line: index });
        }
        let name = str::from_utf8(name)
            .map_err(|_| MessageParseError::InvalidHeaderName { line: index })?;
        let value = field_value(index, value)?;
        trace!(line = index, name, "header line");
        self.headers.push(Header::new(name, value));
        Ok(())
    }

    /// finish trims headers and body and returns them.
    /// Absent body results in empty one.
    pub fn finish(self) -> ParsedMessage {
        let mut headers = self.headers;
        for h in headers.iter_mut() {
            h.name = trim_space_str(&h.name).to_string();
            h.value = trim_space_str(&h.value).to_string();
        }
        ParsedMessage {
            headers,
            body: trim_space(&self.body).to_vec(),
        }
    }
}

/// field_value validates value bytes, which makes them ASCII text.
fn field_value(index: usize, data: &[u8]) -> Result<&str, MessageParseError> {
    if !is_field_value(data) {
        return Err(MessageParseError::InvalidHeaderValue { line: index });
    }
    str::from_utf8(data).map_err(|_| MessageParseError::InvalidHeaderValue { line: index })
}
