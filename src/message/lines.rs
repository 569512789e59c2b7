use crate::message::MessageParseError;

pub const CRLF: &[u8] = b"\r\n";

/// Line is a single physical line of a message, without its terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub data: &'a [u8],
    /// terminated is false only for trailing data that is not followed by CRLF.
    pub terminated: bool,
}

impl<'a> Line<'a> {
    /// check_length fails when terminated line does not fit in `limit` bytes including CRLF.
    /// Zero limit disables the check. Unterminated final line is never checked.
    pub fn check_length(&self, index: usize, limit: usize) -> Result<(), MessageParseError> {
        if limit == 0 || !self.terminated {
            return Ok(());
        }
        let length = self.data.len() + CRLF.len();
        if length > limit {
            return Err(MessageParseError::LineTooLong {
                line: index,
                length,
                limit,
            });
        }
        Ok(())
    }
}

/// CrlfLines splits data on `\r\n` only.
/// Bare `\r` or `\n` are left inside the lines.
pub struct CrlfLines<'a> {
    data: &'a [u8],
}

impl<'a> CrlfLines<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
        }
    }
}

fn find_crlf(data: &[u8]) -> Option<usize> {
    data.windows(CRLF.len()).position(|w| w == CRLF)
}

impl<'a> Iterator for CrlfLines<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.data.is_empty() {
            return None;
        }
        let line = match find_crlf(self.data) {
            Some(offset) => {
                let line = Line {
                    data: &self.data[..offset],
                    terminated: true,
                };
                self.data = &self.data[offset + CRLF.len()..];
                line
            }
            None => {
                let line = Line {
                    data: self.data,
                    terminated: false,
                };
                self.data = &[];
                line
            }
        };
        Some(line)
    }
}
