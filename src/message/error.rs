use std::error::Error;

/// MessageParseError describes why raw data was rejected.
/// `line` is zero based index of physical (CRLF terminated) line in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(Display)]
pub enum MessageParseError {
    #[display(fmt = "line {} is {} bytes long with terminator, limit is {}", line, length, limit)]
    LineTooLong {
        line: usize,
        length: usize,
        limit: usize,
    },

    #[display(fmt = "line {} continues a header but no header precedes it", line)]
    OrphanContinuation {
        line: usize,
    },

    #[display(fmt = "line {} has empty header name", line)]
    EmptyHeaderName {
        line: usize,
    },

    #[display(fmt = "line {} has invalid char in header name", line)]
    InvalidHeaderName {
        line: usize,
    },

    #[display(fmt = "line {} has invalid char in header value", line)]
    InvalidHeaderValue {
        line: usize,
    },
}

impl MessageParseError {
    /// line returns index of offending line.
    pub fn line(&self) -> usize {
        match self {
            MessageParseError::LineTooLong { line, .. } |
            MessageParseError::OrphanContinuation { line } |
            MessageParseError::EmptyHeaderName { line } |
            MessageParseError::InvalidHeaderName { line } |
            MessageParseError::InvalidHeaderValue { line } => *line,
        }
    }
}

impl Error for MessageParseError {}
