//! Message module contains implementation of:
//! - Splitting raw text into CRLF terminated lines
//! - Parsing headers (with continuation lines) and body
//! - Producing raw text back, optionally folded to given line length

pub use codec::*;
pub use error::*;
pub use folder::*;
pub use header::*;
pub use lines::*;
pub use parser::*;

mod codec;
mod error;
mod folder;
mod header;
mod lines;
mod parser;
