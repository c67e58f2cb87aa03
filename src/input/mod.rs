mod batch;
mod interactive;

pub use batch::Batch;
pub use interactive::{Interactive, PROMPT};

use crate::error::ShellError;

/// Longest command line, in bytes, including the trailing newline.
pub const MAX_COMMAND_SIZE: usize = 255;

/// One command line as read, owned by a single loop iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    bytes: Vec<u8>,
}

impl RawLine {
    /// Bytes beyond [`MAX_COMMAND_SIZE`] are dropped.
    pub fn new(mut bytes: Vec<u8>) -> Self {
        bytes.truncate(MAX_COMMAND_SIZE);
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<String> for RawLine {
    fn from(line: String) -> Self {
        Self::new(line.into_bytes())
    }
}

impl From<&str> for RawLine {
    fn from(line: &str) -> Self {
        Self::new(line.as_bytes().to_vec())
    }
}

/// Where command lines come from. `Ok(None)` means the input is exhausted.
pub trait InputSource {
    fn next_line(&mut self) -> Result<Option<RawLine>, ShellError>;
}
