use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::{InputSource, RawLine};
use crate::error::ShellError;

/// Reads commands from a script, one line at a time, until end of file.
pub struct Batch<R> {
    reader: R,
    line_number: usize,
}

impl Batch<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ShellError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            ShellError::Startup(format!("cannot open script {}: {}", path.display(), e))
        })?;
        tracing::debug!(script = %path.display(), "batch mode");
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> Batch<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
        }
    }
}

impl<R: BufRead> InputSource for Batch<R> {
    fn next_line(&mut self) -> Result<Option<RawLine>, ShellError> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            tracing::debug!(lines = self.line_number, "end of script");
            return Ok(None);
        }
        self.line_number += 1;
        tracing::trace!(line = self.line_number, "read script line");
        Ok(Some(RawLine::new(buf)))
    }
}
