use std::{fs, path::Path};

use super::{ConfigError, ConfigPaths};
use crate::input::RawLine;

pub struct ConfigLoader<'a> {
    paths: &'a ConfigPaths,
}

impl<'a> ConfigLoader<'a> {
    pub fn new(paths: &'a ConfigPaths) -> Self {
        Self { paths }
    }

    pub fn load_lines(&self) -> Result<Vec<RawLine>, ConfigError> {
        self.read_if_exists(&self.paths.rc_path)
    }

    fn read_if_exists(&self, path: &Path) -> Result<Vec<RawLine>, ConfigError> {
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read(path)?;
        let lines: Vec<RawLine> = content
            .split_inclusive(|&b| b == b'\n')
            .filter(|line| !Self::is_skipped(line))
            .map(|line| RawLine::new(line.to_vec()))
            .collect();
        tracing::debug!(rc = %path.display(), commands = lines.len(), "loaded rc file");
        Ok(lines)
    }

    // Blank lines and `#` comments.
    fn is_skipped(line: &[u8]) -> bool {
        match line.iter().find(|b| !b.is_ascii_whitespace()) {
            None => true,
            Some(&b) => b == b'#',
        }
    }
}
