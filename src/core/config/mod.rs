use std::fmt;

mod loader;
mod paths;

use crate::input::RawLine;
use loader::ConfigLoader;
pub use paths::ConfigPaths;

/// Startup configuration: the interactive rc file.
pub struct Config {
    paths: ConfigPaths,
}

impl Config {
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Self::with_paths(ConfigPaths::new()?))
    }

    pub fn with_paths(paths: ConfigPaths) -> Self {
        Config { paths }
    }

    /// Command lines to run before the first prompt.
    pub fn load(&self) -> Result<Vec<RawLine>, ConfigError> {
        ConfigLoader::new(&self.paths).load_lines()
    }
}

#[derive(Debug)]
pub enum ConfigError {
    HomeDirNotFound,
    IoError(std::io::Error),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::HomeDirNotFound => write!(f, "Home directory not found"),
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
