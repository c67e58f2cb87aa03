use super::ConfigError;
use std::path::PathBuf;

pub const RC_FILE_NAME: &str = ".mshrc";

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub rc_path: PathBuf,
}

impl ConfigPaths {
    pub fn new() -> Result<Self, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;
        Ok(Self::in_dir(home))
    }

    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        ConfigPaths {
            rc_path: dir.into().join(RC_FILE_NAME),
        }
    }
}
