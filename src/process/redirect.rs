use std::ffi::OsString;
use std::fs::{File, OpenOptions};
use std::os::unix::fs::OpenOptionsExt;
use std::path::PathBuf;

use super::ProcessError;

pub const REDIRECT_OPERATOR: &str = ">";

const OWNER_READ_WRITE: u32 = (libc::S_IRUSR | libc::S_IWUSR) as u32;

/// Standard output of the child goes to `target`. `position` is where the
/// operator sat in the token list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirection {
    pub position: usize,
    pub target: PathBuf,
}

/// An external command with any redirection split off its argument vector.
#[derive(Debug, PartialEq, Eq)]
pub struct ParsedCommand<'a> {
    pub argv: &'a [OsString],
    pub redirection: Option<Redirection>,
}

impl Redirection {
    /// Opens the target read/write, creating it `0600` if absent. Existing
    /// contents are truncated.
    pub fn open(&self) -> Result<File, ProcessError> {
        OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .mode(OWNER_READ_WRITE)
            .open(&self.target)
            .map_err(|e| {
                ProcessError::RedirectTarget(format!("{}: {}", self.target.display(), e))
            })
    }
}

pub fn parse(tokens: &[OsString]) -> Result<ParsedCommand<'_>, ProcessError> {
    let Some((first, rest)) = tokens.split_first() else {
        return Err(ProcessError::Redirection("empty command".to_string()));
    };
    if first == REDIRECT_OPERATOR {
        return Err(ProcessError::Redirection(
            "redirection operator in command position".to_string(),
        ));
    }

    let Some(offset) = rest.iter().position(|t| t == REDIRECT_OPERATOR) else {
        return Ok(ParsedCommand {
            argv: tokens,
            redirection: None,
        });
    };
    let position = offset + 1;

    match &tokens[position + 1..] {
        [target] => Ok(ParsedCommand {
            argv: &tokens[..position],
            redirection: Some(Redirection {
                position,
                target: PathBuf::from(target),
            }),
        }),
        [] => Err(ProcessError::Redirection("missing target file".to_string())),
        [_, extra @ ..] => Err(ProcessError::Redirection(format!(
            "{} unexpected token(s) after target file",
            extra.len()
        ))),
    }
}
