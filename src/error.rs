use std::io::{self, Write};

use crate::core::commands::CommandError;
use crate::core::config::ConfigError;

/// The one diagnostic the shell ever prints, whatever went wrong.
pub const ERROR_MESSAGE: &str = "An error has occurred\n";

#[derive(Debug)]
pub enum ShellError {
    Readline(rustyline::error::ReadlineError),
    Io(std::io::Error),
    Startup(String),
    FlagError(String),
    Command(CommandError),
    ConfigError(ConfigError),
    CtrlC(String),
}

impl ShellError {
    /// Fatal faults end the interpreter; everything else is reported and the
    /// loop resumes at the next line.
    pub fn is_fatal(&self) -> bool {
        match self {
            ShellError::Command(e) => e.is_fatal(),
            ShellError::ConfigError(_) => false,
            _ => true,
        }
    }
}

impl From<rustyline::error::ReadlineError> for ShellError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        ShellError::Readline(err)
    }
}

impl From<std::io::Error> for ShellError {
    fn from(err: std::io::Error) -> Self {
        ShellError::Io(err)
    }
}

impl From<ctrlc::Error> for ShellError {
    fn from(err: ctrlc::Error) -> Self {
        ShellError::CtrlC(err.to_string())
    }
}

impl From<CommandError> for ShellError {
    fn from(err: CommandError) -> Self {
        ShellError::Command(err)
    }
}

impl From<ConfigError> for ShellError {
    fn from(err: ConfigError) -> Self {
        ShellError::ConfigError(err)
    }
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShellError::Readline(e) => write!(f, "Readline error: {}", e),
            ShellError::Io(e) => write!(f, "IO error: {}", e),
            ShellError::Startup(msg) => write!(f, "Startup error: {}", msg),
            ShellError::FlagError(msg) => write!(f, "Flag error: {}", msg),
            ShellError::Command(e) => write!(f, "{}", e),
            ShellError::ConfigError(e) => write!(f, "Config error: {}", e),
            ShellError::CtrlC(msg) => write!(f, "Ctrl-C error: {}", msg),
        }
    }
}

impl std::error::Error for ShellError {}

/// Writes [`ERROR_MESSAGE`] to stderr. The detailed cause only goes to the
/// debug log.
pub fn report(err: &dyn std::fmt::Display) {
    tracing::debug!(cause = %err, "reporting fault");
    let stderr = io::stderr();
    let mut handle = stderr.lock();
    if let Err(e) = report_to(&mut handle) {
        tracing::warn!(error = %e, "failed to write diagnostic");
    }
}

pub fn report_to(out: &mut dyn Write) -> io::Result<()> {
    out.write_all(ERROR_MESSAGE.as_bytes())?;
    out.flush()
}
