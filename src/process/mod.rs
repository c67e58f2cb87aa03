use std::fmt;

pub mod executor;
pub mod redirect;

pub use executor::ProcessExecutor;
pub use redirect::Redirection;

#[derive(Debug)]
pub enum ProcessError {
    /// Misplaced `>`, missing target, or extra tokens after the target.
    Redirection(String),
    /// The redirection target could not be opened.
    RedirectTarget(String),
    /// The program could not be found or its image could not be loaded.
    Exec(String),
    /// The OS refused to create a process at all.
    Spawn(String),
    Signaled { program: String, signal: i32 },
    Other(String),
}

impl ProcessError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, ProcessError::Spawn(_))
    }
}

impl From<std::io::Error> for ProcessError {
    fn from(e: std::io::Error) -> Self {
        ProcessError::Other(e.to_string())
    }
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::Redirection(msg) => write!(f, "Malformed redirection: {}", msg),
            ProcessError::RedirectTarget(msg) => write!(f, "Redirection target: {}", msg),
            ProcessError::Exec(msg) => write!(f, "Exec failed: {}", msg),
            ProcessError::Spawn(msg) => write!(f, "Spawn failed: {}", msg),
            ProcessError::Signaled { program, signal } => {
                write!(f, "{} terminated by signal {}", program, signal)
            }
            ProcessError::Other(msg) => write!(f, "Other error: {}", msg),
        }
    }
}

impl std::error::Error for ProcessError {}
