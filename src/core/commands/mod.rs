use std::collections::BTreeMap;
use std::ffi::OsString;

mod cd;
mod exit;

pub use cd::CdCommand;
pub use exit::ExitCommand;

use crate::process::{ProcessError, ProcessExecutor};
use crate::tokenizer::TokenList;

/// What the loop does after a command finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[derive(Debug)]
pub enum CommandError {
    InvalidArguments(String),
    ExecutionError(String),
    ProcessError(ProcessError),
}

impl CommandError {
    pub fn is_fatal(&self) -> bool {
        match self {
            CommandError::ProcessError(e) => e.is_fatal(),
            _ => false,
        }
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::InvalidArguments(msg) => write!(f, "invalid arguments: {}", msg),
            CommandError::ExecutionError(msg) => write!(f, "execution error: {}", msg),
            CommandError::ProcessError(err) => write!(f, "Process error: {}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<ProcessError> for CommandError {
    fn from(err: ProcessError) -> Self {
        CommandError::ProcessError(err)
    }
}

/// A built-in, run inside the interpreter's own process. `args` excludes the
/// command name.
pub trait Command {
    fn execute(&self, args: &[OsString]) -> Result<Flow, CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Cd(CdCommand),
    Exit(ExitCommand),
}

impl Command for CommandType {
    fn execute(&self, args: &[OsString]) -> Result<Flow, CommandError> {
        match self {
            CommandType::Cd(cmd) => cmd.execute(args),
            CommandType::Exit(cmd) => cmd.execute(args),
        }
    }
}

/// Dispatches a token list to a built-in or to the process executor.
#[derive(Clone)]
pub struct CommandExecutor {
    commands: BTreeMap<&'static str, CommandType>,
    process_executor: ProcessExecutor,
}

impl Default for CommandExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandExecutor {
    pub fn new() -> Self {
        let mut commands = BTreeMap::new();
        commands.insert("cd", CommandType::Cd(CdCommand::new()));
        commands.insert("exit", CommandType::Exit(ExitCommand::new()));

        Self {
            commands,
            process_executor: ProcessExecutor::new(),
        }
    }

    pub fn execute(&self, tokens: &TokenList) -> Result<Flow, CommandError> {
        let Some(name) = tokens.command() else {
            return Ok(Flow::Continue);
        };

        let builtin = name
            .to_str()
            .and_then(|n| self.commands.get_key_value(n));
        if let Some((builtin, cmd)) = builtin {
            tracing::debug!(builtin = *builtin, args = tokens.args().len(), "running built-in");
            cmd.execute(tokens.args())
        } else {
            self.process_executor.spawn_process(tokens.as_slice())?;
            Ok(Flow::Continue)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    fn setup_test_env() -> CommandExecutor {
        CommandExecutor::new()
    }

    #[test]
    fn test_empty_line_is_noop() {
        let executor = setup_test_env();
        let result = executor.execute(&TokenList::parse(b"  \t \n"));
        assert!(matches!(result, Ok(Flow::Continue)));
    }

    #[test]
    fn test_execute_exit() {
        let executor = setup_test_env();
        assert!(matches!(
            executor.execute(&TokenList::parse(b"exit\n")),
            Ok(Flow::Exit)
        ));
        assert!(matches!(
            executor.execute(&TokenList::parse(b"exit now\n")),
            Err(CommandError::InvalidArguments(_))
        ));
    }

    #[test]
    fn test_execute_cd_errors_keep_directory() {
        let executor = setup_test_env();
        let before = env::current_dir().unwrap();

        for line in ["cd\n", "cd / /tmp\n", "cd /path/that/does/not/exist\n"] {
            let result = executor.execute(&TokenList::parse(line.as_bytes()));
            assert!(result.is_err(), "{}", line);
            assert!(!result.unwrap_err().is_fatal());
        }

        assert_eq!(env::current_dir().unwrap(), before);
    }

    #[test]
    fn test_builtin_never_redirects() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("cd_out");
        let executor = setup_test_env();

        let line = format!("cd > {}\n", target.display());
        assert!(executor.execute(&TokenList::parse(line.as_bytes())).is_err());
        assert!(!target.exists());
    }

    #[test]
    fn test_execute_unknown_command() {
        let executor = setup_test_env();

        let result = executor.execute(&TokenList::parse(b"msh-unknown-command-c41d\n"));
        assert!(matches!(
            result,
            Err(CommandError::ProcessError(ProcessError::Exec(_)))
        ));
    }

    #[test]
    fn test_execute_external_with_redirection() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.txt");
        let executor = setup_test_env();

        let line = format!("echo  hello\tworld > {}\n", out.display());
        assert!(matches!(
            executor.execute(&TokenList::parse(line.as_bytes())),
            Ok(Flow::Continue)
        ));
        assert_eq!(fs::read_to_string(&out).unwrap(), "hello world\n");
    }

    #[test]
    fn test_command_error_display() {
        let errors = vec![
            CommandError::InvalidArguments("bad args".to_string()),
            CommandError::ExecutionError("failed".to_string()),
            CommandError::ProcessError(ProcessError::Exec("missing".to_string())),
        ];

        for error in errors {
            assert!(!error.to_string().is_empty());
        }
    }
}
