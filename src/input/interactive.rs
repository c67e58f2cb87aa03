use std::io::{self, IsTerminal};

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use super::{InputSource, RawLine};
use crate::error::ShellError;

pub const PROMPT: &str = "msh> ";

/// Prompts on the terminal before every read.
pub struct Interactive {
    editor: DefaultEditor,
    stdin_is_terminal: bool,
}

/// What a failed read means for the session.
#[derive(Debug)]
pub(crate) enum ReadOutcome {
    Retry,
    Finished,
    Failed(ShellError),
}

/// A terminal never runs out of input: Ctrl-C and Ctrl-D only prompt
/// again. End of input is final only on a pipe or file.
pub(crate) fn read_outcome(err: ReadlineError, stdin_is_terminal: bool) -> ReadOutcome {
    match err {
        ReadlineError::Interrupted => ReadOutcome::Retry,
        ReadlineError::Eof if stdin_is_terminal => ReadOutcome::Retry,
        ReadlineError::Eof => ReadOutcome::Finished,
        e => ReadOutcome::Failed(e.into()),
    }
}

impl Interactive {
    pub fn new() -> Result<Self, ShellError> {
        let editor = DefaultEditor::new()?;
        Ok(Interactive {
            editor,
            stdin_is_terminal: io::stdin().is_terminal(),
        })
    }
}

impl InputSource for Interactive {
    fn next_line(&mut self) -> Result<Option<RawLine>, ShellError> {
        loop {
            let err = match self.editor.readline(PROMPT) {
                Ok(mut line) => {
                    line.push('\n');
                    return Ok(Some(RawLine::from(line)));
                }
                Err(err) => err,
            };

            match read_outcome(err, self.stdin_is_terminal) {
                ReadOutcome::Retry => {
                    tracing::debug!("empty read, prompting again");
                }
                ReadOutcome::Finished => {
                    tracing::debug!("stdin closed");
                    return Ok(None);
                }
                ReadOutcome::Failed(e) => return Err(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interrupt_retries() {
        assert!(matches!(
            read_outcome(ReadlineError::Interrupted, true),
            ReadOutcome::Retry
        ));
        assert!(matches!(
            read_outcome(ReadlineError::Interrupted, false),
            ReadOutcome::Retry
        ));
    }

    #[test]
    fn test_eof_on_terminal_retries() {
        assert!(matches!(
            read_outcome(ReadlineError::Eof, true),
            ReadOutcome::Retry
        ));
    }

    #[test]
    fn test_eof_on_pipe_finishes() {
        assert!(matches!(
            read_outcome(ReadlineError::Eof, false),
            ReadOutcome::Finished
        ));
    }

    #[test]
    fn test_io_error_fails() {
        let err = ReadlineError::Io(io::Error::new(io::ErrorKind::BrokenPipe, "gone"));
        match read_outcome(err, true) {
            ReadOutcome::Failed(e) => assert!(e.is_fatal()),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }
}
