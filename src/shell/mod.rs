mod executor;

use crate::{
    core::{
        commands::{CommandExecutor, Flow},
        config::{Config, ConfigError},
    },
    error::{self, ShellError},
    flags::Flags,
    input::{Batch, InputSource, Interactive, RawLine},
};

pub(crate) use executor::CommandHandler;

/// The read-tokenize-dispatch loop over one input source.
pub struct Shell {
    pub(crate) input: Box<dyn InputSource>,
    pub(crate) executor: CommandExecutor,
    startup: Vec<RawLine>,
}

impl Shell {
    /// Batch mode when `flags` names a script, interactive otherwise.
    pub fn new(flags: &Flags) -> Result<Self, ShellError> {
        match flags.script_path()? {
            Some(path) => Ok(Self::with_input(Box::new(Batch::open(path)?))),
            None => Self::interactive(flags),
        }
    }

    pub fn with_input(input: Box<dyn InputSource>) -> Self {
        Shell {
            input,
            executor: CommandExecutor::new(),
            startup: Vec::new(),
        }
    }

    fn interactive(flags: &Flags) -> Result<Self, ShellError> {
        let input = Interactive::new()?;

        // Keep the interpreter alive on Ctrl-C; the foreground child still
        // gets the default action.
        ctrlc::set_handler(move || {
            tracing::debug!("interrupt received");
        })?;

        let mut shell = Self::with_input(Box::new(input));
        if !flags.is_set("norc") {
            shell.startup = match Config::new() {
                Ok(config) => Self::rc_lines(&config)?,
                Err(ConfigError::HomeDirNotFound) => {
                    tracing::debug!("no home directory, skipping rc file");
                    Vec::new()
                }
                Err(e) => Self::skip_rc_file(e.into())?,
            };
        }
        Ok(shell)
    }

    fn rc_lines(config: &Config) -> Result<Vec<RawLine>, ShellError> {
        match config.load() {
            Ok(lines) => Ok(lines),
            Err(e) => Self::skip_rc_file(e.into()),
        }
    }

    // A broken rc file is reported and the session starts without it.
    fn skip_rc_file(err: ShellError) -> Result<Vec<RawLine>, ShellError> {
        if err.is_fatal() {
            return Err(err);
        }
        error::report(&err);
        Ok(Vec::new())
    }

    /// Runs the rc commands, then the input, until `exit`, end of input, or
    /// a fatal fault.
    pub fn run(&mut self) -> Result<(), ShellError> {
        let startup = std::mem::take(&mut self.startup);
        for line in &startup {
            if self.execute_line(line)? == Flow::Exit {
                return Ok(());
            }
        }

        while let Some(line) = self.input.next_line()? {
            if self.execute_line(&line)? == Flow::Exit {
                tracing::debug!("exit requested");
                break;
            }
        }
        Ok(())
    }
}
