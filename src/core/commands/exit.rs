use std::ffi::OsString;

use super::{Command, CommandError, Flow};

#[derive(Clone, Default)]
pub struct ExitCommand;

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    fn execute(&self, args: &[OsString]) -> Result<Flow, CommandError> {
        if !args.is_empty() {
            return Err(CommandError::InvalidArguments(
                "exit takes no arguments".to_string(),
            ));
        }
        Ok(Flow::Exit)
    }
}
