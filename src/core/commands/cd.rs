use super::{Command, CommandError, Flow};
use std::env;
use std::ffi::OsString;

#[derive(Clone, Default)]
pub struct CdCommand;

impl CdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for CdCommand {
    fn execute(&self, args: &[OsString]) -> Result<Flow, CommandError> {
        let [path] = args else {
            return Err(CommandError::InvalidArguments(format!(
                "cd takes exactly one directory, got {}",
                args.len()
            )));
        };

        let shown = path.to_string_lossy();
        env::set_current_dir(path).map_err(|e| {
            CommandError::ExecutionError(format!("Failed to change directory to {}: {}", shown, e))
        })?;
        tracing::debug!(dir = %shown, "changed directory");
        Ok(Flow::Continue)
    }
}
