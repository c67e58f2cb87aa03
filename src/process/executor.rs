use std::ffi::{OsStr, OsString};
use std::io;
use std::os::unix::process::ExitStatusExt;
use std::process::{Command, Stdio};

use super::{redirect, ProcessError};

/// Runs external programs one at a time, waiting for each to finish.
#[derive(Clone, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }

    /// `tokens[0]` is the program, looked up on `PATH`. A trailing `> file`
    /// sends the child's stdout to `file`.
    pub fn spawn_process(&self, tokens: &[OsString]) -> Result<(), ProcessError> {
        let parsed = redirect::parse(tokens)?;
        let Some((program, args)) = parsed.argv.split_first() else {
            return Err(ProcessError::Redirection("empty command".to_string()));
        };

        let stdout = match &parsed.redirection {
            Some(redirection) => {
                let file = redirection.open()?;
                tracing::debug!(
                    target_file = %redirection.target.display(),
                    "stdout redirected"
                );
                Stdio::from(file)
            }
            None => Stdio::inherit(),
        };

        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(stdout)
            .stderr(Stdio::inherit());

        let mut child = command
            .spawn()
            .map_err(|e| classify_spawn_error(program, e))?;
        let name = program.to_string_lossy();
        tracing::debug!(pid = child.id(), program = %name, "spawned child");

        let status = child.wait()?;
        if let Some(signal) = status.signal() {
            return Err(ProcessError::Signaled {
                program: name.into_owned(),
                signal,
            });
        }

        tracing::debug!(program = %name, code = ?status.code(), "child exited");
        Ok(())
    }
}

/// fork-level failures (no process could be created) are fatal. Anything
/// else was reported back from the child's failed exec.
fn classify_spawn_error(program: &OsStr, err: io::Error) -> ProcessError {
    let message = format!("{}: {}", program.to_string_lossy(), err);
    match err.raw_os_error() {
        Some(libc::EAGAIN) | Some(libc::ENOMEM) => ProcessError::Spawn(message),
        _ => ProcessError::Exec(message),
    }
}
