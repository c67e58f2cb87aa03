use crate::core::commands::Flow;
use crate::error::{self, ShellError};
use crate::input::RawLine;
use crate::tokenizer::TokenList;

pub(crate) trait CommandHandler {
    fn execute_line(&mut self, line: &RawLine) -> Result<Flow, ShellError>;
}

impl CommandHandler for super::Shell {
    /// Recoverable faults are reported here and the loop goes on. Only fatal
    /// ones come back as `Err`.
    fn execute_line(&mut self, line: &RawLine) -> Result<Flow, ShellError> {
        let tokens = TokenList::from_raw(line);
        if tokens.is_empty() {
            return Ok(Flow::Continue);
        }
        tracing::trace!(?tokens, "tokenized");

        match self.executor.execute(&tokens) {
            Ok(flow) => Ok(flow),
            Err(e) if e.is_fatal() => Err(e.into()),
            Err(e) => {
                error::report(&e);
                Ok(Flow::Continue)
            }
        }
    }
}
