pub mod error;
pub mod flags;
pub mod logging;
pub mod shell;
pub mod tokenizer;

pub mod core;
pub mod input;
pub mod process;
