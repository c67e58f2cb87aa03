use crate::error::ShellError;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: BTreeMap<String, Flag>,
    positionals: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: String,
    pub long: String,
    pub description: String,
    pub set: bool,
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = BTreeMap::new();

        flags.insert(
            "help".to_string(),
            Flag {
                short: "-h".to_string(),
                long: "--help".to_string(),
                description: "Print this help message".to_string(),
                set: false,
            },
        );

        flags.insert(
            "version".to_string(),
            Flag {
                short: "-v".to_string(),
                long: "--version".to_string(),
                description: "Show version information".to_string(),
                set: false,
            },
        );

        flags.insert(
            "debug".to_string(),
            Flag {
                short: "-d".to_string(),
                long: "--debug".to_string(),
                description: "Log interpreter decisions to stderr".to_string(),
                set: false,
            },
        );

        // No short form: "-n" reads too much like a script name typo.
        flags.insert(
            "norc".to_string(),
            Flag {
                short: "--norc".to_string(),
                long: "--norc".to_string(),
                description: "Do not read ~/.mshrc in interactive mode".to_string(),
                set: false,
            },
        );

        Flags {
            flags,
            positionals: Vec::new(),
        }
    }

    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        for arg in args {
            if arg.len() > 1 && arg.starts_with('-') {
                let flag = self
                    .flags
                    .values_mut()
                    .find(|flag| arg == &flag.short || arg == &flag.long)
                    .ok_or_else(|| ShellError::FlagError(format!("unknown option {}", arg)))?;
                flag.set = true;
            } else {
                self.positionals.push(arg.clone());
            }
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags.get(name).is_some_and(|f| f.set)
    }

    /// The script to run in batch mode, if any. Naming more than one is a
    /// startup error.
    pub fn script_path(&self) -> Result<Option<&str>, ShellError> {
        match self.positionals.as_slice() {
            [] => Ok(None),
            [path] => Ok(Some(path.as_str())),
            extra => Err(ShellError::Startup(format!(
                "expected at most one script file, got {}",
                extra.len()
            ))),
        }
    }

    pub fn print_help(&self) {
        println!("Usage: msh [OPTIONS] [SCRIPT]");
        println!("\nOptions:");
        for flag in self.flags.values() {
            if flag.short == flag.long {
                println!("      {:<15} {}", flag.long, flag.description);
            } else {
                println!("  {}, {:<15} {}", flag.short, flag.long, flag.description);
            }
        }
    }
}
