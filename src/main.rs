use msh::error;
use msh::flags::Flags;
use msh::shell::Shell;
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(e) = flags.parse(&args) {
        error::report(&e);
        return ExitCode::FAILURE;
    }

    if flags.is_set("help") {
        flags.print_help();
        return ExitCode::SUCCESS;
    }

    if flags.is_set("version") {
        println!("msh {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    msh::logging::init(flags.is_set("debug"));

    match Shell::new(&flags).and_then(|mut shell| shell.run()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error::report(&e);
            ExitCode::FAILURE
        }
    }
}
