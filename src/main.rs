use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use markdown2html::cli::{self, Cli};

fn main() -> ExitCode {
    pretty_env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(_) => {
            eprintln!("{}", cli::usage(&program_name()));
            return ExitCode::FAILURE;
        }
    };

    if !cli.input.is_file() {
        eprintln!("Missing {}", cli.input.display());
        return ExitCode::FAILURE;
    }

    match cli::run_convert(&cli.input, &cli.output, &cli.options()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn program_name() -> String {
    std::env::args()
        .next()
        .as_deref()
        .and_then(|arg0| Path::new(arg0).file_name())
        .and_then(|name| name.to_str())
        .unwrap_or("markdown2html")
        .to_string()
}
