//! Fractal Image Compression CLI Tool
//!
//! Command-line utility that validates its arguments and hands the
//! compress or decompress command to the compression engine.

use fic::cli::execute;
use fic::{DefaultEngineFactory, Diagnostics};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let diagnostics = Diagnostics::install();
    let args = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned());

    let code = execute(
        args,
        &DefaultEngineFactory,
        &diagnostics,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
    ExitCode::from(code)
}
