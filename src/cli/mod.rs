//! Command-line front end: parse, validate, dispatch.

mod parser;
mod usage;

pub use parser::{parse_args, ParseOutcome};
pub use usage::usage;

use std::io::Write;

use crate::config::ConfigValidator;
use crate::dispatch::Dispatcher;
use crate::engine::EngineFactory;
use crate::error::Result;
use crate::logging::Diagnostics;

/// Run the whole front end and return the process exit status.
///
/// Help and usage text go to `out`; on failure the usage text is written to
/// `out` and the error message to `err`, and the error's exit code is
/// returned.
pub fn execute<I, S>(
    args: I,
    factory: &dyn EngineFactory,
    diagnostics: &Diagnostics,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> u8
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    match run(args, factory, diagnostics, out) {
        Ok(()) => 0,
        Err(e) => {
            if e.shows_usage() {
                let _ = writeln!(out, "{}", usage());
            }
            let _ = writeln!(err, "Error: {}", e);
            e.exit_code()
        }
    }
}

fn run<I, S>(
    args: I,
    factory: &dyn EngineFactory,
    diagnostics: &Diagnostics,
    out: &mut dyn Write,
) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let store = match parse_args(args)? {
        ParseOutcome::Help => {
            let _ = writeln!(out, "{}", usage());
            return Ok(());
        }
        ParseOutcome::Run(store) => store,
    };

    let config = ConfigValidator::new(diagnostics).validate(&store)?;
    if log::log_enabled!(log::Level::Debug) {
        if let Ok(json) = serde_json::to_string(&config) {
            log::debug!("Configuration: {}", json);
        }
    }

    Dispatcher::new(factory).dispatch(&config)
}
