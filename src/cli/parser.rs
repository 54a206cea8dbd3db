//! Command-line token parser.

use crate::catalog::{CliOption, Command};
use crate::config::ConfigStore;
use crate::error::{FicError, Result};

/// What the parser decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Help was requested; nothing else should run.
    Help,
    /// Arguments were parsed into a store ready for validation.
    Run(ConfigStore),
}

/// Parse `args` (without the program name) into a [`ConfigStore`].
///
/// Tokens are read left to right. Help wins as soon as it is seen; a later
/// command token replaces an earlier one; value options take the next token
/// unless it starts with `-`.
pub fn parse_args<I, S>(args: I) -> Result<ParseOutcome>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let tokens: Vec<String> = args.into_iter().map(|a| a.as_ref().to_owned()).collect();
    if tokens.is_empty() {
        return Err(FicError::ArgCount(0));
    }

    let mut store = ConfigStore::with_defaults();
    let mut iter = tokens.iter();

    while let Some(token) = iter.next() {
        if CliOption::Help.matches(token) {
            return Ok(ParseOutcome::Help);
        }

        if let Some(command) = Command::from_token(token) {
            store.set_command(command);
            continue;
        }

        match CliOption::from_token(token) {
            Some(opt) if opt.takes_argument() => match iter.next() {
                Some(value) if !value.starts_with('-') => store.set_option(opt, value),
                _ => return Err(FicError::MissingArg(token.to_string())),
            },
            Some(opt) => store.set_option(opt, "true"),
            None => return Err(FicError::UnknownArg(token.to_string())),
        }
    }

    Ok(ParseOutcome::Run(store))
}
