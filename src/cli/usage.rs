//! Usage text rendered from the catalogs.

use clap::builder::PossibleValuesParser;
use clap::{Arg, ArgAction};

use crate::catalog::{CliOption, Command};
use crate::config::Metric;
use crate::error::ErrorKind;

/// Build the clap description of the command line from the catalogs.
///
/// Only used for rendering; parsing is done by [`super::parse_args`].
fn describe() -> clap::Command {
    let mut cmd = clap::Command::new("fic")
        .about("Compress images using fractal image compression")
        .override_usage("fic <COMMAND> [OPTIONS] --input <FILE>")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .disable_help_subcommand(true)
        .after_help(exit_codes());

    for command in Command::ALL {
        cmd = cmd.subcommand(clap::Command::new(command.token()).about(command.description()));
    }

    for opt in CliOption::ALL {
        let mut arg = Arg::new(opt.key()).long(opt.long()).help(opt.description());
        if let Some(short) = opt.short() {
            arg = arg.short(short);
        }
        if opt.takes_argument() {
            arg = arg.action(ArgAction::Set).value_name(opt.key());
            if let Some(default) = opt.default_value() {
                arg = arg.default_value(default);
            }
        } else {
            arg = arg.action(ArgAction::SetTrue);
        }
        if opt == CliOption::Metric {
            arg = arg.value_parser(PossibleValuesParser::new(Metric::ALL.map(|m| m.name())));
        }
        cmd = cmd.arg(arg);
    }

    cmd
}

fn exit_codes() -> String {
    let mut text = String::from("Exit codes:\n  0  success");
    for kind in ErrorKind::ALL {
        text.push_str(&format!("\n  {}  {}", kind.exit_code(), kind.name()));
    }
    text
}

/// Render the full usage text.
pub fn usage() -> String {
    describe().render_help().to_string()
}
