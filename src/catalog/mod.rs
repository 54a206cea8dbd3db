//! Static catalog of recognized commands and options.
//!
//! The parser walks tokens against these tables and the usage reporter
//! renders them; nothing mutates them after start-up.

/// Top-level action selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Command {
    /// Compress an image.
    Compress,
    /// Decompress a previously compressed image.
    Decompress,
}

impl Command {
    /// Reserved configuration key holding the selected command.
    pub const ID: &'static str = "COMMAND";

    /// Every command, in declaration order.
    pub const ALL: [Command; 2] = [Command::Compress, Command::Decompress];

    /// Value stored under [`Command::ID`].
    pub fn key(&self) -> &'static str {
        match self {
            Command::Compress => "COMPRESS",
            Command::Decompress => "DECOMPRESS",
        }
    }

    /// Command-line token selecting this command.
    pub fn token(&self) -> &'static str {
        match self {
            Command::Compress => "compress",
            Command::Decompress => "decompress",
        }
    }

    /// Help text for this command.
    pub fn description(&self) -> &'static str {
        match self {
            Command::Compress => "compress the input image",
            Command::Decompress => "decompress the input file",
        }
    }

    /// Look up a command by its command-line token.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cmd| cmd.token() == token)
    }

    /// Look up a command by its stored key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cmd| cmd.key() == key)
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// A command-line option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CliOption {
    /// Print usage and exit.
    Help,
    /// Input file path.
    Input,
    /// Output file path.
    Output,
    /// Image comparison metric.
    Metric,
    /// Colour distance tolerance.
    Fuzz,
    /// Target quality in `[0, 1]`.
    Quality,
    /// Verbose logging.
    Verbose,
    /// Debug logging, implies verbose.
    Debug,
    /// Log file destination.
    Log,
}

impl CliOption {
    /// Every option, in declaration order.
    pub const ALL: [CliOption; 9] = [
        CliOption::Help,
        CliOption::Input,
        CliOption::Output,
        CliOption::Metric,
        CliOption::Fuzz,
        CliOption::Quality,
        CliOption::Verbose,
        CliOption::Debug,
        CliOption::Log,
    ];

    /// Canonical configuration key.
    pub fn key(&self) -> &'static str {
        match self {
            CliOption::Help => "HELP",
            CliOption::Input => "INPUT",
            CliOption::Output => "OUTPUT",
            CliOption::Metric => "METRIC",
            CliOption::Fuzz => "FUZZ",
            CliOption::Quality => "QUALITY",
            CliOption::Verbose => "VERBOSE",
            CliOption::Debug => "DEBUG",
            CliOption::Log => "LOG",
        }
    }

    /// Short token, without the leading dash.
    pub fn short(&self) -> Option<char> {
        match self {
            CliOption::Help => Some('h'),
            CliOption::Input => Some('i'),
            CliOption::Output => Some('o'),
            CliOption::Metric => Some('m'),
            CliOption::Fuzz => Some('f'),
            CliOption::Quality => Some('q'),
            CliOption::Verbose => Some('v'),
            CliOption::Debug => Some('d'),
            CliOption::Log => None,
        }
    }

    /// Long token, without the leading dashes.
    pub fn long(&self) -> &'static str {
        match self {
            CliOption::Help => "help",
            CliOption::Input => "input",
            CliOption::Output => "output",
            CliOption::Metric => "metric",
            CliOption::Fuzz => "fuzz",
            CliOption::Quality => "quality",
            CliOption::Verbose => "verbose",
            CliOption::Debug => "debug",
            CliOption::Log => "log",
        }
    }

    /// The long token as typed on the command line, e.g. `--input`.
    pub fn long_token(&self) -> String {
        format!("--{}", self.long())
    }

    /// Help text for this option.
    pub fn description(&self) -> &'static str {
        match self {
            CliOption::Help => "display this help message",
            CliOption::Input => "the image file to process",
            CliOption::Output => "where to write the result",
            CliOption::Metric => "the metric to use when comparing images",
            CliOption::Fuzz => "colors within this distance are considered equal",
            CliOption::Quality => "target quality, between 0 and 1",
            CliOption::Verbose => "display progress messages",
            CliOption::Debug => "display debug messages (implies verbose)",
            CliOption::Log => "also write debug messages to this file",
        }
    }

    /// Whether the option consumes the following token as its value.
    pub fn takes_argument(&self) -> bool {
        matches!(
            self,
            CliOption::Input
                | CliOption::Output
                | CliOption::Metric
                | CliOption::Fuzz
                | CliOption::Quality
                | CliOption::Log
        )
    }

    /// Value installed in the configuration store before parsing.
    pub fn default_value(&self) -> Option<&'static str> {
        match self {
            CliOption::Output => Some("output.fic"),
            CliOption::Metric => Some("AE"),
            CliOption::Fuzz => Some("5"),
            CliOption::Quality => Some("0.9"),
            CliOption::Verbose | CliOption::Debug => Some("false"),
            CliOption::Help | CliOption::Input | CliOption::Log => None,
        }
    }

    /// Whether `token` selects this option, in short or long form.
    pub fn matches(&self, token: &str) -> bool {
        if let Some(long) = token.strip_prefix("--") {
            return long == self.long();
        }
        let mut chars = token.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some('-'), Some(c), None) => self.short() == Some(c),
            _ => false,
        }
    }

    /// Look up an option by command-line token.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|opt| opt.matches(token))
    }

    /// Look up an option by canonical key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|opt| opt.key() == key)
    }
}

impl std::fmt::Display for CliOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.short() {
            Some(c) => write!(f, "-{}/--{}", c, self.long()),
            None => write!(f, "--{}", self.long()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tokens_and_keys_are_unique() {
        let keys: HashSet<_> = CliOption::ALL.iter().map(|o| o.key()).collect();
        assert_eq!(keys.len(), CliOption::ALL.len());
        assert!(!keys.contains(Command::ID));

        let longs: HashSet<_> = CliOption::ALL.iter().map(|o| o.long()).collect();
        assert_eq!(longs.len(), CliOption::ALL.len());

        let shorts: Vec<_> = CliOption::ALL.iter().filter_map(|o| o.short()).collect();
        let unique: HashSet<_> = shorts.iter().collect();
        assert_eq!(unique.len(), shorts.len());
    }

    #[test]
    fn test_option_lookup_by_token() {
        assert_eq!(CliOption::from_token("-i"), Some(CliOption::Input));
        assert_eq!(CliOption::from_token("--input"), Some(CliOption::Input));
        assert_eq!(CliOption::from_token("--log"), Some(CliOption::Log));
        assert_eq!(CliOption::from_token("-l"), None);
        assert_eq!(CliOption::from_token("-iq"), None);
        assert_eq!(CliOption::from_token("input"), None);
        assert_eq!(CliOption::from_token("---input"), None);
        assert_eq!(CliOption::from_token(""), None);
    }

    #[test]
    fn test_option_lookup_by_key() {
        for opt in CliOption::ALL {
            assert_eq!(CliOption::from_key(opt.key()), Some(opt));
        }
        assert_eq!(CliOption::from_key("input"), None);
    }

    #[test]
    fn test_command_lookup() {
        assert_eq!(Command::from_token("compress"), Some(Command::Compress));
        assert_eq!(Command::from_token("decompress"), Some(Command::Decompress));
        assert_eq!(Command::from_token("COMPRESS"), None);
        assert_eq!(Command::from_key("DECOMPRESS"), Some(Command::Decompress));
        assert_eq!(Command::from_key("decompress"), None);
    }

    #[test]
    fn test_takes_argument() {
        assert!(CliOption::Input.takes_argument());
        assert!(CliOption::Log.takes_argument());
        assert!(!CliOption::Verbose.takes_argument());
        assert!(!CliOption::Help.takes_argument());
    }

    #[test]
    fn test_display() {
        assert_eq!(CliOption::Fuzz.to_string(), "-f/--fuzz");
        assert_eq!(CliOption::Log.to_string(), "--log");
        assert_eq!(CliOption::Quality.long_token(), "--quality");
    }
}
