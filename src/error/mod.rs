//! Error catalog for the fic front end.
//!
//! Every defect the parser or validator can detect maps to exactly one
//! [`ErrorKind`], and every kind owns a stable process exit code.

use thiserror::Error;

/// Result type alias for the library.
pub type Result<T> = std::result::Result<T, FicError>;

/// Exit code used when the engine itself fails.
pub const ENGINE_FAILURE_EXIT_CODE: u8 = 1;

/// Closed set of failure kinds reported by the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No arguments were supplied.
    ArgCount,
    /// A value-taking option was not followed by a value.
    MissingArg,
    /// A token matched no command, option or help flag.
    UnknownArg,
    /// A required setting was never provided.
    RequiredArgNotFound,
    /// The input file is missing, unreadable or not a regular file.
    FileRead,
    /// A value failed to parse or is out of range.
    InvalidValue,
}

impl ErrorKind {
    /// Every kind, in declaration order.
    pub const ALL: [ErrorKind; 6] = [
        ErrorKind::ArgCount,
        ErrorKind::MissingArg,
        ErrorKind::UnknownArg,
        ErrorKind::RequiredArgNotFound,
        ErrorKind::FileRead,
        ErrorKind::InvalidValue,
    ];

    /// Stable process exit code for this kind.
    pub fn exit_code(&self) -> u8 {
        match self {
            ErrorKind::ArgCount => 2,
            ErrorKind::MissingArg => 3,
            ErrorKind::UnknownArg => 4,
            ErrorKind::RequiredArgNotFound => 5,
            ErrorKind::FileRead => 6,
            ErrorKind::InvalidValue => 7,
        }
    }

    /// Catalog tag, as shown in the usage text.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::ArgCount => "ARG_COUNT",
            ErrorKind::MissingArg => "MISSING_ARG",
            ErrorKind::UnknownArg => "UNKNOWN_ARG",
            ErrorKind::RequiredArgNotFound => "REQUIRED_ARG_NOT_FOUND",
            ErrorKind::FileRead => "FILE_READ",
            ErrorKind::InvalidValue => "INVALID_VALUE",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Main error type for the fic front end.
#[derive(Error, Debug)]
pub enum FicError {
    /// Wrong number of arguments.
    #[error("wrong number of arguments: {0}")]
    ArgCount(usize),

    /// Option given without its value.
    #[error("missing value for option: {0}")]
    MissingArg(String),

    /// Unrecognized command-line token.
    #[error("unknown argument: {0}")]
    UnknownArg(String),

    /// Required setting absent from the configuration.
    #[error("required argument not found: {0}")]
    RequiredArgNotFound(String),

    /// Input file cannot be read.
    #[error("cannot read file: {0}")]
    FileRead(String),

    /// Option value failed validation.
    #[error("invalid value for {option}: {value}")]
    InvalidValue {
        /// Option token the value was given for.
        option: String,
        /// The offending literal.
        value: String,
    },

    /// Failure raised by the compression engine, passed through untouched.
    #[error(transparent)]
    Engine(#[from] anyhow::Error),
}

impl FicError {
    /// Catalog kind of this error, or `None` for engine failures.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            FicError::ArgCount(_) => Some(ErrorKind::ArgCount),
            FicError::MissingArg(_) => Some(ErrorKind::MissingArg),
            FicError::UnknownArg(_) => Some(ErrorKind::UnknownArg),
            FicError::RequiredArgNotFound(_) => Some(ErrorKind::RequiredArgNotFound),
            FicError::FileRead(_) => Some(ErrorKind::FileRead),
            FicError::InvalidValue { .. } => Some(ErrorKind::InvalidValue),
            FicError::Engine(_) => None,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        self.kind()
            .map(|kind| kind.exit_code())
            .unwrap_or(ENGINE_FAILURE_EXIT_CODE)
    }

    /// Whether the failure protocol should print usage text alongside the message.
    ///
    /// Usage is shown for every catalog error; engine failures only get the message.
    pub fn shows_usage(&self) -> bool {
        self.kind().is_some()
    }
}
