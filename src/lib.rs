//! Fractal Image Compression front end.
//!
//! Parses the `fic` command line into a string-keyed [`ConfigStore`],
//! validates it into an immutable [`RunConfig`], and hands the selected
//! command to an [`Engine`].
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use fic::{cli, DefaultEngineFactory, Diagnostics};
//!
//! let diagnostics = Diagnostics::install();
//! let code = cli::execute(
//!     ["compress", "--input", "lena.png", "--quality", "0.8"],
//!     &DefaultEngineFactory,
//!     &diagnostics,
//!     &mut std::io::stdout(),
//!     &mut std::io::stderr(),
//! );
//! ```
//!
//! # Plugging in an engine
//!
//! Any `Fn(&RunConfig) -> Box<dyn Engine>` is an [`EngineFactory`], so a
//! backend only has to implement the two entry points of [`Engine`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod cli;
pub mod config;
pub mod dispatch;
pub mod engine;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use catalog::{CliOption, Command};
pub use config::{ConfigStore, ConfigValidator, Metric, RunConfig};
pub use dispatch::Dispatcher;
pub use engine::{DefaultEngineFactory, Engine, EngineFactory, JobFileEngine};
pub use error::{ErrorKind, FicError, Result};
pub use logging::Diagnostics;

/// Library version information.
pub mod version {
    /// Library version string.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// Library name.
    pub const NAME: &str = env!("CARGO_PKG_NAME");

    /// Get full version string.
    pub fn full_version() -> String {
        format!("{} {}", NAME, VERSION)
    }
}
