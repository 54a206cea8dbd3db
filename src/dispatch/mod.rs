//! Command dispatch.
//!
//! Maps the validated command onto exactly one engine entry point.

use crate::catalog::Command;
use crate::config::RunConfig;
use crate::engine::EngineFactory;
use crate::error::Result;

/// Runs the selected command against an engine built by `factory`.
pub struct Dispatcher<'a> {
    factory: &'a dyn EngineFactory,
}

impl<'a> Dispatcher<'a> {
    /// Create a dispatcher using `factory` to build engines.
    pub fn new(factory: &'a dyn EngineFactory) -> Self {
        Self { factory }
    }

    /// Build the engine for `config` and run its command.
    ///
    /// Engine errors are returned as-is; nothing is retried.
    pub fn dispatch(&self, config: &RunConfig) -> Result<()> {
        let mut engine = self.factory.create(config);
        match config.command {
            Command::Compress => {
                if config.verbose {
                    log::info!(":: Initializing compress process..");
                }
                engine.compress()?;
            }
            Command::Decompress => {
                if config.verbose {
                    log::info!(":: Initializing decompress process..");
                }
                engine.decompress()?;
            }
        }
        Ok(())
    }
}
