//! Compression engine interface.
//!
//! The front end never looks inside an engine: it builds one from the
//! validated settings and calls exactly one of its two entry points.

mod job_file;

pub use job_file::{CompressionJob, JobFileEngine, JOB_FORMAT_VERSION};

use crate::config::RunConfig;

/// An image compression backend.
pub trait Engine {
    /// Run compression.
    fn compress(&mut self) -> anyhow::Result<()>;

    /// Run decompression.
    fn decompress(&mut self) -> anyhow::Result<()>;
}

/// Builds the engine handle for an invocation.
pub trait EngineFactory {
    /// Create an engine configured from `config`.
    fn create(&self, config: &RunConfig) -> Box<dyn Engine>;
}

impl<F> EngineFactory for F
where
    F: Fn(&RunConfig) -> Box<dyn Engine>,
{
    fn create(&self, config: &RunConfig) -> Box<dyn Engine> {
        self(config)
    }
}

/// Factory for the engine linked into the `fic` binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultEngineFactory;

impl EngineFactory for DefaultEngineFactory {
    fn create(&self, config: &RunConfig) -> Box<dyn Engine> {
        Box::new(JobFileEngine::new(config.clone()))
    }
}
