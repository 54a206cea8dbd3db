//! Engine that hands work to an out-of-process backend through job files.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

use crate::config::{Metric, RunConfig};

use super::Engine;

/// Current job file format version.
pub const JOB_FORMAT_VERSION: u32 = 1;

/// A compression request as written to the output path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompressionJob {
    /// Job file format version.
    pub version: u32,
    /// Image to compress.
    pub source: PathBuf,
    /// Source width in pixels.
    pub width: u32,
    /// Source height in pixels.
    pub height: u32,
    /// Block comparison metric.
    pub metric: Metric,
    /// Colour tolerance.
    pub fuzz: f64,
    /// Target quality.
    pub quality: f64,
}

/// Engine writing and reading [`CompressionJob`] descriptors.
pub struct JobFileEngine {
    config: RunConfig,
}

impl JobFileEngine {
    /// Create an engine for the given settings.
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// Read and check a job file.
    pub fn read_job(path: &Path) -> anyhow::Result<CompressionJob> {
        let file = File::open(path)
            .with_context(|| format!("cannot open job file {}", path.display()))?;
        let job: CompressionJob = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("{} is not a compression job", path.display()))?;
        if job.version != JOB_FORMAT_VERSION {
            bail!(
                "unsupported job format version {} in {}",
                job.version,
                path.display()
            );
        }
        Ok(job)
    }
}

impl Engine for JobFileEngine {
    fn compress(&mut self) -> anyhow::Result<()> {
        let input = &self.config.input;
        let (width, height) = image::image_dimensions(input)
            .with_context(|| format!("cannot decode image {}", input.display()))?;
        log::debug!("Source image {}: {}x{}", input.display(), width, height);

        let job = CompressionJob {
            version: JOB_FORMAT_VERSION,
            source: input.clone(),
            width,
            height,
            metric: self.config.metric,
            fuzz: self.config.fuzz,
            quality: self.config.quality,
        };

        let output = &self.config.output;
        let file = File::create(output)
            .with_context(|| format!("cannot create {}", output.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &job)?;
        writer.flush()?;

        log::info!(
            "Queued {}x{} image for compression ({} metric, fuzz {}, quality {}) -> {}",
            width,
            height,
            job.metric,
            job.fuzz,
            job.quality,
            output.display()
        );
        Ok(())
    }

    fn decompress(&mut self) -> anyhow::Result<()> {
        let job = Self::read_job(&self.config.input)?;
        log::info!(
            "Job for {} ({}x{}, {} metric, fuzz {}, quality {})",
            job.source.display(),
            job.width,
            job.height,
            job.metric,
            job.fuzz,
            job.quality
        );
        Ok(())
    }
}
