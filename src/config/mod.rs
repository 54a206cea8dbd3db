//! Configuration types: the string store filled by the parser and the typed
//! settings produced from it by the validator.

mod store;
mod validator;

pub use store::ConfigStore;
pub use validator::ConfigValidator;

use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::Command;

/// Image comparison metric used when matching blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Metric {
    /// Absolute error count: number of differing pixels.
    #[default]
    AE,
    /// Mean color distance.
    FUZZ,
    /// Mean absolute error.
    MAE,
    /// Mean error per pixel.
    MEPP,
    /// Mean error squared.
    MSE,
    /// Normalized cross correlation.
    NCC,
    /// Peak absolute error.
    PAE,
    /// Peak signal to noise ratio.
    PSNR,
    /// Root mean squared error.
    RMSE,
}

impl Metric {
    /// Every metric, in declaration order.
    pub const ALL: [Metric; 9] = [
        Metric::AE,
        Metric::FUZZ,
        Metric::MAE,
        Metric::MEPP,
        Metric::MSE,
        Metric::NCC,
        Metric::PAE,
        Metric::PSNR,
        Metric::RMSE,
    ];

    /// Exact name of the metric.
    pub fn name(&self) -> &'static str {
        match self {
            Metric::AE => "AE",
            Metric::FUZZ => "FUZZ",
            Metric::MAE => "MAE",
            Metric::MEPP => "MEPP",
            Metric::MSE => "MSE",
            Metric::NCC => "NCC",
            Metric::PAE => "PAE",
            Metric::PSNR => "PSNR",
            Metric::RMSE => "RMSE",
        }
    }
}

impl FromStr for Metric {
    type Err = String;

    /// Names are matched exactly; `ae` is not `AE`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|metric| metric.name() == s)
            .ok_or_else(|| format!("unknown metric: {}", s))
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Validated settings for one invocation.
///
/// Only [`ConfigValidator`] builds this; once built it is never changed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunConfig {
    /// Selected command.
    pub command: Command,
    /// Existing, readable, regular input file.
    pub input: PathBuf,
    /// Output path.
    pub output: PathBuf,
    /// Comparison metric.
    pub metric: Metric,
    /// Colour tolerance, finite and non-negative.
    pub fuzz: f64,
    /// Quality in `[0, 1]`.
    pub quality: f64,
    /// Debug logging enabled.
    pub debug: bool,
    /// Verbose logging enabled; always true when `debug` is.
    pub verbose: bool,
    /// Log file receiving a copy of the log output.
    pub log_file: Option<PathBuf>,
}
