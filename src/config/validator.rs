//! Turns a populated [`ConfigStore`] into a [`RunConfig`].

use std::fs::File;
use std::path::{Path, PathBuf};

use crate::catalog::{CliOption, Command};
use crate::error::{FicError, Result};
use crate::logging::Diagnostics;

use super::{ConfigStore, Metric, RunConfig};

/// Checks the store in a fixed order and stops at the first defect.
pub struct ConfigValidator<'a> {
    diagnostics: &'a Diagnostics,
}

impl<'a> ConfigValidator<'a> {
    /// Create a validator reporting through `diagnostics`.
    pub fn new(diagnostics: &'a Diagnostics) -> Self {
        Self { diagnostics }
    }

    /// Validate `store`.
    ///
    /// The store is only read, so validating the same store again yields an
    /// equal [`RunConfig`].
    pub fn validate(&self, store: &ConfigStore) -> Result<RunConfig> {
        let debug = store.flag(CliOption::Debug);
        let verbose = debug || store.flag(CliOption::Verbose);
        self.diagnostics.configure(verbose, debug);

        let log_file = if debug {
            store
                .option(CliOption::Log)
                .and_then(|path| self.attach_log(Path::new(path)))
        } else {
            None
        };

        log::debug!(":: Validating: {} ..", Command::ID);
        let command = store
            .command()
            .and_then(Command::from_key)
            .ok_or_else(|| FicError::RequiredArgNotFound("command".into()))?;

        log::debug!(":: Validating: {} ..", CliOption::Input.key());
        let input = store
            .option(CliOption::Input)
            .ok_or_else(|| FicError::RequiredArgNotFound(CliOption::Input.long_token()))?;
        let input = check_readable_file(input)?;

        log::debug!(":: Validating: {} ..", CliOption::Metric.key());
        let metric_str = required(store, CliOption::Metric)?;
        let metric = metric_str
            .parse::<Metric>()
            .map_err(|_| invalid(CliOption::Metric, metric_str))?;

        log::debug!(":: Validating: {} ..", CliOption::Fuzz.key());
        let fuzz_str = required(store, CliOption::Fuzz)?;
        let fuzz = fuzz_str
            .parse::<f64>()
            .ok()
            .filter(|fuzz| fuzz.is_finite() && *fuzz >= 0.0)
            .ok_or_else(|| invalid(CliOption::Fuzz, fuzz_str))?;

        log::debug!(":: Validating: {} ..", CliOption::Quality.key());
        let quality_str = required(store, CliOption::Quality)?;
        let quality = quality_str
            .parse::<f64>()
            .ok()
            .filter(|quality| (0.0..=1.0).contains(quality))
            .ok_or_else(|| invalid(CliOption::Quality, quality_str))?;

        let output = PathBuf::from(required(store, CliOption::Output)?);

        Ok(RunConfig {
            command,
            input,
            output,
            metric,
            fuzz,
            quality,
            debug,
            verbose,
            log_file,
        })
    }

    /// Attach the log sink; failing to open it is only a warning.
    fn attach_log(&self, path: &Path) -> Option<PathBuf> {
        match self.diagnostics.attach_file(path) {
            Ok(()) => Some(path.to_path_buf()),
            Err(e) => {
                log::warn!("==> cannot write logfile {}: {}", path.display(), e);
                None
            }
        }
    }
}

/// Value of an option that always has a default.
fn required(store: &ConfigStore, opt: CliOption) -> Result<&str> {
    store
        .option(opt)
        .ok_or_else(|| FicError::RequiredArgNotFound(opt.long_token()))
}

fn invalid(opt: CliOption, value: &str) -> FicError {
    FicError::InvalidValue {
        option: opt.long_token(),
        value: value.to_string(),
    }
}

/// The input must exist, be a regular file, and open for reading.
fn check_readable_file(path: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(path);
    let is_file = path_buf.metadata().map(|m| m.is_file()).unwrap_or(false);
    if !is_file || File::open(&path_buf).is_err() {
        return Err(FicError::FileRead(path.to_string()));
    }
    Ok(path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::fs;
    use tempfile::TempDir;

    fn input_file(dir: &TempDir) -> String {
        let path = dir.path().join("lena.png");
        fs::write(&path, b"not really a png").unwrap();
        path.to_string_lossy().into_owned()
    }

    fn store_with_input(input: &str) -> ConfigStore {
        let mut store = ConfigStore::with_defaults();
        store.set_command(Command::Compress);
        store.set_option(CliOption::Input, input);
        store
    }

    fn validate(store: &ConfigStore) -> Result<RunConfig> {
        let diagnostics = Diagnostics::detached();
        ConfigValidator::new(&diagnostics).validate(store)
    }

    fn kind_of(result: Result<RunConfig>) -> ErrorKind {
        result.unwrap_err().kind().unwrap()
    }

    #[test]
    fn test_defaults() {
        let dir = TempDir::new().unwrap();
        let input = input_file(&dir);
        let config = validate(&store_with_input(&input)).unwrap();

        assert_eq!(config.command, Command::Compress);
        assert_eq!(config.input, PathBuf::from(&input));
        assert_eq!(config.output, PathBuf::from("output.fic"));
        assert_eq!(config.metric, Metric::AE);
        assert_eq!(config.fuzz, 5.0);
        assert_eq!(config.quality, 0.9);
        assert!(!config.debug);
        assert!(!config.verbose);
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn test_validation_is_repeatable() {
        let dir = TempDir::new().unwrap();
        let mut store = store_with_input(&input_file(&dir));
        store.set_option(CliOption::Debug, "true");
        store.set_option(CliOption::Log, dir.path().join("run.log").to_string_lossy());

        let diagnostics = Diagnostics::detached();
        let validator = ConfigValidator::new(&diagnostics);
        let first = validator.validate(&store).unwrap();
        let second = validator.validate(&store).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_command() {
        let dir = TempDir::new().unwrap();
        let mut store = ConfigStore::with_defaults();
        store.set_option(CliOption::Input, input_file(&dir));

        let err = validate(&store).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::RequiredArgNotFound));
        assert_eq!(err.to_string(), "required argument not found: command");
    }

    #[test]
    fn test_missing_command_reported_before_missing_input() {
        let store = ConfigStore::with_defaults();
        let err = validate(&store).unwrap_err();
        assert_eq!(err.to_string(), "required argument not found: command");
    }

    #[test]
    fn test_missing_input() {
        let mut store = ConfigStore::with_defaults();
        store.set_command(Command::Decompress);

        let err = validate(&store).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::RequiredArgNotFound));
        assert_eq!(err.to_string(), "required argument not found: --input");
    }

    #[test]
    fn test_nonexistent_input() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.png").to_string_lossy().into_owned();
        let mut store = store_with_input(&missing);
        store.set_option(CliOption::Quality, "7");

        let err = validate(&store).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::FileRead));
        assert_eq!(err.to_string(), format!("cannot read file: {}", missing));
    }

    #[test]
    fn test_directory_input_rejected() {
        let dir = TempDir::new().unwrap();
        let store = store_with_input(&dir.path().to_string_lossy());
        assert_eq!(kind_of(validate(&store)), ErrorKind::FileRead);
    }

    #[test]
    fn test_invalid_metric() {
        let dir = TempDir::new().unwrap();
        let mut store = store_with_input(&input_file(&dir));
        store.set_option(CliOption::Metric, "ae");

        let err = validate(&store).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::InvalidValue));
        assert_eq!(err.to_string(), "invalid value for --metric: ae");
    }

    #[test]
    fn test_metric_checked_before_fuzz() {
        let dir = TempDir::new().unwrap();
        let mut store = store_with_input(&input_file(&dir));
        store.set_option(CliOption::Metric, "XX");
        store.set_option(CliOption::Fuzz, "lots");

        let err = validate(&store).unwrap_err();
        assert_eq!(err.to_string(), "invalid value for --metric: XX");
    }

    #[test]
    fn test_fuzz_values() {
        let dir = TempDir::new().unwrap();
        let input = input_file(&dir);

        for ok in ["0", "12.5", "1e2"] {
            let mut store = store_with_input(&input);
            store.set_option(CliOption::Fuzz, ok);
            assert!(validate(&store).is_ok(), "fuzz {} should be accepted", ok);
        }

        for bad in ["lots", "", "-1", "NaN", "inf"] {
            let mut store = store_with_input(&input);
            store.set_option(CliOption::Fuzz, bad);
            let err = validate(&store).unwrap_err();
            assert_eq!(err.kind(), Some(ErrorKind::InvalidValue), "fuzz {}", bad);
            assert_eq!(err.to_string(), format!("invalid value for --fuzz: {}", bad));
        }
    }

    #[test]
    fn test_quality_boundaries() {
        let dir = TempDir::new().unwrap();
        let input = input_file(&dir);

        for ok in ["0", "1", "0.5", "1.0"] {
            let mut store = store_with_input(&input);
            store.set_option(CliOption::Quality, ok);
            let config = validate(&store).unwrap();
            assert_eq!(config.quality, ok.parse::<f64>().unwrap());
        }

        for bad in ["-0.0001", "1.0001", "NaN", "high"] {
            let mut store = store_with_input(&input);
            store.set_option(CliOption::Quality, bad);
            let err = validate(&store).unwrap_err();
            assert_eq!(err.kind(), Some(ErrorKind::InvalidValue), "quality {}", bad);
            assert_eq!(
                err.to_string(),
                format!("invalid value for --quality: {}", bad)
            );
        }
    }

    #[test]
    fn test_debug_implies_verbose() {
        let dir = TempDir::new().unwrap();
        let mut store = store_with_input(&input_file(&dir));
        store.set_option(CliOption::Debug, "true");

        let diagnostics = Diagnostics::detached();
        let config = ConfigValidator::new(&diagnostics).validate(&store).unwrap();
        assert!(config.debug);
        assert!(config.verbose);
        assert_eq!(diagnostics.level(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_verbose_without_debug() {
        let dir = TempDir::new().unwrap();
        let mut store = store_with_input(&input_file(&dir));
        store.set_option(CliOption::Verbose, "true");

        let config = validate(&store).unwrap();
        assert!(!config.debug);
        assert!(config.verbose);
    }

    #[test]
    fn test_log_file_needs_debug() {
        let dir = TempDir::new().unwrap();
        let log_path = dir.path().join("run.log");
        let mut store = store_with_input(&input_file(&dir));
        store.set_option(CliOption::Log, log_path.to_string_lossy());

        let config = validate(&store).unwrap();
        assert_eq!(config.log_file, None);
        assert!(!log_path.exists());

        store.set_option(CliOption::Debug, "true");
        let config = validate(&store).unwrap();
        assert_eq!(config.log_file, Some(log_path.clone()));
        assert!(log_path.exists());
    }

    #[test]
    fn test_unwritable_log_file_is_not_fatal() {
        let dir = TempDir::new().unwrap();
        let mut store = store_with_input(&input_file(&dir));
        store.set_option(CliOption::Debug, "true");
        store.set_option(
            CliOption::Log,
            dir.path().join("no").join("such").join("dir.log").to_string_lossy(),
        );

        let config = validate(&store).unwrap();
        assert_eq!(config.log_file, None);
    }
}
