//! Diagnostics handle wrapping the process logger.
//!
//! The `log` facade is process-global, so the handle installs `env_logger`
//! once and then exposes the two knobs the front end needs: the verbosity
//! level and an optional file the log output is copied into. The handle is
//! passed explicitly to the validator and dispatcher.

use std::cell::{Cell, RefCell};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use log::LevelFilter;

/// Writer that forwards to stderr and, once attached, to a log file.
#[derive(Clone, Default)]
struct TeeWriter {
    file: Arc<Mutex<Option<File>>>,
}

impl TeeWriter {
    fn attach(&self, file: File) {
        if let Ok(mut guard) = self.file.lock() {
            *guard = Some(file);
        }
    }
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().write_all(buf)?;
        if let Ok(mut guard) = self.file.lock() {
            if let Some(file) = guard.as_mut() {
                file.write_all(buf)?;
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        if let Ok(mut guard) = self.file.lock() {
            if let Some(file) = guard.as_mut() {
                file.flush()?;
            }
        }
        Ok(())
    }
}

/// Handle to the logger configuration for one invocation.
pub struct Diagnostics {
    writer: TeeWriter,
    installed: bool,
    level: Cell<LevelFilter>,
    log_file: RefCell<Option<PathBuf>>,
}

impl Diagnostics {
    /// Level used until the validated flags say otherwise.
    pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

    /// Install `env_logger` as the process logger and return its handle.
    ///
    /// `RUST_LOG` still narrows what gets printed. If a logger is already
    /// installed the handle silently falls back to detached behaviour.
    pub fn install() -> Self {
        let writer = TeeWriter::default();
        let installed = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or("trace"),
        )
        .format_timestamp(None)
        .target(env_logger::Target::Pipe(Box::new(writer.clone())))
        .try_init()
        .is_ok();

        let diagnostics = Self {
            writer,
            installed,
            level: Cell::new(Self::DEFAULT_LEVEL),
            log_file: RefCell::new(None),
        };
        diagnostics.apply_level();
        diagnostics
    }

    /// A handle that never touches the global logger.
    pub fn detached() -> Self {
        Self {
            writer: TeeWriter::default(),
            installed: false,
            level: Cell::new(Self::DEFAULT_LEVEL),
            log_file: RefCell::new(None),
        }
    }

    /// Set the verbosity from the resolved `--verbose`/`--debug` flags.
    pub fn configure(&self, verbose: bool, debug: bool) {
        let level = if debug {
            LevelFilter::Debug
        } else if verbose {
            LevelFilter::Info
        } else {
            Self::DEFAULT_LEVEL
        };
        self.level.set(level);
        self.apply_level();
    }

    /// Copy all further log output into `path`, truncating it.
    pub fn attach_file(&self, path: &Path) -> io::Result<()> {
        let file = File::create(path)?;
        self.writer.attach(file);
        *self.log_file.borrow_mut() = Some(path.to_path_buf());
        Ok(())
    }

    /// Current verbosity.
    pub fn level(&self) -> LevelFilter {
        self.level.get()
    }

    /// File currently receiving log output, if any.
    pub fn log_file(&self) -> Option<PathBuf> {
        self.log_file.borrow().clone()
    }

    fn apply_level(&self) {
        if self.installed {
            log::set_max_level(self.level.get());
        }
    }
}
