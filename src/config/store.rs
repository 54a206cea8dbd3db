//! Untyped staging area for parsed command-line values.

use std::collections::BTreeMap;

use crate::catalog::{CliOption, Command};

/// String-keyed configuration store.
///
/// Keys are option canonical keys plus [`Command::ID`]. Entries are only ever
/// inserted or overwritten, never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigStore {
    entries: BTreeMap<String, String>,
}

impl ConfigStore {
    /// An empty store, without defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store seeded with every option's default value.
    pub fn with_defaults() -> Self {
        let mut store = Self::new();
        for opt in CliOption::ALL {
            if let Some(value) = opt.default_value() {
                store.set(opt.key(), value);
            }
        }
        store
    }

    /// Insert or overwrite a value.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.entries.insert(key.to_string(), value.into());
    }

    /// Value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether `key` has a value.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Value of an option.
    pub fn option(&self, opt: CliOption) -> Option<&str> {
        self.get(opt.key())
    }

    /// Set an option's value.
    pub fn set_option(&mut self, opt: CliOption, value: impl Into<String>) {
        self.set(opt.key(), value);
    }

    /// Record the selected command, replacing any earlier one.
    pub fn set_command(&mut self, command: Command) {
        self.set(Command::ID, command.key());
    }

    /// Raw command value, if any.
    pub fn command(&self) -> Option<&str> {
        self.get(Command::ID)
    }

    /// Whether a boolean option holds the true literal.
    pub fn flag(&self, opt: CliOption) -> bool {
        self.option(opt)
            .map(|value| value.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    }

    /// Iterate over all entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
