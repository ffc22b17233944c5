//! Configuration for RosterDB
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Main configuration for a RosterDB instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Persistence Configuration
    // -------------------------------------------------------------------------
    /// Path of the binary data file (headerless, fixed-size records)
    pub data_file: PathBuf,

    /// Re-check loaded records against the validator and log a warning for
    /// each offender. The records are kept either way; loading trusts the
    /// file's structural layout as authoritative.
    pub validate_on_load: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("./players.dat"),
            validate_on_load: false,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data file path
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_file = path.into();
        self
    }

    /// Enable or disable post-load validation warnings
    pub fn validate_on_load(mut self, enabled: bool) -> Self {
        self.config.validate_on_load = enabled;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
