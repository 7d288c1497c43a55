use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::PathBuf;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Transcript language code (ISO 639-1 or 639-2)
    #[serde(default = "default_language")]
    pub language: String,

    /// Alignment engine config
    #[serde(default)]
    pub aligner: AlignerConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Settings for the external aeneas alignment engine
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AlignerConfig {
    // @field: Python interpreter used to run aeneas
    #[serde(default = "default_python")]
    pub python: String,

    // @field: Timeout for one alignment run, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    // @field: Directory for intermediate files (system temp dir when unset)
    #[serde(default)]
    pub temp_dir: Option<PathBuf>,

    // @field: Keep intermediate text/SRT files for debugging
    #[serde(default)]
    pub keep_temp_files: bool,
}

impl Default for AlignerConfig {
    fn default() -> Self {
        Self {
            python: default_python(),
            timeout_secs: default_timeout_secs(),
            temp_dir: None,
            keep_temp_files: false,
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_python() -> String {
    "python3".to_string()
}

fn default_timeout_secs() -> u64 {
    // Forced alignment of a long recording can legitimately take minutes
    300
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        // Validate the language code resolves to a real language
        let _language_name = crate::language_utils::get_language_name(&self.language)?;

        if self.aligner.python.trim().is_empty() {
            return Err(anyhow::anyhow!("Aligner python interpreter must not be empty"));
        }

        if self.aligner.timeout_secs == 0 {
            return Err(anyhow::anyhow!("Aligner timeout must be greater than zero"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            language: default_language(),
            aligner: AlignerConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
