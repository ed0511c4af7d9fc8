// buddybuild-rs: Buddybuild CI environment parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tool settings (how to read the environment, how to log).
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. buddybuild.toml (cwd, optional)
//! 3. --config FILE
//! 4. BUDDYBUILD_RS_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! BUDDYBUILD_RS_ENV__PREFIX=bare          → env.prefix = "bare"
//! BUDDYBUILD_RS_ENV__VERIFY_PATHS=false   → env.verify_paths = false
//! BUDDYBUILD_RS_LOG__LEVEL=4              → log.level = 4
//! ```
//!
//! The build records themselves are never read from here; they come from
//! the CI's own `BUDDYBUILD_*` variables.

pub mod loader;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::ci::LoadOptions;
use crate::core::env::types::KeyPrefix;
use crate::core::path::PathCheck;
use crate::error::Result;
use crate::logging::LogLevel;

use loader::SettingsLoader;

/// Complete tool settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// How build variables are looked up.
    pub env: EnvSettings,
    /// Logging options.
    pub log: LogSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnvSettings {
    /// Key naming convention.
    pub prefix: KeyPrefix,
    /// Require path values to exist on disk. Unset means "only for the
    /// `buddybuild` prefix", i.e. when reading the CI's own variables.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify_paths: Option<bool>,
}

impl EnvSettings {
    /// Effective existence-check policy.
    #[must_use]
    pub fn verify_paths(&self) -> bool {
        self.verify_paths
            .unwrap_or(self.prefix == KeyPrefix::Buddybuild)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogSettings {
    /// Console log level (0-5).
    pub level: LogLevel,
    /// File log level, defaults to `level`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_level: Option<LogLevel>,
    /// Log file path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Settings {
    /// Create a new settings loader.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use buddybuild_rs::config::Settings;
    ///
    /// let settings = Settings::builder()
    ///     .add_toml_file_optional("buddybuild.toml")
    ///     .with_env_prefix("BUDDYBUILD_RS")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> SettingsLoader {
        SettingsLoader::new()
    }

    /// Load settings from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Settings` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Settings` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Options for [`crate::ci::CiContext::load`].
    #[must_use]
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions::builder()
            .with_prefix(self.env.prefix)
            .with_path_check(PathCheck::from_verify(self.env.verify_paths()))
            .build()
    }

    /// Format settings for display, one `key = value` per line.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = vec![
            ("env.prefix", self.env.prefix.to_string()),
            ("env.verify_paths", self.env.verify_paths().to_string()),
            ("log.level", self.log.level.as_u8().to_string()),
            (
                "log.file_level",
                self.log.file_level.unwrap_or(self.log.level).as_u8().to_string(),
            ),
        ];
        if let Some(file) = &self.log.file {
            options.push(("log.file", file.display().to_string()));
        }

        let max_key_len = options.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
