// buddybuild-rs: Buddybuild CI environment parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Layered loading of `buddybuild.toml` style settings.
//!
//! ```text
//! SettingsLoader::new()
//!   .add_toml_file("ci/buddybuild.toml")       required
//!   .add_toml_file_optional("buddybuild.toml") skipped if absent
//!   .with_env_prefix("BUDDYBUILD_RS")          BUDDYBUILD_RS_ENV__PREFIX=bare
//!   .set("env.verify_paths", false)            CLI flags, applied last
//!        |
//!        v
//!    build() --> Settings | ConfigError::ParseError
//! ```
//!
//! Tool settings use `BUDDYBUILD_RS_`; plain `BUDDYBUILD_` variables describe
//! the build and are never read here.

use std::path::{Path, PathBuf};

use super::Settings;
use crate::error::{BuddybuildError, ConfigError, Result};

/// Collects settings sources; later sources win.
pub struct SettingsLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    files: Vec<(String, PathBuf)>,
}

impl SettingsLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            files: Vec::new(),
        }
    }

    /// Adds a settings file that must exist, e.g. one passed with `--config`.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(true));
        self.files.push(("file".to_string(), p.to_path_buf()));
        self
    }

    /// Adds a settings file that is skipped when absent.
    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(false));
        if p.exists() {
            self.files.push(("optional".to_string(), p.to_path_buf()));
        }
        self
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        use config::{File, FileFormat};
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.files
            .push(("string".to_string(), PathBuf::from("<string>")));
        self
    }

    /// Reads `<PREFIX>_<SECTION>__<KEY>` variables, e.g.
    /// `BUDDYBUILD_RS_LOG__LEVEL=4`.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Sets an override, e.g. `set("env.verify_paths", true)`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseError`] if the key path is malformed.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(|e| parse_error(format!("cannot override '{key}': {e}")))?;
        Ok(self)
    }

    /// Merges all sources into [`Settings`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseError`] if a required file is missing, a
    /// file is not TOML, or a value does not fit the `[env]`/`[log]` tables.
    pub fn build(self) -> Result<Settings> {
        let builder = match &self.env_prefix {
            Some(prefix) => self.builder.add_source(
                config::Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            ),
            None => self.builder,
        };
        let settings = builder
            .build()
            .and_then(|cfg| cfg.try_deserialize::<Settings>())
            .map_err(|e| parse_error(format!("cannot load buddybuild-rs settings: {e}")))?;
        Ok(settings)
    }

    /// Numbered list of the files that contributed, for `buddybuild options`.
    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        self.files
            .iter()
            .enumerate()
            .map(|(i, (source, path))| format!("{}. [{}] {}", i + 1, source, path.display()))
            .collect()
    }
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_error(message: String) -> BuddybuildError {
    ConfigError::ParseError { message }.into()
}
