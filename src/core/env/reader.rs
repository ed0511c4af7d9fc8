// buddybuild-rs: Buddybuild CI environment parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Key lookup over an [`Env`].
//!
//! Every failure the record parsers report starts here: either the key is
//! missing, or the value does not convert.

use super::container::Env;
use super::types::KeyPrefix;
use crate::core::number::parse_integer;
use crate::core::path::{CiPath, PathCheck, PathKind};
use crate::error::EnvError;

/// Borrowed view of an [`Env`] with a naming convention and path policy.
#[derive(Debug, Clone, Copy)]
pub struct EnvReader<'a> {
    env: &'a Env,
    prefix: KeyPrefix,
    path_check: PathCheck,
}

impl<'a> EnvReader<'a> {
    #[must_use]
    pub const fn new(env: &'a Env, prefix: KeyPrefix, path_check: PathCheck) -> Self {
        Self {
            env,
            prefix,
            path_check,
        }
    }

    #[must_use]
    pub const fn prefix(&self) -> KeyPrefix {
        self.prefix
    }

    #[must_use]
    pub const fn path_check(&self) -> PathCheck {
        self.path_check
    }

    /// Looks up a bare key.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::MissingKey`] naming the bare key if it has no value.
    pub fn lookup(&self, key: &str) -> Result<&'a str, EnvError> {
        self.env
            .get(&self.prefix.apply(key))
            .ok_or_else(|| EnvError::missing(key))
    }

    /// Looks up a key and parses it as an integer.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::MissingKey`] if absent, [`EnvError::InvalidEnv`] if
    /// the value is not integral.
    pub fn integer(&self, key: &str) -> Result<i64, EnvError> {
        let raw = self.lookup(key)?;
        parse_integer(raw)
            .ok_or_else(|| EnvError::invalid(key, format!("'{raw}' is not an integer")))
    }

    /// Looks up a key naming a directory.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::MissingKey`] if absent, [`EnvError::InvalidEnv`] if
    /// paths are checked and the directory does not exist.
    pub fn folder(&self, key: &str) -> Result<CiPath, EnvError> {
        self.path(key, PathKind::Folder)
    }

    /// Looks up a key naming a regular file.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::MissingKey`] if absent, [`EnvError::InvalidEnv`] if
    /// paths are checked and the file does not exist.
    pub fn file(&self, key: &str) -> Result<CiPath, EnvError> {
        self.path(key, PathKind::File)
    }

    fn path(&self, key: &str, kind: PathKind) -> Result<CiPath, EnvError> {
        let raw = self.lookup(key)?;
        CiPath::from_env(raw, kind, self.path_check)
            .map_err(|message| EnvError::invalid(key, message))
    }
}
