// buddybuild-rs: Buddybuild CI environment parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!    BuddybuildError
//!          |
//!     +----+----+
//!     v         v
//! BuildInfo   Config
//!   Box        Box
//!
//! Sub-errors (unboxed internally):
//!   Env     MissingKey, InvalidEnv
//!   Config  ParseError, InvalidValue
//! ```
//!
//! `EnvError` is what every lookup and conversion produces. Only a failed
//! build-info resolution is promoted to a `BuddybuildError`; the optional
//! platform records swallow it into `None`.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`BuddybuildError`].
pub type BuddybuildResult<T> = std::result::Result<T, BuddybuildError>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum BuddybuildError {
    /// Required build information could not be resolved.
    ///
    /// Callers are not expected to continue past this one.
    #[error("build info unavailable: {0}")]
    BuildInfo(#[source] Box<EnvError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),
}

impl BuddybuildError {
    /// Human-readable message for the end of a failed custom script.
    ///
    /// A missing key gets named; everything else gets the generic message.
    #[must_use]
    pub fn diagnostic(&self) -> String {
        match self {
            Self::BuildInfo(err) => match err.as_ref() {
                EnvError::MissingKey { key } => format!(
                    "Missing environment key {key}, are you sure it's a Buddybuild custom script?"
                ),
                EnvError::InvalidEnv { .. } => "Unable to retrieve informations about the build, \
                     are you sure it's a Buddybuild custom script?"
                    .to_string(),
            },
            other => other.to_string(),
        }
    }

    /// Returns the underlying environment error, if any.
    #[must_use]
    pub fn env_error(&self) -> Option<&EnvError> {
        match self {
            Self::BuildInfo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigError> for BuddybuildError {
    fn from(err: ConfigError) -> Self {
        Self::Config(Box::new(err))
    }
}

// --- Env Errors ---

/// Errors produced while reading the CI environment.
///
/// `key` is always the bare key name (`BUILD_NUMBER`), whatever prefix the
/// lookup applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvError {
    /// A required key has no value.
    #[error("missing environment key '{key}'")]
    MissingKey { key: String },

    /// A value is present but fails type or enumeration validation.
    #[error("invalid value for environment key '{key}': {message}")]
    InvalidEnv { key: String, message: String },
}

impl EnvError {
    pub fn missing(key: impl Into<String>) -> Self {
        Self::MissingKey { key: key.into() }
    }

    pub fn invalid(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidEnv {
            key: key.into(),
            message: message.into(),
        }
    }

    /// The bare key the error is about.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::MissingKey { key } | Self::InvalidEnv { key, .. } => key,
        }
    }

    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::MissingKey { .. })
    }
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration sources.
    #[error("failed to parse config: {message}")]
    ParseError { message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}
