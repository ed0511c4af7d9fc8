// buddybuild-rs: Buddybuild CI environment parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Typed records for the current CI build.
//!
//! ```text
//!               CiContext::load(&Env, &LoadOptions)
//!                            |
//!                        EnvReader
//!          +-----------------+-----------------+
//!          v                 v                 v
//!     BuildInfo          IosInfo           AndroidInfo
//!   Err => fatal      Err => None         Err => None
//!   BuddybuildError
//! ```
//!
//! Each record is all-or-nothing. The context is built once and passed
//! around by reference; nothing here is cached globally.

pub mod android;
pub mod build;
pub mod ios;
pub mod keys;
pub mod trigger;


use bon::Builder;
use serde::Serialize;
use tracing::{debug, info};

use crate::core::env::container::Env;
use crate::core::env::current_env;
use crate::core::env::reader::EnvReader;
use crate::core::env::types::KeyPrefix;
use crate::core::path::PathCheck;
use crate::error::{BuddybuildError, BuddybuildResult, EnvError};

pub use android::AndroidInfo;
pub use build::BuildInfo;
pub use ios::IosInfo;
pub use trigger::Trigger;

/// How the environment is read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Builder)]
pub struct LoadOptions {
    #[builder(setters(name = with_prefix), default)]
    prefix: KeyPrefix,
    #[builder(setters(name = with_path_check), default)]
    path_check: PathCheck,
}

impl LoadOptions {
    /// Options for the real CI: prefixed keys, paths must exist.
    #[must_use]
    pub const fn buddybuild() -> Self {
        Self {
            prefix: KeyPrefix::Buddybuild,
            path_check: PathCheck::MustExist,
        }
    }

    /// Options for injected mappings: bare keys, no filesystem access.
    #[must_use]
    pub const fn bare() -> Self {
        Self {
            prefix: KeyPrefix::Bare,
            path_check: PathCheck::Unchecked,
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

    #[must_use]
    pub const fn reader<'a>(&self, env: &'a Env) -> EnvReader<'a> {
        EnvReader::new(env, self.prefix, self.path_check)
    }
}

/// Platform the build is producing artifacts for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Android,
    Unknown,
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ios => write!(f, "ios"),
            Self::Android => write!(f, "android"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Everything known about the current build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CiContext {
    pub build: BuildInfo,
    pub ios: Option<IosInfo>,
    pub android: Option<AndroidInfo>,
}

impl CiContext {
    /// Resolves all records from `env`.
    ///
    /// # Errors
    ///
    /// Returns [`BuddybuildError::BuildInfo`] if build information cannot be
    /// resolved. Platform records never fail the load.
    pub fn load(env: &Env, options: &LoadOptions) -> BuddybuildResult<Self> {
        let build = resolve_build(env, options)?;
        let ios = resolve_ios(env, options);
        let android = resolve_android(env, options);

        info!(
            build_number = build.build_number,
            branch = %build.branch,
            trigger = %build.triggered_by,
            ios = ios.is_some(),
            android = android.is_some(),
            "loaded buddybuild context"
        );

        Ok(Self {
            build,
            ios,
            android,
        })
    }

    /// Resolves all records from the process environment.
    ///
    /// # Errors
    ///
    /// See [`CiContext::load`].
    pub fn load_from_process(options: &LoadOptions) -> BuddybuildResult<Self> {
        Self::load(&current_env(), options)
    }

    /// iOS wins when both platform records resolve.
    #[must_use]
    pub const fn platform(&self) -> Platform {
        match (&self.ios, &self.android) {
            (Some(_), _) => Platform::Ios,
            (None, Some(_)) => Platform::Android,
            (None, None) => Platform::Unknown,
        }
    }
}

/// Resolves iOS information on its own, `None` if it does not resolve.
#[must_use]
pub fn resolve_ios(env: &Env, options: &LoadOptions) -> Option<IosInfo> {
    optional("ios", IosInfo::resolve(&options.reader(env)))
}

/// Resolves Android information on its own, `None` if it does not resolve.
#[must_use]
pub fn resolve_android(env: &Env, options: &LoadOptions) -> Option<AndroidInfo> {
    optional("android", AndroidInfo::resolve(&options.reader(env)))
}

/// Resolves build information on its own.
///
/// # Errors
///
/// Returns [`BuddybuildError::BuildInfo`] on any failure.
pub fn resolve_build(env: &Env, options: &LoadOptions) -> BuddybuildResult<BuildInfo> {
    BuildInfo::resolve(&options.reader(env)).map_err(|e| BuddybuildError::BuildInfo(Box::new(e)))
}

fn optional<T>(record: &str, resolved: Result<T, EnvError>) -> Option<T> {
    match resolved {
        Ok(value) => Some(value),
        Err(err) => {
            debug!(record, error = %err, "platform record absent");
            None
        }
    }
}
