// buddybuild-rs: Buddybuild CI environment parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! General build information.
//!
//! ```text
//! BUILD_NUMBER    required  integer
//! BUILD_ID        required
//! APP_ID          required
//! BRANCH          required
//! BASE_BRANCH     optional  empty == absent
//! REPO_SLUG       required
//! PULL_REQUEST    optional  present => must be an integer
//! WORKSPACE       required  folder
//! SECURE_FILES    required  folder
//! TRIGGERED_BY    required  Trigger
//! ```

use serde::Serialize;

use super::keys;
use super::trigger::{Trigger, UnknownTrigger};
use crate::core::env::reader::EnvReader;
use crate::core::path::CiPath;
use crate::error::EnvError;

/// Identity of the running build. All-or-nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildInfo {
    pub build_number: i64,
    pub build_id: String,
    pub app_id: String,
    pub branch: String,
    pub base_branch: Option<String>,
    pub repo_slug: String,
    pub pull_request_id: Option<i64>,
    pub workspace: CiPath,
    pub secure_files: CiPath,
    pub triggered_by: Trigger,
}

impl BuildInfo {
    /// Resolves build information from the environment.
    ///
    /// # Errors
    ///
    /// Returns the first [`EnvError`] hit, in key order. A malformed
    /// `PULL_REQUEST` fails the whole record even though the key is optional.
    pub fn resolve(env: &EnvReader<'_>) -> Result<Self, EnvError> {
        let build_number = build_number(env)?;
        let build_id = env.lookup(keys::BUILD_ID)?.to_owned();
        let app_id = env.lookup(keys::APP_ID)?.to_owned();
        let branch = env.lookup(keys::BRANCH)?.to_owned();
        let base_branch = env
            .lookup(keys::BASE_BRANCH)
            .ok()
            .filter(|b| !b.is_empty())
            .map(str::to_owned);
        let repo_slug = env.lookup(keys::REPO_SLUG)?.to_owned();
        let pull_request_id = match env.integer(keys::PULL_REQUEST) {
            Ok(id) => Some(id),
            Err(EnvError::MissingKey { .. }) => None,
            Err(err) => return Err(err),
        };
        let workspace = env.folder(keys::WORKSPACE)?;
        let secure_files = env.folder(keys::SECURE_FILES)?;
        let triggered_by = trigger(env)?;

        Ok(Self {
            build_number,
            build_id,
            app_id,
            branch,
            base_branch,
            repo_slug,
            pull_request_id,
            workspace,
            secure_files,
            triggered_by,
        })
    }

    /// True when the build was started for a pull request.
    #[must_use]
    pub const fn is_pull_request(&self) -> bool {
        self.pull_request_id.is_some()
    }
}

// BUILD_NUMBER and TRIGGERED_BY report an unset key as invalid, not missing.

fn build_number(env: &EnvReader<'_>) -> Result<i64, EnvError> {
    env.integer(keys::BUILD_NUMBER).map_err(|err| match err {
        EnvError::MissingKey { key } => EnvError::invalid(key, "no build number set"),
        invalid @ EnvError::InvalidEnv { .. } => invalid,
    })
}

fn trigger(env: &EnvReader<'_>) -> Result<Trigger, EnvError> {
    let raw = env
        .lookup(keys::TRIGGERED_BY)
        .map_err(|_| EnvError::invalid(keys::TRIGGERED_BY, "no trigger set"))?;
    raw.parse()
        .map_err(|err: UnknownTrigger| EnvError::invalid(keys::TRIGGERED_BY, err.to_string()))
}
