// buddybuild-rs: Buddybuild CI environment parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! iOS build artifacts.
//!
//! ```text
//! IPA_PATH            optional  file
//! APP_STORE_IPA_PATH  optional  file
//! TEST_DIR            optional  folder
//! SCHEME              required
//! ```

use serde::Serialize;

use super::keys;
use crate::core::env::reader::EnvReader;
use crate::core::path::CiPath;
use crate::error::EnvError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IosInfo {
    pub ipa_path: Option<CiPath>,
    pub app_store_ipa_path: Option<CiPath>,
    pub test_dir: Option<CiPath>,
    pub scheme: String,
}

impl IosInfo {
    /// Resolves iOS information.
    ///
    /// Path fields are best-effort: a missing key or a failed existence check
    /// leaves the field `None`.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::MissingKey`] if `SCHEME` is unset.
    pub fn resolve(env: &EnvReader<'_>) -> Result<Self, EnvError> {
        Ok(Self {
            ipa_path: env.file(keys::IPA_PATH).ok(),
            app_store_ipa_path: env.file(keys::APP_STORE_IPA_PATH).ok(),
            test_dir: env.folder(keys::TEST_DIR).ok(),
            scheme: env.lookup(keys::SCHEME)?.to_owned(),
        })
    }
}
