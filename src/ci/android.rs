// buddybuild-rs: Buddybuild CI environment parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Android build artifacts and SDK locations.
//!
//! ```text
//! APKS_DIR          required  folder
//! VARIANTS          required  kept as one entry
//! ANDROID_HOME      required  folder
//! ANDROID_NDK_HOME  required  folder
//! ```

use serde::Serialize;

use super::keys;
use crate::core::env::reader::EnvReader;
use crate::core::path::CiPath;
use crate::error::EnvError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AndroidInfo {
    pub apks_dir: CiPath,
    /// Always a single element holding the raw `VARIANTS` value.
    pub variants: Vec<String>,
    pub android_home: CiPath,
    pub android_ndk_home: CiPath,
}

impl AndroidInfo {
    /// Resolves Android information.
    ///
    /// # Errors
    ///
    /// Returns the first [`EnvError`] among the four required keys.
    pub fn resolve(env: &EnvReader<'_>) -> Result<Self, EnvError> {
        let apks_dir = env.folder(keys::APKS_DIR)?;
        // Not split: consumers read the raw value, separators included.
        let variants = vec![env.lookup(keys::VARIANTS)?.to_owned()];
        let android_home = env.folder(keys::ANDROID_HOME)?;
        let android_ndk_home = env.folder(keys::ANDROID_NDK_HOME)?;

        Ok(Self {
            apks_dir,
            variants,
            android_home,
            android_ndk_home,
        })
    }
}
