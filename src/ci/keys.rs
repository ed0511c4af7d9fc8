// buddybuild-rs: Buddybuild CI environment parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Bare key names. The CI sets each of them with a `BUDDYBUILD_` prefix.

// Build
pub const BUILD_NUMBER: &str = "BUILD_NUMBER";
pub const BUILD_ID: &str = "BUILD_ID";
pub const APP_ID: &str = "APP_ID";
pub const BRANCH: &str = "BRANCH";
pub const BASE_BRANCH: &str = "BASE_BRANCH";
pub const REPO_SLUG: &str = "REPO_SLUG";
pub const PULL_REQUEST: &str = "PULL_REQUEST";
pub const WORKSPACE: &str = "WORKSPACE";
pub const SECURE_FILES: &str = "SECURE_FILES";
pub const TRIGGERED_BY: &str = "TRIGGERED_BY";

// iOS
pub const IPA_PATH: &str = "IPA_PATH";
pub const APP_STORE_IPA_PATH: &str = "APP_STORE_IPA_PATH";
pub const TEST_DIR: &str = "TEST_DIR";
pub const SCHEME: &str = "SCHEME";

// Android
pub const APKS_DIR: &str = "APKS_DIR";
pub const VARIANTS: &str = "VARIANTS";
pub const ANDROID_HOME: &str = "ANDROID_HOME";
pub const ANDROID_NDK_HOME: &str = "ANDROID_NDK_HOME";
