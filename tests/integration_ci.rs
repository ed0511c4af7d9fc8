// buddybuild-rs: Buddybuild CI environment parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for loading CI records.
//!
//! Mappings mirror what a Buddybuild custom script sees.

use buddybuild_rs::ci::{CiContext, LoadOptions, Platform, Trigger, keys};
use buddybuild_rs::core::env::container::Env;
use buddybuild_rs::error::{BuddybuildError, EnvError};

fn prefixed(pairs: &[(&str, &str)]) -> Env {
    pairs
        .iter()
        .map(|(k, v)| (format!("BUDDYBUILD_{k}"), (*v).to_string()))
        .collect()
}

const BUILD: [(&str, &str); 8] = [
    ("BUILD_NUMBER", "42"),
    ("BUILD_ID", "b1"),
    ("APP_ID", "a1"),
    ("BRANCH", "main"),
    ("REPO_SLUG", "org/repo"),
    ("WORKSPACE", "/ws"),
    ("SECURE_FILES", "/sec"),
    ("TRIGGERED_BY", "webhook"),
];

fn unchecked() -> LoadOptions {
    LoadOptions::builder().build()
}

// =============================================================================
// Build records
// =============================================================================

#[test]
fn ci_minimal_build() {
    let ctx = CiContext::load(&prefixed(&BUILD), &unchecked()).unwrap();
    assert_eq!(ctx.build.build_number, 42);
    assert_eq!(ctx.build.base_branch, None);
    assert_eq!(ctx.build.pull_request_id, None);
    assert_eq!(ctx.build.triggered_by, Trigger::Webhook);
    assert_eq!(ctx.platform(), Platform::Unknown);
}

#[test]
fn ci_pull_request_build() {
    let mut pairs = BUILD.to_vec();
    pairs.push(("BASE_BRANCH", "develop"));
    pairs.push(("PULL_REQUEST", "128"));
    pairs.push(("TRIGGERED_BY", "webhook_pull_request_update"));

    let build = CiContext::load(&prefixed(&pairs), &unchecked()).unwrap().build;
    assert_eq!(build.base_branch.as_deref(), Some("develop"));
    assert_eq!(build.pull_request_id, Some(128));
    assert_eq!(build.triggered_by, Trigger::PullRequestUpdate);
}

#[test]
fn ci_every_required_key_is_fatal() {
    for (skip, _) in BUILD {
        let pairs: Vec<_> = BUILD.into_iter().filter(|(k, _)| *k != skip).collect();
        let err = CiContext::load(&prefixed(&pairs), &unchecked()).unwrap_err();
        let BuddybuildError::BuildInfo(env_err) = &err else {
            panic!("expected BuildInfo error, got {err}");
        };
        assert_eq!(env_err.key(), skip);

        let expect_missing = skip != keys::BUILD_NUMBER && skip != keys::TRIGGERED_BY;
        assert_eq!(env_err.is_missing(), expect_missing, "{skip}");
        if expect_missing {
            assert!(err.diagnostic().contains(skip));
        } else {
            assert!(err.diagnostic().starts_with("Unable to retrieve"));
        }
    }
}

#[test]
fn ci_negative_numbers_are_integers() {
    let mut pairs = BUILD.to_vec();
    pairs.retain(|(k, _)| *k != "BUILD_NUMBER");
    pairs.push(("BUILD_NUMBER", "-3"));
    pairs.push(("PULL_REQUEST", "-1"));

    let build = CiContext::load(&Env::from_pairs(pairs), &LoadOptions::bare())
        .unwrap()
        .build;
    assert_eq!(build.build_number, -3);
    assert_eq!(build.pull_request_id, Some(-1));
}

#[test]
fn ci_malformed_pull_request_is_fatal() {
    let mut pairs = BUILD.to_vec();
    pairs.push(("PULL_REQUEST", "feature-branch"));
    pairs.push(("SCHEME", "App"));
    let err = CiContext::load(&prefixed(&pairs), &unchecked()).unwrap_err();
    assert!(matches!(
        err.env_error(),
        Some(EnvError::InvalidEnv { key, .. }) if key == "PULL_REQUEST"
    ));
}

// =============================================================================
// Platform records
// =============================================================================

#[test]
fn ci_ios_build() {
    let mut pairs = BUILD.to_vec();
    pairs.push(("SCHEME", "Potato - Release"));
    pairs.push(("APP_STORE_IPA_PATH", "/out/store.ipa"));

    let ctx = CiContext::load(&prefixed(&pairs), &unchecked()).unwrap();
    let ios = ctx.ios.as_ref().unwrap();
    assert_eq!(ios.scheme, "Potato - Release");
    assert_eq!(ios.ipa_path, None);
    assert_eq!(
        ios.app_store_ipa_path.as_ref().map(ToString::to_string).as_deref(),
        Some("/out/store.ipa")
    );
    assert!(ctx.android.is_none());
    assert_eq!(ctx.platform(), Platform::Ios);
}

#[test]
fn ci_android_build_with_verified_paths() {
    let sandbox = tempfile::tempdir().unwrap();
    let dirs: Vec<_> = ["ws", "sec", "apks", "android-sdk", "android-ndk"]
        .iter()
        .map(|name| {
            let dir = sandbox.path().join(name);
            std::fs::create_dir(&dir).unwrap();
            dir.display().to_string()
        })
        .collect();

    let mut pairs = BUILD.to_vec();
    pairs.retain(|(k, _)| *k != "WORKSPACE" && *k != "SECURE_FILES");
    pairs.extend([
        ("WORKSPACE", dirs[0].as_str()),
        ("SECURE_FILES", dirs[1].as_str()),
        ("APKS_DIR", dirs[2].as_str()),
        ("VARIANTS", "release,debug"),
        ("ANDROID_HOME", dirs[3].as_str()),
        ("ANDROID_NDK_HOME", dirs[4].as_str()),
    ]);

    let ctx = CiContext::load(&prefixed(&pairs), &LoadOptions::buddybuild()).unwrap();
    let android = ctx.android.unwrap();
    assert_eq!(android.variants, ["release,debug"]);
    assert_eq!(android.android_home.as_path(), sandbox.path().join("android-sdk"));
    assert!(ctx.ios.is_none());
}

#[test]
fn ci_verified_workspace_must_exist() {
    let err = CiContext::load(&prefixed(&BUILD), &LoadOptions::buddybuild()).unwrap_err();
    assert_eq!(err.env_error().map(EnvError::key), Some("WORKSPACE"));
    assert!(err.diagnostic().starts_with("Unable to retrieve"));
}

#[test]
fn ci_bare_keys() {
    let env = Env::from_pairs(BUILD);
    let ctx = CiContext::load(&env, &LoadOptions::bare()).unwrap();
    assert_eq!(ctx.build.repo_slug, "org/repo");
    assert!(CiContext::load(&env, &unchecked()).is_err());
}
