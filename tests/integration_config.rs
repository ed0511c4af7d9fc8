// buddybuild-rs: Buddybuild CI environment parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for settings loading.

use buddybuild_rs::ci::LoadOptions;
use buddybuild_rs::config::Settings;
use buddybuild_rs::core::env::types::KeyPrefix;
use buddybuild_rs::core::path::PathCheck;

#[test]
fn config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("buddybuild.toml");
    std::fs::write(&path, "[env]\nprefix = \"bare\"\n\n[log]\nlevel = 1\n").unwrap();

    let settings = Settings::from_file(&path).unwrap();
    assert_eq!(settings.load_options(), LoadOptions::bare());
    assert_eq!(settings.log.level.as_u8(), 1);
}

#[test]
fn config_later_file_wins() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("base.toml");
    let local = dir.path().join("local.toml");
    std::fs::write(&base, "[env]\nprefix = \"bare\"\nverify_paths = true\n").unwrap();
    std::fs::write(&local, "[env]\nverify_paths = false\n").unwrap();

    let loader = Settings::builder().add_toml_file(&base).add_toml_file(&local);
    assert_eq!(loader.format_loaded_files().len(), 2);

    let options = loader.build().unwrap().load_options();
    assert_eq!(options.prefix(), KeyPrefix::Bare);
    assert_eq!(options.path_check(), PathCheck::Unchecked);
}

#[test]
fn config_real_ci_options() {
    let settings = Settings::parse("[env]\nverify_paths = true\n").unwrap();
    assert_eq!(settings.load_options(), LoadOptions::buddybuild());
}

#[test]
fn config_defaults_check_real_ci_paths() {
    assert_eq!(Settings::default().load_options(), LoadOptions::buddybuild());
    assert_eq!(Settings::parse("").unwrap().load_options(), LoadOptions::buddybuild());
}
