// buddybuild-rs: Buddybuild CI environment parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Settings, SettingsLoader};
use crate::ci::LoadOptions;
use crate::core::env::types::KeyPrefix;
use crate::core::path::PathCheck;
use crate::error::{BuddybuildError, ConfigError};
use crate::logging::LogLevel;
use std::path::PathBuf;

#[test]
fn test_default_settings() {
    let settings = Settings::default();
    assert_eq!(settings.env.prefix, KeyPrefix::Buddybuild);
    assert_eq!(settings.env.verify_paths, None);
    assert!(settings.env.verify_paths());
    assert_eq!(settings.log.level, LogLevel::INFO);
    assert_eq!(settings.load_options(), LoadOptions::buddybuild());
}

#[test]
fn test_bare_prefix_skips_path_checks_by_default() {
    let settings = Settings::parse("[env]\nprefix = \"bare\"\n").unwrap();
    assert_eq!(settings.load_options(), LoadOptions::bare());

    let settings = Settings::parse("[env]\nverify_paths = false\n").unwrap();
    assert_eq!(settings.load_options().prefix(), KeyPrefix::Buddybuild);
    assert_eq!(settings.load_options().path_check(), PathCheck::Unchecked);
}

#[test]
fn test_parse_full_settings() {
    let settings = Settings::parse(
        r#"
[env]
prefix = "bare"
verify_paths = true

[log]
level = 4
file = "logs/buddybuild.log"
"#,
    )
    .unwrap();

    assert_eq!(settings.env.prefix, KeyPrefix::Bare);
    assert_eq!(settings.log.level, LogLevel::DEBUG);
    assert_eq!(settings.log.file, Some(PathBuf::from("logs/buddybuild.log")));

    let options = settings.load_options();
    assert_eq!(options.prefix(), KeyPrefix::Bare);
    assert_eq!(options.path_check(), PathCheck::MustExist);
}

#[test]
fn test_parse_rejects_unknown_fields() {
    assert!(Settings::parse("[env]\nprefx = \"bare\"\n").is_err());
}

#[test]
fn test_parse_rejects_bad_values() {
    assert!(Settings::parse("[env]\nprefix = \"travis\"\n").is_err());
    assert!(Settings::parse("[log]\nlevel = 9\n").is_err());
}

#[test]
fn test_override_wins_over_file() {
    let settings = SettingsLoader::new()
        .add_toml_str("[env]\nverify_paths = false\n")
        .set("env.verify_paths", true)
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(settings.env.verify_paths, Some(true));
}

#[test]
fn test_optional_file_missing_is_fine() {
    let loader = SettingsLoader::new().add_toml_file_optional("/definitely/not/here.toml");
    assert!(loader.format_loaded_files().is_empty());
    assert_eq!(loader.build().unwrap(), Settings::default());
}

#[test]
fn test_required_file_missing_fails() {
    let err = Settings::from_file("/definitely/not/here.toml").unwrap_err();
    let err = err.downcast_ref::<BuddybuildError>().unwrap();
    assert!(err.env_error().is_none());
    assert!(matches!(
        err,
        BuddybuildError::Config(inner) if matches!(**inner, ConfigError::ParseError { .. })
    ));
    assert!(err.to_string().contains("cannot load buddybuild-rs settings"));
}

#[test]
fn test_format_options() {
    let settings = Settings::parse("[log]\nlevel = 2\nfile = \"ci.log\"\n").unwrap();
    insta::assert_snapshot!(settings.format_options().join("\n"), @r"
    env.prefix       = buddybuild
    env.verify_paths = true
    log.level        = 2
    log.file_level   = 2
    log.file         = ci.log
    ");
}
