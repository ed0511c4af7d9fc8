// buddybuild-rs: Buddybuild CI environment parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::{Cli, Command};
use clap::Parser;

#[test]
fn test_parse_show() {
    let cli = Cli::try_parse_from(["buddybuild", "show", "--compact"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Show(ref args)) if args.compact));
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "buddybuild",
        "-l",
        "4",
        "--bare",
        "--verify-paths",
        "-c",
        "a.toml",
        "-c",
        "b.toml",
        "build",
    ])
    .unwrap();
    assert_eq!(cli.global.log_level, Some(4));
    assert!(cli.global.bare);
    assert!(cli.global.verify_paths);
    assert_eq!(cli.global.configs.len(), 2);
    assert!(matches!(cli.command, Some(Command::Build(_))));
}

#[test]
fn test_log_level_out_of_range() {
    assert!(Cli::try_parse_from(["buddybuild", "-l", "6", "check"]).is_err());
}

#[test]
fn test_overrides() {
    let cli = Cli::try_parse_from(["buddybuild", "-l", "2", "--bare", "check"]).unwrap();
    let keys: Vec<_> = cli.global.to_overrides().into_iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["log.level", "log.file_level", "env.prefix"]);
}

#[test]
fn test_path_check_flags() {
    let cli = Cli::try_parse_from(["buddybuild", "--no-verify-paths", "ios"]).unwrap();
    let overrides = cli.global.to_overrides();
    assert_eq!(overrides.len(), 1);
    assert_eq!(overrides[0].0, "env.verify_paths");
    assert!(!overrides[0].1.clone().into_bool().unwrap());

    assert!(
        Cli::try_parse_from(["buddybuild", "--verify-paths", "--no-verify-paths", "ios"]).is_err()
    );
}

#[test]
fn test_no_command() {
    let cli = Cli::try_parse_from(["buddybuild"]).unwrap();
    assert!(cli.command.is_none());
    assert!(cli.global.to_overrides().is_empty());
}
