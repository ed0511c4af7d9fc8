// buddybuild-rs: Buddybuild CI environment parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE     ← Additional settings files (can repeat)
//! --log-level N     ← Console verbosity (0-5)
//! --file-log-level  ← File verbosity (overrides --log-level)
//! --log-file FILE   ← log.file override
//! --bare            ← env.prefix = bare
//! --verify-paths    ← env.verify_paths = true
//! --no-verify-paths ← env.verify_paths = false
//!
//! Precedence: CLI flags > BUDDYBUILD_RS_* > --config > buddybuild.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML settings file(s).
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Reads keys without the `BUDDYBUILD_` prefix.
    #[arg(long)]
    pub bare: bool,

    /// Requires path values to exist on disk (default with the prefix).
    #[arg(long = "verify-paths", conflicts_with = "no_verify_paths")]
    pub verify_paths: bool,

    /// Accepts path values without touching the disk.
    #[arg(long = "no-verify-paths")]
    pub no_verify_paths: bool,

    /// Disables loading `buddybuild.toml` from the current directory.
    #[arg(long = "no-default-config")]
    pub no_default_config: bool,
}

impl GlobalOptions {
    /// Converts command-line options to settings overrides.
    #[must_use]
    pub fn to_overrides(&self) -> Vec<(&'static str, config::Value)> {
        let mut overrides = Vec::new();

        if let Some(level) = self.log_level {
            overrides.push(("log.level", i64::from(level).into()));
        }

        // file_log_level falls back to log_level if not specified
        if let Some(level) = self.file_log_level.or(self.log_level) {
            overrides.push(("log.file_level", i64::from(level).into()));
        }

        if let Some(ref path) = self.log_file {
            overrides.push(("log.file", path.display().to_string().into()));
        }

        if self.bare {
            overrides.push(("env.prefix", "bare".into()));
        }

        if self.verify_paths {
            overrides.push(("env.verify_paths", true.into()));
        } else if self.no_verify_paths {
            overrides.push(("env.verify_paths", false.into()));
        }

        overrides
    }
}
