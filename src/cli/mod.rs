// buddybuild-rs: Buddybuild CI environment parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! buddybuild [global options] <command>
//! build      build info as JSON
//! ios        iOS info as JSON (null if absent)
//! android    Android info as JSON (null if absent)
//! show       all records as JSON
//! check      exit status only
//! options    effective settings
//! version
//! ```

pub mod global;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use clap::{Args, Parser, Subcommand};

/// Typed access to the Buddybuild CI environment.
#[derive(Debug, Parser)]
#[command(
    name = "buddybuild",
    author,
    version,
    about = "Buddybuild CI environment reader",
    long_about = "Reads the BUDDYBUILD_* variables of a Buddybuild custom script and\n\
                  prints them as typed JSON records.\n\n\
                  Build information is required: if it cannot be read the command\n\
                  exits with status 1. iOS and Android information is optional and\n\
                  prints as null when the build is not for that platform."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Lists the effective settings.
    Options,

    /// Prints build information.
    Build(OutputArgs),

    /// Prints iOS information.
    Ios(OutputArgs),

    /// Prints Android information.
    Android(OutputArgs),

    /// Prints all records.
    Show(OutputArgs),

    /// Exits 0 if build information resolves.
    Check,
}

/// Output formatting options.
#[derive(Debug, Clone, Default, Args)]
pub struct OutputArgs {
    /// Prints compact JSON on one line.
    #[arg(long)]
    pub compact: bool,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
