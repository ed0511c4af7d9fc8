// buddybuild-rs: Buddybuild CI environment parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Record printing commands.

use serde::Serialize;
use std::io::Write;

use crate::ci::{CiContext, LoadOptions, resolve_android, resolve_build, resolve_ios};
use crate::cli::OutputArgs;
use crate::core::env::container::Env;
use crate::error::Result;

/// Which record a command prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Record {
    Build,
    Ios,
    Android,
    All,
}

/// Main handler for the record commands.
///
/// Only `Build` and `All` need build information; the platform commands
/// print `null` when their record is absent.
///
/// # Errors
///
/// Returns a [`crate::error::BuddybuildError::BuildInfo`] if build
/// information is needed and missing, or an error if writing fails.
pub fn run_show_command(
    record: Record,
    args: &OutputArgs,
    env: &Env,
    options: &LoadOptions,
    out: &mut impl Write,
) -> Result<()> {
    match record {
        Record::Build => write_json(out, &resolve_build(env, options)?, args),
        Record::Ios => write_json(out, &resolve_ios(env, options), args),
        Record::Android => write_json(out, &resolve_android(env, options), args),
        Record::All => write_json(out, &CiContext::load(env, options)?, args),
    }
}

/// Handler for `check`: resolves build information and prints nothing.
///
/// # Errors
///
/// Returns a [`crate::error::BuddybuildError::BuildInfo`] on failure.
pub fn run_check_command(env: &Env, options: &LoadOptions) -> Result<()> {
    let build = resolve_build(env, options)?;
    tracing::debug!(build_id = %build.build_id, "build info resolves");
    Ok(())
}

fn write_json<T: Serialize>(out: &mut impl Write, value: &T, args: &OutputArgs) -> Result<()> {
    if args.compact {
        serde_json::to_writer(&mut *out, value)?;
    } else {
        serde_json::to_writer_pretty(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}
