// buddybuild-rs: Buddybuild CI environment parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable access.
//!
//! # Architecture
//!
//! ```text
//! Env (shared, read-only Arc<BTreeMap<String, String>>)
//! Sources: current_env(), Env::from_map(), Env::from_pairs()
//!
//! EnvReader { env, prefix, path_check }
//!   lookup("BUILD_ID") --> env["BUDDYBUILD_BUILD_ID"]   (KeyPrefix::Buddybuild)
//!                      --> env["BUILD_ID"]              (KeyPrefix::Bare)
//!   folder() / file() --> CiPath
//!   integer()         --> i64
//! ```
//!
//! - **Case-sensitive**: keys are matched exactly
//! - **Immutable**: clones share the same map

pub mod container;
pub mod reader;
pub mod types;


/// Captures the current process environment.
///
/// Variables whose name or value is not valid UTF-8 are skipped.
#[must_use]
pub fn current_env() -> container::Env {
    let vars = std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect();
    container::Env::from_map(vars)
}
