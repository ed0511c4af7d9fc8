// buddybuild-rs: Buddybuild CI environment parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   show (build/ios/android/show/check), config (options)
//! ```

pub mod config;
pub mod show;
