// buddybuild-rs: Buddybuild CI environment parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core building blocks the record parsers share.
//!
//! ```text
//!              core
//!               |
//!     +---------+---------+
//!     v         v         v
//!    env       path     number
//!     |         |         |
//!   Env      CiPath   parse_integer
//!   EnvReader PathCheck
//!   KeyPrefix PathKind
//! ```

pub mod env;
pub mod number;
pub mod path;
