// buddybuild-rs: Buddybuild CI environment parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |              show / check / options
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |            ci             |
//!              |  CiContext::load(&Env)    |
//!              '--+-----------+--------+---'
//!                 |           |        |
//!                 v           v        v
//!             BuildInfo    IosInfo  AndroidInfo
//!              (fatal)    (optional) (optional)
//!
//!   +-----------------------------------------+
//!   |  core   env, EnvReader, path, number    |
//!   +-----------------------------------------+
//!   |  foundation   error, logging, config    |
//!   +-----------------------------------------+
//! ```
//!
//! # Example
//!
//! ```
//! use buddybuild_rs::ci::{CiContext, LoadOptions, Trigger};
//! use buddybuild_rs::core::env::container::Env;
//!
//! let env = Env::from_pairs([
//!     ("BUILD_NUMBER", "42"),
//!     ("BUILD_ID", "b1"),
//!     ("APP_ID", "a1"),
//!     ("BRANCH", "main"),
//!     ("REPO_SLUG", "org/repo"),
//!     ("WORKSPACE", "/ws"),
//!     ("SECURE_FILES", "/sec"),
//!     ("TRIGGERED_BY", "webhook"),
//! ]);
//! let ctx = CiContext::load(&env, &LoadOptions::bare())?;
//! assert_eq!(ctx.build.build_number, 42);
//! assert_eq!(ctx.build.triggered_by, Trigger::Webhook);
//! assert!(ctx.ios.is_none());
//! # Ok::<(), buddybuild_rs::error::BuddybuildError>(())
//! ```

pub mod ci;
pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
