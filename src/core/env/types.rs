// buddybuild-rs: Buddybuild CI environment parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Types for environment key naming.
//!
//! ```text
//! KeyPrefix: Buddybuild → "BUDDYBUILD_" + key (default)
//!            Bare       → key
//! ```

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::error::ConfigError;

/// Key naming convention of the source mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyPrefix {
    /// Keys carry the `BUDDYBUILD_` prefix, as set by the CI.
    #[default]
    Buddybuild,
    /// Keys are used as-is.
    Bare,
}

impl KeyPrefix {
    pub const BUDDYBUILD: &'static str = "BUDDYBUILD_";

    /// The literal prefix prepended to every bare key.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Buddybuild => Self::BUDDYBUILD,
            Self::Bare => "",
        }
    }

    /// Full variable name for a bare key.
    #[must_use]
    pub fn apply<'a>(&self, key: &'a str) -> Cow<'a, str> {
        match self {
            Self::Buddybuild => Cow::Owned(format!("{}{key}", self.as_str())),
            Self::Bare => Cow::Borrowed(key),
        }
    }
}

impl std::fmt::Display for KeyPrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buddybuild => write!(f, "buddybuild"),
            Self::Bare => write!(f, "bare"),
        }
    }
}

impl std::str::FromStr for KeyPrefix {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "buddybuild" => Ok(Self::Buddybuild),
            "bare" | "none" => Ok(Self::Bare),
            _ => Err(ConfigError::InvalidValue {
                section: "env".to_string(),
                key: "prefix".to_string(),
                message: format!("expected 'buddybuild' or 'bare', got '{s}'"),
            }),
        }
    }
}
