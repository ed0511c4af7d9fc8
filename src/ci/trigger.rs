// buddybuild-rs: Buddybuild CI environment parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! What started a build.
//!
//! ```text
//! webhook                      → Webhook
//! webhook_pull_request_update  → PullRequestUpdate
//! ui_triggered                 → Ui
//! scheduler                    → Scheduler
//! rebuild_of_commit            → Rebuild
//! api_triggered                → Api
//! ```

use serde::{Deserialize, Serialize};

/// Closed set of `TRIGGERED_BY` values. Matching is case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trigger {
    #[serde(rename = "webhook")]
    Webhook,
    #[serde(rename = "webhook_pull_request_update")]
    PullRequestUpdate,
    #[serde(rename = "ui_triggered")]
    Ui,
    #[serde(rename = "scheduler")]
    Scheduler,
    #[serde(rename = "rebuild_of_commit")]
    Rebuild,
    #[serde(rename = "api_triggered")]
    Api,
}

impl Trigger {
    pub const ALL: [Self; 6] = [
        Self::Webhook,
        Self::PullRequestUpdate,
        Self::Ui,
        Self::Scheduler,
        Self::Rebuild,
        Self::Api,
    ];

    /// The value as the CI writes it.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Webhook => "webhook",
            Self::PullRequestUpdate => "webhook_pull_request_update",
            Self::Ui => "ui_triggered",
            Self::Scheduler => "scheduler",
            Self::Rebuild => "rebuild_of_commit",
            Self::Api => "api_triggered",
        }
    }
}

impl std::fmt::Display for Trigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a `TRIGGERED_BY` value outside the known set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown trigger '{0}'")]
pub struct UnknownTrigger(pub String);

impl std::str::FromStr for Trigger {
    type Err = UnknownTrigger;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|trigger| trigger.as_str() == s)
            .ok_or_else(|| UnknownTrigger(s.to_string()))
    }
}
