// buddybuild-rs: Buddybuild CI environment parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Path values read from the environment.
//!
//! ```text
//! CiPath(PathBuf)      opaque, serializes as a string
//! PathKind: File | Folder
//! PathCheck: Unchecked (default) | MustExist
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// What a path key is expected to point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    File,
    Folder,
}

impl std::fmt::Display for PathKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Folder => write!(f, "folder"),
        }
    }
}

/// Whether path values are verified against the filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathCheck {
    /// Wrap the string, touch nothing.
    #[default]
    Unchecked,
    /// Folders must be existing directories, files existing regular files.
    MustExist,
}

impl PathCheck {
    #[must_use]
    pub const fn from_verify(verify: bool) -> Self {
        if verify { Self::MustExist } else { Self::Unchecked }
    }
}

/// A filesystem location taken from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CiPath(PathBuf);

impl CiPath {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// Wraps a raw value, checking it when `check` asks for it.
    ///
    /// # Errors
    ///
    /// Returns a message describing the failed check.
    pub fn from_env(raw: &str, kind: PathKind, check: PathCheck) -> Result<Self, String> {
        let path = PathBuf::from(raw);
        if check == PathCheck::MustExist {
            let ok = match kind {
                PathKind::File => path.is_file(),
                PathKind::Folder => path.is_dir(),
            };
            if !ok {
                return Err(format!("{kind} '{raw}' does not exist"));
            }
        }
        Ok(Self(path))
    }

    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for CiPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl std::fmt::Display for CiPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
