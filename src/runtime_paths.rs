// This file is part of the product DataRepo Pages.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::config::ConfigError;
use std::fs;
use std::path::{Path, PathBuf};

/// Canonical filesystem layout under the runtime root.
///
/// `templates_dir` holds instance templates that override the embedded
/// defaults; `assets_dir` is the static folder served under the pages mount.
#[derive(Debug, Clone)]
pub struct RuntimePaths {
    pub root: PathBuf,
    pub config_file: PathBuf,
    pub templates_dir: PathBuf,
    pub assets_dir: PathBuf,
}

impl RuntimePaths {
    pub fn from_root(root: &Path) -> Result<Self, ConfigError> {
        let root_path = if root.as_os_str().is_empty() {
            PathBuf::from(".")
        } else {
            root.to_path_buf()
        };

        if !root_path.exists() {
            fs::create_dir_all(&root_path).map_err(|e| {
                ConfigError::ValidationError(format!(
                    "Failed to create runtime root '{}': {}",
                    root_path.display(),
                    e
                ))
            })?;
        }

        let root_canonical = canonicalize(&root_path, "runtime root")?;
        let config_file = root_canonical.join("config.yaml");

        let templates_dir = root_canonical.join("templates");
        let assets_dir = root_canonical.join("assets");
        ensure_dir_exists(&templates_dir)?;
        ensure_dir_exists(&assets_dir)?;

        let templates_dir = canonicalize(&templates_dir, "templates directory")?;
        let assets_dir = canonicalize(&assets_dir, "assets directory")?;

        Ok(Self {
            root: root_canonical,
            config_file,
            templates_dir,
            assets_dir,
        })
    }
}

fn ensure_dir_exists(path: &Path) -> Result<(), ConfigError> {
    fs::create_dir_all(path).map_err(|e| {
        ConfigError::ValidationError(format!(
            "Failed to create directory '{}': {}",
            path.display(),
            e
        ))
    })
}

fn canonicalize(path: &Path, label: &str) -> Result<PathBuf, ConfigError> {
    path.canonicalize().map_err(|e| {
        ConfigError::ValidationError(format!(
            "Failed to canonicalize {} '{}': {}",
            label,
            path.display(),
            e
        ))
    })
}
