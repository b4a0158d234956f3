// SDB - Script Debugger Bridge
// Copyright (C) 2026 The SDB Authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Configuration for the observation bridge.
//!
//! Embedders usually construct [`BridgeConfig`] programmatically; the TOML
//! load/save path exists for hosts that expose the bridge settings as a
//! per-user file.

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

use crate::types::EVAL_INTRODUCTION_TYPES;

/// Top-level bridge configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Observer-side settings.
    pub observer: ObserverConfig,
    /// Source filtering policy applied before forwarding to devtools.
    pub policy: SourcePolicy,
}

/// Settings of the hook-side observer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObserverConfig {
    /// Log new-global events at info level instead of debug.
    pub log_new_globals: bool,
}

/// Filtering policy deciding which observed sources reach devtools.
///
/// The defaults reproduce the host's stock behavior; embedders can widen or
/// narrow the eval classification without rebuilding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcePolicy {
    /// Skip sources that carry no introduction type at all.
    pub require_introduction_type: bool,
    /// Introduction types treated as eval-like. Without an author-supplied
    /// display URL, such sources are never forwarded.
    pub eval_introduction_types: Vec<String>,
}

impl Default for SourcePolicy {
    fn default() -> Self {
        Self {
            require_introduction_type: true,
            eval_introduction_types: EVAL_INTRODUCTION_TYPES
                .iter()
                .map(|kind| (*kind).to_string())
                .collect(),
        }
    }
}

impl SourcePolicy {
    /// Whether `introduction_type` classifies a source as eval-like.
    pub fn is_eval_introduction(&self, introduction_type: &str) -> bool {
        self.eval_introduction_types.iter().any(|kind| kind == introduction_type)
    }
}

impl BridgeConfig {
    /// Resolve the config file path: the [`SDB_CONFIG`](crate::env::SDB_CONFIG)
    /// override when set, `~/.sdb.toml` otherwise.
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = env::var(crate::env::SDB_CONFIG) {
            if !path.trim().is_empty() {
                return Ok(PathBuf::from(path));
            }
        }
        let home =
            dirs::home_dir().ok_or_else(|| eyre::eyre!("Unable to determine home directory"))?;
        Ok(home.join(".sdb.toml"))
    }

    /// Load configuration from the resolved path, creating the default file
    /// if none exists yet.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            info!("Config file not found, creating default at {config_path:?}");
            let default_config = Self::default();
            default_config.save_to(&config_path)?;
            return Ok(default_config);
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path:?}"))?;

        let config: Self =
            toml::from_str(&content).with_context(|| "Failed to parse config file as TOML")?;

        debug!("Loaded configuration from {path:?}");
        Ok(config)
    }

    /// Save configuration to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).with_context(|| "Failed to serialize config to TOML")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {path:?}"))?;

        debug!("Saved configuration to {path:?}");
        Ok(())
    }
}
