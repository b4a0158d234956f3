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

//! Environment variable name constants for SDB configuration.
//!
//! These constants are the single source of truth for every environment
//! variable SDB reads, so embedders and tests never spell the names by hand.
//!
//! - [`SDB_CONFIG`] - Overrides the bridge configuration file location
//! - [`SDB_LOG_DIR`] - Overrides the directory file logs are written to

/// Environment variable overriding the bridge configuration file location.
///
/// When set, [`BridgeConfig::load`](crate::config::BridgeConfig::load) reads
/// this path instead of the per-user default (`~/.sdb.toml`).
///
/// # Examples
///
/// ```bash
/// SDB_CONFIG=/etc/sdb/bridge.toml my-embedder
/// ```
pub const SDB_CONFIG: &str = "SDB_CONFIG";

/// Environment variable overriding the directory file logs are written to.
///
/// When unset, [`init_logging`](crate::logging::init_logging) writes rolling
/// log files under `<tmp>/sdb-logs/<component>`.
///
/// # Examples
///
/// ```bash
/// SDB_LOG_DIR=/var/log/sdb my-embedder
/// ```
pub const SDB_LOG_DIR: &str = "SDB_LOG_DIR";
