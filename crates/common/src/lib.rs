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

//! SDB Common - Shared functionality for SDB components
//!
//! This crate provides the identifier and record types shared by the
//! observation bridge and its embedders, along with configuration and
//! logging setup used across the workspace.

/// Identifier and wire-record types used throughout the SDB ecosystem
pub mod types;

/// Bridge configuration, including the devtools source filtering policy
pub mod config;
/// Environment variable names read by SDB components
pub mod env;
/// Logging setup and utilities for consistent logging across SDB components
pub mod logging;

pub use config::*;
pub use logging::*;
