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

//! Logging configuration shared by SDB components.
//!
//! Provides centralized logging setup with:
//! - Structured console output with timestamps and source locations
//! - Optional file logging with daily rotation
//! - Environment variable support (`RUST_LOG`, `SDB_LOG_DIR`)
//! - Default INFO level when nothing else is configured

use eyre::Result;
use std::{env, fs, path::PathBuf, sync::Once};
use tracing::Level;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{
    fmt::{self, time::LocalTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

/// Initialize logging for an SDB component.
///
/// Sets up a structured console layer and, when `enable_file_logging` is
/// true, a daily-rolling file layer under the SDB log directory. The log
/// level comes from `RUST_LOG`, defaulting to INFO.
///
/// # Arguments
/// * `component_name` - Name of the component (e.g. "sdb-bridge")
/// * `enable_file_logging` - Whether to also write rolling log files
///
/// # Examples
/// ```no_run
/// sdb_common::logging::init_logging("sdb-bridge", true).unwrap();
/// tracing::info!("bridge starting");
/// ```
pub fn init_logging(component_name: &str, enable_file_logging: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .expect("Failed to create environment filter");

    let console_layer = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_timer(LocalTime::rfc_3339())
        .with_ansi(true);

    if enable_file_logging {
        let log_dir = create_log_directory(component_name)?;

        let file_appender = rolling::daily(&log_dir, format!("{component_name}.log"));
        let (non_blocking_appender, guard) = non_blocking(file_appender);

        // The guard flushes the appender on drop; the subscriber lives for
        // the rest of the process, so the guard must too.
        std::mem::forget(guard);

        let file_layer = fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_timer(LocalTime::rfc_3339())
            .with_ansi(false)
            .with_writer(non_blocking_appender);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .with(file_layer.with_filter(EnvFilter::from_default_env()))
            .try_init()
            .map_err(|e| eyre::eyre!("Failed to initialize tracing subscriber: {e}"))?;

        tracing::info!(
            component = component_name,
            log_dir = %log_dir.display(),
            "Logging initialized with console and file output"
        );
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .try_init()
            .map_err(|e| eyre::eyre!("Failed to initialize tracing subscriber: {e}"))?;

        tracing::info!(component = component_name, "Logging initialized with console output only");
    }

    log_environment_info(component_name);

    Ok(())
}

/// Resolve and create the log directory for a component.
///
/// Honors [`SDB_LOG_DIR`](crate::env::SDB_LOG_DIR) and otherwise falls back
/// to `<tmp>/sdb-logs/<component>`.
fn create_log_directory(component_name: &str) -> Result<PathBuf> {
    let base = match env::var(crate::env::SDB_LOG_DIR) {
        Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
        _ => env::temp_dir().join("sdb-logs"),
    };
    let log_dir = base.join(component_name);

    fs::create_dir_all(&log_dir)?;

    Ok(log_dir)
}

/// Log useful environment information at startup.
fn log_environment_info(component_name: &str) {
    let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    tracing::info!(component = component_name, rust_log = %rust_log, "Environment information");

    if let Ok(current_dir) = env::current_dir() {
        tracing::debug!(working_directory = %current_dir.display(), "Working directory");
    }
}

/// Initialize simple console-only logging without the full setup.
///
/// Useful for tests and small utilities.
pub fn init_simple_logging(level: Level) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level.as_str()))
        .expect("Failed to create environment filter");

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| eyre::eyre!("Failed to initialize simple logging: {e}"))?;

    Ok(())
}

// Global test logging initialization - ensures logging is only set up once across all tests
static TEST_LOGGING_INIT: Once = Once::new();

/// Safe logging initialization for tests - can be called multiple times.
///
/// Uses `std::sync::Once` so any number of tests can request logging without
/// tripping over an already-installed subscriber. Console-only, INFO by
/// default, `RUST_LOG` respected.
pub fn ensure_test_logging(default_level: Option<Level>) {
    TEST_LOGGING_INIT.call_once(|| {
        let default_level = default_level.unwrap_or(Level::INFO);
        // Ignore errors: a failure here means a subscriber is already
        // installed, which is fine for tests.
        let _ = init_simple_logging(default_level);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tracing::{debug, error, info, warn};

    #[test]
    fn test_logging_macros_work() {
        ensure_test_logging(None);

        info!("Test info message");
        warn!("Test warning message");
        debug!("Test debug message");
        error!("Test error message");
    }

    #[test]
    #[serial]
    fn test_log_directory_creation() {
        let log_dir = create_log_directory("test-component").unwrap();

        assert!(log_dir.exists());
        assert!(log_dir.to_string_lossy().contains("sdb-logs"));
        assert!(log_dir.to_string_lossy().contains("test-component"));
    }

    #[test]
    #[serial]
    fn test_log_directory_env_override() {
        let tmp = tempfile::tempdir().unwrap();
        env::set_var(crate::env::SDB_LOG_DIR, tmp.path());

        let log_dir = create_log_directory("override-component").unwrap();

        env::remove_var(crate::env::SDB_LOG_DIR);

        assert!(log_dir.starts_with(tmp.path()));
        assert!(log_dir.ends_with("override-component"));
    }

    #[test]
    fn test_repeated_initialization_is_safe() {
        ensure_test_logging(None);

        // Either call may fail because a subscriber is already installed;
        // neither may panic.
        let result1 = init_logging("test-repeat-1", false);
        let result2 = init_logging("test-repeat-2", false);
        match (result1, result2) {
            (Ok(_), _) => {}
            (Err(_), Ok(_)) => {}
            (Err(_), Err(_)) => {}
        }

        info!("Logging still works after repeated init attempts");
    }
}
