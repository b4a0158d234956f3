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

//! Error taxonomy for the observation hooks.
//!
//! Hook bodies return [`HookError`] like any other fallible code, but the
//! errors never travel further than the hook wrapper: an error escaping into
//! the engine's debugger facility could destabilize script execution, so the
//! wrapper reports the error on the log and swallows it. [`HookError::report`]
//! produces that single log line.

use std::{fmt, panic::Location};

use thiserror::Error;
use tracing::error;

/// Failure to hand a record to a sink.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SinkError {
    /// The receiving end of the sink has gone away.
    #[error("sink closed: receiver dropped")]
    Closed,
    /// The sink looked at the record and refused it.
    #[error("sink rejected record: {reason}")]
    Rejected {
        /// Why the sink refused the record.
        reason: String,
    },
}

/// Source location an error was raised at, captured via [`Location::caller`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorLocation {
    /// File the error was raised in.
    pub file: &'static str,
    /// 1-based line within the file.
    pub line: u32,
    /// 1-based column within the line.
    pub column: u32,
}

impl ErrorLocation {
    #[track_caller]
    fn capture() -> Self {
        let location = Location::caller();
        Self { file: location.file(), line: location.line(), column: location.column() }
    }
}

impl fmt::Display for ErrorLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// What went wrong inside a hook body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HookErrorKind {
    /// The notification sink refused or could not take the record.
    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// Error raised inside a debugger hook body.
///
/// Carries the failure and the source location it was wrapped at, so the
/// report line can point back into the bridge even though the engine never
/// sees the error itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{location}: {kind}")]
pub struct HookError {
    kind: HookErrorKind,
    location: ErrorLocation,
}

impl HookError {
    /// Wraps a failure, capturing the caller's source location.
    #[track_caller]
    pub fn new(kind: impl Into<HookErrorKind>) -> Self {
        Self { kind: kind.into(), location: ErrorLocation::capture() }
    }

    /// The failure itself.
    pub fn kind(&self) -> &HookErrorKind {
        &self.kind
    }

    /// Where the failure was wrapped.
    pub fn location(&self) -> ErrorLocation {
        self.location
    }

    /// Stable name of the failure class, analogous to a thrown error's name.
    pub fn name(&self) -> &'static str {
        match self.kind {
            HookErrorKind::Sink(_) => "SinkError",
        }
    }

    /// Reports the error on the log and drops it.
    ///
    /// Emits exactly one `error` line carrying the file, line, column, name,
    /// and message of the failure. This is the terminal stop for hook errors;
    /// nothing propagates past it.
    pub fn report(&self) {
        error!("debugger hook failed at {}: {}: {}", self.location, self.name(), self.kind);
    }
}
