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

//! SDB Bridge - Observation bridge between a script engine and devtools.
//!
//! The bridge sits on the engine's debugger facility: a [`SourceObserver`]
//! receives the facility's hooks, records which globals belong to which
//! pipeline, and emits one [`NewSourceNotification`] per observed script
//! load into a [`NotificationSink`]. A [`DevtoolsForwarder`] consumes those
//! records and creates devtools source actors for the ones worth showing.
//!
//! [`NewSourceNotification`]: sdb_common::types::NewSourceNotification

/// Error taxonomy of the hook and delivery paths.
pub mod error;
pub use error::*;

/// Forwarding of notification records to the devtools server.
pub mod forward;
pub use forward::*;

/// Callback surface the engine's debugger facility drives.
pub mod hooks;
pub use hooks::*;

/// The source observer and its debuggee registration table.
pub mod observer;
pub use observer::*;

/// Delivery seams between the hooks and the rest of the system.
pub mod sink;
pub use sink::*;

/// Sink doubles for tests.
pub mod test_utils;
