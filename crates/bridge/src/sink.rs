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

//! Delivery seams between the hooks and the rest of the system.
//!
//! The observer never talks to the devtools server directly; it hands records
//! to a [`NotificationSink`], and a forwarder turns accepted records into
//! [`DevtoolsMessage`]s for a [`DevtoolsSink`]. Both traits are implemented
//! for unbounded channel senders, so either half can sit behind a queue.

use sdb_common::types::{DevtoolsMessage, NewSourceNotification};
use tokio::sync::mpsc;

use crate::error::SinkError;

/// Consumer of script-load notification records.
///
/// Hooks hand records over synchronously on the engine's thread, so
/// implementations must not block.
pub trait NotificationSink {
    /// Accepts one notification record.
    fn notify_new_source(&self, notification: NewSourceNotification) -> Result<(), SinkError>;
}

impl NotificationSink for mpsc::UnboundedSender<NewSourceNotification> {
    fn notify_new_source(&self, notification: NewSourceNotification) -> Result<(), SinkError> {
        self.send(notification).map_err(|_| SinkError::Closed)
    }
}

/// Consumer of devtools control messages.
pub trait DevtoolsSink {
    /// Accepts one control message.
    fn send_message(&self, message: DevtoolsMessage) -> Result<(), SinkError>;
}

impl DevtoolsSink for mpsc::UnboundedSender<DevtoolsMessage> {
    fn send_message(&self, message: DevtoolsMessage) -> Result<(), SinkError> {
        self.send(message).map_err(|_| SinkError::Closed)
    }
}
