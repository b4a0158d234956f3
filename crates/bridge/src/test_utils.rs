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

//! In-memory sink doubles shared by unit and integration tests.

use std::sync::{Arc, Mutex};

use sdb_common::types::{DevtoolsMessage, NewSourceNotification};

use crate::{
    error::SinkError,
    sink::{DevtoolsSink, NotificationSink},
};

/// Notification sink that stores every record for later inspection.
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    records: Arc<Mutex<Vec<NewSourceNotification>>>,
}

impl CollectingSink {
    /// Creates an empty collecting sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the records collected so far.
    pub fn notifications(&self) -> Vec<NewSourceNotification> {
        self.records.lock().expect("sink mutex poisoned").clone()
    }
}

impl NotificationSink for CollectingSink {
    fn notify_new_source(&self, notification: NewSourceNotification) -> Result<(), SinkError> {
        self.records.lock().expect("sink mutex poisoned").push(notification);
        Ok(())
    }
}

/// Notification sink that refuses every record, for error-path tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingSink;

impl NotificationSink for FailingSink {
    fn notify_new_source(&self, _notification: NewSourceNotification) -> Result<(), SinkError> {
        Err(SinkError::Rejected { reason: "failing sink refuses everything".to_string() })
    }
}

/// Devtools sink that stores every control message for later inspection.
#[derive(Debug, Clone, Default)]
pub struct CollectingDevtoolsSink {
    messages: Arc<Mutex<Vec<DevtoolsMessage>>>,
}

impl CollectingDevtoolsSink {
    /// Creates an empty collecting sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the messages collected so far.
    pub fn messages(&self) -> Vec<DevtoolsMessage> {
        self.messages.lock().expect("sink mutex poisoned").clone()
    }
}

impl DevtoolsSink for CollectingDevtoolsSink {
    fn send_message(&self, message: DevtoolsMessage) -> Result<(), SinkError> {
        self.messages.lock().expect("sink mutex poisoned").push(message);
        Ok(())
    }
}
