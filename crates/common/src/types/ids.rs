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

use std::{fmt, num::NonZeroU32, str::FromStr};

use eyre::{bail, Error, Result};
use serde::{Deserialize, Serialize};

/// Identifier of the namespace a pipeline id was allocated in.
///
/// Each content process owns one namespace, so the pair of namespace id and
/// in-namespace index is unique across the whole host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PipelineNamespaceId(pub u32);

/// Identifier of a browsing-context-like unit (a "pipeline") in the host.
///
/// The bridge never allocates pipeline ids; it only carries the ones the host
/// hands over at registration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineId {
    /// Namespace the id was allocated in.
    pub namespace_id: PipelineNamespaceId,
    /// Index within the namespace. The host never allocates index zero.
    pub index: NonZeroU32,
}

impl PipelineId {
    /// Build a pipeline id from raw wire values. Returns `None` for a zero
    /// index, which no host ever allocates.
    pub fn new(namespace_id: u32, index: u32) -> Option<Self> {
        let index = NonZeroU32::new(index)?;
        Some(Self { namespace_id: PipelineNamespaceId(namespace_id), index })
    }
}

impl fmt::Display for PipelineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.namespace_id.0, self.index)
    }
}

/// Opaque worker designator assigned by the host.
///
/// The wire type is a plain string; the bridge only validates that it is
/// non-blank and otherwise passes it through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkerId(String);

impl WorkerId {
    /// View the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for WorkerId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            bail!("worker id must not be blank");
        }
        Ok(Self(trimmed.to_owned()))
    }
}

/// Opaque handle to a debugged global execution context.
///
/// Handles are assigned by the engine's debugger facility when a global is
/// added as a debuggee; the bridge uses them only as lookup keys and never
/// inspects their value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DebuggeeId(pub u64);

impl fmt::Display for DebuggeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "debuggee#{}", self.0)
    }
}

/// Identifying metadata recorded when a global is registered for observation.
///
/// Created once at registration and looked up, never mutated, on each
/// script-load event for the same global.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebuggeeMetadata {
    /// Pipeline the global belongs to.
    pub pipeline_id: PipelineId,
    /// Worker the global runs in, absent on the main script thread.
    pub worker_id: Option<WorkerId>,
}

impl DebuggeeMetadata {
    /// Metadata for a global on the main script thread.
    pub fn new(pipeline_id: PipelineId) -> Self {
        Self { pipeline_id, worker_id: None }
    }

    /// Metadata for a global on a worker thread.
    pub fn for_worker(pipeline_id: PipelineId, worker_id: WorkerId) -> Self {
        Self { pipeline_id, worker_id: Some(worker_id) }
    }
}

/// Which engine thread a debugger instance observes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThreadInfo {
    /// The main script thread of a page.
    Script {
        /// Pipeline of the page.
        pipeline_id: PipelineId,
    },
    /// A web worker thread.
    Worker {
        /// Id of the worker.
        worker_id: WorkerId,

        /// Pipeline id of the page that created this worker.
        ///
        /// Worker threads have no pipeline namespace of their own, so they
        /// reuse the creating page's id; it is only used for lookup and
        /// logging.
        pipeline_id: PipelineId,
    },
}

impl ThreadInfo {
    /// Pipeline id associated with the observed thread.
    pub fn pipeline_id(&self) -> PipelineId {
        match self {
            Self::Script { pipeline_id } | Self::Worker { pipeline_id, .. } => *pipeline_id,
        }
    }

    /// Worker id, absent for the main script thread.
    pub fn worker_id(&self) -> Option<WorkerId> {
        match self {
            Self::Script { .. } => None,
            Self::Worker { worker_id, .. } => Some(worker_id.clone()),
        }
    }

    /// Registration record for globals created on this thread.
    pub fn debuggee_metadata(&self) -> DebuggeeMetadata {
        DebuggeeMetadata { pipeline_id: self.pipeline_id(), worker_id: self.worker_id() }
    }
}
