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

use serde::{Deserialize, Serialize};

use super::ids::PipelineId;
use super::source::SourceInfo;

/// Control messages the bridge emits towards the devtools server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DevtoolsMessage {
    /// Create a source actor for a newly observed source in the given
    /// pipeline.
    CreateSourceActor(PipelineId, SourceInfo),
}
