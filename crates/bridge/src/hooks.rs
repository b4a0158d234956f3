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

//! Callback surface the engine's debugger facility drives.

use sdb_common::types::{DebuggeeId, SourceDescription};

/// Hooks invoked by the script engine's debugger facility.
///
/// The engine calls every hook synchronously on its own execution thread,
/// between script actions. Implementations must run to completion quickly,
/// must not block, and must never let an error or panic escape back into the
/// engine.
///
/// Every hook has an empty default body so implementations only override the
/// events they care about.
pub trait DebuggerHooks {
    /// A new global execution context came into existence and was added to
    /// the set of observed debuggees.
    ///
    /// At this point the global usually has no identifying metadata yet; it
    /// gains meaning once the embedder registers it.
    fn on_new_global_object(&mut self, global: DebuggeeId) {
        let _ = global;
    }

    /// A new source unit was compiled or loaded in `global`.
    fn on_new_script(&mut self, global: DebuggeeId, source: &SourceDescription) {
        let _ = (global, source);
    }
}
