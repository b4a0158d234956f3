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

//! Test utilities for integration tests

/// Initialization utilities for tests
pub mod init {
    /// Initialize test environment logging, safe to call from every test.
    pub fn init_test_environment() {
        sdb_common::logging::ensure_test_logging(None);
    }
}

/// A scripted stand-in for a script engine's debugger facility
pub mod engine {
    use sdb_bridge::hooks::DebuggerHooks;
    use sdb_common::types::{DebuggeeId, SourceDescription};

    /// Drives a [`DebuggerHooks`] implementation the way a real engine would:
    /// hooks fire synchronously on the calling thread, and debuggee handles
    /// are handed out in creation order.
    #[derive(Debug)]
    pub struct ScriptEngineHarness<H> {
        hooks: H,
        next_global: u64,
    }

    impl<H: DebuggerHooks> ScriptEngineHarness<H> {
        /// Creates a harness driving `hooks`.
        pub fn new(hooks: H) -> Self {
            Self { hooks, next_global: 0 }
        }

        /// Creates a global execution context, announces it through the
        /// new-global hook, and returns its debuggee handle.
        pub fn add_debuggee(&mut self) -> DebuggeeId {
            self.next_global += 1;
            let global = DebuggeeId(self.next_global);
            self.hooks.on_new_global_object(global);
            global
        }

        /// Compiles a source in `global`, firing the new-script hook.
        pub fn load_script(&mut self, global: DebuggeeId, source: &SourceDescription) {
            self.hooks.on_new_script(global, source);
        }

        /// The hook implementation under test.
        pub fn hooks(&self) -> &H {
            &self.hooks
        }

        /// Mutable access to the hook implementation under test.
        pub fn hooks_mut(&mut self) -> &mut H {
            &mut self.hooks
        }
    }
}
