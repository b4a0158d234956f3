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

//! Source observer sitting on the engine's debugger facility.

use std::collections::{hash_map::Entry, HashMap};

use sdb_common::{
    config::ObserverConfig,
    types::{DebuggeeId, DebuggeeMetadata, NewSourceNotification, SourceDescription},
};
use tracing::{debug, info, trace, warn};

use crate::{error::HookError, hooks::DebuggerHooks, sink::NotificationSink};

/// Observer wired into the engine's debugger facility.
///
/// Owns the debuggee table mapping observed globals to the identifying
/// metadata the embedder registered for them. The table only grows: records
/// are never mutated or removed, so a script load can always resolve the
/// metadata its global was first registered with.
///
/// Both hooks swallow their own failures. The engine invokes them in the
/// middle of script execution, and an escaping error there would take the
/// whole engine down with it.
#[derive(Debug)]
pub struct SourceObserver<S> {
    debuggees: HashMap<DebuggeeId, DebuggeeMetadata>,
    sink: S,
    config: ObserverConfig,
}

impl<S> SourceObserver<S> {
    /// Creates an observer with default settings delivering into `sink`.
    pub fn new(sink: S) -> Self {
        Self::with_config(sink, ObserverConfig::default())
    }

    /// Creates an observer with explicit settings.
    pub fn with_config(sink: S, config: ObserverConfig) -> Self {
        Self { debuggees: HashMap::new(), sink, config }
    }

    /// Records the association between an observed global and its identifying
    /// metadata, so later loads in that global carry pipeline and worker ids.
    ///
    /// Registration is first-record-wins: re-registering a global is
    /// tolerated, and conflicting metadata is ignored with a warning.
    /// Returns whether a new record was inserted.
    pub fn register_debuggee(&mut self, global: DebuggeeId, metadata: DebuggeeMetadata) -> bool {
        match self.debuggees.entry(global) {
            Entry::Occupied(existing) => {
                if existing.get() == &metadata {
                    debug!("{global} registered again with identical metadata");
                } else {
                    warn!(
                        "{global} already registered for pipeline {}; ignoring re-registration for pipeline {}",
                        existing.get().pipeline_id,
                        metadata.pipeline_id,
                    );
                }
                false
            }
            Entry::Vacant(slot) => {
                debug!("registered {global} for pipeline {}", metadata.pipeline_id);
                slot.insert(metadata);
                true
            }
        }
    }

    /// Metadata recorded for `global`, if it was ever registered.
    pub fn metadata_for(&self, global: DebuggeeId) -> Option<&DebuggeeMetadata> {
        self.debuggees.get(&global)
    }

    /// Number of globals registered so far.
    pub fn debuggee_count(&self) -> usize {
        self.debuggees.len()
    }
}

impl<S: NotificationSink> SourceObserver<S> {
    /// Builds the notification record for a script load and hands it to the
    /// sink.
    ///
    /// Unregistered globals still notify, with the pipeline and worker fields
    /// null. Sources without text notify with an empty string; the wire field
    /// is non-nullable.
    fn notify_new_source(
        &self,
        global: DebuggeeId,
        source: &SourceDescription,
    ) -> Result<(), HookError> {
        let metadata = self.debuggees.get(&global);
        if metadata.is_none() {
            debug!("script load on unregistered {global}; notifying without pipeline metadata");
        }

        let notification = NewSourceNotification {
            pipeline_id: metadata.map(|meta| meta.pipeline_id),
            worker_id: metadata.and_then(|meta| meta.worker_id.clone()),
            spidermonkey_id: source.id,
            url: source.url.clone(),
            url_override: source.display_url.clone(),
            text: source.text.clone().unwrap_or_default(),
            introduction_type: source.introduction_type.clone(),
        };

        if let Err(err) = self.sink.notify_new_source(notification) {
            return Err(HookError::new(err));
        }
        Ok(())
    }
}

impl<S: NotificationSink> DebuggerHooks for SourceObserver<S> {
    fn on_new_global_object(&mut self, global: DebuggeeId) {
        // Log-only: the global becomes interesting once the embedder
        // registers it with its pipeline metadata.
        if self.config.log_new_globals {
            info!("new global execution context: {global}");
        } else {
            debug!("new global execution context: {global}");
        }
    }

    fn on_new_script(&mut self, global: DebuggeeId, source: &SourceDescription) {
        trace!("source {} loaded in {global}: {}", source.id, source.url);
        if let Err(err) = self.notify_new_source(global, source) {
            err.report();
        }
    }
}

#[cfg(test)]
mod tests {
    use sdb_common::types::{PipelineId, WorkerId};

    use super::*;
    use crate::test_utils::{CollectingSink, FailingSink};

    fn pipeline(namespace_id: u32, index: u32) -> PipelineId {
        PipelineId::new(namespace_id, index).unwrap()
    }

    #[test]
    fn test_registered_global_notification_carries_metadata() {
        let sink = CollectingSink::new();
        let mut observer = SourceObserver::new(sink.clone());

        let global = DebuggeeId(1);
        assert!(observer.register_debuggee(global, DebuggeeMetadata::new(pipeline(0, 3))));

        let source = SourceDescription::new(7, "https://example.test/app.js")
            .text("console.log(1)")
            .introduction_type("srcScript");
        observer.on_new_script(global, &source);

        let notifications = sink.notifications();
        assert_eq!(notifications.len(), 1);
        assert_eq!(
            notifications[0],
            NewSourceNotification {
                pipeline_id: Some(pipeline(0, 3)),
                worker_id: None,
                spidermonkey_id: 7,
                url: "https://example.test/app.js".to_string(),
                url_override: None,
                text: "console.log(1)".to_string(),
                introduction_type: Some("srcScript".to_string()),
            }
        );
    }

    #[test]
    fn test_unregistered_global_still_notifies() {
        let sink = CollectingSink::new();
        let mut observer = SourceObserver::new(sink.clone());

        observer.on_new_script(DebuggeeId(99), &SourceDescription::new(1, "https://a.test/x.js"));

        let notifications = sink.notifications();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].pipeline_id, None);
        assert_eq!(notifications[0].worker_id, None);
        assert_eq!(notifications[0].spidermonkey_id, 1);
    }

    #[test]
    fn test_double_registration_keeps_first_record() {
        let mut observer = SourceObserver::new(CollectingSink::new());
        let global = DebuggeeId(4);

        assert!(observer.register_debuggee(global, DebuggeeMetadata::new(pipeline(0, 1))));
        assert!(!observer.register_debuggee(global, DebuggeeMetadata::new(pipeline(0, 2))));

        assert_eq!(observer.debuggee_count(), 1);
        assert_eq!(observer.metadata_for(global).unwrap().pipeline_id, pipeline(0, 1));
    }

    #[test]
    fn test_identical_reregistration_is_tolerated() {
        let mut observer = SourceObserver::new(CollectingSink::new());
        let global = DebuggeeId(5);
        let metadata = DebuggeeMetadata::new(pipeline(1, 8));

        assert!(observer.register_debuggee(global, metadata.clone()));
        assert!(!observer.register_debuggee(global, metadata.clone()));

        assert_eq!(observer.debuggee_count(), 1);
        assert_eq!(observer.metadata_for(global), Some(&metadata));
    }

    #[test]
    fn test_worker_metadata_flows_into_notification() {
        let sink = CollectingSink::new();
        let mut observer = SourceObserver::new(sink.clone());

        let global = DebuggeeId(2);
        let worker_id: WorkerId = "worker-7".parse().unwrap();
        observer
            .register_debuggee(global, DebuggeeMetadata::for_worker(pipeline(0, 4), worker_id));
        observer.on_new_script(global, &SourceDescription::new(3, "https://a.test/worker.js"));

        let notifications = sink.notifications();
        assert_eq!(notifications[0].pipeline_id, Some(pipeline(0, 4)));
        assert_eq!(notifications[0].worker_id.as_ref().map(|id| id.as_str()), Some("worker-7"));
    }

    #[test]
    fn test_wasm_source_notifies_with_empty_text() {
        let sink = CollectingSink::new();
        let mut observer = SourceObserver::new(sink.clone());

        let global = DebuggeeId(3);
        observer.register_debuggee(global, DebuggeeMetadata::new(pipeline(0, 6)));
        let source =
            SourceDescription::new(11, "https://a.test/m.wasm").wasm_binary(vec![0x00, 0x61]);
        observer.on_new_script(global, &source);

        let notifications = sink.notifications();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].text, "");
        assert_eq!(notifications[0].spidermonkey_id, 11);
    }

    #[test]
    fn test_sink_failure_never_escapes_the_hook() {
        let mut observer = SourceObserver::new(FailingSink);
        let global = DebuggeeId(1);
        observer.register_debuggee(global, DebuggeeMetadata::new(pipeline(0, 1)));

        // Must not panic or propagate; the observer stays usable.
        observer.on_new_script(global, &SourceDescription::new(1, "https://a.test/x.js"));
        observer.on_new_script(global, &SourceDescription::new(2, "https://a.test/y.js"));
        assert_eq!(observer.debuggee_count(), 1);
    }

    #[test]
    fn test_new_global_hook_is_log_only() {
        let sink = CollectingSink::new();
        let mut observer = SourceObserver::new(sink.clone());

        observer.on_new_global_object(DebuggeeId(1));
        observer.on_new_global_object(DebuggeeId(2));

        assert!(sink.notifications().is_empty());
        assert_eq!(observer.debuggee_count(), 0);
    }
}
