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

//! End-to-end integration tests for the observation bridge
//!
//! These tests drive a scripted engine harness through the full workflow:
//! - Global creation and debuggee registration
//! - Script loads turning into notification records
//! - Records crossing a channel and becoming devtools source actors

use sdb_bridge::{
    forward::{pump_notifications, DevtoolsForwarder},
    observer::SourceObserver,
    test_utils::CollectingSink,
};
use sdb_common::types::{
    DebuggeeMetadata, DevtoolsMessage, NewSourceNotification, PipelineId, SourceDescription,
    ThreadInfo, WorkerId,
};
use sdb_integration_tests::test_utils::{engine::ScriptEngineHarness, init};
use serde_json::json;
use tokio::sync::mpsc;
use tracing::info;

fn pipeline(namespace_id: u32, index: u32) -> PipelineId {
    PipelineId::new(namespace_id, index).unwrap()
}

#[test]
fn test_registered_page_script_produces_exact_notification() {
    init::init_test_environment();
    info!("Running registered page script test");

    let sink = CollectingSink::new();
    let mut harness = ScriptEngineHarness::new(SourceObserver::new(sink.clone()));

    let global = harness.add_debuggee();
    harness.hooks_mut().register_debuggee(global, DebuggeeMetadata::new(pipeline(0, 3)));
    harness.load_script(global, &SourceDescription::new(7, "http://x/a.js").text("1+1"));

    let notifications = sink.notifications();
    assert_eq!(notifications.len(), 1, "one load event, one record");
    assert_eq!(
        notifications[0],
        NewSourceNotification {
            pipeline_id: Some(pipeline(0, 3)),
            worker_id: None,
            spidermonkey_id: 7,
            url: "http://x/a.js".to_string(),
            url_override: None,
            text: "1+1".to_string(),
            introduction_type: None,
        }
    );

    // Exact wire shape: preserved names, explicit nulls.
    assert_eq!(
        serde_json::to_value(&notifications[0]).unwrap(),
        json!({
            "pipelineId": { "namespaceId": 0, "index": 3 },
            "workerId": null,
            "spidermonkeyId": 7,
            "url": "http://x/a.js",
            "urlOverride": null,
            "text": "1+1",
            "introductionType": null,
        })
    );
}

#[test]
fn test_unregistered_global_is_best_effort() {
    init::init_test_environment();
    info!("Running unregistered global test");

    let sink = CollectingSink::new();
    let mut harness = ScriptEngineHarness::new(SourceObserver::new(sink.clone()));

    // Never registered: a worker script thread the embedder does not track.
    let global = harness.add_debuggee();
    harness.load_script(global, &SourceDescription::new(2, "http://x/b.js").text("f()"));

    let notifications = sink.notifications();
    assert_eq!(notifications.len(), 1, "the record is still emitted");
    let value = serde_json::to_value(&notifications[0]).unwrap();
    assert_eq!(value["pipelineId"], json!(null));
    assert_eq!(value["workerId"], json!(null));
    assert_eq!(value["url"], json!("http://x/b.js"));
}

#[test]
fn test_worker_global_carries_worker_id() {
    init::init_test_environment();
    info!("Running worker global test");

    let sink = CollectingSink::new();
    let mut harness = ScriptEngineHarness::new(SourceObserver::new(sink.clone()));

    let global = harness.add_debuggee();
    let worker_thread = ThreadInfo::Worker {
        worker_id: "worker-1".parse::<WorkerId>().unwrap(),
        pipeline_id: pipeline(1, 2),
    };
    harness.hooks_mut().register_debuggee(global, worker_thread.debuggee_metadata());
    harness.load_script(global, &SourceDescription::new(5, "http://x/worker.js").text("onmessage"));

    let notifications = sink.notifications();
    assert_eq!(notifications[0].pipeline_id, Some(pipeline(1, 2)));
    assert_eq!(notifications[0].worker_id.as_ref().map(|id| id.as_str()), Some("worker-1"));
}

#[test]
fn test_double_registration_keeps_first_record() {
    init::init_test_environment();
    info!("Running double registration test");

    let sink = CollectingSink::new();
    let mut harness = ScriptEngineHarness::new(SourceObserver::new(sink.clone()));

    let global = harness.add_debuggee();
    assert!(harness.hooks_mut().register_debuggee(global, DebuggeeMetadata::new(pipeline(0, 1))));
    assert!(!harness.hooks_mut().register_debuggee(global, DebuggeeMetadata::new(pipeline(0, 9))));

    harness.load_script(global, &SourceDescription::new(1, "http://x/c.js").text("1"));
    assert_eq!(sink.notifications()[0].pipeline_id, Some(pipeline(0, 1)));
}

#[test]
fn test_multiple_globals_resolve_their_own_metadata() {
    init::init_test_environment();
    info!("Running multiple globals test");

    let sink = CollectingSink::new();
    let mut harness = ScriptEngineHarness::new(SourceObserver::new(sink.clone()));

    let first = harness.add_debuggee();
    let second = harness.add_debuggee();
    harness.hooks_mut().register_debuggee(first, DebuggeeMetadata::new(pipeline(0, 1)));
    harness.hooks_mut().register_debuggee(second, DebuggeeMetadata::new(pipeline(0, 2)));

    harness.load_script(second, &SourceDescription::new(20, "http://x/second.js").text("b"));
    harness.load_script(first, &SourceDescription::new(10, "http://x/first.js").text("a"));

    let notifications = sink.notifications();
    assert_eq!(notifications.len(), 2);
    assert_eq!(notifications[0].pipeline_id, Some(pipeline(0, 2)));
    assert_eq!(notifications[0].spidermonkey_id, 20);
    assert_eq!(notifications[1].pipeline_id, Some(pipeline(0, 1)));
    assert_eq!(notifications[1].spidermonkey_id, 10);
}

#[test]
fn test_wasm_module_notifies_with_empty_text() {
    init::init_test_environment();
    info!("Running wasm module test");

    let sink = CollectingSink::new();
    let mut harness = ScriptEngineHarness::new(SourceObserver::new(sink.clone()));

    let global = harness.add_debuggee();
    harness.hooks_mut().register_debuggee(global, DebuggeeMetadata::new(pipeline(0, 4)));
    let module =
        SourceDescription::new(9, "http://x/m.wasm").wasm_binary(vec![0x00, 0x61, 0x73, 0x6d]);
    harness.load_script(global, &module);

    let notifications = sink.notifications();
    assert_eq!(notifications.len(), 1, "binary-only sources still notify");
    assert_eq!(notifications[0].text, "");
    assert_eq!(serde_json::to_value(&notifications[0]).unwrap()["text"], json!(""));
}

#[tokio::test]
async fn test_full_pipeline_reaches_devtools_sink() {
    init::init_test_environment();
    info!("Running full pipeline test");

    let (notification_tx, notification_rx) = mpsc::unbounded_channel();
    let (devtools_tx, mut devtools_rx) = mpsc::unbounded_channel();
    let pump =
        tokio::spawn(pump_notifications(notification_rx, DevtoolsForwarder::new(devtools_tx)));

    let mut harness = ScriptEngineHarness::new(SourceObserver::new(notification_tx));
    let global = harness.add_debuggee();
    harness.hooks_mut().register_debuggee(global, DebuggeeMetadata::new(pipeline(0, 3)));

    let page_script = SourceDescription::new(7, "https://example.test/js/app.min.js")
        .text("console.log(1)")
        .display_url("app.js")
        .introduction_type("srcScript");
    harness.load_script(global, &page_script);

    let eval_script =
        SourceDescription::new(8, "https://example.test/").text("2+2").introduction_type("eval");
    harness.load_script(global, &eval_script);

    // Dropping the harness drops the observer, closing the channel.
    drop(harness);
    pump.await.expect("pump task");

    let message = devtools_rx.recv().await.expect("one devtools message");
    let DevtoolsMessage::CreateSourceActor(pipeline_id, info) = message;
    assert_eq!(pipeline_id, pipeline(0, 3));
    assert_eq!(info.url.as_str(), "https://example.test/js/app.js");
    assert_eq!(info.spidermonkey_id, 7);
    assert_eq!(info.content.as_deref(), Some("console.log(1)"));
    assert!(!info.inline);

    assert!(devtools_rx.recv().await.is_none(), "the eval source must not reach devtools");
}
