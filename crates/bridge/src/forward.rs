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

//! Forwarding of notification records to the devtools server.

use sdb_common::{
    config::SourcePolicy,
    types::{
        DevtoolsMessage, NewSourceNotification, PipelineId, SourceInfo,
        INTRODUCTION_TYPE_INLINE_SCRIPT,
    },
};
use tokio::sync::mpsc;
use tracing::{debug, error, info};
use url::Url;

use crate::{
    error::SinkError,
    sink::{DevtoolsSink, NotificationSink},
};

/// Turns script-load notifications into devtools source actors, applying a
/// [`SourcePolicy`] to decide which sources are worth showing.
///
/// The forwarder is itself a [`NotificationSink`], so an observer can feed it
/// directly or from behind a channel via [`pump_notifications`].
#[derive(Debug)]
pub struct DevtoolsForwarder<D> {
    policy: SourcePolicy,
    devtools: D,
}

impl<D> DevtoolsForwarder<D> {
    /// Creates a forwarder with the default policy.
    pub fn new(devtools: D) -> Self {
        Self::with_policy(devtools, SourcePolicy::default())
    }

    /// Creates a forwarder with an explicit policy.
    pub fn with_policy(devtools: D, policy: SourcePolicy) -> Self {
        Self { policy, devtools }
    }

    /// Applies the policy to one notification, producing the source actor
    /// descriptor for sources that should be shown and `None` for the rest.
    pub fn source_actor(
        &self,
        notification: &NewSourceNotification,
    ) -> Option<(PipelineId, SourceInfo)> {
        let Some(pipeline_id) = notification.pipeline_id else {
            debug!("not creating a source actor: notification carries no pipeline id");
            return None;
        };

        let introduction_type = notification.introduction_type.as_deref();
        if introduction_type.is_none() && self.policy.require_introduction_type {
            debug!("not creating a source actor for a source with no introduction type");
            return None;
        }

        // The override may be relative; resolve it against the original URL.
        let original_url = Url::parse(&notification.url).ok();
        let override_url = notification
            .url_override
            .as_deref()
            .and_then(|raw| Url::options().base_url(original_url.as_ref()).parse(raw).ok());

        if let Some(kind) = introduction_type {
            // Eval-like sources have no meaningful URL of their own; without
            // an author-supplied override there is nothing to list.
            if override_url.is_none() && self.policy.is_eval_introduction(kind) {
                debug!("not creating a source actor for {kind} source without a display URL");
                return None;
            }
        }

        // An inline script element shares its page URL unless the author
        // renamed it, in which case it counts as a standalone source.
        let inline =
            introduction_type == Some(INTRODUCTION_TYPE_INLINE_SCRIPT) && override_url.is_none();

        let Some(url) = override_url.or(original_url) else {
            debug!("not creating a source actor: no usable URL in {:?}", notification.url);
            return None;
        };

        let info = SourceInfo {
            url,
            introduction_type: introduction_type.map(str::to_owned),
            inline,
            worker_id: notification.worker_id.clone(),
            // Inline sources are read back out of the page by the client;
            // only standalone sources ship their text.
            content: (!inline).then(|| notification.text.clone()),
            // TODO: thread the content type of the original fetch through
            // SourceDescription so the actor can report it.
            content_type: None,
            spidermonkey_id: notification.spidermonkey_id,
        };
        Some((pipeline_id, info))
    }
}

impl<D: DevtoolsSink> DevtoolsForwarder<D> {
    /// Forwards one notification, applying the policy first.
    ///
    /// A source skipped by policy is success; only a sink failure is an
    /// error.
    pub fn forward(&self, notification: &NewSourceNotification) -> Result<(), SinkError> {
        let Some((pipeline_id, info)) = self.source_actor(notification) else {
            return Ok(());
        };
        debug!("creating source actor for {} in pipeline {pipeline_id}", info.url);
        self.devtools.send_message(DevtoolsMessage::CreateSourceActor(pipeline_id, info))
    }
}

impl<D: DevtoolsSink> NotificationSink for DevtoolsForwarder<D> {
    fn notify_new_source(&self, notification: NewSourceNotification) -> Result<(), SinkError> {
        self.forward(&notification)
    }
}

/// Drains a notification channel into a sink until every sender is dropped.
///
/// Delivery failures are reported per record and do not stop the pump.
pub async fn pump_notifications<S: NotificationSink>(
    mut notifications: mpsc::UnboundedReceiver<NewSourceNotification>,
    sink: S,
) {
    info!("notification pump started");
    while let Some(notification) = notifications.recv().await {
        if let Err(err) = sink.notify_new_source(notification) {
            error!("failed to deliver notification: {err}");
        }
    }
    info!("notification pump stopped");
}
