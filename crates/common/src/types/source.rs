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
use url::Url;

use super::ids::{PipelineId, WorkerId};

/// Introduction types of sources that were eval'd into existence rather than
/// fetched from somewhere. Without an author-supplied display URL such
/// sources cannot be meaningfully shown in a source tree.
pub const EVAL_INTRODUCTION_TYPES: &[&str] = &[
    "injectedScript",
    "eval",
    "debugger eval",
    "Function",
    "javascriptURL",
    "eventHandler",
    "domTimer",
];

/// Introduction type of a script element with inline contents.
pub const INTRODUCTION_TYPE_INLINE_SCRIPT: &str = "inlineScript";

/// Engine-side description of a newly loaded source unit.
///
/// Mirrors the engine's source reflection object, with every field that is
/// only meaningful for some source kinds made an explicit `Option`. An engine
/// that has nothing to report for a field supplies `None` instead of failing
/// the field read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDescription {
    /// Engine-assigned numeric id of the source, stable for its lifetime.
    pub id: u32,
    /// URL the source was compiled with.
    pub url: String,
    /// Author-supplied display URL (`//# sourceURL=...`), when present.
    pub display_url: Option<String>,
    /// Full source text. Absent for wasm modules.
    pub text: Option<String>,
    /// Engine classification of how the source was introduced (e.g. `eval`,
    /// `srcScript`). Absent when the engine did not record one.
    pub introduction_type: Option<String>,
    /// Module bytes, present for wasm sources only.
    pub binary: Option<Vec<u8>>,
}

impl SourceDescription {
    /// A description with only the always-present fields filled in.
    pub fn new(id: u32, url: impl Into<String>) -> Self {
        Self {
            id,
            url: url.into(),
            display_url: None,
            text: None,
            introduction_type: None,
            binary: None,
        }
    }

    /// Attach the full source text.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Attach an author-supplied display URL.
    pub fn display_url(mut self, url: impl Into<String>) -> Self {
        self.display_url = Some(url.into());
        self
    }

    /// Attach the engine's introduction classification.
    pub fn introduction_type(mut self, kind: impl Into<String>) -> Self {
        self.introduction_type = Some(kind.into());
        self
    }

    /// Attach wasm module bytes.
    pub fn wasm_binary(mut self, bytes: Vec<u8>) -> Self {
        self.binary = Some(bytes);
        self
    }

    /// Whether this source is a wasm module.
    pub fn is_wasm(&self) -> bool {
        self.binary.is_some()
    }
}

/// Script-load notification record handed to the notification sink.
///
/// This is a wire contract: consumers on the host side match on the exact
/// JSON shape, so field names and nullability must serialize precisely as
/// written here. Nulls are emitted explicitly, never omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSourceNotification {
    /// Pipeline the loading global was registered under; null when the
    /// global was never registered (the notification is still emitted,
    /// best-effort).
    pub pipeline_id: Option<PipelineId>,
    /// Worker the loading global runs in; null on the main script thread.
    pub worker_id: Option<WorkerId>,
    /// Engine-assigned source id.
    pub spidermonkey_id: u32,
    /// URL the source was compiled with.
    pub url: String,
    /// Author-supplied display URL override, if any.
    pub url_override: Option<String>,
    /// Full source text, empty when the engine reported none.
    pub text: String,
    /// Introduction classification, if the engine recorded one.
    pub introduction_type: Option<String>,
}

/// Descriptor of a source actor the devtools server should create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceInfo {
    /// Final URL of the source, with any display override already applied.
    pub url: Url,
    /// Introduction classification the actor is created for, when the engine
    /// recorded one.
    pub introduction_type: Option<String>,
    /// Whether the source is the inline contents of a script element.
    pub inline: bool,
    /// Worker the source belongs to, absent for page sources.
    pub worker_id: Option<WorkerId>,
    /// Source text. Omitted for inline sources, whose contents the client
    /// reads back from the page itself.
    pub content: Option<String>,
    /// MIME type of the source, when known.
    pub content_type: Option<String>,
    /// Engine-assigned source id, used to correlate later debugger events.
    pub spidermonkey_id: u32,
}
