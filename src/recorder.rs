// SPDX-License-Identifier: MIT
//! Event recorder — stamps the envelope and appends to the store.
//!
//! Each recording is a read-modify-write of the whole event document,
//! serialised through a single mutex so two rapid-fire recordings cannot
//! interleave their reads and silently drop an event. Failures are logged
//! and swallowed — analytics never blocks or breaks the host application.

use std::sync::Arc;

use chrono::Utc;
use serde_json::{Map, Value};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::error::StoreError;
use crate::schema::AnalyticsEvent;
use crate::store::EventStore;

/// Maximum number of events retained; oldest entries are dropped first.
pub const MAX_EVENTS: usize = 100;

// ─── AmbientContext ───────────────────────────────────────────────────────────

/// Ambient fields stamped into every event regardless of caller input.
#[derive(Debug, Clone)]
pub struct AmbientContext {
    /// URL of the page/screen the interaction happened on.
    pub url: String,
    /// Client agent string of the host.
    pub user_agent: String,
}

// ─── EventRecorder ────────────────────────────────────────────────────────────

/// Builds the full event envelope and persists it.
///
/// Cheaply clonable; clones share the store and the write gate.
#[derive(Clone)]
pub struct EventRecorder {
    store: Arc<dyn EventStore>,
    ambient: AmbientContext,
    /// Serialises the read-modify-write so concurrent recordings cannot lose
    /// an update.
    gate: Arc<Mutex<()>>,
}

impl EventRecorder {
    pub fn new(store: Arc<dyn EventStore>, ambient: AmbientContext) -> Self {
        Self {
            store,
            ambient,
            gate: Arc::new(Mutex::new(())),
        }
    }

    /// Record an event, fire-and-forget.
    ///
    /// Storage failures are logged at `warn` and swallowed; the caller never
    /// sees them.
    pub async fn record(&self, event: &str, properties: Map<String, Value>) {
        if let Err(e) = self.try_record(event, properties).await {
            warn!(event, err = %e, "analytics: failed to persist event — dropping");
        }
    }

    /// Record an event, surfacing storage failures.
    ///
    /// [`record`](Self::record) is the tracker-facing wrapper around this;
    /// the fallible variant exists so tests can observe write failures.
    pub async fn try_record(
        &self,
        event: &str,
        properties: Map<String, Value>,
    ) -> Result<(), StoreError> {
        let record = self.envelope(event, properties);
        debug!(event = %record.event, timestamp = record.timestamp, "analytics event");

        let _guard = self.gate.lock().await;
        let mut events = self.store.read_all().await;
        events.push(record);
        truncate_to_cap(&mut events);
        self.store.write_all(&events).await
    }

    /// Merge caller properties with the ambient fields and stamp the
    /// timestamp. Ambient fields are inserted after the caller's, so the
    /// ambient value wins on key collision.
    fn envelope(&self, event: &str, mut properties: Map<String, Value>) -> AnalyticsEvent {
        properties.insert("url".to_string(), Value::String(self.ambient.url.clone()));
        properties.insert(
            "userAgent".to_string(),
            Value::String(self.ambient.user_agent.clone()),
        );
        AnalyticsEvent {
            event: event.to_string(),
            properties,
            timestamp: Utc::now().timestamp_millis(),
        }
    }
}

/// Drop entries from the front until at most [`MAX_EVENTS`] remain.
pub(crate) fn truncate_to_cap(events: &mut Vec<AnalyticsEvent>) {
    if events.len() > MAX_EVENTS {
        let excess = events.len() - MAX_EVENTS;
        events.drain(..excess);
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
