// SPDX-License-Identifier: MIT
//! Event store — sole gateway to the persisted analytics document.
//!
//! The production store keeps one JSON file (`skillsense_analytics.json`)
//! holding the full event array. Reads fail open: missing or corrupted data
//! yields an empty list, never an error, so a bad document cannot take the
//! host application down.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::warn;

use crate::error::StoreError;
use crate::schema::AnalyticsEvent;

/// File name of the persisted event document.
const STORE_FILE: &str = "skillsense_analytics.json";

// ─── EventStore ───────────────────────────────────────────────────────────────

/// Gateway to persisted analytics events.
///
/// `read_all` is infallible by policy; only writes can fail, and the recorder
/// decides whether that failure is surfaced or swallowed.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Return every persisted event, oldest first. Missing or malformed data
    /// yields an empty list.
    async fn read_all(&self) -> Vec<AnalyticsEvent>;

    /// Replace the persisted document with `events`, preserving order.
    async fn write_all(&self, events: &[AnalyticsEvent]) -> Result<(), StoreError>;
}

// ─── FileStore ────────────────────────────────────────────────────────────────

/// JSON-file-backed store: one document under the data directory.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create the data directory if needed and point at the event document.
    pub async fn new(data_dir: &Path) -> Result<Self> {
        tokio::fs::create_dir_all(data_dir)
            .await
            .with_context(|| format!("create analytics data dir: {}", data_dir.display()))?;
        Ok(Self {
            path: data_dir.join(STORE_FILE),
        })
    }

    /// Path of the persisted event document.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl EventStore for FileStore {
    async fn read_all(&self) -> Vec<AnalyticsEvent> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                warn!(path = %self.path.display(), err = %e, "analytics: could not read event store");
                return Vec::new();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(events) => events,
            Err(e) => {
                warn!(path = %self.path.display(), err = %e, "analytics: malformed event store — treating as empty");
                Vec::new()
            }
        }
    }

    async fn write_all(&self, events: &[AnalyticsEvent]) -> Result<(), StoreError> {
        let json = serde_json::to_string(events)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}

// ─── MemoryStore ──────────────────────────────────────────────────────────────

/// In-memory store for tests and ephemeral hosts.
#[derive(Default)]
pub struct MemoryStore {
    events: RwLock<Vec<AnalyticsEvent>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventStore for MemoryStore {
    async fn read_all(&self) -> Vec<AnalyticsEvent> {
        self.events.read().await.clone()
    }

    async fn write_all(&self, events: &[AnalyticsEvent]) -> Result<(), StoreError> {
        *self.events.write().await = events.to_vec();
        Ok(())
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
