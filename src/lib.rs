// SPDX-License-Identifier: MIT
//! SkillSense client analytics — a capacity-bounded event log with typed trackers.
//!
//! Every tracked interaction is wrapped in a fixed envelope (event name,
//! properties, timestamp), stamped with ambient context (page URL + client
//! agent), and appended to a single JSON document capped at the last 100
//! entries (oldest evicted first). Recording is fire-and-forget: storage
//! failures are logged and swallowed so analytics can never break the host
//! application.

pub mod config;
pub mod error;
pub mod metrics;
pub mod recorder;
pub mod schema;
pub mod store;
pub mod tracker;

pub use config::AnalyticsConfig;
pub use error::StoreError;
pub use metrics::{AnalyticsMetrics, MetricsReader};
pub use recorder::{AmbientContext, EventRecorder, MAX_EVENTS};
pub use schema::{AnalyticsEvent, ExportFormat, ProfileView, SkillAction};
pub use store::{EventStore, FileStore, MemoryStore};
pub use tracker::AnalyticsTracker;
