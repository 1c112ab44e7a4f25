// SPDX-License-Identifier: MIT
//! Typed interaction trackers.
//!
//! One named method per event kind so call sites never construct raw event
//! names or property bags by hand. Every method is a pass-through to the
//! recorder; the enumerated domains are closed enums, so out-of-domain
//! values are unrepresentable.

use serde_json::{Map, Value};

use crate::recorder::EventRecorder;
use crate::schema::{
    ExportFormat, ProfileView, SkillAction, EVENT_DASHBOARD_ENGAGEMENT, EVENT_DASHBOARD_VIEWED,
    EVENT_EXPORT_GENERATED, EVENT_PROFILE_VIEWED,
};

/// Domain-specific recording surface handed to the host application.
#[derive(Clone)]
pub struct AnalyticsTracker {
    recorder: EventRecorder,
}

impl AnalyticsTracker {
    pub fn new(recorder: EventRecorder) -> Self {
        Self { recorder }
    }

    /// Record a skill interaction as `skill_{action}`.
    ///
    /// `metadata` entries are merged after `skillName`, matching the
    /// spread order the dashboard relies on.
    pub async fn track_skill_interaction(
        &self,
        action: SkillAction,
        skill_name: &str,
        metadata: Option<Map<String, Value>>,
    ) {
        let mut props = Map::new();
        props.insert(
            "skillName".to_string(),
            Value::String(skill_name.to_string()),
        );
        if let Some(extra) = metadata {
            for (key, value) in extra {
                props.insert(key, value);
            }
        }
        self.recorder.record(action.event_name(), props).await;
    }

    /// Record a completed profile export.
    pub async fn track_export(&self, format: ExportFormat, skill_count: u64) {
        let mut props = Map::new();
        props.insert(
            "format".to_string(),
            Value::String(format.label().to_string()),
        );
        props.insert("skillCount".to_string(), Value::from(skill_count));
        self.recorder.record(EVENT_EXPORT_GENERATED, props).await;
    }

    /// Record a profile view.
    pub async fn track_profile_view(&self, view: ProfileView) {
        let mut props = Map::new();
        props.insert(
            "viewType".to_string(),
            Value::String(view.label().to_string()),
        );
        self.recorder.record(EVENT_PROFILE_VIEWED, props).await;
    }

    /// Record a dashboard page view.
    ///
    /// The `userId` key is omitted entirely when no user is known.
    pub async fn track_dashboard_view(&self, user_id: Option<&str>, route: &str) {
        let mut props = Map::new();
        if let Some(id) = user_id {
            props.insert("userId".to_string(), Value::String(id.to_string()));
        }
        props.insert("route".to_string(), Value::String(route.to_string()));
        self.recorder.record(EVENT_DASHBOARD_VIEWED, props).await;
    }

    /// Record time spent on the dashboard, in milliseconds.
    pub async fn track_dashboard_engagement(&self, user_id: Option<&str>, duration_ms: u64) {
        let mut props = Map::new();
        if let Some(id) = user_id {
            props.insert("userId".to_string(), Value::String(id.to_string()));
        }
        props.insert("duration".to_string(), Value::from(duration_ms));
        self.recorder
            .record(EVENT_DASHBOARD_ENGAGEMENT, props)
            .await;
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
