// SPDX-License-Identifier: MIT
//! Event envelope schema — the canonical shape of every persisted analytics record.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Event name recorded when a profile export completes.
pub const EVENT_EXPORT_GENERATED: &str = "export_generated";
/// Event name recorded when a profile is viewed.
pub const EVENT_PROFILE_VIEWED: &str = "profile_viewed";
/// Event name recorded when the dashboard is opened.
pub const EVENT_DASHBOARD_VIEWED: &str = "dashboard_viewed";
/// Event name recorded when the dashboard is left, carrying engagement time.
pub const EVENT_DASHBOARD_ENGAGEMENT: &str = "dashboard_engagement";

// ─── AnalyticsEvent ───────────────────────────────────────────────────────────

/// A single analytics event as persisted in the event document.
///
/// Immutable once recorded. `properties` always contains the ambient `url`
/// and `userAgent` fields on top of whatever the tracker supplied — the
/// recorder injects them last, so they win on key collision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    /// Domain-namespaced event name, e.g. `"skill_edit"` or `"export_generated"`.
    pub event: String,
    /// Event payload keyed by camelCase property name.
    pub properties: Map<String, Value>,
    /// Milliseconds since the Unix epoch, stamped at record time.
    pub timestamp: i64,
}

// ─── Typed interaction domains ────────────────────────────────────────────────

/// What the user did with a detected skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillAction {
    /// The skill card was opened or inspected.
    View,
    /// The skill name or level was edited.
    Edit,
    /// The AI-suggested skill was accepted as-is.
    Confirm,
    /// The AI-suggested skill was removed.
    Reject,
}

impl SkillAction {
    /// Event name recorded for this action (`skill_` prefix).
    pub fn event_name(self) -> &'static str {
        match self {
            SkillAction::View => "skill_view",
            SkillAction::Edit => "skill_edit",
            SkillAction::Confirm => "skill_confirm",
            SkillAction::Reject => "skill_reject",
        }
    }
}

/// Export formats offered by the profile exporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Pdf,
    Json,
}

impl ExportFormat {
    /// Property value recorded under the `format` key.
    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Json => "json",
        }
    }
}

/// Whether a profile was opened through its public share link or by its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileView {
    Public,
    Private,
}

impl ProfileView {
    /// Property value recorded under the `viewType` key.
    pub fn label(self) -> &'static str {
        match self {
            ProfileView::Public => "public",
            ProfileView::Private => "private",
        }
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
