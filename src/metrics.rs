// SPDX-License-Identifier: MIT
//! Metrics aggregator — on-demand summary statistics over the event log.
//!
//! A pure function of the current event list: no caching, no incremental
//! update. Rates are integer percentages; a zero denominator is treated as
//! one so an empty log reports 0% instead of dividing by zero.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::schema::{AnalyticsEvent, SkillAction, EVENT_EXPORT_GENERATED};
use crate::store::EventStore;

// ─── AnalyticsMetrics ─────────────────────────────────────────────────────────

/// Summary statistics derived from the current event list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsMetrics {
    /// Total number of events in the log, of any kind.
    pub total_events: u64,
    /// Count of `skill_edit` events.
    pub skill_edits: u64,
    /// Count of `skill_confirm` events.
    pub skill_confirmations: u64,
    /// Count of `skill_reject` events.
    pub skill_rejections: u64,
    /// Count of `export_generated` events.
    pub exports: u64,
    /// confirmations / (confirmations + rejections + edits), as a rounded
    /// integer percentage 0–100.
    pub confirmation_rate: u32,
    /// edits / (confirmations + rejections + edits), as a rounded integer
    /// percentage 0–100.
    pub edit_rate: u32,
}

impl AnalyticsMetrics {
    /// Compute metrics from an ordered event slice.
    pub fn from_events(events: &[AnalyticsEvent]) -> Self {
        let count = |name: &str| events.iter().filter(|e| e.event == name).count() as u64;

        let edits = count(SkillAction::Edit.event_name());
        let confirmations = count(SkillAction::Confirm.event_name());
        let rejections = count(SkillAction::Reject.event_name());
        let exports = count(EVENT_EXPORT_GENERATED);

        // A denominator of zero is treated as one so both rates report 0%.
        let denominator = (confirmations + rejections + edits).max(1);
        let percent = |n: u64| ((n as f64 / denominator as f64) * 100.0).round() as u32;

        Self {
            total_events: events.len() as u64,
            skill_edits: edits,
            skill_confirmations: confirmations,
            skill_rejections: rejections,
            exports,
            confirmation_rate: percent(confirmations),
            edit_rate: percent(edits),
        }
    }
}

// ─── MetricsReader ────────────────────────────────────────────────────────────

/// Read-only view over a store that derives metrics on demand.
#[derive(Clone)]
pub struct MetricsReader {
    store: Arc<dyn EventStore>,
}

impl MetricsReader {
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self { store }
    }

    /// Read the current event list and derive metrics from it.
    ///
    /// Calling this twice with no intervening writes yields equal results.
    pub async fn snapshot(&self) -> AnalyticsMetrics {
        let events = self.store.read_all().await;
        AnalyticsMetrics::from_events(&events)
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
