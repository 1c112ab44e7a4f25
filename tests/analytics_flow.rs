// SPDX-License-Identifier: MIT
//! End-to-end tests over a real on-disk store: wires the file store, recorder,
//! trackers, and metrics reader together the way a host application would.

use std::sync::Arc;

use serde_json::{Map, Value};
use tempfile::TempDir;

use skillsense_analytics::{
    AmbientContext, AnalyticsConfig, AnalyticsMetrics, AnalyticsTracker, EventRecorder,
    EventStore, ExportFormat, FileStore, MetricsReader, ProfileView, SkillAction, MAX_EVENTS,
};

fn init_logs() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn ambient() -> AmbientContext {
    AmbientContext {
        url: "app://skillsense/dashboard".to_string(),
        user_agent: "skillsense-test/1.0".to_string(),
    }
}

async fn wire(dir: &TempDir) -> (Arc<FileStore>, AnalyticsTracker, MetricsReader) {
    let store = Arc::new(FileStore::new(dir.path()).await.unwrap());
    let recorder = EventRecorder::new(store.clone(), ambient());
    let tracker = AnalyticsTracker::new(recorder);
    let metrics = MetricsReader::new(store.clone());
    (store, tracker, metrics)
}

#[tokio::test]
async fn tracked_interactions_land_in_call_order_with_ambient_fields() {
    let dir = TempDir::new().unwrap();
    let (store, tracker, _) = wire(&dir).await;

    tracker
        .track_skill_interaction(SkillAction::View, "Rust", None)
        .await;
    tracker.track_export(ExportFormat::Json, 8).await;
    tracker.track_profile_view(ProfileView::Private).await;

    let events = store.read_all().await;
    let names: Vec<&str> = events.iter().map(|e| e.event.as_str()).collect();
    assert_eq!(names, ["skill_view", "export_generated", "profile_viewed"]);

    for event in &events {
        let url = event.properties.get("url").and_then(Value::as_str);
        let agent = event.properties.get("userAgent").and_then(Value::as_str);
        assert_eq!(url, Some("app://skillsense/dashboard"));
        assert_eq!(agent, Some("skillsense-test/1.0"));
        assert!(event.timestamp > 0);
    }
}

#[tokio::test]
async fn log_is_capped_at_one_hundred_events_oldest_dropped() {
    let dir = TempDir::new().unwrap();
    let (store, tracker, _) = wire(&dir).await;

    for i in 0..105u64 {
        let mut metadata = Map::new();
        metadata.insert("seq".to_string(), Value::from(i));
        tracker
            .track_skill_interaction(SkillAction::View, "Rust", Some(metadata))
            .await;
    }

    let events = store.read_all().await;
    assert_eq!(events.len(), MAX_EVENTS);

    let first_seq = events[0].properties.get("seq").and_then(Value::as_u64);
    let last_seq = events[99].properties.get("seq").and_then(Value::as_u64);
    assert_eq!(first_seq, Some(5));
    assert_eq!(last_seq, Some(104));
}

#[tokio::test]
async fn corrupted_document_is_recovered_on_next_write() {
    init_logs();
    let dir = TempDir::new().unwrap();
    let (store, tracker, _) = wire(&dir).await;

    tokio::fs::write(store.path(), "not json").await.unwrap();
    assert!(store.read_all().await.is_empty());

    // The next recording starts a fresh document rather than erroring out.
    tracker.track_profile_view(ProfileView::Public).await;
    let events = store.read_all().await;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event, "profile_viewed");
}

#[tokio::test]
async fn metrics_snapshot_matches_recorded_interactions() {
    let dir = TempDir::new().unwrap();
    let (_, tracker, metrics) = wire(&dir).await;

    tracker
        .track_skill_interaction(SkillAction::Confirm, "Rust", None)
        .await;
    tracker
        .track_skill_interaction(SkillAction::Confirm, "SQL", None)
        .await;
    tracker
        .track_skill_interaction(SkillAction::Reject, "Cobol", None)
        .await;
    tracker
        .track_skill_interaction(SkillAction::Edit, "Python", None)
        .await;
    tracker.track_export(ExportFormat::Pdf, 3).await;

    let snapshot = metrics.snapshot().await;
    assert_eq!(snapshot.total_events, 5);
    assert_eq!(snapshot.skill_confirmations, 2);
    assert_eq!(snapshot.skill_rejections, 1);
    assert_eq!(snapshot.skill_edits, 1);
    assert_eq!(snapshot.exports, 1);
    assert_eq!(snapshot.confirmation_rate, 50);
    assert_eq!(snapshot.edit_rate, 25);
}

#[tokio::test]
async fn snapshot_is_stable_between_writes() {
    let dir = TempDir::new().unwrap();
    let (_, tracker, metrics) = wire(&dir).await;

    tracker
        .track_skill_interaction(SkillAction::Confirm, "Rust", None)
        .await;

    let first = metrics.snapshot().await;
    let second = metrics.snapshot().await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn fresh_store_reports_zero_metrics() {
    let dir = TempDir::new().unwrap();
    let (store, _, metrics) = wire(&dir).await;

    assert!(store.read_all().await.is_empty());
    let snapshot = metrics.snapshot().await;
    assert_eq!(
        snapshot,
        AnalyticsMetrics::from_events(&[]),
    );
    assert_eq!(snapshot.confirmation_rate, 0);
    assert_eq!(snapshot.edit_rate, 0);
}

#[tokio::test]
async fn config_wires_ambient_context_end_to_end() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("analytics.toml");
    tokio::fs::write(
        &config_path,
        format!(
            "data_dir = \"{}\"\npage_url = \"app://skillsense/profile\"\nuser_agent = \"skillsense-desktop/2.1\"\n",
            dir.path().join("data").display()
        ),
    )
    .await
    .unwrap();

    let config = AnalyticsConfig::load(&config_path);
    let store = Arc::new(FileStore::new(&config.data_dir).await.unwrap());
    let tracker = AnalyticsTracker::new(EventRecorder::new(store.clone(), config.ambient()));

    tracker.track_profile_view(ProfileView::Public).await;

    let events = store.read_all().await;
    assert_eq!(
        events[0].properties.get("url").and_then(Value::as_str),
        Some("app://skillsense/profile")
    );
    assert_eq!(
        events[0].properties.get("userAgent").and_then(Value::as_str),
        Some("skillsense-desktop/2.1")
    );
}
