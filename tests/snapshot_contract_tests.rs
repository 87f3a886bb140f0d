use dashlink_rs::DashError;
use dashlink_rs::api::{
    DASHBOARD_SNAPSHOT_JSON_SCHEMA_V1, Dashboard, DashboardSnapshot,
    DashboardSnapshotJsonContractV1, ViewPhase,
};
use dashlink_rs::core::Record;
use dashlink_rs::render::NullRenderer;

fn sample_snapshot() -> DashboardSnapshot {
    let records = vec![
        Record::new("1")
            .with_interested_career("Back-End Developer")
            .with_top_reason("To change careers"),
        Record::new("2")
            .with_interested_career("Data Scientist")
            .with_top_reason("As a hobby"),
    ];
    let dash = Dashboard::new(records, NullRenderer::default).expect("dashboard");
    dash.snapshot()
}

#[test]
fn snapshot_reflects_dashboard_state() {
    let snapshot = sample_snapshot();

    assert_eq!(snapshot.record_count, 2);
    assert_eq!(snapshot.filtered_count, 2);
    assert_eq!(snapshot.selection.selected_career, None);
    assert_eq!(snapshot.category_trend.phase, ViewPhase::Ready);
    assert_eq!(snapshot.region.mark_count, 2);
    assert_eq!(snapshot.region_counts["As a hobby"], 1);
}

#[test]
fn contract_json_round_trips() {
    let snapshot = sample_snapshot();
    let json = snapshot.to_json_contract_v1_pretty().expect("serialize");

    assert!(json.contains("\"schema_version\": 1"));
    let parsed = DashboardSnapshot::from_json_compat_str(&json).expect("parse");
    assert_eq!(parsed, snapshot);
}

#[test]
fn bare_snapshot_json_still_parses() {
    let snapshot = sample_snapshot();
    let bare = serde_json::to_string(&snapshot).expect("serialize");

    let parsed = DashboardSnapshot::from_json_compat_str(&bare).expect("parse");
    assert_eq!(parsed, snapshot);
}

#[test]
fn unsupported_schema_version_is_rejected() {
    let payload = DashboardSnapshotJsonContractV1 {
        schema_version: 99,
        snapshot: sample_snapshot(),
    };
    let json = serde_json::to_string(&payload).expect("serialize");

    let err = DashboardSnapshot::from_json_compat_str(&json).expect_err("should fail");
    assert!(matches!(err, DashError::InvalidData(_)));
}

#[test]
fn garbage_input_is_rejected() {
    let err = DashboardSnapshot::from_json_compat_str("{not json").expect_err("should fail");
    assert!(matches!(err, DashError::InvalidData(_)));
}

#[test]
fn schema_constant_is_stable() {
    assert_eq!(DASHBOARD_SNAPSHOT_JSON_SCHEMA_V1, 1);
}
