use dashlink_rs::api::{RegionView, ViewPhase};
use dashlink_rs::core::Record;
use dashlink_rs::render::{RecordingRenderer, Scene};

fn respondent(id: &str, reason: &str) -> Record {
    Record::new(id).with_top_reason(reason)
}

fn sample_records() -> Vec<Record> {
    vec![
        respondent("1", "To change careers"),
        respondent("2", "To change careers"),
        respondent("3", "As a hobby"),
        respondent("4", "To start a business or to freelance"),
    ]
}

#[test]
fn construction_aggregates_and_renders_once() {
    let view = RegionView::new(RecordingRenderer::default(), &sample_records()).expect("view");

    assert_eq!(view.phase(), ViewPhase::Ready);
    assert_eq!(view.mark_count(), 3);
    assert_eq!(view.renderer().render_count(), 1);
    assert_eq!(view.reason_counts()["To change careers"], 2);
}

#[test]
fn scene_is_sorted_count_descending_with_alphabetical_ties() {
    let view = RegionView::new(RecordingRenderer::default(), &sample_records()).expect("view");
    let scene = view.scene();
    let reasons: Vec<&str> = scene.marks.iter().map(|m| m.reason.as_str()).collect();

    assert_eq!(
        reasons,
        [
            "To change careers",
            "As a hobby",
            "To start a business or to freelance",
        ]
    );
}

#[test]
fn selection_marks_the_region_and_dims_the_rest() {
    let mut view = RegionView::new(RecordingRenderer::default(), &sample_records()).expect("view");
    view.set_selected_reason(Some("As a hobby".to_owned()))
        .expect("select");

    let scene = view.scene();
    for mark in &scene.marks {
        let is_hobby = mark.reason == "As a hobby";
        assert_eq!(mark.selected, is_hobby);
        assert_eq!(mark.dimmed, !is_hobby);
    }
}

#[test]
fn clearing_the_selection_removes_all_highlight_flags() {
    let mut view = RegionView::new(RecordingRenderer::default(), &sample_records()).expect("view");
    view.set_selected_reason(Some("As a hobby".to_owned()))
        .expect("select");
    view.set_selected_reason(None).expect("clear");

    let scene = view.scene();
    assert!(scene.marks.iter().all(|m| !m.selected && !m.dimmed));
}

#[test]
fn update_replaces_the_aggregation_wholesale() {
    let mut view = RegionView::new(RecordingRenderer::default(), &sample_records()).expect("view");
    view.update(&sample_records()[..2]).expect("update");

    assert_eq!(view.mark_count(), 1);
    assert_eq!(view.reason_counts()["To change careers"], 2);
}

#[test]
fn render_is_idempotent_for_unchanged_state() {
    let mut view = RegionView::new(RecordingRenderer::default(), &sample_records()).expect("view");
    view.render().expect("render");
    view.render().expect("render");

    let scenes = view.renderer().scenes();
    assert_eq!(scenes[1], scenes[2]);
    assert!(matches!(scenes[2], Scene::Region(_)));
}
