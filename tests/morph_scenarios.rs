// tests/morph_scenarios.rs
// End-to-end runs of the check view the way a host drives it

use nannou::prelude::*;

use checkmorph::models::{Anchors, MorphPaths};
use checkmorph::render::{StrokeStyle, Surface};
use checkmorph::{CheckView, EasingType, GlyphState, SavedState};

#[derive(Default)]
struct Lines(Vec<(Point2, Point2)>);

impl Surface for Lines {
    fn draw_line(&mut self, from: Point2, to: Point2, _style: &StrokeStyle) {
        self.0.push((from, to));
    }
}

fn host_view(size: f32) -> CheckView {
    let mut view = CheckView::default();
    view.on_size_or_padding_changed(size, size, 0.0);
    view
}

#[test]
fn reference_geometry_at_160() {
    let anchors = Anchors::new(160.0);
    assert_eq!(anchors.plus_top, pt2(80.0, 0.0));
    assert_eq!(anchors.plus_right, pt2(160.0, 80.0));
    assert_eq!(anchors.check_right, pt2(160.0, 20.0));

    let paths = MorphPaths::build(160.0);
    assert!((paths.first.length - 82.46).abs() < 0.01);
}

#[test]
fn frame_by_frame_toggle_ends_on_check() {
    let mut view = host_view(160.0);
    let anchors = Anchors::new(160.0);

    let mut lines = Lines::default();
    view.draw(&mut lines);
    assert_eq!(lines.0[0], (anchors.plus_top, anchors.plus_bottom));
    assert_eq!(lines.0[1], (anchors.plus_left, anchors.plus_right));

    view.update(1.0);
    view.toggle_with(300);

    // 60 fps for a bit over the duration
    let mut last_fraction = view.effective_fraction();
    for frame in 1..=20 {
        view.update(1.0 + frame as f32 / 60.0);
        assert!(view.effective_fraction() >= last_fraction - 1e-6);
        last_fraction = view.effective_fraction();
    }

    assert!(!view.is_animating());
    assert_eq!(view.state(), GlyphState::Check);

    let mut lines = Lines::default();
    view.draw(&mut lines);
    assert_eq!(lines.0[0], (anchors.check_right, anchors.check_middle));
    assert_eq!(lines.0[1], (anchors.check_left, anchors.check_middle));
}

#[test]
fn midpoint_matches_easing_curve() {
    let mut view = host_view(100.0);
    view.toggle_with(300);
    view.update(0.0);
    view.update(0.15);

    let expected = EasingType::AccelerateDecelerate.apply(0.5);
    assert!((view.progress() - expected).abs() < 1e-3);
}

#[test]
fn toggle_after_idle_host_animates_fully() {
    let mut view = host_view(100.0);
    view.update(0.0);
    view.toggle_with(300);

    // host only resumes ticking much later
    view.update(30.0);
    assert!(view.is_animating());
    view.update(30.15);
    assert!(view.progress() > 0.4 && view.progress() < 0.6);
    view.update(30.4);
    assert_eq!(view.progress(), 1.0);
}

#[test]
fn rapid_toggles_settle_on_last_request() {
    let mut view = host_view(100.0);
    view.update(0.0);

    view.toggle();
    view.update(0.05);
    view.toggle();
    view.update(0.08);
    view.toggle();

    for frame in 0..60 {
        view.update(0.1 + frame as f32 * 0.02);
    }

    assert_eq!(view.state(), GlyphState::Check);
    assert_eq!(view.progress(), 1.0);
    assert!(!view.is_animating());
}

#[test]
fn state_survives_recreation() {
    let mut view = host_view(100.0);
    view.check_with(0);
    view.update(0.0);
    let saved = view.save_state().to_json().unwrap();
    drop(view);

    let mut recreated = host_view(100.0);
    recreated.restore_state(&SavedState::from_json_or_default(&saved));
    assert_eq!(recreated.state(), GlyphState::Check);

    let mut broken = host_view(100.0);
    broken.restore_state(&SavedState::from_json_or_default("{\"flag_state\":"));
    assert_eq!(broken.state(), GlyphState::Plus);
}
