use super::*;

const GAP: f32 = 0.7;
const WINDOW: f32 = 0.15;

fn steps(from: f32, to: f32, count: usize) -> impl Iterator<Item = f32> {
    (0..=count).map(move |i| from + (to - from) * i as f32 / count as f32)
}

#[test]
fn opposite_sign_clamps_to_zero() {
    for raw in steps(-2.0, -0.001, 50) {
        assert_eq!(directional_progress(raw, SwipeDirection::ToRight), 0.0);
        assert_eq!(directional_progress(-raw, SwipeDirection::ToLeft), 0.0);
    }
}

#[test]
fn matching_sign_keeps_magnitude() {
    assert_eq!(directional_progress(0.4, SwipeDirection::ToRight), 0.4);
    assert_eq!(directional_progress(-0.4, SwipeDirection::ToLeft), 0.4);
    assert_eq!(directional_progress(0.0, SwipeDirection::ToLeft), 0.0);
}

#[test]
fn remap_is_identity_below_window() {
    for p in steps(0.0, GAP - WINDOW, 40) {
        assert_eq!(remap_progress(p, GAP, WINDOW), p);
    }
}

#[test]
fn remap_is_continuous_at_window_start() {
    let start = GAP - WINDOW;
    let below = remap_progress(start, GAP, WINDOW);
    let above = remap_progress(start + 1e-4, GAP, WINDOW);
    assert!((above - below).abs() < 1e-3, "jump from {below} to {above}");
}

#[test]
fn remap_is_monotonic_and_capped() {
    let mut previous = 0.0;
    for p in steps(0.0, 3.0, 600) {
        let value = remap_progress(p, GAP, WINDOW);
        assert!(value >= previous, "remap decreased at {p}");
        assert!(value <= GAP, "remap exceeded gap at {p}: {value}");
        previous = value;
    }
}

#[test]
fn remap_stays_below_gap_inside_window() {
    for p in steps(GAP - WINDOW + 0.01, GAP, 20) {
        assert!(remap_progress(p, GAP, WINDOW) < GAP);
    }
    // log-compressed: dragging to the threshold lands well short of it
    assert!(remap_progress(GAP, GAP, WINDOW) < GAP - 0.1);
}

#[test]
fn remap_reaches_gap_once_rate_exceeds_one() {
    // rate > 1 once local progress exceeds 9 windows
    let far = GAP - WINDOW + 9.5 * WINDOW;
    assert_eq!(remap_progress(far, GAP, WINDOW), GAP);
    assert_eq!(remap_progress(10.0, GAP, WINDOW), GAP);
}

#[test]
fn live_drag_never_reaches_commit() {
    for p in steps(0.0, 5.0, 200) {
        assert!(remap_progress(p, GAP, WINDOW) < 1.0);
    }
}

#[test]
fn release_threshold_boundary() {
    assert_eq!(TerminalTarget::for_release(GAP, GAP), TerminalTarget::Commit);
    assert_eq!(
        TerminalTarget::for_release(GAP - f32::EPSILON, GAP),
        TerminalTarget::Cancel
    );
    assert_eq!(TerminalTarget::for_release(0.0, GAP), TerminalTarget::Cancel);
    assert_eq!(TerminalTarget::for_release(1.4, GAP), TerminalTarget::Commit);
    assert_eq!(TerminalTarget::Commit.progress(), 1.0);
    assert_eq!(TerminalTarget::Cancel.progress(), 0.0);
}

#[test]
fn release_ignores_which_side_of_the_origin() {
    let tuning = crate::config::GooeyTuning::default();
    assert_eq!(tuning.terminal_target(-0.9), TerminalTarget::Commit);
    assert_eq!(tuning.terminal_target(GAP), TerminalTarget::Commit);
    assert_eq!(tuning.terminal_target(-0.2), TerminalTarget::Cancel);
    assert_eq!(tuning.terminal_target(0.2), TerminalTarget::Cancel);
}

#[test]
fn raw_progress_guards_empty_width() {
    assert_eq!(raw_progress(50.0, 100.0), 0.5);
    assert_eq!(raw_progress(-25.0, 100.0), -0.25);
    assert_eq!(raw_progress(50.0, 0.0), 0.0);
}
