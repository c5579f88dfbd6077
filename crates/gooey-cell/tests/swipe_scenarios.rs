use gooey_cell::{CellKey, EffectPhase, GooeyTuning, SwipeDirection};
use gooey_foundation::{GesturePhase, PointerEventKind};
use gooey_testing::{DelegateEvent, SwipeTestRule};

fn assert_close(actual: Option<f32>, expected: f32) {
    let actual = actual.expect("effect present");
    assert!(
        (actual - expected).abs() < 1e-4,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn right_swipe_past_threshold_commits_once() {
    let rule = SwipeTestRule::new();
    rule.cell().bind(CellKey(2));

    rule.begin_swipe(SwipeDirection::ToRight, 40.0);
    rule.drag_to_progress(0.9);
    let dragged = rule.cell().effect_progress().expect("effect present");
    assert!(dragged <= 0.7 && dragged > 0.55, "eased drag, got {dragged}");

    rule.release_at_progress(0.9);
    assert_eq!(rule.cell().effect_phase(), Some(EffectPhase::Committing));
    let frames = rule.pump_until_idle();
    assert!(frames > 1);

    assert_eq!(
        rule.delegate().events(),
        vec![
            DelegateEvent::ConfigRequested(CellKey(2), SwipeDirection::ToRight),
            DelegateEvent::Committed(CellKey(2), SwipeDirection::ToRight),
        ]
    );
    assert_close(rule.cell().effect_progress(), 1.0);
    assert_eq!(rule.cell().effect_phase(), Some(EffectPhase::Fired));

    let extents = rule.repaints();
    assert!(extents.windows(2).all(|pair| pair[1] + 1e-3 >= pair[0]));
}

#[test]
fn left_swipe_short_of_threshold_is_discarded() {
    let rule = SwipeTestRule::new();
    rule.begin_swipe(SwipeDirection::ToLeft, 20.0);
    rule.drag_to_progress(0.3);
    assert_close(rule.cell().effect_progress(), 0.3);

    rule.release_at_progress(0.3);
    assert_eq!(rule.cell().effect_phase(), Some(EffectPhase::Cancelling));
    rule.pump_until_idle();

    assert!(rule.delegate().commits().is_empty());
    assert!(!rule.cell().has_effect());
    assert!(rule.cell().is_recognizer_enabled());
    assert_eq!(rule.repaints().last().copied(), Some(0.0));
}

#[test]
fn dragging_back_past_origin_clamps_to_zero() {
    let rule = SwipeTestRule::new();
    rule.begin_swipe(SwipeDirection::ToRight, 40.0);
    rule.drag_to_progress(0.5);
    assert_close(rule.cell().effect_progress(), 0.5);

    rule.drag_to_progress(-0.2);
    assert_close(rule.cell().effect_progress(), 0.0);

    rule.release_at_progress(-0.2);
    rule.pump_until_idle();
    assert!(rule.delegate().commits().is_empty());
    assert!(!rule.cell().has_effect());
}

#[test]
fn long_drag_back_past_origin_commits_on_magnitude() {
    let rule = SwipeTestRule::new();
    rule.begin_swipe(SwipeDirection::ToRight, 40.0);
    rule.drag_to_progress(0.5);
    rule.drag_to_progress(-0.9);
    assert_close(rule.cell().effect_progress(), 0.0);

    rule.release_at_progress(-0.9);
    assert_eq!(rule.cell().effect_phase(), Some(EffectPhase::Committing));
    rule.pump_until_idle();

    assert_eq!(rule.delegate().commits(), vec![(CellKey(0), SwipeDirection::ToRight)]);
    assert_eq!(rule.cell().effect_phase(), Some(EffectPhase::Fired));
}

#[test]
fn left_swipe_reversed_past_the_gap_commits() {
    let rule = SwipeTestRule::new();
    rule.begin_swipe(SwipeDirection::ToLeft, 40.0);
    rule.drag_to_progress(-0.75);
    rule.release_at_progress(-0.75);
    rule.pump_until_idle();
    assert_eq!(rule.delegate().commits(), vec![(CellKey(0), SwipeDirection::ToLeft)]);
}

#[test]
fn duplicate_begin_during_live_drag_keeps_one_effect() {
    let rule = SwipeTestRule::new();
    rule.begin_swipe(SwipeDirection::ToRight, 40.0);
    rule.drag_to_progress(0.4);

    rule.begin_swipe(SwipeDirection::ToRight, 40.0);
    assert_eq!(rule.cell().effect_phase(), Some(EffectPhase::Active));
    assert!(rule.cell().recognizer().tracking);

    rule.drag_to_progress(0.5);
    assert_close(rule.cell().effect_progress(), 0.5);

    rule.release_at_progress(0.9);
    rule.pump_until_idle();
    assert_eq!(rule.delegate().commits().len(), 1);
    assert_eq!(rule.cell().effect_phase(), Some(EffectPhase::Fired));

    rule.cell().reset();
    rule.swipe(SwipeDirection::ToLeft, 0.9);
    rule.pump_until_idle();
    assert_eq!(rule.delegate().commits().len(), 2);
}

#[test]
fn release_just_past_threshold_commits() {
    let rule = SwipeTestRule::new();
    rule.swipe(SwipeDirection::ToLeft, 0.71);
    rule.pump_until_idle();
    assert_eq!(rule.delegate().commits(), vec![(CellKey(0), SwipeDirection::ToLeft)]);
}

#[test]
fn cancelled_gesture_settles_by_progress() {
    let rule = SwipeTestRule::new();
    rule.begin_swipe(SwipeDirection::ToRight, 40.0);
    rule.drag_to_progress(0.95);
    rule.cancel_at_progress(0.95);
    rule.pump_until_idle();
    assert_eq!(rule.delegate().commits().len(), 1);
}

#[test]
fn failed_gesture_settles_by_progress() {
    let rule = SwipeTestRule::new();
    rule.begin_swipe(SwipeDirection::ToRight, 40.0);
    rule.drag_to_progress(0.2);
    rule.send(GesturePhase::Failed, 0.2);
    rule.pump_until_idle();
    assert!(rule.delegate().commits().is_empty());
    assert!(!rule.cell().has_effect());
}

#[test]
fn declined_config_never_creates_effect() {
    let rule = SwipeTestRule::new();
    rule.delegate().set_config(None);

    rule.swipe(SwipeDirection::ToRight, 0.9);
    rule.pump_until_idle();

    assert_eq!(rule.delegate().config_requests(), 1);
    assert!(rule.delegate().commits().is_empty());
    assert!(!rule.cell().has_effect());
    assert!(rule.repaints().is_empty());
}

#[test]
fn second_begin_while_effect_attached_is_ignored() {
    let rule = SwipeTestRule::new();
    rule.swipe(SwipeDirection::ToRight, 0.9);
    rule.pump_until_idle();
    assert_eq!(rule.cell().effect_phase(), Some(EffectPhase::Fired));

    rule.swipe(SwipeDirection::ToLeft, 0.9);
    rule.pump_until_idle();

    assert_eq!(rule.delegate().config_requests(), 2);
    assert_eq!(rule.delegate().commits().len(), 1);
    assert_eq!(rule.cell().effect_phase(), Some(EffectPhase::Fired));
}

#[test]
fn input_is_ignored_while_settling() {
    let rule = SwipeTestRule::new();
    rule.swipe(SwipeDirection::ToRight, 0.3);
    assert!(!rule.cell().is_recognizer_enabled());

    rule.begin_swipe(SwipeDirection::ToLeft, 10.0);
    rule.drag_to_progress(0.9);
    assert_eq!(rule.delegate().config_requests(), 1);

    rule.pump_until_idle();
    assert!(rule.cell().is_recognizer_enabled());
    rule.begin_swipe(SwipeDirection::ToLeft, 10.0);
    assert_eq!(rule.delegate().config_requests(), 2);
}

#[test]
fn reset_mid_drag_discards_effect() {
    let rule = SwipeTestRule::new();
    rule.begin_swipe(SwipeDirection::ToRight, 40.0);
    rule.drag_to_progress(0.4);

    rule.cell().reset();
    assert!(!rule.cell().has_effect());

    // The rest of the old gesture goes nowhere.
    rule.drag_to_progress(0.6);
    rule.release_at_progress(0.9);
    rule.pump_until_idle();
    assert!(rule.delegate().commits().is_empty());
    assert!(!rule.cell().has_effect());
}

#[test]
fn reset_mid_animation_suppresses_action() {
    let rule = SwipeTestRule::new();
    rule.swipe(SwipeDirection::ToRight, 0.9);
    rule.advance_frame();
    rule.advance_frame();

    rule.cell().reset();
    rule.pump_until_idle();

    assert!(rule.delegate().commits().is_empty());
    assert!(!rule.cell().has_effect());
    assert!(rule.cell().is_recognizer_enabled());

    rule.swipe(SwipeDirection::ToLeft, 0.8);
    rule.pump_until_idle();
    assert_eq!(rule.delegate().commits(), vec![(CellKey(0), SwipeDirection::ToLeft)]);
}

#[test]
fn reset_when_idle_is_harmless() {
    let rule = SwipeTestRule::new();
    rule.cell().reset();
    rule.cell().reset();
    assert!(rule.cell().is_recognizer_enabled());
    assert!(!rule.cell().has_effect());
    assert_eq!(rule.pump_until_idle(), 0);
}

#[test]
fn custom_tuning_moves_the_threshold() {
    let tuning = GooeyTuning::default()
        .with_gap_progress_value(0.5)
        .with_nonlinear_window(0.1);
    let rule = SwipeTestRule::with_tuning(tuning).expect("valid tuning");

    rule.swipe(SwipeDirection::ToRight, 0.55);
    rule.pump_until_idle();
    assert_eq!(rule.delegate().commits().len(), 1);
}

#[test]
fn pointer_stream_runs_the_whole_gesture() {
    let rule = SwipeTestRule::new();
    rule.pointer(PointerEventKind::Down, 300.0, 0);
    rule.pointer(PointerEventKind::Move, 280.0, 16);
    rule.pointer(PointerEventKind::Move, 200.0, 32);
    rule.pointer(PointerEventKind::Move, 120.0, 48);
    assert_eq!(rule.cell().effect_phase(), Some(EffectPhase::Active));

    rule.pointer(PointerEventKind::Up, 100.0, 64);
    rule.pump_until_idle();

    assert_eq!(rule.delegate().commits(), vec![(CellKey(0), SwipeDirection::ToLeft)]);
}
