use super::*;

use gooey_core::Runtime;
use gooey_ui_graphics::{Color, DrawScopeDefault, GlyphHandle};
use std::cell::RefCell;

const BOUNDS: Size = Size {
    width: 320.0,
    height: 72.0,
};
const FRAME_NANOS: u64 = 16_666_667;

fn config() -> EffectConfig {
    EffectConfig::new(Color::from_rgb_u8(77, 127, 100), GlyphHandle::new(1))
}

fn effect(runtime: &Runtime, repaint: Option<RepaintHook>) -> GooeyEffect {
    GooeyEffect::new(
        BOUNDS,
        0.5,
        SwipeDirection::ToRight,
        config(),
        &GooeyTuning::default(),
        runtime.handle(),
        repaint,
    )
}

fn pump(runtime: &Runtime) -> usize {
    let handle = runtime.handle();
    let mut frames = 0;
    while handle.has_frame_callbacks() && frames < 600 {
        frames += 1;
        handle.drain_frame_callbacks(frames as u64 * FRAME_NANOS);
    }
    frames
}

#[test]
fn new_effect_starts_idle_at_zero() {
    let runtime = Runtime::new();
    let effect = effect(&runtime, None);
    assert_eq!(effect.current_progress(), 0.0);
    assert_eq!(effect.phase(), EffectPhase::Active);
    assert_eq!(effect.effect_max_width(), 160.0);
    assert_eq!(effect.gap_progress_value(), 0.7);
    assert!(effect.boundary().is_collapsed());
}

#[test]
fn update_progress_repaints() {
    let runtime = Runtime::new();
    let extents = Rc::new(RefCell::new(Vec::new()));
    let hook: RepaintHook = Rc::new({
        let extents = Rc::clone(&extents);
        move |shape: &BoundaryShape| extents.borrow_mut().push(shape.extent)
    });
    let effect = effect(&runtime, Some(hook));

    effect.update_progress(0.2);
    effect.update_progress(0.4);
    assert_eq!(effect.current_progress(), 0.4);
    let extents = extents.borrow();
    assert_eq!(extents.len(), 2);
    assert!(extents[1] > extents[0]);
}

#[test]
fn commit_animation_fires_once_and_reaches_one() {
    let runtime = Runtime::new();
    let effect = effect(&runtime, None);
    effect.update_progress(0.6);

    let completions = Rc::new(Cell::new(0));
    effect.animate_to_progress(1.0, {
        let completions = Rc::clone(&completions);
        move || completions.set(completions.get() + 1)
    });
    assert_eq!(effect.phase(), EffectPhase::Committing);

    // live drags no longer move it
    effect.update_progress(0.1);
    assert_eq!(effect.current_progress(), 0.6);

    pump(&runtime);
    assert_eq!(completions.get(), 1);
    assert_eq!(effect.current_progress(), 1.0);
    assert_eq!(effect.phase(), EffectPhase::Fired);
}

#[test]
fn cancel_animation_is_monotonic() {
    let runtime = Runtime::new();
    let samples = Rc::new(RefCell::new(Vec::new()));
    let effect = effect(&runtime, None);
    effect.update_progress(0.5);
    effect.progress.set_listener(Some(Rc::new({
        let samples = Rc::clone(&samples);
        move |value: &f32| samples.borrow_mut().push(*value)
    })));

    effect.animate_to_progress(0.0, || {});
    assert_eq!(effect.phase(), EffectPhase::Cancelling);
    pump(&runtime);

    let samples = samples.borrow();
    assert!(samples.windows(2).all(|pair| pair[1] <= pair[0]));
    assert_eq!(*samples.last().expect("frames ran"), 0.0);
}

#[test]
fn completion_fires_when_target_equals_current() {
    let runtime = Runtime::new();
    let effect = effect(&runtime, None);

    let completions = Rc::new(Cell::new(0));
    effect.animate_to_progress(0.0, {
        let completions = Rc::clone(&completions);
        move || completions.set(completions.get() + 1)
    });
    let frames = pump(&runtime);
    assert_eq!(frames, 1);
    assert_eq!(completions.get(), 1);
}

#[test]
fn stop_prevents_completion() {
    let runtime = Runtime::new();
    let effect = effect(&runtime, None);
    effect.update_progress(0.65);

    let fired = Rc::new(Cell::new(false));
    effect.animate_to_progress(1.0, {
        let fired = Rc::clone(&fired);
        move || fired.set(true)
    });
    runtime.handle().drain_frame_callbacks(FRAME_NANOS);
    effect.stop();
    pump(&runtime);

    assert!(!fired.get());
    assert_ne!(effect.phase(), EffectPhase::Fired);
}

#[test]
fn draw_uses_configured_color() {
    let runtime = Runtime::new();
    let effect = effect(&runtime, None);
    effect.update_progress(0.3);

    let mut scope = DrawScopeDefault::new(BOUNDS);
    effect.draw(&mut scope);
    let primitives = scope.into_primitives();
    assert_eq!(primitives.len(), 2);
}
