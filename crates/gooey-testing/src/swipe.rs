//! Headless harness that drives a [`GooeyCell`] through scripted swipes.
//!
//! # Example
//!
//! ```
//! use gooey_cell::SwipeDirection;
//! use gooey_testing::SwipeTestRule;
//!
//! let rule = SwipeTestRule::new();
//! rule.swipe(SwipeDirection::ToRight, 0.9);
//! rule.pump_until_idle();
//! assert_eq!(rule.delegate().commits().len(), 1);
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gooey_cell::{BoundaryShape, GooeyCell, GooeyTuning, SwipeDirection, TuningError};
use gooey_core::Runtime;
use gooey_foundation::{GesturePhase, GestureSample, PointerEvent, PointerEventKind};
use gooey_ui_graphics::{Point, Size};

use crate::recording::RecordingDelegate;

/// One 60Hz frame.
pub const FRAME_NANOS: u64 = 16_666_667;

/// Upper bound for [`SwipeTestRule::pump_until_idle`].
const MAX_FRAMES: usize = 600;

/// Velocity reported on `Began`, in logical pixels per second.
const BEGIN_SPEED: f32 = 240.0;

/// Owns a runtime, one cell of the default list row size and a
/// [`RecordingDelegate`], and scripts gestures against them in raw progress
/// units.
pub struct SwipeTestRule {
    runtime: Runtime,
    cell: Rc<GooeyCell>,
    delegate: Rc<RecordingDelegate>,
    frame_time: Cell<u64>,
    direction: Cell<SwipeDirection>,
    touch_y: Cell<f32>,
    repaints: Rc<RefCell<Vec<f32>>>,
}

impl Default for SwipeTestRule {
    fn default() -> Self {
        Self::new()
    }
}

impl SwipeTestRule {
    pub const BOUNDS: Size = Size {
        width: 375.0,
        height: 80.0,
    };

    pub fn new() -> Self {
        let runtime = Runtime::new();
        let cell = GooeyCell::new(runtime.handle(), Self::BOUNDS);
        Self::assemble(runtime, cell)
    }

    pub fn with_tuning(tuning: GooeyTuning) -> Result<Self, TuningError> {
        let runtime = Runtime::new();
        let cell = GooeyCell::with_tuning(runtime.handle(), Self::BOUNDS, tuning)?;
        Ok(Self::assemble(runtime, cell))
    }

    fn assemble(runtime: Runtime, cell: GooeyCell) -> Self {
        let delegate = Rc::new(RecordingDelegate::new());
        cell.set_delegate(&delegate);
        let repaints = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&repaints);
        cell.set_on_repaint(Some(Rc::new(move |shape: &BoundaryShape| {
            sink.borrow_mut().push(shape.extent);
        })));
        Self {
            runtime,
            cell: Rc::new(cell),
            delegate,
            frame_time: Cell::new(0),
            direction: Cell::new(SwipeDirection::ToRight),
            touch_y: Cell::new(Self::BOUNDS.height / 2.0),
            repaints,
        }
    }

    pub fn cell(&self) -> &Rc<GooeyCell> {
        &self.cell
    }

    pub fn delegate(&self) -> &Rc<RecordingDelegate> {
        &self.delegate
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    /// Boundary extents reported to the repaint hook, oldest first.
    pub fn repaints(&self) -> Vec<f32> {
        self.repaints.borrow().clone()
    }

    fn max_width(&self) -> f32 {
        self.cell.tuning().effect_max_width(self.cell.bounds())
    }

    /// Sends `Began` with a velocity pointing in `direction`.
    pub fn begin_swipe(&self, direction: SwipeDirection, touch_y: f32) {
        self.direction.set(direction);
        self.touch_y.set(touch_y);
        self.cell.handle_sample(
            GestureSample::new(GesturePhase::Began)
                .with_velocity(direction.sign() * BEGIN_SPEED, 0.0)
                .with_position(Self::BOUNDS.width / 2.0, touch_y),
        );
    }

    /// Sends `phase` with the translation that corresponds to signed raw
    /// progress `raw`.
    pub fn send(&self, phase: GesturePhase, raw: f32) {
        let translation = raw * self.max_width();
        self.cell.handle_sample(
            GestureSample::new(phase)
                .with_translation(translation, 0.0)
                .with_velocity(self.direction.get().sign() * BEGIN_SPEED, 0.0)
                .with_position(Self::BOUNDS.width / 2.0 + translation, self.touch_y.get()),
        );
    }

    /// Drags so the finger sits at `raw` progress along the swipe direction.
    /// Negative values drag back past the origin.
    pub fn drag_to_progress(&self, raw: f32) {
        self.send(GesturePhase::Changed, self.direction.get().sign() * raw);
    }

    pub fn release_at_progress(&self, raw: f32) {
        self.send(GesturePhase::Ended, self.direction.get().sign() * raw);
    }

    pub fn cancel_at_progress(&self, raw: f32) {
        self.send(GesturePhase::Cancelled, self.direction.get().sign() * raw);
    }

    /// Begin, drag to `raw` and release there.
    pub fn swipe(&self, direction: SwipeDirection, raw: f32) {
        self.begin_swipe(direction, Self::BOUNDS.height / 2.0);
        self.drag_to_progress(raw);
        self.release_at_progress(raw);
    }

    /// Feeds a raw pointer event at `x` on the current touch line.
    pub fn pointer(&self, kind: PointerEventKind, x: f32, time_ms: i64) {
        let event = PointerEvent::new(kind, Point::new(x, self.touch_y.get()), time_ms);
        self.cell.handle_pointer_event(&event);
    }

    /// Runs one frame. Returns whether anything was waiting for it.
    pub fn advance_frame(&self) -> bool {
        let handle = self.runtime.handle();
        if !handle.has_frame_callbacks() {
            return false;
        }
        let time = self.frame_time.get() + FRAME_NANOS;
        self.frame_time.set(time);
        handle.drain_frame_callbacks(time);
        true
    }

    /// Runs frames until no animation is pending. Returns the frame count.
    pub fn pump_until_idle(&self) -> usize {
        let mut frames = 0;
        while frames < MAX_FRAMES && self.advance_frame() {
            frames += 1;
        }
        if frames == MAX_FRAMES {
            log::warn!("animation still running after {MAX_FRAMES} frames");
        }
        frames
    }
}
