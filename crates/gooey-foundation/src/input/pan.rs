//! Turns a raw pointer stream into phase-tagged pan samples.

use gooey_ui_graphics::Point;

use super::types::{GesturePhase, GestureSample, PointerEvent, PointerEventKind, PointerId};
use super::velocity_tracker::VelocityTracker1D;
use crate::gesture_constants::{DRAG_THRESHOLD, MAX_FLING_VELOCITY};

#[derive(Clone, Copy, Debug, PartialEq)]
enum PanState {
    Idle,
    Pressed { pointer: PointerId, origin: Point },
    Panning { pointer: PointerId, origin: Point },
    /// Rejected; swallow events until the pointer lifts.
    Failed { pointer: PointerId },
}

/// Single-pointer pan recognizer.
///
/// Emits `Began` once the pointer has travelled past the touch slop, then
/// `Changed` for every move, and `Ended`/`Cancelled` when it lifts. Only the
/// pointer that went down first is tracked.
pub struct PanGestureDetector {
    state: PanState,
    touch_slop: f32,
    tracker_x: VelocityTracker1D,
    tracker_y: VelocityTracker1D,
}

impl Default for PanGestureDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl PanGestureDetector {
    pub fn new() -> Self {
        Self::with_touch_slop(DRAG_THRESHOLD)
    }

    pub fn with_touch_slop(touch_slop: f32) -> Self {
        Self {
            state: PanState::Idle,
            touch_slop: touch_slop.max(0.0),
            tracker_x: VelocityTracker1D::new(),
            tracker_y: VelocityTracker1D::new(),
        }
    }

    pub fn is_panning(&self) -> bool {
        matches!(self.state, PanState::Panning { .. })
    }

    /// Rejects the pan in progress. Later events from the same pointer are
    /// ignored until it lifts.
    pub fn fail(&mut self) {
        match self.state {
            PanState::Pressed { pointer, .. } | PanState::Panning { pointer, .. } => {
                self.state = PanState::Failed { pointer };
            }
            PanState::Idle | PanState::Failed { .. } => {}
        }
    }

    pub fn reset(&mut self) {
        self.state = PanState::Idle;
        self.tracker_x.reset();
        self.tracker_y.reset();
    }

    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> Option<GestureSample> {
        match (self.state, event.kind) {
            (PanState::Idle, PointerEventKind::Down) => {
                self.tracker_x.reset();
                self.tracker_y.reset();
                self.track(event);
                self.state = PanState::Pressed {
                    pointer: event.id,
                    origin: event.position,
                };
                None
            }
            (PanState::Idle, _) => None,
            (PanState::Pressed { pointer, origin }, kind) if pointer == event.id => match kind {
                PointerEventKind::Move => {
                    self.track(event);
                    let translation = offset(origin, event.position);
                    if translation.x.hypot(translation.y) <= self.touch_slop {
                        return None;
                    }
                    self.state = PanState::Panning { pointer, origin };
                    Some(self.sample(GesturePhase::Began, origin, event))
                }
                PointerEventKind::Up | PointerEventKind::Cancel => {
                    self.state = PanState::Idle;
                    None
                }
                PointerEventKind::Down => None,
            },
            (PanState::Panning { pointer, origin }, kind) if pointer == event.id => match kind {
                PointerEventKind::Move => {
                    self.track(event);
                    Some(self.sample(GesturePhase::Changed, origin, event))
                }
                PointerEventKind::Up => {
                    self.track(event);
                    self.state = PanState::Idle;
                    Some(self.sample(GesturePhase::Ended, origin, event))
                }
                PointerEventKind::Cancel => {
                    self.state = PanState::Idle;
                    Some(self.sample(GesturePhase::Cancelled, origin, event))
                }
                PointerEventKind::Down => None,
            },
            (PanState::Failed { pointer }, PointerEventKind::Up | PointerEventKind::Cancel)
                if pointer == event.id =>
            {
                self.state = PanState::Idle;
                None
            }
            _ => None,
        }
    }

    fn track(&mut self, event: &PointerEvent) {
        self.tracker_x.add_data_point(event.time_ms, event.position.x);
        self.tracker_y.add_data_point(event.time_ms, event.position.y);
    }

    fn sample(&self, phase: GesturePhase, origin: Point, event: &PointerEvent) -> GestureSample {
        let translation = offset(origin, event.position);
        let vx = self
            .tracker_x
            .calculate_velocity()
            .clamp(-MAX_FLING_VELOCITY, MAX_FLING_VELOCITY);
        let vy = self
            .tracker_y
            .calculate_velocity()
            .clamp(-MAX_FLING_VELOCITY, MAX_FLING_VELOCITY);
        log::trace!("pan {phase:?} translation={translation:?} velocity=({vx}, {vy})");
        GestureSample::new(phase)
            .with_translation(translation.x, translation.y)
            .with_velocity(vx, vy)
            .with_position(event.position.x, event.position.y)
    }
}

fn offset(origin: Point, position: Point) -> Point {
    Point::new(position.x - origin.x, position.y - origin.y)
}

#[cfg(test)]
#[path = "tests/pan_tests.rs"]
mod tests;
