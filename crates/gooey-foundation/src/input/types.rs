use gooey_ui_graphics::Point;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Raw pointer event in the coordinate space of the surface it targets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
    /// Event timestamp in milliseconds, monotonic per pointer.
    pub time_ms: i64,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, time_ms: i64) -> Self {
        Self {
            id: 0,
            kind,
            position,
            time_ms,
        }
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }
}

/// Lifecycle phase of a continuous pan gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    /// Pointer is down but has not moved far enough to be a pan.
    Possible,
    Began,
    Changed,
    Ended,
    Cancelled,
    /// The gesture was rejected after it was recognized as a pan.
    Failed,
}

impl GesturePhase {
    /// Ended, cancelled and failed all finish the gesture.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            GesturePhase::Ended | GesturePhase::Cancelled | GesturePhase::Failed
        )
    }
}

/// One phase-tagged pan sample, measured in the owning surface's space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSample {
    pub phase: GesturePhase,
    /// Offset from where the pointer went down.
    pub translation: Point,
    /// Pointer velocity in logical pixels per second.
    pub velocity: Point,
    /// Current pointer position.
    pub position: Point,
}

impl GestureSample {
    pub fn new(phase: GesturePhase) -> Self {
        Self {
            phase,
            translation: Point::ZERO,
            velocity: Point::ZERO,
            position: Point::ZERO,
        }
    }

    pub fn with_translation(mut self, x: f32, y: f32) -> Self {
        self.translation = Point::new(x, y);
        self
    }

    pub fn with_velocity(mut self, x: f32, y: f32) -> Self {
        self.velocity = Point::new(x, y);
        self
    }

    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.position = Point::new(x, y);
        self
    }
}
