pub mod pan;
pub mod types;
pub mod velocity_tracker;

pub use pan::PanGestureDetector;
pub use types::{GesturePhase, GestureSample, PointerEvent, PointerEventKind, PointerId};
pub use velocity_tracker::VelocityTracker1D;

pub mod prelude {
    pub use super::pan::PanGestureDetector;
    pub use super::types::{
        GesturePhase, GestureSample, PointerEvent, PointerEventKind, PointerId,
    };
}
