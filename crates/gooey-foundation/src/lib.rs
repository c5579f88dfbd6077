//! Input model for the gooey swipe effect.
//!
//! Hosts either feed phase-tagged [`GestureSample`]s straight from their own
//! pan recognizer, or feed raw [`PointerEvent`]s through a
//! [`PanGestureDetector`] which produces the samples.

pub mod gesture_constants;
pub mod input;

pub use input::*;

pub mod prelude {
    pub use crate::input::prelude::*;
}
