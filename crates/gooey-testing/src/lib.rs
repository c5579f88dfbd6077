//! Testing utilities and harness for the gooey swipe effect

pub mod recording;
pub mod swipe;

pub use recording::{DelegateEvent, RecordingDelegate};
pub use swipe::{SwipeTestRule, FRAME_NANOS};

pub mod prelude {
    pub use crate::recording::{DelegateEvent, RecordingDelegate};
    pub use crate::swipe::*;
}
