//! Core runtime for the gooey swipe effect.
//!
//! Everything here runs on one UI thread. The host owns a [`Runtime`], hands
//! [`RuntimeHandle`]s to the components that animate, and calls
//! [`RuntimeHandle::drain_frame_callbacks`] once per display frame.

mod frame_clock;
mod owned;
mod platform;
mod runtime;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use owned::{Owned, WeakOwned};
pub use platform::{Clock, FrameScheduler, SystemClock};
pub use runtime::{Runtime, RuntimeHandle};

pub(crate) type FrameCallbackId = u64;

pub mod prelude {
    pub use crate::frame_clock::{FrameCallbackRegistration, FrameClock};
    pub use crate::owned::Owned;
    pub use crate::runtime::{Runtime, RuntimeHandle};
}
