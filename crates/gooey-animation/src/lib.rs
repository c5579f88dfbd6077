//! Time-based animations driven by the gooey frame clock.

mod animation;
mod easing;

pub use animation::*;
pub use easing::*;
