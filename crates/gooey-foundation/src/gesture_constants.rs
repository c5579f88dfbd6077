//! Shared gesture constants for consistent touch/pointer handling.
//!
//! Values are in logical pixels. Hosts on very high-density touch screens
//! may want to scale them by the device's DPI factor.

/// Distance the pointer must travel from the press position before a pan
/// gesture begins.
///
/// Matches common platform conventions (Android uses ~8dp for
/// ViewConfiguration.TOUCH_SLOP).
pub const DRAG_THRESHOLD: f32 = 8.0;

/// Maximum reported pan velocity in logical pixels per second.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;
