//! Per-gesture effect configuration and cell-wide tuning.

use std::fmt;

use gooey_animation::{AnimationSpec, Easing};
use gooey_ui_graphics::{Color, GlyphHandle, Size};

use crate::direction::SwipeDirection;
use crate::progress::{directional_progress, remap_progress, TerminalTarget};

/// What the effect reveals: the action color and the glyph drawn on it.
///
/// Supplied by the delegate once per gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EffectConfig {
    pub color: Color,
    pub glyph: GlyphHandle,
}

impl EffectConfig {
    pub fn new(color: Color, glyph: GlyphHandle) -> Self {
        Self { color, glyph }
    }
}

/// Tunables shared by every gesture on a cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GooeyTuning {
    /// Commit threshold in (0, 1). Released progress at or above it commits.
    pub gap_progress_value: f32,
    /// Width of the log-compressed band that ends at the threshold.
    pub nonlinear_window: f32,
    /// Fraction of the surface width that maps to raw progress 1.0.
    pub max_width_fraction: f32,
    /// Largest vertical travel still accepted when a pan starts.
    pub axis_lock_slop: f32,
    /// Bulge depth at the threshold, as a fraction of the surface height.
    pub bulge_fraction: f32,
    pub commit_animation: AnimationSpec,
    pub cancel_animation: AnimationSpec,
}

impl Default for GooeyTuning {
    fn default() -> Self {
        Self {
            gap_progress_value: 0.7,
            nonlinear_window: 0.15,
            max_width_fraction: 0.5,
            axis_lock_slop: 0.0,
            bulge_fraction: 0.9,
            commit_animation: AnimationSpec::tween(250, Easing::FastOutSlowInEasing),
            cancel_animation: AnimationSpec::tween(200, Easing::EaseOut),
        }
    }
}

impl GooeyTuning {
    pub fn with_gap_progress_value(mut self, gap_progress_value: f32) -> Self {
        self.gap_progress_value = gap_progress_value;
        self
    }

    pub fn with_nonlinear_window(mut self, nonlinear_window: f32) -> Self {
        self.nonlinear_window = nonlinear_window;
        self
    }

    pub fn with_max_width_fraction(mut self, max_width_fraction: f32) -> Self {
        self.max_width_fraction = max_width_fraction;
        self
    }

    pub fn with_axis_lock_slop(mut self, axis_lock_slop: f32) -> Self {
        self.axis_lock_slop = axis_lock_slop;
        self
    }

    pub fn with_bulge_fraction(mut self, bulge_fraction: f32) -> Self {
        self.bulge_fraction = bulge_fraction;
        self
    }

    pub fn with_commit_animation(mut self, spec: AnimationSpec) -> Self {
        self.commit_animation = spec;
        self
    }

    pub fn with_cancel_animation(mut self, spec: AnimationSpec) -> Self {
        self.cancel_animation = spec;
        self
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        let gap = self.gap_progress_value;
        if !(gap > 0.0 && gap < 1.0) {
            return Err(TuningError::GapOutOfRange(gap));
        }
        let window = self.nonlinear_window;
        if !(window > 0.0 && window <= gap) {
            return Err(TuningError::WindowOutOfRange { window, gap });
        }
        if !(self.max_width_fraction > 0.0) {
            return Err(TuningError::WidthFraction(self.max_width_fraction));
        }
        if !(self.axis_lock_slop >= 0.0) {
            return Err(TuningError::NegativeSlop(self.axis_lock_slop));
        }
        if !(self.bulge_fraction >= 0.0) {
            return Err(TuningError::BulgeFraction(self.bulge_fraction));
        }
        Ok(())
    }

    /// Horizontal distance that corresponds to raw progress 1.0.
    pub fn effect_max_width(&self, bounds: Size) -> f32 {
        (bounds.width * self.max_width_fraction).max(0.0)
    }

    /// Live-drag progress: direction filter followed by the threshold easing.
    pub fn effect_progress(&self, raw_progress: f32, direction: SwipeDirection) -> f32 {
        remap_progress(
            directional_progress(raw_progress, direction),
            self.gap_progress_value,
            self.nonlinear_window,
        )
    }

    /// Release decision on the drag magnitude, whichever side of the origin
    /// the finger ended on.
    pub fn terminal_target(&self, raw_progress: f32) -> TerminalTarget {
        TerminalTarget::for_release(raw_progress.abs(), self.gap_progress_value)
    }

    pub fn animation_for(&self, target: TerminalTarget) -> AnimationSpec {
        match target {
            TerminalTarget::Commit => self.commit_animation,
            TerminalTarget::Cancel => self.cancel_animation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TuningError {
    GapOutOfRange(f32),
    WindowOutOfRange { window: f32, gap: f32 },
    WidthFraction(f32),
    NegativeSlop(f32),
    BulgeFraction(f32),
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::GapOutOfRange(gap) => {
                write!(f, "gap progress value {gap} must lie strictly between 0 and 1")
            }
            TuningError::WindowOutOfRange { window, gap } => {
                write!(f, "nonlinear window {window} must be positive and at most the gap {gap}")
            }
            TuningError::WidthFraction(fraction) => {
                write!(f, "max width fraction {fraction} must be positive")
            }
            TuningError::NegativeSlop(slop) => write!(f, "axis lock slop {slop} is negative"),
            TuningError::BulgeFraction(fraction) => {
                write!(f, "bulge fraction {fraction} is negative")
            }
        }
    }
}

impl std::error::Error for TuningError {}
