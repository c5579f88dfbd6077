//! Raw drag offset to effect progress.
//!
//! Live dragging is eased so the user feels resistance near the commit
//! threshold and can never reach it by dragging alone; only the release
//! animation carries the effect to 1.0.

use crate::direction::SwipeDirection;

/// Drag offset as a signed fraction of the effect's max width.
pub fn raw_progress(translation_x: f32, effect_max_width: f32) -> f32 {
    if effect_max_width > 0.0 {
        translation_x / effect_max_width
    } else {
        0.0
    }
}

/// Magnitude of `raw` along `direction`; zero once dragged back past the origin.
pub fn directional_progress(raw: f32, direction: SwipeDirection) -> f32 {
    if direction.opposes(raw) {
        0.0
    } else {
        raw.abs()
    }
}

/// Linear up to `gap - window`, then log10-compressed and capped at `gap`.
pub fn remap_progress(progress: f32, gap: f32, window: f32) -> f32 {
    let nonlinear_start = gap - window;
    if progress <= nonlinear_start {
        return progress;
    }
    let local_progress = (progress - nonlinear_start) / window;
    let rate = (1.0 + local_progress).log10();
    if rate > 1.0 {
        gap
    } else {
        (nonlinear_start + window * rate).min(gap)
    }
}

/// Where a released gesture settles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TerminalTarget {
    /// Spring back to 0 and discard the effect.
    Cancel,
    /// Run to 1 and fire the action.
    Commit,
}

impl TerminalTarget {
    pub fn for_release(progress: f32, gap: f32) -> Self {
        if progress < gap {
            TerminalTarget::Cancel
        } else {
            TerminalTarget::Commit
        }
    }

    pub fn progress(&self) -> f32 {
        match self {
            TerminalTarget::Cancel => 0.0,
            TerminalTarget::Commit => 1.0,
        }
    }
}

#[cfg(test)]
#[path = "tests/progress_tests.rs"]
mod tests;
