//! Deformation state for one active gesture.

use std::cell::Cell;
use std::rc::Rc;

use gooey_animation::{Animatable, ValueListener};
use gooey_core::RuntimeHandle;
use gooey_ui_graphics::{DrawScope, Size};

use crate::config::{EffectConfig, GooeyTuning};
use crate::direction::SwipeDirection;
use crate::progress::TerminalTarget;
use crate::shape::{BoundaryParams, BoundaryShape};

/// Called with the new boundary every time the effect's progress changes.
pub type RepaintHook = Rc<dyn Fn(&BoundaryShape)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectPhase {
    /// Following the finger, progress below the threshold.
    Active,
    /// Released past the threshold, animating to 1.
    Committing,
    /// Released short of the threshold, animating back to 0.
    Cancelling,
    /// Reached 1; the action has been handed to the delegate.
    Fired,
}

/// The gooey boundary for one gesture.
///
/// Clones share state, so a handle can be taken out of its owner before
/// calling into code that might re-enter the owner.
#[derive(Clone)]
pub struct GooeyEffect {
    params: BoundaryParams,
    config: EffectConfig,
    effect_max_width: f32,
    tuning: GooeyTuning,
    progress: Animatable<f32>,
    phase: Rc<Cell<EffectPhase>>,
}

impl GooeyEffect {
    pub fn new(
        bounds: Size,
        vertical_position: f32,
        direction: SwipeDirection,
        config: EffectConfig,
        tuning: &GooeyTuning,
        runtime: RuntimeHandle,
        repaint: Option<RepaintHook>,
    ) -> Self {
        let params = BoundaryParams {
            bounds,
            vertical_position: vertical_position.clamp(0.0, 1.0),
            direction,
            gap_progress_value: tuning.gap_progress_value,
            bulge_fraction: tuning.bulge_fraction,
        };
        let progress = Animatable::new(0.0f32, runtime);
        if let Some(hook) = repaint {
            let listener: ValueListener<f32> =
                Rc::new(move |value: &f32| hook(&params.shape(*value)));
            progress.set_listener(Some(listener));
        }
        Self {
            params,
            config,
            effect_max_width: tuning.effect_max_width(bounds),
            tuning: *tuning,
            progress,
            phase: Rc::new(Cell::new(EffectPhase::Active)),
        }
    }

    pub fn direction(&self) -> SwipeDirection {
        self.params.direction
    }

    pub fn vertical_position(&self) -> f32 {
        self.params.vertical_position
    }

    pub fn config(&self) -> &EffectConfig {
        &self.config
    }

    pub fn effect_max_width(&self) -> f32 {
        self.effect_max_width
    }

    pub fn gap_progress_value(&self) -> f32 {
        self.params.gap_progress_value
    }

    pub fn current_progress(&self) -> f32 {
        self.progress.value()
    }

    pub fn phase(&self) -> EffectPhase {
        self.phase.get()
    }

    pub fn is_animating(&self) -> bool {
        self.progress.is_running()
    }

    /// Sets progress from a live drag. Ignored once the effect was released.
    pub fn update_progress(&self, progress: f32) {
        if self.phase.get() != EffectPhase::Active {
            log::trace!("ignoring progress {progress} in phase {:?}", self.phase.get());
            return;
        }
        self.progress.snap_to(progress.clamp(0.0, 1.0));
    }

    /// Animates from the current progress to `target` and then runs
    /// `on_complete` exactly once, even when already at `target`.
    ///
    /// A target at or above the threshold commits: the phase becomes
    /// `Fired` right before `on_complete` runs.
    pub fn animate_to_progress(&self, target: f32, on_complete: impl FnOnce() + 'static) {
        let target = target.clamp(0.0, 1.0);
        let terminal = TerminalTarget::for_release(target, self.params.gap_progress_value);
        self.phase.set(match terminal {
            TerminalTarget::Commit => EffectPhase::Committing,
            TerminalTarget::Cancel => EffectPhase::Cancelling,
        });
        log::debug!(
            "gooey effect {:?}: animating {} -> {target}",
            self.params.direction,
            self.progress.value()
        );

        let phase = Rc::clone(&self.phase);
        self.progress
            .animate_to(target, self.tuning.animation_for(terminal), move || {
                if terminal == TerminalTarget::Commit {
                    phase.set(EffectPhase::Fired);
                }
                on_complete();
            });
    }

    /// Halts any running animation without running its completion.
    pub fn stop(&self) {
        self.progress.stop();
    }

    pub fn boundary(&self) -> BoundaryShape {
        self.params.shape(self.progress.value())
    }

    pub fn draw<S: DrawScope>(&self, scope: &mut S) {
        self.boundary().draw(scope, &self.config);
    }
}

#[cfg(test)]
#[path = "tests/effect_tests.rs"]
mod tests;
