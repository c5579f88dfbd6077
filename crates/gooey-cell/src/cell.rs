//! Gesture controller and per-cell effect state.

use std::rc::{Rc, Weak};

use gooey_core::{Owned, RuntimeHandle, WeakOwned};
use gooey_foundation::{GesturePhase, GestureSample, PanGestureDetector, PointerEvent};
use gooey_ui_graphics::{DrawScope, Size};

use crate::config::{GooeyTuning, TuningError};
use crate::delegate::{CellKey, GooeyEffectDelegate};
use crate::direction::SwipeDirection;
use crate::effect::{EffectPhase, GooeyEffect, RepaintHook};
use crate::progress::{raw_progress, TerminalTarget};

/// The per-cell effect slot. At most one effect lives on a cell.
#[derive(Clone, Default)]
pub enum EffectState {
    #[default]
    Idle,
    Active(GooeyEffect),
}

impl EffectState {
    pub fn effect(&self) -> Option<&GooeyEffect> {
        match self {
            EffectState::Idle => None,
            EffectState::Active(effect) => Some(effect),
        }
    }
}

/// Input gate of the cell's pan recognizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecognizerState {
    /// Cleared for the duration of a terminal animation.
    pub enabled: bool,
    /// Whether the current gesture was accepted at `Began`.
    pub tracking: bool,
}

impl RecognizerState {
    fn ready() -> Self {
        Self {
            enabled: true,
            tracking: false,
        }
    }
}

struct CellInner {
    key: CellKey,
    bounds: Size,
    tuning: GooeyTuning,
    delegate: Option<Weak<dyn GooeyEffectDelegate>>,
    repaint: Option<RepaintHook>,
    recognizer: RecognizerState,
    effect: EffectState,
    /// Bumped by `reset` so stale completions can tell they were superseded.
    generation: u64,
    pan: PanGestureDetector,
}

impl CellInner {
    /// Ends the current gesture. The recognizer stays enabled for the next one.
    fn cycle_recognizer(&mut self) {
        self.recognizer.tracking = false;
        self.pan.fail();
    }

    fn delegate(&self) -> Option<Rc<dyn GooeyEffectDelegate>> {
        self.delegate.as_ref().and_then(Weak::upgrade)
    }
}

/// A list cell that turns horizontal pans into the gooey swipe effect.
///
/// Feed it phase-tagged samples with [`handle_sample`](Self::handle_sample)
/// or raw pointer events with
/// [`handle_pointer_event`](Self::handle_pointer_event), drive the runtime's
/// frame callbacks, and call [`reset`](Self::reset) whenever the host reuses
/// the cell for different content.
pub struct GooeyCell {
    inner: Owned<CellInner>,
    runtime: RuntimeHandle,
}

impl GooeyCell {
    pub fn new(runtime: RuntimeHandle, bounds: Size) -> Self {
        Self::build(runtime, bounds, GooeyTuning::default())
    }

    pub fn with_tuning(
        runtime: RuntimeHandle,
        bounds: Size,
        tuning: GooeyTuning,
    ) -> Result<Self, TuningError> {
        if let Err(err) = tuning.validate() {
            log::warn!("rejecting gooey tuning: {err}");
            return Err(err);
        }
        Ok(Self::build(runtime, bounds, tuning))
    }

    fn build(runtime: RuntimeHandle, bounds: Size, tuning: GooeyTuning) -> Self {
        Self {
            inner: Owned::new(CellInner {
                key: CellKey::default(),
                bounds,
                tuning,
                delegate: None,
                repaint: None,
                recognizer: RecognizerState::ready(),
                effect: EffectState::Idle,
                generation: 0,
                pan: PanGestureDetector::new(),
            }),
            runtime,
        }
    }

    /// Attach the owner. Only a weak reference is kept.
    pub fn set_delegate<D: GooeyEffectDelegate + 'static>(&self, delegate: &Rc<D>) {
        let delegate: Rc<dyn GooeyEffectDelegate> = delegate.clone();
        self.inner.borrow_mut().delegate = Some(Rc::downgrade(&delegate));
    }

    pub fn bind(&self, key: CellKey) {
        self.inner.borrow_mut().key = key;
    }

    pub fn set_bounds(&self, bounds: Size) {
        self.inner.borrow_mut().bounds = bounds;
    }

    /// Hook invoked with the new boundary on every progress change of
    /// effects created after this call.
    pub fn set_on_repaint(&self, hook: Option<RepaintHook>) {
        self.inner.borrow_mut().repaint = hook;
    }

    pub fn key(&self) -> CellKey {
        self.inner.borrow().key
    }

    pub fn bounds(&self) -> Size {
        self.inner.borrow().bounds
    }

    pub fn tuning(&self) -> GooeyTuning {
        self.inner.borrow().tuning
    }

    pub fn recognizer(&self) -> RecognizerState {
        self.inner.borrow().recognizer
    }

    pub fn is_recognizer_enabled(&self) -> bool {
        self.inner.borrow().recognizer.enabled
    }

    pub fn effect_state(&self) -> EffectState {
        self.inner.borrow().effect.clone()
    }

    pub fn has_effect(&self) -> bool {
        matches!(self.inner.borrow().effect, EffectState::Active(_))
    }

    pub fn effect_phase(&self) -> Option<EffectPhase> {
        self.inner.borrow().effect.effect().map(GooeyEffect::phase)
    }

    pub fn effect_progress(&self) -> Option<f32> {
        self.inner
            .borrow()
            .effect
            .effect()
            .map(GooeyEffect::current_progress)
    }

    /// Axis lock: a pan may start only while its vertical travel is within
    /// the slop.
    pub fn should_begin(&self, sample: &GestureSample) -> bool {
        let inner = self.inner.borrow();
        inner.recognizer.enabled && sample.translation.y.abs() <= inner.tuning.axis_lock_slop
    }

    pub fn handle_pointer_event(&self, event: &PointerEvent) {
        let sample = self.inner.borrow_mut().pan.on_pointer_event(event);
        if let Some(sample) = sample {
            self.handle_sample(sample);
        }
    }

    pub fn handle_sample(&self, sample: GestureSample) {
        let recognizer = self.inner.borrow().recognizer;
        if !recognizer.enabled {
            log::trace!("recognizer disabled; dropping {:?}", sample.phase);
            return;
        }
        match sample.phase {
            GesturePhase::Possible => {}
            GesturePhase::Began => self.on_begin(&sample),
            GesturePhase::Changed if recognizer.tracking => self.on_changed(&sample),
            GesturePhase::Ended | GesturePhase::Cancelled | GesturePhase::Failed
                if recognizer.tracking =>
            {
                self.on_end(&sample)
            }
            _ => log::trace!("no gesture tracked; dropping {:?}", sample.phase),
        }
    }

    /// A `Began` that arrives while a drag is already tracked is a duplicate:
    /// it never ends the live gesture, which keeps driving its effect.
    fn on_begin(&self, sample: &GestureSample) {
        let live = self.inner.borrow().recognizer.tracking;
        if !self.should_begin(sample) {
            log::debug!("pan rejected by axis lock: {:?}", sample.translation);
            if !live {
                self.inner.borrow_mut().cycle_recognizer();
            }
            return;
        }

        let direction = SwipeDirection::from_velocity(sample.velocity.x);
        let (delegate, key, occupied) = {
            let inner = self.inner.borrow();
            (inner.delegate(), inner.key, inner.effect.effect().is_some())
        };
        let config = delegate.and_then(|delegate| delegate.provide_config(key, direction));

        let mut inner = self.inner.borrow_mut();
        if occupied {
            log::debug!("cell {key:?}: effect already attached; ignoring {direction:?}");
            if !live {
                inner.cycle_recognizer();
            }
            return;
        }
        let Some(config) = config else {
            log::debug!("cell {key:?}: delegate declined {direction:?}");
            inner.cycle_recognizer();
            return;
        };

        let height = inner.bounds.height;
        let vertical_position = if height > 0.0 {
            sample.position.y / height
        } else {
            0.5
        };
        let effect = GooeyEffect::new(
            inner.bounds,
            vertical_position,
            direction,
            config,
            &inner.tuning,
            self.runtime.clone(),
            inner.repaint.clone(),
        );
        log::debug!("cell {key:?}: gooey effect created, {direction:?} at {vertical_position}");
        inner.effect = EffectState::Active(effect);
        inner.recognizer.tracking = true;
    }

    fn on_changed(&self, sample: &GestureSample) {
        let (effect, tuning) = {
            let inner = self.inner.borrow();
            match &inner.effect {
                EffectState::Active(effect) => (effect.clone(), inner.tuning),
                EffectState::Idle => return,
            }
        };
        let raw = raw_progress(sample.translation.x, effect.effect_max_width());
        let progress = tuning.effect_progress(raw, effect.direction());
        log::trace!("raw progress {raw} -> effect progress {progress}");
        effect.update_progress(progress);
    }

    fn on_end(&self, sample: &GestureSample) {
        let (effect, tuning, generation) = {
            let mut inner = self.inner.borrow_mut();
            let effect = match &inner.effect {
                EffectState::Active(effect) if effect.phase() == EffectPhase::Active => {
                    effect.clone()
                }
                _ => return,
            };
            inner.recognizer.enabled = false;
            inner.recognizer.tracking = false;
            (effect, inner.tuning, inner.generation)
        };

        let direction = effect.direction();
        let raw = raw_progress(sample.translation.x, effect.effect_max_width());
        let target = tuning.terminal_target(raw);
        log::debug!("released at raw progress {raw} ({:?}) -> {target:?}", sample.phase);

        let cell = self.inner.downgrade();
        effect.animate_to_progress(target.progress(), move || {
            finish_terminal(&cell, generation, target, direction);
        });
    }

    /// Host recycled the cell: drop any effect, stop its animation without
    /// firing the action, and re-enable input.
    pub fn reset(&self) {
        let previous = {
            let mut inner = self.inner.borrow_mut();
            inner.generation += 1;
            inner.recognizer = RecognizerState::ready();
            inner.pan.reset();
            std::mem::take(&mut inner.effect)
        };
        if let EffectState::Active(effect) = previous {
            log::debug!("reset discarded effect in phase {:?}", effect.phase());
            effect.stop();
        }
    }

    pub fn draw<S: DrawScope>(&self, scope: &mut S) {
        let effect = self.inner.borrow().effect.effect().cloned();
        if let Some(effect) = effect {
            effect.draw(scope);
        }
    }
}

fn finish_terminal(
    cell: &WeakOwned<CellInner>,
    generation: u64,
    target: TerminalTarget,
    direction: SwipeDirection,
) {
    let Some(cell) = cell.upgrade() else {
        return;
    };
    let (delegate, key) = {
        let inner = cell.borrow();
        if inner.generation != generation {
            return;
        }
        (inner.delegate(), inner.key)
    };

    match target {
        TerminalTarget::Commit => {
            log::debug!("cell {key:?}: gooey action fired {direction:?}");
            if let Some(delegate) = delegate {
                delegate.on_committed(key, direction);
            }
        }
        TerminalTarget::Cancel => {
            log::debug!("cell {key:?}: gooey effect discarded");
            let discarded = std::mem::take(&mut cell.borrow_mut().effect);
            drop(discarded);
        }
    }

    let mut inner = cell.borrow_mut();
    if inner.generation == generation {
        inner.recognizer.enabled = true;
    }
}

#[cfg(test)]
#[path = "tests/cell_tests.rs"]
mod tests;
