//! Animatable values driven by the frame clock.
//!
//! An [`Animatable`] interpolates from wherever it currently is toward a
//! target over successive frame ticks, reports every intermediate value to
//! an optional listener, and runs a one-shot completion after the final
//! frame.

use std::cell::RefCell;
use std::rc::Rc;

use gooey_core::{FrameCallbackRegistration, RuntimeHandle};

use crate::easing::{AnimationSpec, Lerp};

/// Observer invoked with the new value after every change.
pub type ValueListener<T> = Rc<dyn Fn(&T)>;

type Completion = Box<dyn FnOnce()>;

/// Generic animatable value holder.
pub struct Animatable<T: Lerp + Clone + PartialEq + 'static> {
    inner: Rc<RefCell<AnimatableInner<T>>>,
}

struct AnimatableInner<T: Lerp + Clone + PartialEq + 'static> {
    runtime: RuntimeHandle,
    current: T,
    start: T,
    target: T,
    spec: AnimationSpec,
    start_time_nanos: Option<u64>,
    registration: Option<FrameCallbackRegistration>,
    listener: Option<ValueListener<T>>,
    on_complete: Option<Completion>,
}

impl<T: Lerp + Clone + PartialEq + 'static> AnimatableInner<T> {
    /// Stops the running animation. Its completion is dropped without running.
    fn cancel_running(&mut self) -> bool {
        let had_completion = self.on_complete.take().is_some();
        if let Some(registration) = self.registration.take() {
            registration.cancel();
        }
        self.start_time_nanos = None;
        had_completion
    }
}

impl<T: Lerp + Clone + PartialEq + 'static> Animatable<T> {
    /// Create a new animatable with the given initial value.
    pub fn new(initial: T, runtime: RuntimeHandle) -> Self {
        let inner = AnimatableInner {
            runtime,
            current: initial.clone(),
            start: initial.clone(),
            target: initial,
            spec: AnimationSpec::default(),
            start_time_nanos: None,
            registration: None,
            listener: None,
            on_complete: None,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    pub fn set_listener(&self, listener: Option<ValueListener<T>>) {
        self.inner.borrow_mut().listener = listener;
    }

    pub fn value(&self) -> T {
        self.inner.borrow().current.clone()
    }

    /// Return the current animation target.
    pub fn target(&self) -> T {
        self.inner.borrow().target.clone()
    }

    pub fn spec(&self) -> AnimationSpec {
        self.inner.borrow().spec
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().on_complete.is_some()
    }

    /// Animate from the current value to `target`.
    ///
    /// `on_complete` runs exactly once, right after the frame that lands on
    /// `target`, even when the value is already there. A later
    /// [`snap_to`](Self::snap_to), [`stop`](Self::stop) or `animate_to`
    /// supersedes this animation and drops `on_complete` unrun.
    pub fn animate_to(&self, target: T, spec: AnimationSpec, on_complete: impl FnOnce() + 'static) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.cancel_running() {
                log::debug!("animation superseded before completion");
            }
            inner.start = inner.current.clone();
            inner.target = target;
            inner.spec = spec;
            inner.on_complete = Some(Box::new(on_complete));
        }

        if !Self::schedule_frame(&self.inner) {
            log::warn!("frame clock unavailable; finishing animation immediately");
            Self::finish_now(&self.inner);
        }
    }

    /// Snap immediately to `value` without animating.
    pub fn snap_to(&self, value: T) {
        let listener = {
            let mut inner = self.inner.borrow_mut();
            if inner.cancel_running() {
                log::debug!("animation superseded by snap");
            }
            inner.current = value.clone();
            inner.start = value.clone();
            inner.target = value.clone();
            inner.listener.clone()
        };
        if let Some(listener) = listener {
            listener(&value);
        }
    }

    /// Halt at the current value without running the completion.
    pub fn stop(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.cancel_running();
        inner.target = inner.current.clone();
        inner.start = inner.current.clone();
    }

    fn schedule_frame(this: &Rc<RefCell<AnimatableInner<T>>>) -> bool {
        let runtime = {
            let inner = this.borrow();
            if inner.registration.is_some() {
                return true;
            }
            inner.runtime.clone()
        };
        let weak = Rc::downgrade(this);
        let registration = runtime.frame_clock().with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, time);
            }
        });
        if !registration.is_active() {
            return false;
        }
        this.borrow_mut().registration = Some(registration);
        true
    }

    fn finish_now(this: &Rc<RefCell<AnimatableInner<T>>>) {
        let (value, listener, completion) = {
            let mut inner = this.borrow_mut();
            inner.current = inner.target.clone();
            inner.start = inner.target.clone();
            inner.start_time_nanos = None;
            (
                inner.current.clone(),
                inner.listener.clone(),
                inner.on_complete.take(),
            )
        };
        if let Some(listener) = listener {
            listener(&value);
        }
        if let Some(completion) = completion {
            completion();
        }
    }

    fn on_frame(this: &Rc<RefCell<AnimatableInner<T>>>, frame_time_nanos: u64) {
        let mut schedule_next = false;
        let (value, listener, completion) = {
            let mut inner = this.borrow_mut();
            // This callback's queue entry is already gone.
            if let Some(registration) = inner.registration.take() {
                registration.disarm();
            }

            let spec = inner.spec;
            let start_time = *inner.start_time_nanos.get_or_insert(frame_time_nanos);
            let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
            let duration_nanos = spec.duration_millis * 1_000_000;
            let linear_progress = if duration_nanos == 0 || inner.start == inner.target {
                1.0
            } else {
                (elapsed_nanos as f32 / duration_nanos as f32).clamp(0.0, 1.0)
            };

            let finished = linear_progress >= 1.0;
            if finished {
                inner.current = inner.target.clone();
                inner.start = inner.target.clone();
                inner.start_time_nanos = None;
            } else {
                let fraction = spec.easing.transform(linear_progress);
                inner.current = inner.start.lerp(&inner.target, fraction);
                schedule_next = true;
            }

            let completion = if finished {
                inner.on_complete.take()
            } else {
                None
            };
            (inner.current.clone(), inner.listener.clone(), completion)
        };

        if let Some(listener) = listener {
            listener(&value);
        }
        if schedule_next && !Self::schedule_frame(this) {
            Self::finish_now(this);
            return;
        }
        if let Some(completion) = completion {
            completion();
        }
    }
}

impl<T: Lerp + Clone + PartialEq + 'static> Clone for Animatable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
