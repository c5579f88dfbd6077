use crate::frame_clock::FrameClock;
use crate::platform::FrameScheduler;
use crate::FrameCallbackId;
use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

struct FrameCallbackEntry {
    id: FrameCallbackId,
    callback: Option<Box<dyn FnOnce(u64) + 'static>>,
}

struct RuntimeInner {
    frame_callbacks: RefCell<VecDeque<FrameCallbackEntry>>,
    next_frame_callback_id: Cell<FrameCallbackId>,
    needs_frame: Cell<bool>,
    /// Ids of the batch being drained that have not run yet.
    draining: RefCell<SmallVec<[FrameCallbackId; 4]>>,
    scheduler: Option<Rc<dyn FrameScheduler>>,
}

impl RuntimeInner {
    fn new(scheduler: Option<Rc<dyn FrameScheduler>>) -> Self {
        Self {
            frame_callbacks: RefCell::new(VecDeque::new()),
            next_frame_callback_id: Cell::new(1),
            needs_frame: Cell::new(false),
            draining: RefCell::new(SmallVec::new()),
            scheduler,
        }
    }

    fn schedule(&self) {
        if self.needs_frame.replace(true) {
            return;
        }
        if let Some(scheduler) = &self.scheduler {
            scheduler.schedule_frame();
        }
    }

    fn register_frame_callback(&self, callback: Box<dyn FnOnce(u64) + 'static>) -> FrameCallbackId {
        let id = self.next_frame_callback_id.get();
        self.next_frame_callback_id.set(id + 1);
        self.frame_callbacks
            .borrow_mut()
            .push_back(FrameCallbackEntry {
                id,
                callback: Some(callback),
            });
        self.schedule();
        id
    }

    fn cancel_frame_callback(&self, id: FrameCallbackId) {
        let mut callbacks = self.frame_callbacks.borrow_mut();
        if let Some(index) = callbacks.iter().position(|entry| entry.id == id) {
            callbacks.remove(index);
        } else {
            // Already taken by the running drain; make it skip this one.
            self.draining.borrow_mut().retain(|pending| *pending != id);
        }
        if callbacks.is_empty() {
            self.needs_frame.set(false);
        }
    }

    fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        let mut callbacks = self.frame_callbacks.borrow_mut();
        let mut pending: SmallVec<[(FrameCallbackId, Box<dyn FnOnce(u64) + 'static>); 4]> =
            SmallVec::with_capacity(callbacks.len());
        while let Some(mut entry) = callbacks.pop_front() {
            if let Some(callback) = entry.callback.take() {
                pending.push((entry.id, callback));
            }
        }
        drop(callbacks);
        self.needs_frame.set(false);
        log::trace!("frame at {frame_time_nanos}ns: {} callbacks", pending.len());
        *self.draining.borrow_mut() = pending.iter().map(|(id, _)| *id).collect();
        // Callbacks registered from inside this loop wait for the next frame.
        for (id, callback) in pending {
            let still_pending = {
                let mut draining = self.draining.borrow_mut();
                match draining.iter().position(|pending| *pending == id) {
                    Some(index) => {
                        draining.remove(index);
                        true
                    }
                    None => false,
                }
            };
            if still_pending {
                callback(frame_time_nanos);
            }
        }
        self.draining.borrow_mut().clear();
        if !self.frame_callbacks.borrow().is_empty() {
            self.needs_frame.set(true);
        }
    }

    fn has_frame_callbacks(&self) -> bool {
        !self.frame_callbacks.borrow().is_empty()
    }
}

/// Owner of the frame-callback registry.
///
/// Dropping the runtime silently discards every pending callback; handles
/// created from it become inert.
pub struct Runtime {
    inner: Rc<RuntimeInner>,
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

impl Runtime {
    /// Runtime without a scheduler; the host polls [`RuntimeHandle::needs_frame`].
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RuntimeInner::new(None)),
        }
    }

    /// Runtime that notifies `scheduler` when it goes from idle to needing a frame.
    pub fn with_scheduler(scheduler: Rc<dyn FrameScheduler>) -> Self {
        Self {
            inner: Rc::new(RuntimeInner::new(Some(scheduler))),
        }
    }

    pub fn handle(&self) -> RuntimeHandle {
        RuntimeHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }
}

/// Cheap non-owning handle to a [`Runtime`].
#[derive(Clone)]
pub struct RuntimeHandle {
    inner: Weak<RuntimeInner>,
}

impl RuntimeHandle {
    pub fn register_frame_callback(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> Option<FrameCallbackId> {
        self.inner
            .upgrade()
            .map(|inner| inner.register_frame_callback(Box::new(callback)))
    }

    pub fn cancel_frame_callback(&self, id: FrameCallbackId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.cancel_frame_callback(id);
        }
    }

    /// Runs every callback registered before this call with `frame_time_nanos`.
    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        if let Some(inner) = self.inner.upgrade() {
            inner.drain_frame_callbacks(frame_time_nanos);
        }
    }

    pub fn has_frame_callbacks(&self) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.has_frame_callbacks())
            .unwrap_or(false)
    }

    pub fn needs_frame(&self) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.needs_frame.get())
            .unwrap_or(false)
    }

    pub fn frame_clock(&self) -> FrameClock {
        FrameClock::new(self.clone())
    }
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
