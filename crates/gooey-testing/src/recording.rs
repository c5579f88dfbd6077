//! A delegate that records everything the cell tells it.

use std::cell::{Cell, RefCell};

use gooey_cell::{CellKey, EffectConfig, GooeyEffectDelegate, SwipeDirection};
use gooey_ui_graphics::{Color, GlyphHandle};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DelegateEvent {
    ConfigRequested(CellKey, SwipeDirection),
    Committed(CellKey, SwipeDirection),
}

/// Delegate double for cell tests.
///
/// Hands out [`RecordingDelegate::default_config`] unless told to decline.
pub struct RecordingDelegate {
    config: Cell<Option<EffectConfig>>,
    events: RefCell<Vec<DelegateEvent>>,
}

impl Default for RecordingDelegate {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingDelegate {
    pub fn new() -> Self {
        Self {
            config: Cell::new(Some(Self::default_config())),
            events: RefCell::new(Vec::new()),
        }
    }

    pub fn default_config() -> EffectConfig {
        EffectConfig::new(Color::from_rgb_u8(77, 127, 100), GlyphHandle::new(1))
    }

    /// `None` makes every following config request decline the effect.
    pub fn set_config(&self, config: Option<EffectConfig>) {
        self.config.set(config);
    }

    pub fn events(&self) -> Vec<DelegateEvent> {
        self.events.borrow().clone()
    }

    pub fn config_requests(&self) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|event| matches!(event, DelegateEvent::ConfigRequested(..)))
            .count()
    }

    pub fn commits(&self) -> Vec<(CellKey, SwipeDirection)> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match *event {
                DelegateEvent::Committed(key, direction) => Some((key, direction)),
                DelegateEvent::ConfigRequested(..) => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl GooeyEffectDelegate for RecordingDelegate {
    fn provide_config(&self, cell: CellKey, direction: SwipeDirection) -> Option<EffectConfig> {
        self.events
            .borrow_mut()
            .push(DelegateEvent::ConfigRequested(cell, direction));
        self.config.get()
    }

    fn on_committed(&self, cell: CellKey, direction: SwipeDirection) {
        self.events
            .borrow_mut()
            .push(DelegateEvent::Committed(cell, direction));
    }
}
