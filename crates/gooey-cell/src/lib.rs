//! Gooey swipe-to-action effect for list cells.
//!
//! A horizontal pan on a [`GooeyCell`] grows a liquid blob out of the edge it
//! leaves. Dragging alone eases toward, but never reaches, the commit
//! threshold. On release the blob either runs out to cover the cell and the
//! [`GooeyEffectDelegate`] is told the action fired, or it retracts and is
//! discarded.

mod cell;
mod config;
mod delegate;
mod direction;
mod effect;
mod progress;
mod shape;

pub use cell::{EffectState, GooeyCell, RecognizerState};
pub use config::{EffectConfig, GooeyTuning, TuningError};
pub use delegate::{CellKey, GooeyEffectDelegate};
pub use direction::SwipeDirection;
pub use effect::{EffectPhase, GooeyEffect, RepaintHook};
pub use progress::{directional_progress, raw_progress, remap_progress, TerminalTarget};
pub use shape::{BoundaryParams, BoundaryShape, GlyphPlacement};

pub mod prelude {
    pub use crate::cell::GooeyCell;
    pub use crate::config::{EffectConfig, GooeyTuning};
    pub use crate::delegate::{CellKey, GooeyEffectDelegate};
    pub use crate::direction::SwipeDirection;
    pub use crate::effect::EffectPhase;
}
