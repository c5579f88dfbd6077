//! A list whose rows can be swiped away with the gooey effect.

use std::cell::RefCell;
use std::rc::Rc;

use gooey_cell::{
    CellKey, EffectConfig, GooeyCell, GooeyEffectDelegate, GooeyTuning, SwipeDirection,
    TuningError,
};
use gooey_core::RuntimeHandle;
use gooey_foundation::{PointerEvent, PointerEventKind};
use gooey_ui_graphics::{Color, DrawPrimitive, DrawScope, DrawScopeDefault, GlyphHandle, Point, Size};

pub const ROW_SIZE: Size = Size {
    width: 375.0,
    height: 80.0,
};

pub const SAMPLE_ROWS: [&str; 5] = ["TripAdvisor", "Figma", "Product Hunt Daily", "InVision", "Pinterest"];

/// Glyph id the host renderer maps to a cross.
pub const CROSS_GLYPH: GlyphHandle = GlyphHandle(1);

pub fn delete_config() -> EffectConfig {
    EffectConfig::new(Color::from_rgb_u8(77, 127, 100), CROSS_GLYPH)
}

struct Row {
    title: String,
    cell: Rc<GooeyCell>,
}

/// Owns the rows and acts as delegate for every cell in it.
pub struct SwipeList {
    runtime: RuntimeHandle,
    tuning: GooeyTuning,
    rows: RefCell<Vec<Row>>,
    /// Cells of removed rows, reset and ready for reuse.
    recycled: RefCell<Vec<Rc<GooeyCell>>>,
    removed: RefCell<Vec<(String, SwipeDirection)>>,
}

impl SwipeList {
    pub fn new(
        runtime: RuntimeHandle,
        tuning: GooeyTuning,
        titles: &[&str],
    ) -> Result<Rc<Self>, TuningError> {
        tuning.validate()?;
        let list = Rc::new(Self {
            runtime,
            tuning,
            rows: RefCell::new(Vec::new()),
            recycled: RefCell::new(Vec::new()),
            removed: RefCell::new(Vec::new()),
        });
        for title in titles {
            list.push(title)?;
        }
        Ok(list)
    }

    /// Appends a row, reusing a recycled cell when one is available.
    pub fn push(self: &Rc<Self>, title: &str) -> Result<(), TuningError> {
        let recycled = self.recycled.borrow_mut().pop();
        let cell = match recycled {
            Some(cell) => cell,
            None => {
                let cell = GooeyCell::with_tuning(self.runtime.clone(), ROW_SIZE, self.tuning)?;
                cell.set_delegate(self);
                Rc::new(cell)
            }
        };
        let mut rows = self.rows.borrow_mut();
        cell.bind(CellKey(rows.len()));
        rows.push(Row {
            title: title.to_owned(),
            cell,
        });
        Ok(())
    }

    pub fn titles(&self) -> Vec<String> {
        self.rows.borrow().iter().map(|row| row.title.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.borrow().is_empty()
    }

    pub fn removed(&self) -> Vec<(String, SwipeDirection)> {
        self.removed.borrow().clone()
    }

    pub fn cell(&self, index: usize) -> Option<Rc<GooeyCell>> {
        self.rows.borrow().get(index).map(|row| Rc::clone(&row.cell))
    }

    /// Replays a horizontal drag from `from_x` to `to_x` on row `index`,
    /// one pointer move per 16ms.
    pub fn drag_row(&self, index: usize, from_x: f32, to_x: f32, steps: usize) {
        let Some(cell) = self.cell(index) else {
            log::warn!("no row at {index}");
            return;
        };
        let y = ROW_SIZE.height / 2.0;
        let steps = steps.max(1);
        let mut time_ms = 0i64;
        cell.handle_pointer_event(&PointerEvent::new(
            PointerEventKind::Down,
            Point::new(from_x, y),
            time_ms,
        ));
        for step in 1..=steps {
            time_ms += 16;
            let x = from_x + (to_x - from_x) * step as f32 / steps as f32;
            cell.handle_pointer_event(&PointerEvent::new(
                PointerEventKind::Move,
                Point::new(x, y),
                time_ms,
            ));
        }
        cell.handle_pointer_event(&PointerEvent::new(
            PointerEventKind::Up,
            Point::new(to_x, y),
            time_ms + 16,
        ));
    }

    /// Records what every row would paint right now.
    pub fn render(&self) -> Vec<(String, Vec<DrawPrimitive>)> {
        let rows: Vec<(String, Rc<GooeyCell>)> = self
            .rows
            .borrow()
            .iter()
            .map(|row| (row.title.clone(), Rc::clone(&row.cell)))
            .collect();
        rows.into_iter()
            .map(|(title, cell)| {
                let mut scope = DrawScopeDefault::new(ROW_SIZE);
                cell.draw(&mut scope);
                (title, scope.into_primitives())
            })
            .collect()
    }
}

impl GooeyEffectDelegate for SwipeList {
    fn provide_config(&self, _cell: CellKey, _direction: SwipeDirection) -> Option<EffectConfig> {
        Some(delete_config())
    }

    fn on_committed(&self, cell: CellKey, direction: SwipeDirection) {
        let row = {
            let mut rows = self.rows.borrow_mut();
            if cell.0 >= rows.len() {
                log::warn!("commit for unknown row {cell:?}");
                return;
            }
            let row = rows.remove(cell.0);
            for (index, remaining) in rows.iter().enumerate().skip(cell.0) {
                remaining.cell.bind(CellKey(index));
            }
            row
        };
        log::info!("removed {:?} ({direction:?})", row.title);
        row.cell.reset();
        self.recycled.borrow_mut().push(row.cell);
        self.removed.borrow_mut().push((row.title, direction));
    }
}
