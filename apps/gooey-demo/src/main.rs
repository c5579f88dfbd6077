use std::cell::Cell;
use std::rc::Rc;
use std::thread;
use std::time::Duration;

use anyhow::{ensure, Context};
use gooey_cell::GooeyTuning;
use gooey_core::{Clock, FrameScheduler, Runtime, SystemClock};
use gooey_demo::{SwipeList, ROW_SIZE, SAMPLE_ROWS};

const FRAME_INTERVAL: Duration = Duration::from_micros(16_667);
const MAX_FRAMES: usize = 600;

/// Remembers that the runtime asked for a frame.
#[derive(Default)]
struct FrameRequest {
    pending: Cell<bool>,
}

impl FrameScheduler for FrameRequest {
    fn schedule_frame(&self) {
        self.pending.set(true);
    }
}

/// Minimal 60Hz loop timed by the wall clock.
struct FrameLoop {
    runtime: Runtime,
    request: Rc<FrameRequest>,
    clock: SystemClock,
    origin: <SystemClock as Clock>::Instant,
}

impl FrameLoop {
    fn new() -> Self {
        let request = Rc::new(FrameRequest::default());
        let scheduler: Rc<dyn FrameScheduler> = request.clone();
        let clock = SystemClock;
        Self {
            runtime: Runtime::with_scheduler(scheduler),
            request,
            clock,
            origin: clock.now(),
        }
    }

    /// Runs frames until nothing asks for another one.
    fn run_until_idle(&self) -> usize {
        let handle = self.runtime.handle();
        let mut frames = 0;
        while frames < MAX_FRAMES && (self.request.pending.replace(false) || handle.needs_frame()) {
            thread::sleep(FRAME_INTERVAL);
            handle.drain_frame_callbacks(self.clock.elapsed_nanos(self.origin));
            frames += 1;
        }
        frames
    }
}

fn init_logging() {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let frames = FrameLoop::new();
    let list = SwipeList::new(frames.runtime.handle(), GooeyTuning::default(), &SAMPLE_ROWS)
        .context("building demo list")?;

    println!("=== Gooey swipe demo ===");
    println!("rows: {:?}", list.titles());

    // A short left drag springs back.
    list.drag_row(0, ROW_SIZE.width - 20.0, ROW_SIZE.width - 80.0, 4);
    let count = frames.run_until_idle();
    println!("short swipe on row 0 settled after {count} frames");

    // Long drags run out and remove the row.
    list.drag_row(1, 20.0, ROW_SIZE.width - 40.0, 8);
    let count = frames.run_until_idle();
    println!("long swipe on row 1 settled after {count} frames");

    list.drag_row(2, ROW_SIZE.width - 20.0, 30.0, 8);
    frames.run_until_idle();

    for (title, direction) in list.removed() {
        println!("removed {title} ({direction:?})");
    }
    println!("rows: {:?}", list.titles());

    ensure!(list.len() == SAMPLE_ROWS.len() - 2, "expected two rows to be removed");
    Ok(())
}
