//! Replays two header gestures against a real-time frame loop and logs the
//! height and title visuals of every presented frame.
//!
//! Run with `RUST_LOG=debug` to see snap decisions, `trace` for every drag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use foldhead_core::{Clock, FrameClock, RuntimeScheduler, SystemClock};
use foldhead_foundation::{ListDragInput, ListScrollState, PointerDispatcher, PointerEvent};
use foldhead_ui::CollapsingHeaderState;
use foldhead_ui_graphics::Point;

const FRAME_INTERVAL: Duration = Duration::from_micros(16_667);

/// Records frame requests so the loop only wakes when something is queued.
#[derive(Default)]
struct FrameRequests {
    requested: AtomicBool,
}

impl FrameRequests {
    fn take(&self) -> bool {
        self.requested.swap(false, Ordering::AcqRel)
    }
}

impl RuntimeScheduler for FrameRequests {
    fn schedule_frame(&self) {
        self.requested.store(true, Ordering::Release);
    }
}

struct Demo {
    requests: Arc<FrameRequests>,
    clock: FrameClock,
    header: CollapsingHeaderState,
    list: ListScrollState,
    dispatcher: PointerDispatcher,
    time: SystemClock,
    epoch: <SystemClock as Clock>::Instant,
}

impl Demo {
    fn new() -> Self {
        let requests = Arc::new(FrameRequests::default());
        let clock = FrameClock::with_scheduler(requests.clone());
        let header = CollapsingHeaderState::new(clock.clone());
        let list = ListScrollState::new(60, 56.0, 640.0);
        let mut dispatcher = PointerDispatcher::new();
        header.attach(&mut dispatcher, list.clone());
        ListDragInput::new(list.clone(), header.scroll_arbiter()).attach(&mut dispatcher);
        let time = SystemClock;
        Self {
            requests,
            clock,
            header,
            list,
            dispatcher,
            epoch: time.now(),
            time,
        }
    }

    fn gesture(&self, from_y: f32, to_y: f32, steps: usize) {
        let x = 180.0;
        self.dispatcher.dispatch(&PointerEvent::down(Point::new(x, from_y)));
        for step in 1..=steps {
            let y = from_y + (to_y - from_y) * step as f32 / steps as f32;
            self.dispatcher.dispatch(&PointerEvent::drag(Point::new(x, y)));
            log::info!(
                "drag y={y:>6.1}  height={:>6.1}  list offset={:>6.1}",
                self.header.height().0,
                self.list.absolute_offset()
            );
        }
        self.dispatcher.dispatch(&PointerEvent::up(Point::new(x, to_y)));
    }

    /// Presents frames on a ~60Hz cadence until no callbacks remain.
    fn run_frames(&self) {
        let mut frames = 0;
        while self.requests.take() || self.clock.has_pending_callbacks() {
            thread::sleep(FRAME_INTERVAL);
            let now = self.time.elapsed_nanos(self.epoch);
            self.clock.drain_frame_callbacks(now);
            frames += 1;
            let visuals = self.header.visuals();
            log::info!(
                "frame {frames:>2} @ {:>5}ms  height={:>6.1}  scale={:.3}  title x={:>5.1}  overlay={:.3}",
                now / 1_000_000,
                self.header.height().0,
                visuals.scale,
                visuals.offset_x.0,
                visuals.background_alpha
            );
        }
        log::info!("settled at {:.1} after {frames} frames", self.header.height().0);
    }
}

fn main() {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let demo = Demo::new();

    println!("=== Foldhead Headless Demo ===");
    println!("1. Pull down 100 past the default height, then let go");
    demo.gesture(100.0, 200.0, 4);
    demo.run_frames();

    println!("2. Push up 200 in one move: the header collapses");
    demo.gesture(500.0, 300.0, 1);
    demo.run_frames();

    println!("3. Keep pushing: the list scrolls");
    demo.gesture(400.0, 200.0, 8);
    demo.run_frames();

    println!("4. Pull the list back to the top and keep pulling to reopen the header");
    demo.gesture(200.0, 600.0, 20);
    demo.run_frames();
}
