use super::*;

use foldhead_foundation::header_constants::{COLLAPSED_HEIGHT, DEFAULT_HEIGHT, OVERSCROLL_HEIGHT};
use foldhead_foundation::ScrollGesture;
use foldhead_ui_graphics::Point;

const FRAME: u64 = 16_666_667;

struct Harness {
    clock: FrameClock,
    header: CollapsingHeaderState,
    list: ListScrollState,
    time: u64,
}

impl Harness {
    fn new() -> Self {
        let clock = FrameClock::new();
        Self {
            header: CollapsingHeaderState::new(clock.clone()),
            clock,
            list: ListScrollState::new(50, 48.0, 600.0),
            time: 0,
        }
    }

    fn send(&self, event: PointerEvent) -> Option<DragSignal> {
        self.header.on_pointer_event(&event, &self.list)
    }

    fn drag(&self, from_y: f32, to_y: f32) {
        self.send(PointerEvent::down(Point::new(10.0, from_y)));
        self.send(PointerEvent::drag(Point::new(10.0, to_y)));
    }

    fn frame(&mut self) -> Dp {
        self.time += FRAME;
        self.clock.drain_frame_callbacks(self.time);
        self.header.height()
    }

    fn run_until_idle(&mut self) -> Vec<Dp> {
        let mut samples = Vec::new();
        for _ in 0..120 {
            if !self.clock.has_pending_callbacks() {
                break;
            }
            samples.push(self.frame());
        }
        samples
    }
}

#[test]
fn starts_expanded_and_idle() {
    let harness = Harness::new();
    assert_eq!(harness.header.height(), DEFAULT_HEIGHT);
    assert_eq!(harness.header.progress(), 0.0);
    assert!(!harness.header.is_snapping());
    assert_eq!(harness.header.visuals(), TitleVisuals::from_progress(0.0));
}

#[test]
fn overscroll_release_settles_back_to_default() {
    let mut harness = Harness::new();
    harness.drag(100.0, 200.0);
    assert_eq!(harness.header.height(), Dp(400.0));

    let signal = harness.send(PointerEvent::up(Point::new(10.0, 200.0)));
    assert_eq!(signal, Some(DragSignal::Release { height: Dp(400.0) }));
    assert!(harness.header.is_snapping());
    assert_eq!(harness.header.snap_target(), Some(DEFAULT_HEIGHT));

    let samples = harness.run_until_idle();
    assert!(samples.len() >= 18, "300ms at 60fps needs ~18 frames, got {}", samples.len());
    assert!(samples.windows(2).all(|pair| pair[1] <= pair[0]));
    assert!(samples.iter().any(|h| *h > DEFAULT_HEIGHT && *h < Dp(400.0)));
    assert_eq!(harness.header.height(), DEFAULT_HEIGHT);
    assert!(!harness.header.is_snapping());
}

#[test]
fn snap_takes_the_configured_duration() {
    let mut harness = Harness::new();
    harness.drag(100.0, 200.0);
    harness.send(PointerEvent::up(Point::new(10.0, 200.0)));

    // First frame stamps the start time.
    harness.frame();
    let started = harness.time;
    harness.run_until_idle();
    let elapsed = harness.clock.last_frame_nanos().unwrap_or(0) - started;
    assert!(elapsed >= 300_000_000);
    assert!(elapsed < 300_000_000 + FRAME);
}

#[test]
fn collapse_gesture_clamps_and_hands_scroll_to_list() {
    let harness = Harness::new();
    harness.drag(400.0, 200.0);
    assert_eq!(harness.header.height(), COLLAPSED_HEIGHT);
    assert_eq!(harness.header.progress(), 1.0);

    let arbiter = harness.header.scroll_arbiter();
    assert_eq!(harness.list.dispatch_drag(-60.0, &arbiter), -60.0);
    assert_eq!(harness.list.absolute_offset(), 60.0);
}

#[test]
fn release_below_midpoint_collapses() {
    let mut harness = Harness::new();
    harness.drag(400.0, 250.0);
    assert_eq!(harness.header.height(), Dp(150.0));

    harness.send(PointerEvent::up(Point::new(10.0, 250.0)));
    assert_eq!(harness.header.snap_target(), Some(COLLAPSED_HEIGHT));
    harness.run_until_idle();
    assert_eq!(harness.header.height(), COLLAPSED_HEIGHT);
    assert_eq!(harness.header.progress(), 1.0);
}

#[test]
fn release_above_midpoint_expands() {
    let mut harness = Harness::new();
    harness.drag(400.0, 350.0);
    assert_eq!(harness.header.height(), Dp(250.0));

    harness.send(PointerEvent::up(Point::new(10.0, 350.0)));
    assert_eq!(harness.header.snap_target(), Some(DEFAULT_HEIGHT));
    harness.run_until_idle();
    assert_eq!(harness.header.height(), DEFAULT_HEIGHT);
}

#[test]
fn restart_uses_current_height_and_fresh_target() {
    let mut harness = Harness::new();
    harness.header.release_at(Dp(250.0));
    assert_eq!(harness.header.snap_target(), Some(DEFAULT_HEIGHT));
    harness.frame();
    harness.frame();
    assert!(harness.header.height() > Dp(250.0));

    harness.header.release_at(Dp(200.0));
    assert_eq!(harness.header.snap_target(), Some(COLLAPSED_HEIGHT));
    assert_eq!(harness.clock.pending_callback_count(), 1);

    assert_eq!(harness.frame(), Dp(200.0));
    let samples = harness.run_until_idle();
    assert!(samples.iter().all(|h| *h <= Dp(200.0)));
    assert_eq!(harness.header.height(), COLLAPSED_HEIGHT);
}

#[test]
fn pointer_release_mid_snap_restarts_from_current_height() {
    let mut harness = Harness::new();
    harness.drag(100.0, 200.0);
    harness.send(PointerEvent::up(Point::new(10.0, 200.0)));
    harness.frame();
    harness.frame();
    harness.frame();
    let mid_flight = harness.header.height();
    assert!(mid_flight < Dp(400.0) && mid_flight > DEFAULT_HEIGHT);

    let signal = harness.send(PointerEvent::up(Point::new(10.0, 200.0)));
    assert_eq!(signal, Some(DragSignal::Release { height: mid_flight }));
    assert_eq!(harness.frame(), mid_flight);
    harness.run_until_idle();
    assert_eq!(harness.header.height(), DEFAULT_HEIGHT);
}

#[test]
fn drags_during_snap_do_not_write_height() {
    let mut harness = Harness::new();
    harness.drag(100.0, 200.0);
    harness.send(PointerEvent::up(Point::new(10.0, 200.0)));
    harness.frame();
    let before = harness.header.height();

    harness.drag(300.0, 100.0);
    assert_eq!(harness.header.height(), before);

    // The sample is still classified and reported, just not applied.
    let signal = harness.send(PointerEvent::drag(Point::new(10.0, 80.0)));
    assert_eq!(
        signal,
        Some(DragSignal::Scroll(ScrollGesture::classify(-20.0, true)))
    );
    assert_eq!(harness.header.height(), before);
    assert_eq!(harness.header.snap_target(), Some(DEFAULT_HEIGHT));

    harness.run_until_idle();
    assert_eq!(harness.header.height(), DEFAULT_HEIGHT);

    // Once settled, the same gesture applies again.
    harness.send(PointerEvent::drag(Point::new(10.0, 50.0)));
    assert_eq!(harness.header.height(), Dp(270.0));
}

#[test]
fn release_without_drag_resolves_a_target() {
    let mut harness = Harness::new();
    assert_eq!(
        harness.send(PointerEvent::up(Point::new(0.0, 0.0))),
        Some(DragSignal::Release {
            height: DEFAULT_HEIGHT
        })
    );
    assert!(!harness.header.is_snapping());
    assert!(harness.run_until_idle().is_empty());
    assert_eq!(harness.header.height(), DEFAULT_HEIGHT);
}

#[test]
fn overscroll_needs_list_at_top() {
    let harness = Harness::new();
    harness.drag(400.0, 200.0);
    harness.list.scroll_by(100.0);

    harness.drag(200.0, 300.0);
    assert_eq!(harness.header.height(), COLLAPSED_HEIGHT);

    harness.list.scroll_to_item(0, 0.0);
    harness.send(PointerEvent::drag(Point::new(10.0, 400.0)));
    assert_eq!(harness.header.height(), Dp(225.0));
}

#[test]
fn overscroll_is_capped() {
    let harness = Harness::new();
    harness.drag(0.0, 500.0);
    assert_eq!(harness.header.height(), OVERSCROLL_HEIGHT);
}

#[test]
fn visuals_observer_tracks_progress() {
    let harness = Harness::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let _subscription = {
        let seen = Rc::clone(&seen);
        harness
            .header
            .observe_visuals(move |visuals| seen.borrow_mut().push(visuals))
    };

    harness.drag(400.0, 312.5);
    harness.send(PointerEvent::drag(Point::new(10.0, 225.0)));

    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0], TitleVisuals::from_progress(0.5));
    assert_eq!(seen[1], TitleVisuals::from_progress(1.0));
}

#[test]
fn invalid_config_is_rejected() {
    let config = HeaderConfig {
        collapsed_height: Dp(400.0),
        ..HeaderConfig::default()
    };
    assert!(CollapsingHeaderState::with_config(FrameClock::new(), config).is_err());
}

#[test]
fn custom_config_changes_rest_heights() {
    let config = HeaderConfig {
        collapsed_height: Dp(60.0),
        default_height: Dp(200.0),
        overscroll_height: Dp(260.0),
        ..HeaderConfig::default()
    };
    let header = match CollapsingHeaderState::with_config(FrameClock::new(), config) {
        Ok(header) => header,
        Err(err) => panic!("valid config rejected: {err}"),
    };
    assert_eq!(header.height(), Dp(200.0));
    assert_eq!(header.scroll_arbiter().region(), foldhead_foundation::HeaderRegion::Transitioning);
}

#[test]
fn dropped_header_ignores_pending_frame() {
    let clock = FrameClock::new();
    let list = ListScrollState::new(10, 48.0, 200.0);
    let height = {
        let header = CollapsingHeaderState::new(clock.clone());
        header.on_pointer_event(&PointerEvent::down(Point::new(0.0, 0.0)), &list);
        header.on_pointer_event(&PointerEvent::drag(Point::new(0.0, 60.0)), &list);
        header.on_pointer_event(&PointerEvent::up(Point::new(0.0, 60.0)), &list);
        header.height_state()
    };
    // The registration died with the header, so nothing is queued.
    assert!(!clock.has_pending_callbacks());
    clock.drain_frame_callbacks(FRAME);
    assert_eq!(height.get(), Dp(360.0));
}

#[test]
fn attached_header_runs_before_list() {
    let harness = Harness::new();
    let mut dispatcher = PointerDispatcher::new();
    foldhead_foundation::ListDragInput::new(harness.list.clone(), harness.header.scroll_arbiter())
        .attach(&mut dispatcher);
    harness.header.attach(&mut dispatcher, harness.list.clone());

    dispatcher.dispatch(&PointerEvent::down(Point::new(0.0, 400.0)));
    dispatcher.dispatch(&PointerEvent::drag(Point::new(0.0, 350.0)));
    assert_eq!(harness.header.height(), Dp(250.0));
    assert!(harness.list.is_at_top());
}
