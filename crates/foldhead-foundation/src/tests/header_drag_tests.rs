use super::*;

fn at(y: f32) -> Point {
    Point::new(40.0, y)
}

fn scroll(signal: Option<DragSignal>) -> ScrollGesture {
    match signal {
        Some(DragSignal::Scroll(gesture)) => gesture,
        other => panic!("expected a scroll gesture, got {other:?}"),
    }
}

#[test]
fn down_anchors_without_emitting() {
    let mut tracker = HeaderDragTracker::new();
    assert_eq!(
        tracker.on_pointer_event(&PointerEvent::down(at(100.0)), true, Dp(300.0)),
        None
    );
    assert!(tracker.is_tracking());
}

#[test]
fn pulling_down_at_top_is_overscroll() {
    let mut tracker = HeaderDragTracker::new();
    tracker.on_pointer_event(&PointerEvent::down(at(100.0)), true, Dp(300.0));

    let gesture = scroll(tracker.on_pointer_event(&PointerEvent::drag(at(200.0)), true, Dp(300.0)));
    assert_eq!(
        gesture,
        ScrollGesture {
            is_overscrolling: true,
            is_scrolling_up: false,
            delta_y: 100.0,
        }
    );
}

#[test]
fn pulling_down_away_from_top_is_neither() {
    let mut tracker = HeaderDragTracker::new();
    tracker.on_pointer_event(&PointerEvent::down(at(100.0)), false, Dp(125.0));

    let gesture = scroll(tracker.on_pointer_event(&PointerEvent::drag(at(130.0)), false, Dp(125.0)));
    assert!(!gesture.is_overscrolling);
    assert!(!gesture.is_scrolling_up);
    assert_eq!(gesture.delta_y, 30.0);
}

#[test]
fn moving_up_collapses_regardless_of_list_position() {
    for at_top in [true, false] {
        let mut tracker = HeaderDragTracker::new();
        tracker.on_pointer_event(&PointerEvent::down(at(400.0)), at_top, Dp(300.0));
        let gesture =
            scroll(tracker.on_pointer_event(&PointerEvent::drag(at(200.0)), at_top, Dp(300.0)));
        assert!(gesture.is_scrolling_up);
        assert!(!gesture.is_overscrolling);
        assert_eq!(gesture.delta_y, -200.0);
    }
}

#[test]
fn deltas_are_per_sample_not_cumulative() {
    let mut tracker = HeaderDragTracker::new();
    tracker.on_pointer_event(&PointerEvent::down(at(0.0)), true, Dp(300.0));

    let first = scroll(tracker.on_pointer_event(&PointerEvent::drag(at(10.0)), true, Dp(300.0)));
    let second = scroll(tracker.on_pointer_event(&PointerEvent::drag(at(25.0)), true, Dp(310.0)));
    assert_eq!(first.delta_y, 10.0);
    assert_eq!(second.delta_y, 15.0);
}

#[test]
fn unchanged_position_emits_nothing() {
    let mut tracker = HeaderDragTracker::new();
    tracker.on_pointer_event(&PointerEvent::down(at(50.0)), true, Dp(300.0));
    assert_eq!(
        tracker.on_pointer_event(&PointerEvent::drag(at(50.0)), true, Dp(300.0)),
        None
    );
}

#[test]
fn move_without_down_only_anchors() {
    let mut tracker = HeaderDragTracker::new();
    assert_eq!(
        tracker.on_pointer_event(&PointerEvent::drag(at(50.0)), true, Dp(300.0)),
        None
    );
    let gesture = scroll(tracker.on_pointer_event(&PointerEvent::drag(at(60.0)), true, Dp(300.0)));
    assert_eq!(gesture.delta_y, 10.0);
}

#[test]
fn hover_moves_are_ignored() {
    let mut tracker = HeaderDragTracker::new();
    assert_eq!(
        tracker.on_pointer_event(&PointerEvent::hover(at(50.0)), true, Dp(300.0)),
        None
    );
    assert_eq!(
        tracker.on_pointer_event(&PointerEvent::hover(at(90.0)), true, Dp(300.0)),
        None
    );
    assert!(!tracker.is_tracking());
}

#[test]
fn release_carries_height_and_clears_anchor() {
    let mut tracker = HeaderDragTracker::new();
    tracker.on_pointer_event(&PointerEvent::down(at(10.0)), true, Dp(300.0));

    assert_eq!(
        tracker.on_pointer_event(&PointerEvent::up(at(10.0)), true, Dp(250.0)),
        Some(DragSignal::Release { height: Dp(250.0) })
    );
    assert!(!tracker.is_tracking());
}

#[test]
fn cancel_and_orphan_release_both_signal_release() {
    let mut tracker = HeaderDragTracker::new();
    assert_eq!(
        tracker.on_pointer_event(&PointerEvent::up(at(10.0)), false, Dp(180.0)),
        Some(DragSignal::Release { height: Dp(180.0) })
    );
    tracker.on_pointer_event(&PointerEvent::down(at(10.0)), false, Dp(180.0));
    assert_eq!(
        tracker.on_pointer_event(&PointerEvent::cancel(at(10.0)), false, Dp(180.0)),
        Some(DragSignal::Release { height: Dp(180.0) })
    );
}
