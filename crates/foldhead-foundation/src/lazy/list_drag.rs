use super::ListScrollState;
use crate::nested_scroll::NestedScrollConnection;
use crate::nodes::input::{
    PointerDispatcher, PointerEvent, PointerEventKind, PointerEventPass, PointerHandlerId,
};
use foldhead_ui_graphics::Point;
use std::cell::Cell;
use std::rc::Rc;

/// Drag-to-scroll input for a [`ListScrollState`].
///
/// Listens on the `Main` pass and pushes each vertical drag delta through the
/// nested scroll protocol, so a parent connection gets to claim it first.
pub struct ListDragInput<C> {
    list: ListScrollState,
    connection: C,
    previous: Cell<Option<Point>>,
}

impl<C: NestedScrollConnection + 'static> ListDragInput<C> {
    pub fn new(list: ListScrollState, connection: C) -> Self {
        Self {
            list,
            connection,
            previous: Cell::new(None),
        }
    }

    /// Handles one sample. Returns how far the list scrolled, in pointer coordinates.
    pub fn on_pointer_event(&self, event: &PointerEvent) -> f32 {
        match event.kind {
            PointerEventKind::Down => {
                self.previous.set(Some(event.position));
                0.0
            }
            PointerEventKind::Up | PointerEventKind::Cancel => {
                self.previous.set(None);
                0.0
            }
            PointerEventKind::Move if event.pressed && !event.is_consumed() => {
                match self.previous.replace(Some(event.position)) {
                    Some(previous) => {
                        let delta_y = event.position.y - previous.y;
                        if delta_y == 0.0 {
                            0.0
                        } else {
                            self.list.dispatch_drag(delta_y, &self.connection)
                        }
                    }
                    None => 0.0,
                }
            }
            PointerEventKind::Move => {
                self.previous.set(None);
                0.0
            }
        }
    }

    pub fn attach(self, dispatcher: &mut PointerDispatcher) -> PointerHandlerId {
        let input = Rc::new(self);
        dispatcher.add_handler(PointerEventPass::Main, move |event, _| {
            input.on_pointer_event(event);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nested_scroll::HeaderScrollArbiter;
    use crate::header_constants::{COLLAPSED_HEIGHT, DEFAULT_HEIGHT};
    use foldhead_core::MutableState;
    use foldhead_ui_graphics::Dp;

    fn point(y: f32) -> Point {
        Point::new(0.0, y)
    }

    #[test]
    fn drag_is_blocked_while_header_claims() {
        let list = ListScrollState::new(40, 50.0, 500.0);
        let height = MutableState::new(DEFAULT_HEIGHT);
        let input = ListDragInput::new(
            list.clone(),
            HeaderScrollArbiter::new(height.clone(), COLLAPSED_HEIGHT, DEFAULT_HEIGHT),
        );

        input.on_pointer_event(&PointerEvent::down(point(400.0)));
        assert_eq!(input.on_pointer_event(&PointerEvent::drag(point(300.0))), 0.0);
        assert!(list.is_at_top());

        height.set(COLLAPSED_HEIGHT);
        assert_eq!(input.on_pointer_event(&PointerEvent::drag(point(250.0))), -50.0);
        assert_eq!(list.absolute_offset(), 50.0);
    }

    #[test]
    fn consumed_moves_do_not_scroll() {
        let list = ListScrollState::new(40, 50.0, 500.0);
        let input = ListDragInput::new(
            list.clone(),
            HeaderScrollArbiter::new(MutableState::new(Dp(125.0)), COLLAPSED_HEIGHT, DEFAULT_HEIGHT),
        );
        input.on_pointer_event(&PointerEvent::down(point(400.0)));
        let event = PointerEvent::drag(point(300.0));
        event.consume();
        assert_eq!(input.on_pointer_event(&event), 0.0);
        assert!(list.is_at_top());
    }

    #[test]
    fn attached_input_scrolls_through_dispatcher() {
        let list = ListScrollState::new(40, 50.0, 500.0);
        let mut dispatcher = PointerDispatcher::new();
        ListDragInput::new(
            list.clone(),
            HeaderScrollArbiter::new(MutableState::new(COLLAPSED_HEIGHT), COLLAPSED_HEIGHT, DEFAULT_HEIGHT),
        )
        .attach(&mut dispatcher);

        dispatcher.dispatch(&PointerEvent::down(point(400.0)));
        dispatcher.dispatch(&PointerEvent::drag(point(380.0)));
        dispatcher.dispatch(&PointerEvent::up(point(380.0)));
        assert_eq!(list.absolute_offset(), 20.0);
    }
}
