use foldhead_ui_graphics::Point;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

impl PointerEventKind {
    /// `Up` and `Cancel` both end the gesture.
    pub fn is_release(self) -> bool {
        matches!(self, PointerEventKind::Up | PointerEventKind::Cancel)
    }
}

/// Dispatch phase, in delivery order.
///
/// Handlers on `Initial` see an event before any handler on `Main`, which is
/// where descendants such as a scrolling list normally listen. A parent that
/// needs first say over a drag listens on `Initial`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerEventPass {
    Initial,
    Main,
    Final,
}

impl PointerEventPass {
    pub const ORDER: [PointerEventPass; 3] = [
        PointerEventPass::Initial,
        PointerEventPass::Main,
        PointerEventPass::Final,
    ];
}

/// Pointer sample with consumption tracking.
///
/// Clones share the consumption flag, so a handler on an earlier pass can
/// mark the event consumed and later passes observe it.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub position: Point,
    pub pressed: bool,
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, pressed: bool) -> Self {
        Self {
            kind,
            position,
            pressed,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    pub fn down(position: Point) -> Self {
        Self::new(PointerEventKind::Down, position, true)
    }

    /// A move while the pointer is held.
    pub fn drag(position: Point) -> Self {
        Self::new(PointerEventKind::Move, position, true)
    }

    /// A move with nothing pressed (hover).
    pub fn hover(position: Point) -> Self {
        Self::new(PointerEventKind::Move, position, false)
    }

    pub fn up(position: Point) -> Self {
        Self::new(PointerEventKind::Up, position, false)
    }

    pub fn cancel(position: Point) -> Self {
        Self::new(PointerEventKind::Cancel, position, false)
    }

    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}
