pub mod dispatcher;
pub mod gestures;
pub mod types;

pub use dispatcher::{PointerDispatcher, PointerHandlerId};
pub use types::{PointerEvent, PointerEventKind, PointerEventPass};

pub mod prelude {
    pub use super::dispatcher::{PointerDispatcher, PointerHandlerId};
    pub use super::gestures::{DragSignal, HeaderDragTracker, ScrollGesture};
    pub use super::types::{PointerEvent, PointerEventKind, PointerEventPass};
}
