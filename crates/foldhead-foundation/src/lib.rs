//! Pointer input, gesture tracking and nested scroll for Foldhead.

pub mod header_constants;
pub mod lazy;
pub mod nested_scroll;
pub mod nodes;

pub use lazy::{ListDragInput, ListPosition, ListScrollState};
pub use nested_scroll::{
    HeaderRegion, HeaderScrollArbiter, NestedScrollConnection, NestedScrollSource,
};
pub use nodes::input::gestures::{DragSignal, HeaderDragTracker, ScrollGesture};
pub use nodes::input::{
    PointerDispatcher, PointerEvent, PointerEventKind, PointerEventPass, PointerHandlerId,
};

pub mod prelude {
    pub use crate::header_constants::*;
    pub use crate::lazy::{ListDragInput, ListScrollState};
    pub use crate::nested_scroll::{HeaderScrollArbiter, NestedScrollConnection};
    pub use crate::nodes::input::prelude::*;
}
