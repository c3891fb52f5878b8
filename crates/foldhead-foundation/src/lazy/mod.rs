//! List scroll position and drag input, as seen by the header.

mod list_drag;
mod list_scroll_state;

pub use list_drag::ListDragInput;
pub use list_scroll_state::{ListGeometry, ListPosition, ListScrollState};
