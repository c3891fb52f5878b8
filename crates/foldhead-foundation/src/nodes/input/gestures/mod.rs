pub mod header_drag;

pub use header_drag::{DragSignal, HeaderDragTracker, ScrollGesture};
