//! Collapsing header state machine for Foldhead.
//!
//! [`CollapsingHeaderState`] owns the header height. Pointer samples shrink or
//! stretch it, a [`HeaderScrollArbiter`](foldhead_foundation::HeaderScrollArbiter)
//! keeps the list still until the header is collapsed, and a release settles
//! the height on one of its two rest positions with a short tween. Renderers
//! subscribe to the height and progress states and map progress through
//! [`TitleVisuals`].

mod config;
pub mod header;

pub use config::{HeaderConfig, HeaderConfigError, TitleVisualSpec};
pub use header::{
    collapse_progress, CollapsingHeaderState, HeightModel, SnapTarget, TitleVisuals,
};

pub mod prelude {
    pub use crate::config::{HeaderConfig, TitleVisualSpec};
    pub use crate::header::{CollapsingHeaderState, SnapTarget, TitleVisuals};
}
