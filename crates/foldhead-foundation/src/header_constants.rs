//! Fixed dimensions and visual limits of the collapsing header.
//!
//! All lengths are in density-independent units. The three heights must keep
//! `COLLAPSED_HEIGHT < DEFAULT_HEIGHT < OVERSCROLL_HEIGHT`.

use foldhead_ui_graphics::Dp;

/// Height of the fully collapsed header. Scroll passes to the list only here.
pub const COLLAPSED_HEIGHT: Dp = Dp(125.0);

/// Resting height of the expanded header.
pub const DEFAULT_HEIGHT: Dp = Dp(300.0);

/// Upper bound when pulling the header down while the list is at its top.
pub const OVERSCROLL_HEIGHT: Dp = Dp(450.0);

/// Duration of the settle animation after the pointer is released.
pub const SNAP_DURATION_MILLIS: u64 = 300;

/// Horizontal title shift at full collapse.
pub const TITLE_MAX_OFFSET: Dp = Dp(50.0);

/// Alpha of the title backdrop when the header is fully expanded.
pub const OVERLAY_ALPHA_PEAK: f32 = 0.6;

/// The title never shrinks below this scale.
pub const MIN_TITLE_SCALE: f32 = 0.8;
