use foldhead_animation::{AnimationSpec, Easing};
use foldhead_foundation::header_constants::{
    COLLAPSED_HEIGHT, DEFAULT_HEIGHT, MIN_TITLE_SCALE, OVERLAY_ALPHA_PEAK, OVERSCROLL_HEIGHT,
    SNAP_DURATION_MILLIS, TITLE_MAX_OFFSET,
};
use foldhead_ui_graphics::Dp;
use std::fmt;

/// Limits for the title overlay, applied by [`TitleVisuals`](crate::TitleVisuals).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitleVisualSpec {
    /// Horizontal shift at full collapse.
    pub max_offset: Dp,
    /// Backdrop alpha when fully expanded.
    pub alpha_peak: f32,
    /// Smallest title scale.
    pub min_scale: f32,
}

impl Default for TitleVisualSpec {
    fn default() -> Self {
        Self {
            max_offset: TITLE_MAX_OFFSET,
            alpha_peak: OVERLAY_ALPHA_PEAK,
            min_scale: MIN_TITLE_SCALE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderConfig {
    pub collapsed_height: Dp,
    pub default_height: Dp,
    pub overscroll_height: Dp,
    /// Tween used to settle after release.
    pub snap: AnimationSpec,
    pub title: TitleVisualSpec,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            collapsed_height: COLLAPSED_HEIGHT,
            default_height: DEFAULT_HEIGHT,
            overscroll_height: OVERSCROLL_HEIGHT,
            snap: AnimationSpec::tween(SNAP_DURATION_MILLIS, Easing::FastOutSlowInEasing),
            title: TitleVisualSpec::default(),
        }
    }
}

impl HeaderConfig {
    pub fn validate(&self) -> Result<(), HeaderConfigError> {
        for (name, value) in [
            ("collapsed_height", self.collapsed_height),
            ("default_height", self.default_height),
            ("overscroll_height", self.overscroll_height),
        ] {
            if !value.is_finite() {
                return Err(HeaderConfigError::NonFiniteHeight { name, value });
            }
        }
        if !(self.collapsed_height < self.default_height
            && self.default_height < self.overscroll_height)
        {
            return Err(HeaderConfigError::HeightsOutOfOrder {
                collapsed: self.collapsed_height,
                default: self.default_height,
                overscroll: self.overscroll_height,
            });
        }
        if self.snap.duration_millis == 0 {
            return Err(HeaderConfigError::ZeroSnapDuration);
        }
        if !(self.title.min_scale > 0.0 && self.title.min_scale <= 1.0) {
            return Err(HeaderConfigError::TitleScaleOutOfRange(self.title.min_scale));
        }
        Ok(())
    }

    /// Midpoint between collapsed and default; releases below it collapse.
    pub fn snap_midpoint(&self) -> Dp {
        Dp((self.default_height.0 + self.collapsed_height.0) / 2.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum HeaderConfigError {
    NonFiniteHeight {
        name: &'static str,
        value: Dp,
    },
    HeightsOutOfOrder {
        collapsed: Dp,
        default: Dp,
        overscroll: Dp,
    },
    ZeroSnapDuration,
    TitleScaleOutOfRange(f32),
}

impl fmt::Display for HeaderConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderConfigError::NonFiniteHeight { name, value } => {
                write!(f, "{name} must be finite, got {}", value.0)
            }
            HeaderConfigError::HeightsOutOfOrder {
                collapsed,
                default,
                overscroll,
            } => write!(
                f,
                "header heights must satisfy collapsed < default < overscroll, got {} / {} / {}",
                collapsed.0, default.0, overscroll.0
            ),
            HeaderConfigError::ZeroSnapDuration => write!(f, "snap duration must be non-zero"),
            HeaderConfigError::TitleScaleOutOfRange(scale) => {
                write!(f, "minimum title scale must be in (0, 1], got {scale}")
            }
        }
    }
}

impl std::error::Error for HeaderConfigError {}
