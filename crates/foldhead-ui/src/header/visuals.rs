use crate::config::TitleVisualSpec;
use foldhead_ui_graphics::Dp;

/// Transform applied to the title overlay for a given collapse progress.
///
/// Pure and cheap; renderers may recompute it on every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TitleVisuals {
    pub scale: f32,
    pub offset_x: Dp,
    pub background_alpha: f32,
}

impl TitleVisuals {
    pub fn from_progress(progress: f32) -> Self {
        Self::with_spec(progress, &TitleVisualSpec::default())
    }

    pub fn with_spec(progress: f32, spec: &TitleVisualSpec) -> Self {
        let p = progress.clamp(0.0, 1.0);
        Self {
            scale: (1.0 - p).max(spec.min_scale),
            offset_x: spec.max_offset * p,
            background_alpha: spec.alpha_peak * (1.0 - p),
        }
    }
}
