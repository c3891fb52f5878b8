use crate::config::HeaderConfig;
use foldhead_core::MutableState;
use foldhead_foundation::ScrollGesture;
use foldhead_ui_graphics::Dp;

/// How far the header has shrunk from `default_height` toward
/// `collapsed_height`, in `[0, 1]`. Anything at or above the default
/// (including overscroll) is 0.
pub fn collapse_progress(height: Dp, collapsed_height: Dp, default_height: Dp) -> f32 {
    let span = collapsed_height.0 - default_height.0;
    if span == 0.0 {
        return 0.0;
    }
    ((height.0 - default_height.0) / span).clamp(0.0, 1.0)
}

/// Header height and the progress derived from it.
///
/// Both live in shared [`MutableState`] cells so renderers and the scroll
/// arbiter can read them without going through the header controller. Every
/// height write goes through [`HeightModel::set_height`], which recomputes
/// progress in the same call.
#[derive(Clone, Debug)]
pub struct HeightModel {
    height: MutableState<Dp>,
    progress: MutableState<f32>,
    collapsed_height: Dp,
    default_height: Dp,
    overscroll_height: Dp,
}

impl HeightModel {
    pub fn new(config: &HeaderConfig) -> Self {
        Self {
            height: MutableState::new(config.default_height),
            progress: MutableState::new(0.0),
            collapsed_height: config.collapsed_height,
            default_height: config.default_height,
            overscroll_height: config.overscroll_height,
        }
    }

    pub fn height(&self) -> Dp {
        self.height.get()
    }

    pub fn progress(&self) -> f32 {
        self.progress.get()
    }

    pub fn height_state(&self) -> MutableState<Dp> {
        self.height.clone()
    }

    pub fn progress_state(&self) -> MutableState<f32> {
        self.progress.clone()
    }

    /// Applies one drag sample. Returns whether the height changed.
    pub fn apply_gesture(&self, gesture: &ScrollGesture) -> bool {
        let current = self.height();
        let next = if gesture.is_overscrolling {
            (current + Dp(gesture.delta_y)).min(self.overscroll_height)
        } else if gesture.is_scrolling_up {
            (current + Dp(gesture.delta_y)).max(self.collapsed_height)
        } else {
            return false;
        };
        self.set_height(next)
    }

    /// Writes `height` and the matching progress. Returns whether height changed.
    pub fn set_height(&self, height: Dp) -> bool {
        // Progress lands first so height observers always read a matching pair.
        self.progress.set(collapse_progress(
            height,
            self.collapsed_height,
            self.default_height,
        ));
        self.height.set(height)
    }
}

#[cfg(test)]
#[path = "../tests/height_model_tests.rs"]
mod tests;
