use crate::config::HeaderConfig;
use foldhead_ui_graphics::Dp;

/// One of the two heights the header rests at after a release.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapTarget {
    Collapsed,
    Default,
}

impl SnapTarget {
    /// Picks the rest height for a release at `height`.
    ///
    /// Between collapsed and default the nearer end wins, with the exact
    /// midpoint going to default. At or above default, including overscroll,
    /// the header returns to default.
    pub fn for_height(height: Dp, config: &HeaderConfig) -> Self {
        if height >= config.collapsed_height && height < config.default_height {
            if height < config.snap_midpoint() {
                SnapTarget::Collapsed
            } else {
                SnapTarget::Default
            }
        } else {
            SnapTarget::Default
        }
    }

    pub fn height(self, config: &HeaderConfig) -> Dp {
        match self {
            SnapTarget::Collapsed => config.collapsed_height,
            SnapTarget::Default => config.default_height,
        }
    }
}
