mod height_model;
mod snap;
mod state;
mod visuals;

pub use height_model::{collapse_progress, HeightModel};
pub use snap::SnapTarget;
pub use state::CollapsingHeaderState;
pub use visuals::TitleVisuals;
