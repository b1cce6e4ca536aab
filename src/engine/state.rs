use crate::animation::carousel::CarouselState;
use crate::animation::fade::SectionPhase;
use crate::foundation::core::{FrameIndex, Progress};

/// Everything the render layer needs for one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VisualState {
    /// Frame this state was produced for.
    pub frame: FrameIndex,
    /// Progress the sections were evaluated at.
    pub progress: Progress,
    /// Per-section values in schedule order.
    pub sections: Vec<SectionVisual>,
    /// Smoothed background scale.
    pub zoom_scale: f64,
    /// Smoothed vertical offset of the timeline list, in pixels (`<= 0`).
    pub timeline_offset_px: f64,
    /// Carousel snapshot when the page has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carousel: Option<CarouselState>,
}

impl VisualState {
    /// Values for section `name`.
    pub fn section(&self, name: &str) -> Option<&SectionVisual> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// Opacity for section `name`, `0` when unknown.
    pub fn opacity(&self, name: &str) -> f64 {
        self.section(name).map_or(0.0, |s| s.opacity)
    }
}

/// Evaluated values for one section.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SectionVisual {
    /// Section name.
    pub name: String,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Phase derived from progress.
    pub phase: SectionPhase,
    /// Vertical lift in pixels.
    pub offset_y_px: f64,
    /// Whether the section should receive pointer input.
    pub interactive: bool,
    /// Held visible regardless of progress.
    pub pinned: bool,
}
