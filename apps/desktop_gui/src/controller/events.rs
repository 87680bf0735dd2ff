//! Click interactions collected while a frame's widgets are laid out.

use shared::domain::{EssayId, Section};

/// One user interaction. Intents are gathered during rendering and applied
/// after the frame, in click order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiIntent {
    /// Expand or collapse the essay with this id.
    ToggleEssay(EssayId),
    /// Scroll the page to one of the three sections.
    ScrollTo(Section),
}

impl UiIntent {
    pub fn name(&self) -> &'static str {
        match self {
            UiIntent::ToggleEssay(_) => "toggle_essay",
            UiIntent::ScrollTo(_) => "scroll_to",
        }
    }
}
