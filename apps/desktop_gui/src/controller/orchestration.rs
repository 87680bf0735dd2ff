//! Applies a frame's collected intents to application state.

use reader_core::Reader;
use shared::domain::Section;

use crate::controller::events::UiIntent;

/// Drain the frame's intents in click order. Toggles go straight to the
/// reader; scroll requests are recorded for the next frame's layout pass.
pub fn apply_intents(
    reader: &mut Reader,
    scroll_request: &mut Option<Section>,
    intents: Vec<UiIntent>,
) {
    for intent in intents {
        tracing::debug!(intent = intent.name(), "applying ui intent");
        match intent {
            UiIntent::ToggleEssay(id) => reader.toggle(&id),
            UiIntent::ScrollTo(section) => *scroll_request = Some(section),
        }
    }
}

#[cfg(test)]
mod tests {
    use reader_core::Reader;
    use shared::domain::{EssayId, Section};

    use super::apply_intents;
    use crate::controller::events::UiIntent;

    #[test]
    fn intents_apply_in_click_order() {
        let mut reader = Reader::over_builtin();
        let mut scroll = None;

        apply_intents(
            &mut reader,
            &mut scroll,
            vec![
                UiIntent::ToggleEssay(EssayId::new("digital-minimalism")),
                UiIntent::ToggleEssay(EssayId::new("art-of-questioning")),
            ],
        );

        assert!(reader.is_expanded(&EssayId::new("art-of-questioning")));
        assert!(!reader.is_expanded(&EssayId::new("digital-minimalism")));
    }

    #[test]
    fn scroll_intent_records_the_requested_section() {
        let mut reader = Reader::over_builtin();
        let mut scroll = None;

        apply_intents(
            &mut reader,
            &mut scroll,
            vec![
                UiIntent::ScrollTo(Section::About),
                UiIntent::ScrollTo(Section::Contact),
            ],
        );

        // Last click wins when several arrive in one frame.
        assert_eq!(scroll, Some(Section::Contact));
    }

    #[test]
    fn unknown_essay_ids_leave_reader_state_alone() {
        let mut reader = Reader::over_builtin();
        let mut scroll = None;
        reader.toggle(&EssayId::new("philosophy-of-simplicity"));

        apply_intents(
            &mut reader,
            &mut scroll,
            vec![UiIntent::ToggleEssay(EssayId::new("no-such-essay"))],
        );

        assert!(reader.is_expanded(&EssayId::new("philosophy-of-simplicity")));
    }
}
