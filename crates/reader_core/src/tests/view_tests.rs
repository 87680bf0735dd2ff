use shared::domain::EssayId;

use crate::view::{Reader, ReadingView};

fn id(raw: &str) -> EssayId {
    EssayId::new(raw)
}

#[test]
fn toggle_expands_from_none() {
    let mut view = ReadingView::new();
    assert_eq!(view.expanded(), None);

    view.toggle(&id("digital-minimalism"));
    assert!(view.is_expanded(&id("digital-minimalism")));
}

#[test]
fn toggle_on_the_expanded_essay_collapses_it() {
    let mut view = ReadingView::new();
    view.toggle(&id("digital-minimalism"));
    view.toggle(&id("digital-minimalism"));
    assert_eq!(view.expanded(), None);
}

#[test]
fn toggling_another_essay_switches_the_expansion() {
    let mut view = ReadingView::new();
    view.toggle(&id("digital-minimalism"));
    view.toggle(&id("art-of-questioning"));

    assert!(view.is_expanded(&id("art-of-questioning")));
    assert!(!view.is_expanded(&id("digital-minimalism")));
}

#[test]
fn double_toggle_restores_the_prior_state() {
    // From the empty state.
    let mut view = ReadingView::new();
    let before = view.clone();
    view.toggle(&id("x"));
    view.toggle(&id("x"));
    assert_eq!(view, before);

    // And from a state with some other essay open.
    let mut view = ReadingView::new();
    view.toggle(&id("y"));
    let before = view.clone();
    view.toggle(&id("x"));
    view.toggle(&id("x"));
    assert_eq!(view, before);
}

#[test]
fn toggle_depends_only_on_current_state_and_id() {
    // Two views that reached the same state through different histories
    // transition identically.
    let mut direct = ReadingView::new();
    direct.toggle(&id("b"));

    let mut wandering = ReadingView::new();
    wandering.toggle(&id("a"));
    wandering.toggle(&id("c"));
    wandering.toggle(&id("b"));

    assert_eq!(direct, wandering);
    direct.toggle(&id("c"));
    wandering.toggle(&id("c"));
    assert_eq!(direct, wandering);
}

#[test]
fn at_most_one_essay_is_expanded_after_any_sequence() {
    let sequence = ["a", "b", "b", "c", "a", "a", "c", "c", "b"];
    let mut view = ReadingView::new();
    for raw in sequence {
        view.toggle(&id(raw));
        // Either nothing is expanded or exactly the one id we can observe.
        if let Some(open) = view.expanded() {
            let open = open.clone();
            assert!(view.is_expanded(&open));
            for other in ["a", "b", "c"] {
                if other != open.as_str() {
                    assert!(!view.is_expanded(&id(other)));
                }
            }
        }
    }
}

#[test]
fn reader_walks_the_expand_switch_collapse_scenario() {
    let mut reader = Reader::over_builtin();
    assert!(reader.expanded_essay().is_none());

    reader.toggle(&id("digital-minimalism"));
    assert!(reader.is_expanded(&id("digital-minimalism")));

    reader.toggle(&id("art-of-questioning"));
    assert!(reader.is_expanded(&id("art-of-questioning")));
    assert!(!reader.is_expanded(&id("digital-minimalism")));

    reader.toggle(&id("art-of-questioning"));
    assert!(reader.expanded_essay().is_none());
}

#[test]
fn reader_ignores_ids_missing_from_the_catalog() {
    let mut reader = Reader::over_builtin();

    reader.toggle(&id("not-in-the-catalog"));
    assert!(reader.expanded_essay().is_none());

    reader.toggle(&id("philosophy-of-simplicity"));
    reader.toggle(&id("not-in-the-catalog"));
    assert!(reader.is_expanded(&id("philosophy-of-simplicity")));
}

#[test]
fn expanded_essay_resolves_to_the_full_record() {
    let mut reader = Reader::over_builtin();
    reader.toggle(&id("digital-minimalism"));

    let essay = reader.expanded_essay().expect("essay is expanded");
    assert_eq!(essay.title, "Digital Minimalism in the Age of Infinite Scroll");
    assert_eq!(essay.read_time, "8 min read");
}
