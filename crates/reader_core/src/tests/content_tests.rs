use crate::catalog::Catalog;
use crate::content::{chevron, paragraphs, toggle_label, PARAGRAPH_SEPARATOR};

#[test]
fn split_and_join_round_trips_every_builtin_essay() {
    for essay in Catalog::builtin().iter() {
        let blocks: Vec<&str> = paragraphs(&essay.content).collect();
        assert!(
            blocks.len() > 1,
            "essay {} should have multiple paragraphs",
            essay.id
        );
        assert_eq!(blocks.join(PARAGRAPH_SEPARATOR), essay.content);
    }
}

#[test]
fn content_without_a_separator_is_a_single_paragraph() {
    let blocks: Vec<&str> = paragraphs("just one block of text").collect();
    assert_eq!(blocks, ["just one block of text"]);
}

#[test]
fn split_preserves_whitespace_verbatim() {
    let blocks: Vec<&str> = paragraphs("trailing space \n\n leading space").collect();
    assert_eq!(blocks, ["trailing space ", " leading space"]);
}

#[test]
fn toggle_label_follows_expansion_state() {
    assert_eq!(toggle_label(false), "Read Essay");
    assert_eq!(toggle_label(true), "Collapse");
}

#[test]
fn chevron_points_down_when_collapsed_and_up_when_expanded() {
    assert_eq!(chevron(false), "\u{25bc}");
    assert_eq!(chevron(true), "\u{25b2}");
}
