//! Rendering rules derived from essay content and reading state.

/// Paragraph separator convention for essay bodies.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Split an essay body into paragraphs on the literal blank-line separator.
///
/// Substrings are passed through verbatim, whitespace included, so joining
/// them back with [`PARAGRAPH_SEPARATOR`] reproduces the input exactly.
pub fn paragraphs(content: &str) -> impl Iterator<Item = &str> {
    content.split(PARAGRAPH_SEPARATOR)
}

/// Call-to-action label for an essay row, derived from its expansion state.
pub fn toggle_label(expanded: bool) -> &'static str {
    if expanded {
        "Collapse"
    } else {
        "Read Essay"
    }
}

/// Disclosure indicator for an essay row's trailing edge.
pub fn chevron(expanded: bool) -> &'static str {
    if expanded {
        "\u{25b2}"
    } else {
        "\u{25bc}"
    }
}
