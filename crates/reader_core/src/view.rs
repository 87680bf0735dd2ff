//! Expand/collapse state for the essay list.

use shared::domain::{Essay, EssayId};
use tracing::debug;

use crate::catalog::Catalog;

/// The single piece of reading state: which essay, if any, is expanded.
///
/// Transitions, all through [`ReadingView::toggle`]:
/// none -> expanded(x); expanded(x) -> none; expanded(x) -> expanded(y).
/// At most one essay is expanded at any time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadingView {
    expanded: Option<EssayId>,
}

impl ReadingView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total over any id, known or not; callers that want unknown ids
    /// filtered go through [`Reader::toggle`].
    pub fn toggle(&mut self, id: &EssayId) {
        if self.expanded.as_ref() == Some(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id.clone());
        }
    }

    pub fn expanded(&self) -> Option<&EssayId> {
        self.expanded.as_ref()
    }

    pub fn is_expanded(&self, id: &EssayId) -> bool {
        self.expanded.as_ref() == Some(id)
    }
}

/// A catalog paired with its reading state; this is what the GUI owns.
#[derive(Debug)]
pub struct Reader {
    catalog: &'static Catalog,
    view: ReadingView,
}

impl Reader {
    pub fn new(catalog: &'static Catalog) -> Self {
        Self {
            catalog,
            view: ReadingView::new(),
        }
    }

    pub fn over_builtin() -> Self {
        Self::new(Catalog::builtin())
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    /// Toggle an essay open or closed. Ids the catalog does not know are
    /// ignored, so the state can never point at an essay that renders nothing.
    pub fn toggle(&mut self, id: &EssayId) {
        if !self.catalog.contains(id) {
            debug!(essay = %id, "ignoring toggle for unknown essay id");
            return;
        }
        self.view.toggle(id);
        match self.view.expanded() {
            Some(open) => debug!(essay = %open, "essay expanded"),
            None => debug!(essay = %id, "essay collapsed"),
        }
    }

    pub fn is_expanded(&self, id: &EssayId) -> bool {
        self.view.is_expanded(id)
    }

    pub fn expanded_essay(&self) -> Option<&Essay> {
        self.view.expanded().and_then(|id| self.catalog.get(id))
    }
}
