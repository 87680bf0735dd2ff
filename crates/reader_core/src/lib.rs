//! App logic beneath the essays GUI: the essay catalog, the expand/collapse
//! reading state, and the content rendering rules.

pub mod catalog;
pub mod content;
pub mod view;

pub use catalog::Catalog;
pub use view::{Reader, ReadingView};

#[cfg(test)]
mod tests;
