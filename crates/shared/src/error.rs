use thiserror::Error;

/// Integrity violations a hand-assembled catalog can carry.
///
/// The built-in catalog is valid by construction; this surfaces only through
/// `Catalog::new`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("duplicate essay id: {id}")]
    DuplicateId { id: String },
    #[error("essay id must not be blank")]
    BlankId,
}
