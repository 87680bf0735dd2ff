use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable key for an essay. Catalog ids are unique; see `CatalogError`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EssayId(pub String);

impl EssayId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EssayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One essay as authored. `date` and `read_time` are opaque display strings;
/// `content` holds paragraphs separated by a literal blank line (`"\n\n"`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Essay {
    pub id: EssayId,
    pub title: String,
    pub excerpt: String,
    pub date: String,
    pub read_time: String,
    pub content: String,
    /// Editorial flag carried on the record; nothing reads it yet.
    pub featured: bool,
}

/// In-page scroll targets of the reader surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Essays,
    About,
    Contact,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Essays, Section::About, Section::Contact];

    pub fn label(self) -> &'static str {
        match self {
            Self::Essays => "Essays",
            Self::About => "About",
            Self::Contact => "Contact",
        }
    }
}
