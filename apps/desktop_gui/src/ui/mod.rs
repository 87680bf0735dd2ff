//! UI layer: app shell, theme, and section rendering.

pub mod app;
pub mod theme;

pub use app::{EssaysApp, PersistedReaderSettings, StartupOverrides, SETTINGS_STORAGE_KEY};
