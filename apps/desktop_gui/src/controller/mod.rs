//! Controller layer: UI intents and their application to reader state.

pub mod events;
pub mod orchestration;
