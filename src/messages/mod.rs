//! Message types for inter-layer communication in the actor-based architecture.
//!
//! Intents flow from the UI to the App actor; render snapshots flow back.

pub mod ui_events;
pub mod render;

pub use ui_events::UiEvent;
pub use render::RenderState;
