//! App layer - central state management and command processing
//!
//! The App actor receives UI events, updates state through the store and
//! the form workflows, and emits render state.

pub mod state;
pub mod actor;
pub mod commands;

pub use state::{AppState, UiMode};
pub use actor::AppActor;
