//! # Bill Split TUI
//!
//! Keep running balances with friends and split bills from the terminal.
//!
//! ## Features
//! - Friend list with who-owes-whom balances
//! - Add friends with a generated id and avatar URL
//! - Split a bill with the selected friend
//! - Initial friends loaded from `~/.billsplit/friends.yaml`
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)

pub mod constants;
pub mod models;
pub mod ids;
pub mod store;
pub mod workflow;
pub mod ui;
pub mod messages;
pub mod app;

// Re-export commonly used types
pub use models::{BalanceStatus, Friend, FriendId, Payer};
pub use ids::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use store::FriendStore;
pub use workflow::{AddFriendForm, SplitBillForm};
pub use messages::{RenderState, UiEvent};
pub use app::{AppActor, AppState, UiMode};
