//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Image template pre-filled in the add-friend form; the new id is appended to it
pub const DEFAULT_IMAGE_TEMPLATE: &str = "https://i.pravatar.cc/48?u=";

/// Currency label shown in front of balances
pub const CURRENCY: &str = "Rs.";

/// Directory (under the home directory) holding the seed file
pub const CONFIG_DIR_NAME: &str = ".billsplit";

/// Seed file with the initial friend list
pub const SEED_FILE_NAME: &str = "friends.yaml";

/// Log file written in the working directory
pub const LOG_FILE_NAME: &str = "billsplit.log";

/// Application name
pub const APP_NAME: &str = "Bill Split";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
