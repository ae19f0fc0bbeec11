use crate::constants::{CONFIG_DIR_NAME, DEFAULT_IMAGE_TEMPLATE, SEED_FILE_NAME};
use crate::models::{Friend, FriendId};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Ordered, in-memory collection of friends
///
/// Insertion order is kept for the lifetime of the store; nothing here
/// reorders or removes entries.
#[derive(Clone, Debug, Default)]
pub struct FriendStore {
    friends: Vec<Friend>,
}

impl FriendStore {
    pub fn with_friends(friends: Vec<Friend>) -> Self {
        FriendStore { friends }
    }

    /// Append a friend. The caller is trusted to supply a fresh id.
    pub fn add_friend(&mut self, friend: Friend) {
        tracing::info!(id = %friend.id, name = %friend.name, "Adding friend");
        self.friends.push(friend);
    }

    /// Add `delta` to the balance of the friend with `id`; unknown ids are ignored
    pub fn update_balance(&mut self, id: &FriendId, delta: f64) {
        match self.friends.iter_mut().find(|f| &f.id == id) {
            Some(friend) => {
                friend.balance += delta;
                tracing::info!(%id, delta, balance = friend.balance, "Balance updated");
            }
            None => tracing::debug!(%id, "Balance update for unknown friend ignored"),
        }
    }

    pub fn list(&self) -> &[Friend] {
        &self.friends
    }

    pub fn get(&self, id: &FriendId) -> Option<&Friend> {
        self.friends.iter().find(|f| &f.id == id)
    }

    pub fn position(&self, id: &FriendId) -> Option<usize> {
        self.friends.iter().position(|f| &f.id == id)
    }

    pub fn len(&self) -> usize {
        self.friends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.friends.is_empty()
    }
}

/// Friends shown when no seed file exists
pub fn default_seed() -> Vec<Friend> {
    [("499476", "Krish", -70.0), ("9177529", "Aadya", 0.0), ("6195371", "Shivani", 120.0)]
        .into_iter()
        .map(|(id, name, balance)| {
            Friend::new(
                FriendId::new(id),
                name,
                format!("{}{}", DEFAULT_IMAGE_TEMPLATE, id),
                balance,
            )
        })
        .collect()
}

/// Default seed file location: `~/.billsplit/friends.yaml`
pub fn seed_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
        .join(SEED_FILE_NAME)
}

/// Read a YAML seed file. `Ok(None)` when the file does not exist.
pub fn load_seed_file(path: &Path) -> Result<Option<Vec<Friend>>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("reading seed file {}", path.display()))?;
    let friends = serde_yaml::from_str::<Vec<Friend>>(&content)
        .with_context(|| format!("parsing seed file {}", path.display()))?;
    Ok(Some(friends))
}

/// Load the initial friends, falling back to the built-in list
pub fn load_seed(path: &Path) -> Vec<Friend> {
    match load_seed_file(path) {
        Ok(Some(friends)) => {
            tracing::info!(path = %path.display(), count = friends.len(), "Loaded seed file");
            friends
        }
        Ok(None) => default_seed(),
        Err(e) => {
            tracing::warn!(error = %e, "Falling back to built-in friends");
            default_seed()
        }
    }
}
