//! Identifier generation for new friends
//!
//! The add-friend workflow takes an `IdGenerator` instead of calling a global,
//! so tests can hand out predictable ids.

use uuid::Uuid;

use crate::models::FriendId;

/// Produces process-unique friend identifiers
pub trait IdGenerator: Send {
    fn next_id(&mut self) -> FriendId;
}

/// Random UUID v4 ids
#[derive(Debug, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> FriendId {
        FriendId::new(Uuid::new_v4().to_string())
    }
}

/// Deterministic ids with a fixed prefix: `prefix-1`, `prefix-2`, ...
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: u64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        SequentialIdGenerator {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> FriendId {
        let id = FriendId::new(format!("{}-{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}
