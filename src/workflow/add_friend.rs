//! Add-friend form

use crate::constants::DEFAULT_IMAGE_TEMPLATE;
use crate::ids::IdGenerator;
use crate::models::{Friend, FriendId};
use crate::store::FriendStore;

#[derive(Clone, Debug, PartialEq)]
pub struct AddFriendForm {
    pub name: String,
    pub image_template: String,
}

impl Default for AddFriendForm {
    fn default() -> Self {
        AddFriendForm {
            name: String::new(),
            image_template: String::from(DEFAULT_IMAGE_TEMPLATE),
        }
    }
}

impl AddFriendForm {
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.image_template.is_empty()
    }

    /// Create the friend and append it to `store`.
    ///
    /// Returns the new id, or `None` (form untouched) when a field is empty.
    /// On success the fields are reset to their defaults.
    pub fn submit(&mut self, store: &mut FriendStore, ids: &mut dyn IdGenerator) -> Option<FriendId> {
        if !self.is_complete() {
            tracing::debug!("Add friend ignored: empty field");
            return None;
        }

        let id = ids.next_id();
        let image = format!("{}{}", self.image_template, id);
        store.add_friend(Friend::new(id.clone(), self.name.clone(), image, 0.0));

        *self = AddFriendForm::default();
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIdGenerator;

    #[test]
    fn test_submit_creates_friend() {
        let mut store = FriendStore::default();
        let mut ids = SequentialIdGenerator::new("f");
        let mut form = AddFriendForm {
            name: String::from("Ravi"),
            ..AddFriendForm::default()
        };

        let id = form.submit(&mut store, &mut ids);

        assert_eq!(id, Some(FriendId::new("f-1")));
        let friend = &store.list()[0];
        assert_eq!(friend.name, "Ravi");
        assert_eq!(friend.image, "https://i.pravatar.cc/48?u=f-1");
        assert_eq!(friend.balance, 0.0);
        assert_eq!(form, AddFriendForm::default());
    }

    #[test]
    fn test_submit_with_empty_name_is_ignored() {
        let mut store = FriendStore::default();
        let mut ids = SequentialIdGenerator::new("f");
        let mut form = AddFriendForm {
            name: String::new(),
            image_template: String::from("template"),
        };

        assert_eq!(form.submit(&mut store, &mut ids), None);
        assert!(store.is_empty());
        assert_eq!(form.image_template, "template");
    }

    #[test]
    fn test_submit_with_empty_template_is_ignored() {
        let mut store = FriendStore::default();
        let mut ids = SequentialIdGenerator::new("f");
        let mut form = AddFriendForm {
            name: String::from("Ravi"),
            image_template: String::new(),
        };

        assert_eq!(form.submit(&mut store, &mut ids), None);
        assert!(store.is_empty());
        assert_eq!(form.name, "Ravi");
    }
}
