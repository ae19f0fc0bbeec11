//! Form workflows - captured inputs that end in one commit against the store

pub mod add_friend;
pub mod split_bill;

pub use add_friend::AddFriendForm;
pub use split_bill::{parse_amount, SplitBillForm};
