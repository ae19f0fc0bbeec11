//! Render state - data structure sent from App layer to UI for rendering

use crate::messages::ui_events::{FormField, InputMode};
use crate::models::{BalanceStatus, Friend, FriendId, Payer};

/// One row of the friend list
#[derive(Debug, Clone, PartialEq)]
pub struct FriendRow {
    pub friend: Friend,
    pub status: BalanceStatus,
    pub selected: bool,
}

impl FriendRow {
    pub fn new(friend: Friend, selected: bool) -> Self {
        FriendRow {
            status: friend.status(),
            friend,
            selected,
        }
    }
}

/// Side panel contents
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PanelView {
    #[default]
    None,
    AddFriend {
        name: String,
        image_template: String,
    },
    SplitBill {
        friend_id: FriendId,
        friend_name: String,
        friend_image: String,
        bill: String,
        paid_by_user: String,
        paid_by_friend: Option<f64>,
        payer: Payer,
    },
}

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    // Friend list
    pub friends: Vec<FriendRow>,
    pub highlighted: usize,

    // Side panel
    pub panel: PanelView,
    pub input_mode: InputMode,
    pub active_field: FormField,

    // Popups
    pub show_help: bool,
}

impl RenderState {
    pub fn highlighted_friend(&self) -> Option<&FriendRow> {
        self.friends.get(self.highlighted)
    }

    pub fn selected_friend(&self) -> Option<&FriendRow> {
        self.friends.iter().find(|row| row.selected)
    }
}
