//! App state - pure data structure with no I/O logic

use crate::ids::{IdGenerator, UuidIdGenerator};
use crate::messages::render::{FriendRow, PanelView};
use crate::messages::ui_events::{FormField, InputMode};
use crate::messages::RenderState;
use crate::models::{Friend, FriendId};
use crate::store::FriendStore;
use crate::workflow::{AddFriendForm, SplitBillForm};

/// Which side panel is open
///
/// A selected friend and the add-friend form are mutually exclusive, so the
/// selection lives inside `SplittingWith`.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum UiMode {
    #[default]
    None,
    Adding(AddFriendForm),
    SplittingWith {
        friend: FriendId,
        form: SplitBillForm,
    },
}

/// Main application state - pure data, no I/O
pub struct AppState {
    pub store: FriendStore,
    pub mode: UiMode,

    // Friend list cursor
    pub highlighted: usize,

    // Form focus
    pub input_mode: InputMode,
    pub active_field: FormField,

    // Popups
    pub show_help: bool,

    pub(crate) ids: Box<dyn IdGenerator>,
}

impl AppState {
    pub fn new(store: FriendStore) -> Self {
        Self::with_id_generator(store, Box::new(UuidIdGenerator))
    }

    pub fn with_id_generator(store: FriendStore, ids: Box<dyn IdGenerator>) -> Self {
        AppState {
            store,
            mode: UiMode::None,
            highlighted: 0,
            input_mode: InputMode::Normal,
            active_field: FormField::Name,
            show_help: false,
            ids,
        }
    }

    /// Id of the selected friend, if any
    pub fn selected_id(&self) -> Option<&FriendId> {
        match &self.mode {
            UiMode::SplittingWith { friend, .. } => Some(friend),
            _ => None,
        }
    }

    /// The selected friend record, looked up in the store
    pub fn current(&self) -> Option<&Friend> {
        self.selected_id().and_then(|id| self.store.get(id))
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        let selected = self.selected_id();
        let friends = self
            .store
            .list()
            .iter()
            .map(|f| FriendRow::new(f.clone(), Some(&f.id) == selected))
            .collect();

        let panel = match &self.mode {
            UiMode::None => PanelView::None,
            UiMode::Adding(form) => PanelView::AddFriend {
                name: form.name.clone(),
                image_template: form.image_template.clone(),
            },
            UiMode::SplittingWith { friend, form } => match self.store.get(friend) {
                Some(f) => PanelView::SplitBill {
                    friend_id: f.id.clone(),
                    friend_name: f.name.clone(),
                    friend_image: f.image.clone(),
                    bill: form.bill_input().to_string(),
                    paid_by_user: form.paid_by_user_input().to_string(),
                    paid_by_friend: form.paid_by_friend(),
                    payer: form.payer,
                },
                None => PanelView::None,
            },
        };

        RenderState {
            friends,
            highlighted: self.highlighted,
            panel,
            input_mode: self.input_mode,
            active_field: self.active_field,
            show_help: self.show_help,
        }
    }
}
