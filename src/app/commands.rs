//! Command handlers - business logic for processing UI events

use crate::app::state::UiMode;
use crate::app::AppState;
use crate::messages::ui_events::{FormField, InputMode};
use crate::models::FriendId;
use crate::workflow::{AddFriendForm, SplitBillForm};

impl AppState {
    // ========================
    // Friend list
    // ========================

    pub fn move_up(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.highlighted + 1 < self.store.len() {
            self.highlighted += 1;
        }
    }

    /// Select `id`, or clear the selection if it is already selected.
    ///
    /// Either way the add-friend form is dismissed.
    pub fn toggle_select(&mut self, id: FriendId) {
        if self.selected_id() == Some(&id) {
            tracing::debug!(%id, "Friend deselected");
            self.mode = UiMode::None;
            self.input_mode = InputMode::Normal;
            return;
        }

        tracing::debug!(%id, "Friend selected");
        let position = self.store.position(&id);
        self.mode = UiMode::SplittingWith {
            friend: id,
            form: SplitBillForm::default(),
        };

        // No split form is drawn for an id the store doesn't hold
        match position {
            Some(pos) => {
                self.highlighted = pos;
                self.input_mode = InputMode::Editing;
                self.active_field = FormField::BillValue;
            }
            None => self.input_mode = InputMode::Normal,
        }
    }

    /// Open a fresh add-friend form, or close it if open. Opening clears the selection.
    pub fn toggle_add_friend(&mut self) {
        if matches!(self.mode, UiMode::Adding(_)) {
            self.mode = UiMode::None;
            self.input_mode = InputMode::Normal;
            return;
        }

        self.mode = UiMode::Adding(AddFriendForm::default());
        self.input_mode = InputMode::Editing;
        self.active_field = FormField::Name;
    }

    // ========================
    // Form focus
    // ========================

    pub fn focus_form(&mut self) {
        self.active_field = match self.mode {
            UiMode::None => return,
            UiMode::Adding(_) => FormField::Name,
            UiMode::SplittingWith { .. } => FormField::BillValue,
        };
        self.input_mode = InputMode::Editing;
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn next_field(&mut self) {
        self.active_field = self.active_field.next();
    }

    pub fn prev_field(&mut self) {
        self.active_field = self.active_field.prev();
    }

    // ========================
    // Input editing
    // ========================

    pub fn enter_char(&mut self, c: char) {
        self.edit_field(|text| text.push(c));
    }

    pub fn delete_char(&mut self) {
        self.edit_field(|text| {
            text.pop();
        });
    }

    /// Apply `edit` to the focused field. Amount fields only keep accepted edits.
    fn edit_field(&mut self, edit: impl FnOnce(&mut String)) {
        match (&mut self.mode, self.active_field) {
            (UiMode::Adding(form), FormField::Name) => edit(&mut form.name),
            (UiMode::Adding(form), FormField::ImageUrl) => edit(&mut form.image_template),
            (UiMode::SplittingWith { form, .. }, FormField::BillValue) => {
                let mut text = form.bill_input().to_string();
                edit(&mut text);
                form.set_bill_input(text);
            }
            (UiMode::SplittingWith { form, .. }, FormField::YourExpense) => {
                let mut text = form.paid_by_user_input().to_string();
                edit(&mut text);
                form.set_paid_by_user_input(text);
            }
            _ => {}
        }
    }

    pub fn cycle_payer(&mut self) {
        if let UiMode::SplittingWith { form, .. } = &mut self.mode {
            form.cycle_payer();
        }
    }

    // ========================
    // Submissions
    // ========================

    pub fn submit_add_friend(&mut self) {
        let added = match &mut self.mode {
            UiMode::Adding(form) => form.submit(&mut self.store, self.ids.as_mut()).is_some(),
            _ => false,
        };

        if added {
            self.mode = UiMode::None;
            self.input_mode = InputMode::Normal;
        }
    }

    pub fn submit_split_bill(&mut self) {
        let applied = match &self.mode {
            UiMode::SplittingWith { friend, form } => form.submit(friend, &mut self.store),
            _ => false,
        };

        if applied {
            self.mode = UiMode::None;
            self.input_mode = InputMode::Normal;
        }
    }

    // ========================
    // Help popup
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}
