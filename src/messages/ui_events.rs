//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::messages::render::{PanelView, RenderState};
use crate::models::FriendId;

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Friend list
    MoveUp,
    MoveDown,
    SelectFriend(FriendId),
    ToggleAddFriend,

    // Form editing
    FocusForm,
    StopEditing,
    NextField,
    PrevField,
    CharInput(char),
    Backspace,
    CyclePayer,

    // Submissions
    SubmitAddFriend,
    SubmitSplitBill,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Editable field inside the open form
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum FormField {
    #[default]
    Name,
    ImageUrl,
    BillValue,
    YourExpense,
    WhoIsPaying,
}

impl FormField {
    /// Next field within the same form, wrapping around
    pub fn next(&self) -> FormField {
        match self {
            FormField::Name => FormField::ImageUrl,
            FormField::ImageUrl => FormField::Name,
            FormField::BillValue => FormField::YourExpense,
            FormField::YourExpense => FormField::WhoIsPaying,
            FormField::WhoIsPaying => FormField::BillValue,
        }
    }

    pub fn prev(&self) -> FormField {
        match self {
            FormField::Name => FormField::ImageUrl,
            FormField::ImageUrl => FormField::Name,
            FormField::BillValue => FormField::WhoIsPaying,
            FormField::YourExpense => FormField::BillValue,
            FormField::WhoIsPaying => FormField::YourExpense,
        }
    }
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(key: KeyEvent, state: &RenderState) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    if state.show_help {
        return Some(UiEvent::CloseHelp);
    }

    match state.input_mode {
        InputMode::Normal => handle_normal_keys(key, state),
        InputMode::Editing => handle_editing_keys(key, state),
    }
}

/// Keys while navigating the friend list
fn handle_normal_keys(key: KeyEvent, state: &RenderState) -> Option<UiEvent> {
    match key.code {
        KeyCode::Char('q') => Some(UiEvent::Quit),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::MoveDown),
        KeyCode::Enter | KeyCode::Char(' ') => state
            .highlighted_friend()
            .map(|row| UiEvent::SelectFriend(row.friend.id.clone())),
        KeyCode::Char('a') => Some(UiEvent::ToggleAddFriend),
        KeyCode::Tab | KeyCode::Char('e') => match state.panel {
            PanelView::None => None,
            _ => Some(UiEvent::FocusForm),
        },
        // Close the open panel with the same intent that opened it
        KeyCode::Esc => match &state.panel {
            PanelView::None => None,
            PanelView::AddFriend { .. } => Some(UiEvent::ToggleAddFriend),
            PanelView::SplitBill { friend_id, .. } => Some(UiEvent::SelectFriend(friend_id.clone())),
        },
        _ => None,
    }
}

/// Keys while typing into a form
fn handle_editing_keys(key: KeyEvent, state: &RenderState) -> Option<UiEvent> {
    let on_payer = state.active_field == FormField::WhoIsPaying;

    match key.code {
        KeyCode::Esc => Some(UiEvent::StopEditing),
        KeyCode::Tab => Some(UiEvent::NextField),
        KeyCode::BackTab => Some(UiEvent::PrevField),
        KeyCode::Enter => match state.panel {
            PanelView::AddFriend { .. } => Some(UiEvent::SubmitAddFriend),
            PanelView::SplitBill { .. } => Some(UiEvent::SubmitSplitBill),
            PanelView::None => Some(UiEvent::StopEditing),
        },
        KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') if on_payer => Some(UiEvent::CyclePayer),
        KeyCode::Backspace if !on_payer => Some(UiEvent::Backspace),
        KeyCode::Char(c) if !on_payer => Some(UiEvent::CharInput(c)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::render::FriendRow;
    use crate::models::{Friend, Payer};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn list_state() -> RenderState {
        let rows = ["1", "2"]
            .into_iter()
            .map(|id| FriendRow::new(Friend::new(FriendId::new(id), "F", "img", 0.0), false))
            .collect();
        RenderState {
            friends: rows,
            highlighted: 1,
            ..RenderState::default()
        }
    }

    fn split_state() -> RenderState {
        RenderState {
            panel: PanelView::SplitBill {
                friend_id: FriendId::new("2"),
                friend_name: String::from("F"),
                friend_image: String::from("img"),
                bill: String::new(),
                paid_by_user: String::new(),
                paid_by_friend: None,
                payer: Payer::User,
            },
            input_mode: InputMode::Editing,
            active_field: FormField::BillValue,
            ..list_state()
        }
    }

    #[test]
    fn test_enter_selects_highlighted_friend() {
        let event = key_to_ui_event(press(KeyCode::Enter), &list_state());
        assert_eq!(event, Some(UiEvent::SelectFriend(FriendId::new("2"))));
    }

    #[test]
    fn test_enter_on_empty_list_does_nothing() {
        assert_eq!(key_to_ui_event(press(KeyCode::Enter), &RenderState::default()), None);
    }

    #[test]
    fn test_escape_closes_split_panel_via_select() {
        let state = RenderState {
            input_mode: InputMode::Normal,
            ..split_state()
        };
        let event = key_to_ui_event(press(KeyCode::Esc), &state);
        assert_eq!(event, Some(UiEvent::SelectFriend(FriendId::new("2"))));
    }

    #[test]
    fn test_editing_keys() {
        let state = split_state();
        assert_eq!(key_to_ui_event(press(KeyCode::Char('4')), &state), Some(UiEvent::CharInput('4')));
        assert_eq!(key_to_ui_event(press(KeyCode::Enter), &state), Some(UiEvent::SubmitSplitBill));
        assert_eq!(key_to_ui_event(press(KeyCode::Char('q')), &state), Some(UiEvent::CharInput('q')));

        let on_payer = RenderState {
            active_field: FormField::WhoIsPaying,
            ..split_state()
        };
        assert_eq!(key_to_ui_event(press(KeyCode::Right), &on_payer), Some(UiEvent::CyclePayer));
        assert_eq!(key_to_ui_event(press(KeyCode::Char('x')), &on_payer), None);
    }

    #[test]
    fn test_help_swallows_keys() {
        let state = RenderState {
            show_help: true,
            ..list_state()
        };
        assert_eq!(key_to_ui_event(press(KeyCode::Char('a')), &state), Some(UiEvent::CloseHelp));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_ui_event(ctrl_c, &state), Some(UiEvent::Quit));
    }

    #[test]
    fn test_field_cycles_stay_within_form() {
        assert_eq!(FormField::Name.next(), FormField::ImageUrl);
        assert_eq!(FormField::ImageUrl.next(), FormField::Name);
        assert_eq!(FormField::WhoIsPaying.next(), FormField::BillValue);
        assert_eq!(FormField::BillValue.prev(), FormField::WhoIsPaying);
    }
}
