//! App actor - message loop processing UI events

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::{RenderState, UiEvent};

/// App actor that owns the state and applies one UI event at a time
pub struct AppActor {
    state: AppState,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(state: AppState, render_tx: mpsc::UnboundedSender<RenderState>) -> Self {
        AppActor { state, render_tx }
    }

    /// Run the actor message loop
    pub async fn run(mut self, mut ui_rx: mpsc::UnboundedReceiver<UiEvent>) {
        // Send initial render state
        let _ = self.render_tx.send(self.state.to_render_state());

        while let Some(event) = ui_rx.recv().await {
            if self.handle_ui_event(event) {
                tracing::info!("Quit requested");
                break;
            }
            let _ = self.render_tx.send(self.state.to_render_state());
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        tracing::trace!(?event, "UI event");

        match event {
            // Friend list
            UiEvent::MoveUp => self.state.move_up(),
            UiEvent::MoveDown => self.state.move_down(),
            UiEvent::SelectFriend(id) => self.state.toggle_select(id),
            UiEvent::ToggleAddFriend => self.state.toggle_add_friend(),

            // Form editing
            UiEvent::FocusForm => self.state.focus_form(),
            UiEvent::StopEditing => self.state.stop_editing(),
            UiEvent::NextField => self.state.next_field(),
            UiEvent::PrevField => self.state.prev_field(),
            UiEvent::CharInput(c) => self.state.enter_char(c),
            UiEvent::Backspace => self.state.delete_char(),
            UiEvent::CyclePayer => self.state.cycle_payer(),

            // Submissions
            UiEvent::SubmitAddFriend => self.state.submit_add_friend(),
            UiEvent::SubmitSplitBill => self.state.submit_split_bill(),

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}
