//! Bill Split TUI - actor-based bill splitting with friends
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events

use std::io;
use std::time::Duration;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::*,
};
use tokio::sync::mpsc;

use billsplit_tui::app::{AppActor, AppState};
use billsplit_tui::constants::{APP_NAME, APP_VERSION, LOG_FILE_NAME};
use billsplit_tui::messages::render::PanelView;
use billsplit_tui::messages::ui_events::{key_to_ui_event, FormField, InputMode};
use billsplit_tui::messages::{RenderState, UiEvent};
use billsplit_tui::models::format_amount;
use billsplit_tui::store::{self, FriendStore};
use billsplit_tui::ui::{render_disabled, render_friend_item, render_input};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", LOG_FILE_NAME);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    tracing::info!(version = APP_VERSION, "Starting {}", APP_NAME);
    let friends = store::load_seed(&store::seed_path());
    let state = AppState::new(FriendStore::with_friends(friends));

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _terminal_guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn app actor
    let app_actor = AppActor::new(state, render_tx);
    tokio::spawn(app_actor.run(ui_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(key, &current_state) {
                    let quit = matches!(event, UiEvent::Quit);
                    let _ = ui_tx.send(event);
                    if quit {
                        break;
                    }
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // Title bar
            Constraint::Min(0),     // Content
            Constraint::Length(1),  // Status bar
        ])
        .split(area);

    draw_title_bar(f, main_chunks[0]);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(main_chunks[1]);

    draw_sidebar(f, state, content[0]);

    match &state.panel {
        PanelView::None => draw_empty_panel(f, content[1]),
        PanelView::AddFriend { name, image_template } => {
            draw_add_friend_form(f, state, name, image_template, content[1]);
        }
        PanelView::SplitBill { .. } => draw_split_bill_form(f, state, content[1]),
    }

    draw_status_bar(f, state, main_chunks[2]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_title_bar(f: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(format!(" {} ", APP_NAME), Style::default().fg(Color::Black).bg(Color::Cyan).bold()),
        Span::styled(format!(" v{}", APP_VERSION), Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(title), area);
}

fn draw_sidebar(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let is_focused = state.input_mode == InputMode::Normal;
    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let items: Vec<ListItem> = state.friends.iter().map(render_friend_item).collect();
    let list = List::new(items)
        .block(Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" Friends ({}) ", state.friends.len())))
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    if !state.friends.is_empty() {
        list_state.select(Some(state.highlighted));
    }
    f.render_stateful_widget(list, chunks[0], &mut list_state);

    let adding = matches!(state.panel, PanelView::AddFriend { .. });
    let button = if adding { " a: Close " } else { " a: Add friend " };
    f.render_widget(
        Paragraph::new(Span::styled(button, Style::default().fg(Color::Black).bg(Color::Yellow))),
        chunks[1],
    );
}

fn draw_empty_panel(f: &mut Frame, area: Rect) {
    let content = "Select a friend to split a bill.\n\nPress 'a' to add a new friend.";
    let paragraph = Paragraph::new(content)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn draw_add_friend_form(f: &mut Frame, state: &RenderState, name: &str, image_template: &str, area: Rect) {
    let editing = state.input_mode == InputMode::Editing;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" Add friend ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let fields = [
        (FormField::Name, name, " Friend name ", rows[0]),
        (FormField::ImageUrl, image_template, " Image URL ", rows[1]),
    ];
    for (field, value, title, rect) in fields {
        let focused = state.active_field == field;
        f.render_widget(render_input(value, title, focused, editing), rect);
        if focused && editing {
            set_field_cursor(f, rect, value);
        }
    }

    f.render_widget(
        Paragraph::new(" Enter: Add ").style(Style::default().fg(Color::Black).bg(Color::Yellow)),
        rows[2],
    );
}

fn draw_split_bill_form(f: &mut Frame, state: &RenderState, area: Rect) {
    let PanelView::SplitBill { friend_name, friend_image, bill, paid_by_user, paid_by_friend, payer, .. } = &state.panel else {
        return;
    };
    let editing = state.input_mode == InputMode::Editing;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta))
        .title(format!(" Split a bill with {} ", friend_name))
        .title_bottom(Line::from(format!(" {} ", friend_image)).right_aligned());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let inputs = [
        (FormField::BillValue, bill.as_str(), " Bill value ", rows[0]),
        (FormField::YourExpense, paid_by_user.as_str(), " Your expense ", rows[1]),
    ];
    for (field, value, title, rect) in inputs {
        let focused = state.active_field == field;
        f.render_widget(render_input(value, title, focused, editing), rect);
        if focused && editing {
            set_field_cursor(f, rect, value);
        }
    }

    let friend_share = paid_by_friend.map(format_amount).unwrap_or_default();
    let friend_title = format!(" {}'s expense ", friend_name);
    f.render_widget(render_disabled(friend_share, &friend_title), rows[2]);

    let payer_focused = state.active_field == FormField::WhoIsPaying;
    let payer_text = format!("< {} >", payer.label(friend_name));
    f.render_widget(
        render_input(&payer_text, " Who is paying the bill? ", payer_focused, editing),
        rows[3],
    );

    f.render_widget(
        Paragraph::new(" Enter: Split bill ").style(Style::default().fg(Color::Black).bg(Color::Magenta)),
        rows[4],
    );
}

fn set_field_cursor(f: &mut Frame, area: Rect, value: &str) {
    let max_x = area.x + area.width.saturating_sub(2);
    let cursor_x = (area.x + value.chars().count() as u16 + 1).min(max_x);
    f.set_cursor_position(Position::new(cursor_x, area.y + 1));
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = match (state.input_mode, state.active_field) {
        (InputMode::Editing, FormField::WhoIsPaying) => " ←/→:change payer | Tab:next field | Enter:submit | ESC:back to list ",
        (InputMode::Editing, _) => " type to edit | Tab:next field | Enter:submit | ESC:back to list ",
        (InputMode::Normal, _) => " ↑/↓:move | Enter:select | a:add friend | Tab:form | ?:help | q:quit ",
    };

    let bar = Paragraph::new(status)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = r#"
 BILL SPLIT - Keyboard Shortcuts

 FRIENDS
   ↑ / ↓  (k / j)     Move through the list
   Enter / Space      Select friend (again to close)
   a                  Add friend / close the form
   Tab / e            Jump into the open form
   Esc                Close the open panel

 FORMS
   Tab / Shift+Tab    Next / previous field
   ← / →              Change who is paying
   Enter              Submit
   Esc                Back to the friend list

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
