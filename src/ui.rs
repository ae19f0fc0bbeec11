use ratatui::{prelude::*, widgets::*};

use crate::messages::render::FriendRow;
use crate::models::BalanceStatus;

/// Renders a single-line form field
pub fn render_input<'a>(content: &'a str, title: &'a str, is_focused: bool, is_editing: bool) -> Paragraph<'a> {
    let style = if is_focused && is_editing {
        Style::default().fg(Color::Yellow)
    } else if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(title);

    Paragraph::new(content).block(block)
}

/// Renders a read-only field
pub fn render_disabled<'a>(content: String, title: &'a str) -> Paragraph<'a> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(title);

    Paragraph::new(content)
        .style(Style::default().fg(Color::Gray))
        .block(block)
}

/// Balance color
pub fn balance_color(status: BalanceStatus) -> Color {
    match status {
        BalanceStatus::YouOwe => Color::Red,
        BalanceStatus::OwesYou => Color::Green,
        BalanceStatus::Even => Color::Gray,
    }
}

/// Two-line list entry: name with select button, then the balance line
pub fn render_friend_item(row: &FriendRow) -> ListItem<'static> {
    let button = if row.selected { "[Close]" } else { "[Select]" };
    let name_style = if row.selected {
        Style::default().fg(Color::Yellow).bold()
    } else {
        Style::default().bold()
    };

    let name_line = Line::from(vec![
        Span::styled(row.friend.name.clone(), name_style),
        Span::raw(" "),
        Span::styled(button, Style::default().fg(Color::DarkGray)),
    ]);
    let balance_line = Line::from(Span::styled(
        format!("  {}", row.friend.describe_balance()),
        Style::default().fg(balance_color(row.status)),
    ));

    ListItem::new(vec![name_line, balance_line])
}
