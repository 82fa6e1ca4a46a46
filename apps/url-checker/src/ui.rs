//! UI rendering for the URL checker.

use crate::app::{App, Focus};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use validatable_entry::{EntryView, ENTRY_HEIGHT};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(ENTRY_HEIGHT + 2),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    let entry_focused = app.focus == Focus::Entry;
    let entry_block = Block::default()
        .borders(Borders::ALL)
        .title(" URL Checker ")
        .border_style(if entry_focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        });
    f.render_widget(
        EntryView::new(&app.entry)
            .focused(entry_focused)
            .block(entry_block),
        chunks[0],
    );

    let model = app.model.borrow();

    let label = Paragraph::new(model.label_text.as_str())
        .block(Block::default().borders(Borders::ALL).title(" Status "));
    f.render_widget(label, chunks[1]);

    let button_style = match (model.can_submit(), app.focus == Focus::Button) {
        (false, _) => Style::default().fg(Color::DarkGray),
        (true, true) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        (true, false) => Style::default().fg(Color::Green),
    };
    let button = Paragraph::new(" Submit ")
        .style(button_style)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(button, chunks[2]);

    let help = Paragraph::new("Tab: switch focus  Enter: submit  Esc: quit")
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[4]);
}
