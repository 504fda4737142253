// ABOUTME: Save session modal with a name input prefilled with a dated default
// ABOUTME: Tabs are snapshotted from the host when the form is submitted

use ratatui::{
    prelude::*,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::AppState;

pub struct SaveSessionComponent;

impl SaveSessionComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        if let Some(ref form) = state.save_form {
            // Create a centered popup
            let popup_area = self.centered_rect(60, 40, area);

            // Clear the background
            frame.render_widget(Clear, popup_area);

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3), // Title
                    Constraint::Length(3), // Name input
                    Constraint::Length(3), // Instructions
                ])
                .split(popup_area);

            // Title
            let title = Paragraph::new("Name This Session")
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Cyan))
                        .title("Save Session"),
                )
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Center);
            frame.render_widget(title, chunks[0]);

            // Name input with a block cursor
            let name_input = Paragraph::new(format!("{}█", form.name))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Green))
                        .title("Session Name"),
                )
                .style(Style::default().fg(Color::White));
            frame.render_widget(name_input, chunks[1]);

            // Instructions
            let instructions = Paragraph::new("Type session name • Enter: Save • Esc: Cancel")
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Gray)),
                )
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center);
            frame.render_widget(instructions, chunks[2]);
        }
    }

    fn centered_rect(&self, percent_x: u16, percent_y: u16, r: Rect) -> Rect {
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
}

impl Default for SaveSessionComponent {
    fn default() -> Self {
        Self::new()
    }
}
