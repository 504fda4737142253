// ABOUTME: Confirmation dialog for destructive actions such as deleting a session
// ABOUTME: Defaults to No so a stray Enter never destroys anything

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::AppState;

pub struct ConfirmDialogComponent;

impl ConfirmDialogComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        if let Some(ref dialog) = state.confirmation_dialog {
            // Create a centered popup
            let popup_area = self.centered_rect(50, 30, area);

            // Clear the background
            frame.render_widget(Clear, popup_area);

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3), // Message
                    Constraint::Length(3), // Yes / No options
                    Constraint::Length(3), // Instructions
                ])
                .split(popup_area);

            // Message
            let message = Paragraph::new(dialog.message.as_str())
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Red))
                        .title("Confirm"),
                )
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Center);
            frame.render_widget(message, chunks[0]);

            // Options, highlighting whichever side is selected
            let yes_style = if dialog.selected_option {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Red)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let no_style = if dialog.selected_option {
                Style::default().fg(Color::White)
            } else {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            };
            let options_line = Line::from(vec![
                Span::styled("  Yes  ", yes_style),
                Span::raw("     "),
                Span::styled("  No  ", no_style),
            ]);
            let options = Paragraph::new(options_line)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::White)),
                )
                .alignment(Alignment::Center);
            frame.render_widget(options, chunks[1]);

            // Instructions
            let instructions = Paragraph::new("←/→/Tab: Switch • Enter: Confirm • Esc: Cancel")
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

impl Default for ConfirmDialogComponent {
    fn default() -> Self {
        Self::new()
    }
}
