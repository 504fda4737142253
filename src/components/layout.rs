// ABOUTME: Main layout component arranging the session list, status line and menu bar
// ABOUTME: Overlays render last so modals always sit on top of the list

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
    style::{Color, Style},
};

use super::{ConfirmDialogComponent, HelpComponent, SaveSessionComponent, SessionListComponent};
use crate::app::{AppState, NotificationKind};

pub struct LayoutComponent {
    session_list: SessionListComponent,
    save_session: SaveSessionComponent,
    confirm_dialog: ConfirmDialogComponent,
    help: HelpComponent,
}

impl LayoutComponent {
    pub fn new() -> Self {
        Self {
            session_list: SessionListComponent::new(),
            save_session: SaveSessionComponent::new(),
            confirm_dialog: ConfirmDialogComponent::new(),
            help: HelpComponent::new(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Session list
                Constraint::Length(1), // Status line
                Constraint::Length(3), // Bottom menu bar
            ])
            .split(frame.size());

        // Render session list
        self.session_list.render(frame, main_chunks[0], state);

        // Render status line with the current notification
        self.render_status_line(frame, main_chunks[1], state);

        // Render bottom menu bar
        self.render_menu_bar(frame, main_chunks[2]);

        // Render help overlay if visible
        if state.help_visible {
            self.help.render(frame, frame.size());
        }

        // Render save session overlay if visible
        if state.save_form.is_some() {
            self.save_session.render(frame, frame.size(), state);
        }

        // Render confirmation dialog if visible (highest priority overlay)
        if state.confirmation_dialog.is_some() {
            self.confirm_dialog.render(frame, frame.size(), state);
        }
    }

    fn render_status_line(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let Some(ref notification) = state.notification else {
            return;
        };

        let color = match notification.kind {
            NotificationKind::Success => Color::Green,
            NotificationKind::Error => Color::Red,
            NotificationKind::Warning => Color::Yellow,
            NotificationKind::Info => Color::Cyan,
        };
        let line = Paragraph::new(format!(
            " {} {}",
            notification.kind.glyph(),
            notification.text
        ))
        .style(Style::default().fg(color));

        frame.render_widget(line, area);
    }

    fn render_menu_bar(&self, frame: &mut Frame, area: Rect) {
        let menu_text = "[s]ave [l]aunch [r]ename [m]ove [d]elete [Space]expand [?]help [q]uit";

        let menu = Paragraph::new(menu_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);

        frame.render_widget(menu, area);
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}
