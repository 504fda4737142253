// ABOUTME: Session list component for displaying saved sessions in hierarchical view
// ABOUTME: Expanded sessions show their tab rows with selection checkboxes

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use super::text::sanitize;
use crate::app::AppState;
use crate::models::Session;

pub struct SessionListComponent {
    list_state: ListState,
}

impl Default for SessionListComponent {
    fn default() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self { list_state }
    }
}

impl SessionListComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        // Update list state selection based on app state first
        self.update_selection(state);

        let items = SessionListComponent::build_list_items_static(state);

        let title = format!("Sessions ({})", state.store.len());
        let list = List::new(items)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title_style(Style::default().fg(Color::Yellow)),
            )
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
            .highlight_symbol("▶ ");

        frame.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn build_list_items_static(state: &AppState) -> Vec<ListItem> {
        let mut items = Vec::new();
        let order = state.display_order();

        for (position, session_id) in order.iter().enumerate() {
            let Some(session) = state.store.get(session_id) else {
                continue;
            };
            let is_selected_session = state.selected_session_index == Some(position)
                && state.selected_tab_index.is_none();
            let is_expanded = state.is_expanded(session_id);

            items.push(Self::session_card(state, session, is_selected_session, is_expanded));

            if is_expanded {
                let tab_len = session.tab_count();
                for (tab_idx, tab) in session.tabs.iter().enumerate() {
                    let is_selected_tab = state.selected_session_index == Some(position)
                        && state.selected_tab_index == Some(tab_idx);
                    let is_last_tab = tab_idx == tab_len - 1;

                    // Use tree line characters
                    let tree_prefix = if is_last_tab { "└─" } else { "├─" };

                    let is_checked = state.is_tab_selected(session_id, tab_idx);
                    let checkbox = if is_checked { "[x]" } else { "[ ]" };

                    let tab_style = if is_selected_tab {
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
                    } else if is_checked {
                        Style::default().fg(Color::Cyan)
                    } else {
                        Style::default().fg(Color::Gray)
                    };

                    // Untitled tabs already display their URL as the title
                    let label = if tab.title.trim().is_empty() {
                        sanitize(tab.display_title())
                    } else {
                        format!("{} · {}", sanitize(&tab.title), sanitize(&tab.url))
                    };
                    items.push(
                        ListItem::new(format!(
                            "  {} {} {} {}",
                            tree_prefix,
                            checkbox,
                            tab.favicon_glyph(),
                            label,
                        ))
                        .style(tab_style),
                    );
                }
            }
        }

        if items.is_empty() {
            items.push(ListItem::new("No sessions yet").style(Style::default().fg(Color::Gray)));
            items.push(
                ListItem::new("Press 's' to save the current tabs")
                    .style(Style::default().fg(Color::Gray)),
            );
        }

        items
    }

    fn session_card(
        state: &AppState,
        session: &Session,
        is_selected: bool,
        is_expanded: bool,
    ) -> ListItem<'static> {
        let expand_symbol = if is_expanded { "▼" } else { "▶" };

        // While renaming, the card becomes an inline text input
        let renaming = state
            .rename_state
            .as_ref()
            .filter(|rename| rename.session_id == session.id);
        if let Some(rename) = renaming {
            return ListItem::new(format!("{} {}█", expand_symbol, sanitize(&rename.input)))
                .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD));
        }

        let tab_word = if session.tab_count() == 1 { "tab" } else { "tabs" };
        let mut text = format!(
            "{} {} · {} {} · {}",
            expand_symbol,
            sanitize(&session.name),
            session.tab_count(),
            tab_word,
            session.formatted_timestamp(&state.config.date_format),
        );

        let selected_tabs = state.selected_tab_count(&session.id);
        if selected_tabs > 0 {
            text.push_str(&format!(" · {selected_tabs} selected"));
        }

        let is_dragging = state
            .drag_state
            .as_ref()
            .is_some_and(|drag| drag.session_id == session.id);
        if is_dragging {
            return ListItem::new(format!("↕ {text}"))
                .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
        }

        let card_style = if is_selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        ListItem::new(text).style(card_style)
    }

    fn update_selection(&mut self, state: &AppState) {
        if let Some(session_idx) = state.selected_session_index {
            let order = state.display_order();
            let mut current_index = 0;

            for (idx, session_id) in order.iter().enumerate() {
                if idx == session_idx {
                    // Add tab offset if a tab row is selected
                    if let Some(tab_idx) = state.selected_tab_index {
                        current_index += tab_idx + 1;
                    }
                    break;
                }
                current_index += 1;
                if state.is_expanded(session_id) {
                    if let Some(session) = state.store.get(session_id) {
                        current_index += session.tab_count();
                    }
                }
            }

            self.list_state.select(Some(current_index));
        } else {
            self.list_state.select(None);
        }
    }
}
