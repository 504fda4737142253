// ABOUTME: Test UI display components including the session list, menu bar and modals

use ratatui::{backend::TestBackend, Terminal};

use tabstash::app::{AppState, Notification};
use tabstash::browser::{HostError, TabHost};
use tabstash::components::LayoutComponent;
use tabstash::config::Config;
use tabstash::models::TabEntry;
use tabstash::session::{MemoryStorage, SessionStore};

struct StubHost;

impl TabHost for StubHost {
    fn current_tabs(&mut self) -> Result<Vec<TabEntry>, HostError> {
        Ok(Vec::new())
    }

    fn open_tab(&mut self, _url: &str, _active: bool) -> Result<(), HostError> {
        Ok(())
    }
}

// Factory function to create an app state backed by in-memory storage
fn create_test_state() -> AppState {
    let store = SessionStore::new(Box::new(MemoryStorage::new()));
    AppState::new(store, Box::new(StubHost), Config::default())
}

fn create_test_state_with_session(name: &str, tab_count: usize) -> AppState {
    let mut state = create_test_state();
    let tabs = (0..tab_count)
        .map(|i| TabEntry::new(format!("Tab {i}"), format!("https://example.com/{i}")))
        .collect();
    state.store.create_session(name, tabs).expect("create session");
    state.selected_session_index = Some(0);
    state
}

// Renders one frame and returns the raw buffer text for containment checks
fn render_to_text(state: &AppState) -> String {
    let backend = TestBackend::new(120, 40);
    let mut terminal = Terminal::new(backend).unwrap();
    let mut layout = LayoutComponent::new();

    terminal
        .draw(|frame| {
            layout.render(frame, state);
        })
        .unwrap();

    let buffer = terminal.backend().buffer();
    buffer.content().iter().map(|cell| cell.symbol()).collect()
}

#[test]
fn test_bottom_menu_bar_lists_core_actions() {
    let state = create_test_state();

    let content = render_to_text(&state);

    assert!(content.contains("[s]ave"), "Should contain '[s]ave'");
    assert!(content.contains("[l]aunch"), "Should contain '[l]aunch'");
    assert!(content.contains("[r]ename"), "Should contain '[r]ename'");
    assert!(content.contains("[m]ove"), "Should contain '[m]ove'");
    assert!(content.contains("[d]elete"), "Should contain '[d]elete'");
    assert!(content.contains("[?]help"), "Should contain '[?]help'");
    assert!(content.contains("[q]uit"), "Should contain '[q]uit'");
}

#[test]
fn test_empty_list_shows_a_hint() {
    let state = create_test_state();

    let content = render_to_text(&state);

    assert!(content.contains("No sessions yet"));
    assert!(content.contains("Press 's' to save the current tabs"));
}

#[test]
fn test_session_card_shows_name_and_tab_count() {
    let state = create_test_state_with_session("Work", 3);

    let content = render_to_text(&state);

    assert!(content.contains("Work"), "Card should show the session name");
    assert!(content.contains("3 tabs"), "Card should show the tab count");
    assert!(content.contains("Sessions (1)"), "List title counts sessions");
}

#[test]
fn test_expanded_session_shows_tab_rows() {
    let mut state = create_test_state_with_session("Work", 2);
    state.toggle_expand_selected();

    let content = render_to_text(&state);

    assert!(content.contains("Tab 0"), "Expanded card lists its tabs");
    assert!(content.contains("Tab 1"));
    assert!(
        content.contains("https://example.com/0"),
        "Tab rows show the URL next to the title"
    );
    assert!(content.contains("└─"), "Last tab row uses the closing tree line");
    assert!(content.contains("[ ]"), "Unchecked tabs show an empty checkbox");
}

#[test]
fn test_checked_tab_shows_a_filled_checkbox_and_a_counter() {
    let mut state = create_test_state_with_session("Work", 2);
    state.toggle_expand_selected();
    state.selected_tab_index = Some(1);
    state.toggle_tab_selection();

    let content = render_to_text(&state);

    assert!(content.contains("[x]"), "Checked tab shows a filled checkbox");
    assert!(content.contains("1 selected"), "Card shows how many tabs are checked");
}

#[test]
fn test_markup_in_a_session_name_renders_as_literal_text() {
    let state = create_test_state_with_session("<script>alert(1)</script>", 1);

    let content = render_to_text(&state);

    assert!(
        content.contains("<script>alert(1)</script>"),
        "Hostile names must render as text, nothing more"
    );
}

#[test]
fn test_control_characters_in_titles_are_stripped() {
    let mut state = create_test_state();
    let tabs = vec![TabEntry::new("Evil\x1b[31mTitle", "https://example.com/a")];
    state.store.create_session("Work", tabs).expect("create session");
    state.selected_session_index = Some(0);
    state.toggle_expand_selected();

    let content = render_to_text(&state);

    assert!(content.contains("Evil[31mTitle"), "Escape bytes are dropped");
    assert!(!content.contains('\x1b'), "No raw escapes may reach the buffer");
}

#[test]
fn test_help_overlay_lists_the_keybindings() {
    let mut state = create_test_state();
    state.help_visible = true;

    let content = render_to_text(&state);

    assert!(content.contains("Navigation:"), "Should contain 'Navigation:' section");
    assert!(content.contains("Session Actions:"), "Should contain 'Session Actions:' section");
    assert!(content.contains("Tab Rows:"), "Should contain 'Tab Rows:' section");
    assert!(content.contains("Save current tabs as a session"));
    assert!(content.contains("Launch all tabs of the session"));
}

#[test]
fn test_save_modal_shows_the_typed_name() {
    let mut state = create_test_state();
    state.open_save_form();
    state.save_form.as_mut().expect("form open").name = "My day".to_string();

    let content = render_to_text(&state);

    assert!(content.contains("Save Session"));
    assert!(content.contains("Session Name"));
    assert!(content.contains("My day"));
}

#[test]
fn test_confirmation_dialog_shows_message_and_options() {
    let mut state = create_test_state_with_session("Work", 1);
    state.show_delete_confirmation();

    let content = render_to_text(&state);

    assert!(content.contains("Delete session 'Work'?"));
    assert!(content.contains("Yes"));
    assert!(content.contains("No"));
}

#[test]
fn test_notification_appears_on_the_status_line() {
    let mut state = create_test_state();
    state.notify(Notification::success("Opened 3 tab(s)"));

    let content = render_to_text(&state);

    assert!(content.contains("✓"), "Success notifications carry their glyph");
    assert!(content.contains("Opened 3 tab(s)"));
}

#[test]
fn test_renaming_replaces_the_card_with_an_input() {
    let mut state = create_test_state_with_session("Work", 1);
    state.start_rename();
    state.rename_state.as_mut().expect("renaming").input = "Deep work".to_string();

    let content = render_to_text(&state);

    assert!(content.contains("Deep work█"), "Rename input shows a block cursor");
}

#[test]
fn test_dragged_card_is_marked() {
    let mut state = create_test_state_with_session("Work", 1);
    state
        .store
        .create_session("Home", vec![TabEntry::new("T", "https://example.com/h")])
        .expect("create session");
    state.selected_session_index = Some(0);
    state.start_drag();

    let content = render_to_text(&state);

    assert!(content.contains("↕"), "The grabbed card carries a drag marker");
}
