// ABOUTME: Event handling system for keyboard input and app actions

use crate::app::AppState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone)]
pub enum AppEvent {
    Quit,
    ToggleHelp,
    NextRow,
    PreviousRow,
    GoToTop,
    GoToBottom,
    ToggleExpand,
    ToggleTabSelection,
    LaunchAll,
    LaunchSelected,
    OpenTab,
    DeleteSession,
    RemoveTab,
    StartRename,
    StartDrag,
    // Save form events
    SaveFormOpen,
    SaveFormInputChar(char),
    SaveFormBackspace,
    SaveFormSubmit,
    SaveFormCancel,
    // Inline rename events
    RenameInputChar(char),
    RenameBackspace,
    RenameCommit,
    RenameCancel,
    // Drag events
    DragMoveUp,
    DragMoveDown,
    DropDrag,
    CancelDrag,
    // Confirmation dialog events
    ConfirmationToggle,
    ConfirmationConfirm,
    ConfirmationCancel,
}

pub struct EventHandler;

impl EventHandler {
    pub fn handle_key_event(key_event: KeyEvent, state: &mut AppState) -> Option<AppEvent> {
        // Ctrl+C always quits, even from inside a modal.
        if key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL)
        {
            return Some(AppEvent::Quit);
        }

        // Handle confirmation dialog first (highest priority)
        if state.confirmation_dialog.is_some() {
            return match key_event.code {
                KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
                    Some(AppEvent::ConfirmationToggle)
                }
                KeyCode::Enter => Some(AppEvent::ConfirmationConfirm),
                KeyCode::Esc => Some(AppEvent::ConfirmationCancel),
                _ => None,
            };
        }

        // Text inputs capture their keys before anything global, so names
        // can contain characters like '?' without side effects.
        if state.save_form.is_some() {
            return Self::handle_save_form_keys(key_event);
        }
        if state.rename_state.is_some() {
            return Self::handle_rename_keys(key_event);
        }

        if state.help_visible {
            return match key_event.code {
                KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => {
                    Some(AppEvent::ToggleHelp)
                }
                _ => None,
            };
        }

        // Global help toggle (works from the list and during a drag)
        if let KeyCode::Char('?') = key_event.code {
            return Some(AppEvent::ToggleHelp);
        }

        if state.drag_state.is_some() {
            return Self::handle_drag_keys(key_event);
        }

        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(AppEvent::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(AppEvent::NextRow),
            KeyCode::Char('k') | KeyCode::Up => Some(AppEvent::PreviousRow),
            KeyCode::Char('g') => Some(AppEvent::GoToTop),
            KeyCode::Char('G') => Some(AppEvent::GoToBottom),
            KeyCode::Char('s') => Some(AppEvent::SaveFormOpen),
            KeyCode::Char('l') => Some(AppEvent::LaunchAll),
            KeyCode::Char('L') => Some(AppEvent::LaunchSelected),
            KeyCode::Char('r') => Some(AppEvent::StartRename),
            KeyCode::Char('m') => Some(AppEvent::StartDrag),
            // Keys whose meaning depends on the row under the cursor
            KeyCode::Enter => {
                if state.cursor_on_tab_row() {
                    Some(AppEvent::OpenTab)
                } else {
                    Some(AppEvent::LaunchAll)
                }
            }
            KeyCode::Char(' ') => {
                if state.cursor_on_tab_row() {
                    Some(AppEvent::ToggleTabSelection)
                } else {
                    Some(AppEvent::ToggleExpand)
                }
            }
            KeyCode::Char('d') => {
                if state.cursor_on_tab_row() {
                    Some(AppEvent::RemoveTab)
                } else {
                    Some(AppEvent::DeleteSession)
                }
            }
            _ => None,
        }
    }

    fn handle_save_form_keys(key_event: KeyEvent) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Esc => Some(AppEvent::SaveFormCancel),
            KeyCode::Enter => Some(AppEvent::SaveFormSubmit),
            KeyCode::Backspace => Some(AppEvent::SaveFormBackspace),
            KeyCode::Char(ch) if !key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(AppEvent::SaveFormInputChar(ch))
            }
            _ => None,
        }
    }

    fn handle_rename_keys(key_event: KeyEvent) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Esc => Some(AppEvent::RenameCancel),
            KeyCode::Enter => Some(AppEvent::RenameCommit),
            KeyCode::Backspace => Some(AppEvent::RenameBackspace),
            KeyCode::Char(ch) if !key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(AppEvent::RenameInputChar(ch))
            }
            _ => None,
        }
    }

    fn handle_drag_keys(key_event: KeyEvent) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => Some(AppEvent::DragMoveDown),
            KeyCode::Char('k') | KeyCode::Up => Some(AppEvent::DragMoveUp),
            KeyCode::Char('m') | KeyCode::Enter => Some(AppEvent::DropDrag),
            KeyCode::Esc => Some(AppEvent::CancelDrag),
            _ => None,
        }
    }

    pub fn process_event(event: AppEvent, state: &mut AppState) {
        match event {
            AppEvent::Quit => state.quit(),
            AppEvent::ToggleHelp => state.toggle_help(),
            AppEvent::NextRow => state.next_row(),
            AppEvent::PreviousRow => state.previous_row(),
            AppEvent::GoToTop => state.go_to_top(),
            AppEvent::GoToBottom => state.go_to_bottom(),
            AppEvent::ToggleExpand => state.toggle_expand_selected(),
            AppEvent::ToggleTabSelection => state.toggle_tab_selection(),
            AppEvent::LaunchAll => state.queue_launch_all(),
            AppEvent::LaunchSelected => state.queue_launch_selected(),
            AppEvent::OpenTab => state.queue_open_selected_tab(),
            AppEvent::DeleteSession => state.show_delete_confirmation(),
            AppEvent::RemoveTab => state.remove_selected_tab(),
            AppEvent::StartRename => state.start_rename(),
            AppEvent::StartDrag => state.start_drag(),
            AppEvent::SaveFormOpen => state.open_save_form(),
            AppEvent::SaveFormInputChar(ch) => state.save_form_input(ch),
            AppEvent::SaveFormBackspace => state.save_form_backspace(),
            AppEvent::SaveFormSubmit => state.submit_save_form(),
            AppEvent::SaveFormCancel => state.cancel_save_form(),
            AppEvent::RenameInputChar(ch) => state.rename_input(ch),
            AppEvent::RenameBackspace => state.rename_backspace(),
            AppEvent::RenameCommit => state.commit_rename(),
            AppEvent::RenameCancel => state.cancel_rename(),
            AppEvent::DragMoveUp => state.drag_move_up(),
            AppEvent::DragMoveDown => state.drag_move_down(),
            AppEvent::DropDrag => state.drop_drag(),
            AppEvent::CancelDrag => state.cancel_drag(),
            AppEvent::ConfirmationToggle => {
                if let Some(dialog) = &mut state.confirmation_dialog {
                    dialog.selected_option = !dialog.selected_option;
                }
            }
            AppEvent::ConfirmationConfirm => {
                if let Some(dialog) = state.confirmation_dialog.take() {
                    if dialog.selected_option {
                        match dialog.confirm_action {
                            crate::app::state::ConfirmAction::DeleteSession(session_id) => {
                                state.delete_session_confirmed(&session_id);
                            }
                        }
                    }
                    // Declining just closes the dialog; nothing is touched.
                }
            }
            AppEvent::ConfirmationCancel => {
                state.confirmation_dialog = None;
            }
        }
    }
}
