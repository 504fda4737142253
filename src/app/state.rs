// ABOUTME: Application state management and interaction flows
// Owns the session store, the tab host, and all transient view-state

use std::collections::{BTreeSet, HashMap, HashSet};

use tracing::{info, warn};

use crate::browser::{launch_all, launch_selected, open_single, TabHost};
use crate::config::Config;
use crate::models::{Session, TabEntry};
use crate::session::{SessionStore, TabRemoval};

use super::notification::Notification;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragState {
    pub session_id: String,
    pub order: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct SaveFormState {
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct RenameState {
    pub session_id: String,
    pub input: String,
}

#[derive(Debug, Clone)]
pub struct ConfirmationDialog {
    pub message: String,
    pub confirm_action: ConfirmAction,
    /// true selects Yes. Dialogs start on No.
    pub selected_option: bool,
}

#[derive(Debug, Clone)]
pub enum ConfirmAction {
    DeleteSession(String),
}

#[derive(Debug, Clone)]
pub enum AsyncAction {
    CreateSession { name: String },
    LaunchAll { session_id: String },
    LaunchSelected { session_id: String, indices: Vec<usize> },
    OpenSingleTab { url: String },
}

pub struct AppState {
    pub store: SessionStore,
    pub host: Box<dyn TabHost>,
    pub config: Config,
    pub selected_session_index: Option<usize>,
    pub selected_tab_index: Option<usize>,
    pub expanded_sessions: HashSet<String>,
    /// Ephemeral checkbox state per session id, cleared when the list rebuilds.
    pub tab_selections: HashMap<String, BTreeSet<usize>>,
    pub drag_state: Option<DragState>,
    pub save_form: Option<SaveFormState>,
    pub rename_state: Option<RenameState>,
    pub confirmation_dialog: Option<ConfirmationDialog>,
    pub notification: Option<Notification>,
    pub help_visible: bool,
    pub should_quit: bool,
    pub pending_async_action: Option<AsyncAction>,
    pub ui_needs_refresh: bool,
}

impl AppState {
    pub fn new(store: SessionStore, host: Box<dyn TabHost>, config: Config) -> Self {
        Self {
            store,
            host,
            config,
            selected_session_index: None,
            selected_tab_index: None,
            expanded_sessions: HashSet::new(),
            tab_selections: HashMap::new(),
            drag_state: None,
            save_form: None,
            rename_state: None,
            confirmation_dialog: None,
            notification: None,
            help_visible: false,
            should_quit: false,
            pending_async_action: None,
            ui_needs_refresh: false,
        }
    }

    /// Ids in render order; an active drag substitutes its working order.
    pub fn display_order(&self) -> Vec<String> {
        match &self.drag_state {
            Some(drag) => drag.order.clone(),
            None => self.store.ordered_ids(),
        }
    }

    pub fn session_at(&self, display_index: usize) -> Option<&Session> {
        let order = self.display_order();
        let id = order.get(display_index)?;
        self.store.get(id)
    }

    pub fn selected_session(&self) -> Option<&Session> {
        self.session_at(self.selected_session_index?)
    }

    pub fn selected_tab(&self) -> Option<&TabEntry> {
        let session = self.selected_session()?;
        session.tabs.get(self.selected_tab_index?)
    }

    pub fn cursor_on_tab_row(&self) -> bool {
        self.selected_tab_index.is_some()
    }

    pub fn is_expanded(&self, session_id: &str) -> bool {
        self.expanded_sessions.contains(session_id)
    }

    pub fn selected_tab_count(&self, session_id: &str) -> usize {
        self.tab_selections
            .get(session_id)
            .map_or(0, BTreeSet::len)
    }

    pub fn is_tab_selected(&self, session_id: &str, tab_index: usize) -> bool {
        self.tab_selections
            .get(session_id)
            .is_some_and(|set| set.contains(&tab_index))
    }

    // --- cursor movement over the flattened list -------------------------

    pub fn next_row(&mut self) {
        let count = self.store.len();
        if count == 0 {
            return;
        }
        match (self.selected_session_index, self.selected_tab_index) {
            (None, _) => {
                self.selected_session_index = Some(0);
                self.selected_tab_index = None;
            }
            (Some(s), None) => {
                let enters_tabs = self
                    .session_at(s)
                    .map(|session| {
                        self.expanded_sessions.contains(&session.id) && !session.tabs.is_empty()
                    })
                    .unwrap_or(false);
                if enters_tabs {
                    self.selected_tab_index = Some(0);
                } else {
                    self.selected_session_index = Some((s + 1) % count);
                }
            }
            (Some(s), Some(t)) => {
                let tab_count = self.session_at(s).map_or(0, Session::tab_count);
                if t + 1 < tab_count {
                    self.selected_tab_index = Some(t + 1);
                } else {
                    self.selected_session_index = Some((s + 1) % count);
                    self.selected_tab_index = None;
                }
            }
        }
    }

    pub fn previous_row(&mut self) {
        let count = self.store.len();
        if count == 0 {
            return;
        }
        match (self.selected_session_index, self.selected_tab_index) {
            (None, _) => {
                self.selected_session_index = Some(count - 1);
                self.selected_tab_index = self.last_visible_tab(count - 1);
            }
            (Some(_), Some(t)) => {
                self.selected_tab_index = if t == 0 { None } else { Some(t - 1) };
            }
            (Some(s), None) => {
                let prev = if s == 0 { count - 1 } else { s - 1 };
                self.selected_session_index = Some(prev);
                self.selected_tab_index = self.last_visible_tab(prev);
            }
        }
    }

    pub fn go_to_top(&mut self) {
        if !self.store.is_empty() {
            self.selected_session_index = Some(0);
            self.selected_tab_index = None;
        }
    }

    pub fn go_to_bottom(&mut self) {
        let count = self.store.len();
        if count > 0 {
            self.selected_session_index = Some(count - 1);
            self.selected_tab_index = self.last_visible_tab(count - 1);
        }
    }

    fn last_visible_tab(&self, display_index: usize) -> Option<usize> {
        let session = self.session_at(display_index)?;
        if self.expanded_sessions.contains(&session.id) && !session.tabs.is_empty() {
            Some(session.tabs.len() - 1)
        } else {
            None
        }
    }

    fn clamp_cursor(&mut self) {
        let count = self.store.len();
        if count == 0 {
            self.selected_session_index = None;
            self.selected_tab_index = None;
            return;
        }
        match self.selected_session_index {
            None => {
                self.selected_session_index = Some(0);
                self.selected_tab_index = None;
            }
            Some(s) if s >= count => {
                self.selected_session_index = Some(count - 1);
                self.selected_tab_index = None;
            }
            Some(s) => {
                if let Some(t) = self.selected_tab_index {
                    match self.last_visible_tab(s) {
                        Some(last) if t <= last => {}
                        Some(last) => self.selected_tab_index = Some(last),
                        None => self.selected_tab_index = None,
                    }
                }
            }
        }
    }

    fn prune_view_state(&mut self) {
        let live: HashSet<String> = self.store.ordered_ids().into_iter().collect();
        self.expanded_sessions.retain(|id| live.contains(id));
        self.tab_selections.retain(|id, _| live.contains(id));
    }

    fn clear_tab_selections(&mut self) {
        self.tab_selections.clear();
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    // --- save form -------------------------------------------------------

    pub fn open_save_form(&mut self) {
        self.save_form = Some(SaveFormState {
            name: Session::default_name(&self.config.date_format),
        });
    }

    pub fn cancel_save_form(&mut self) {
        self.save_form = None;
    }

    pub fn save_form_input(&mut self, ch: char) {
        if let Some(form) = &mut self.save_form {
            form.name.push(ch);
        }
    }

    pub fn save_form_backspace(&mut self) {
        if let Some(form) = &mut self.save_form {
            form.name.pop();
        }
    }

    /// The form stays open until the session actually exists.
    pub fn submit_save_form(&mut self) {
        let Some(form) = &self.save_form else {
            return;
        };
        if form.name.trim().is_empty() {
            self.notify(Notification::error("Please enter a session name"));
            return;
        }
        let name = form.name.clone();
        self.pending_async_action = Some(AsyncAction::CreateSession { name });
    }

    // --- inline rename ---------------------------------------------------

    pub fn start_rename(&mut self) {
        if self.cursor_on_tab_row() {
            return;
        }
        let Some(session) = self.selected_session() else {
            return;
        };
        self.rename_state = Some(RenameState {
            session_id: session.id.clone(),
            input: session.name.clone(),
        });
    }

    pub fn cancel_rename(&mut self) {
        self.rename_state = None;
    }

    pub fn rename_input(&mut self, ch: char) {
        if let Some(rename) = &mut self.rename_state {
            rename.input.push(ch);
        }
    }

    pub fn rename_backspace(&mut self) {
        if let Some(rename) = &mut self.rename_state {
            rename.input.pop();
        }
    }

    pub fn commit_rename(&mut self) {
        let Some(rename) = self.rename_state.take() else {
            return;
        };
        if rename.input.trim().is_empty() {
            return;
        }
        if self.store.rename_session(&rename.session_id, &rename.input) {
            self.clear_tab_selections();
        }
    }

    // --- expansion and checkbox selection --------------------------------

    pub fn toggle_expand_selected(&mut self) {
        if self.cursor_on_tab_row() {
            return;
        }
        let Some(session) = self.selected_session() else {
            return;
        };
        let id = session.id.clone();
        if !self.expanded_sessions.remove(&id) {
            self.expanded_sessions.insert(id);
        }
    }

    pub fn toggle_tab_selection(&mut self) {
        let Some(t) = self.selected_tab_index else {
            return;
        };
        let Some(session) = self.selected_session() else {
            return;
        };
        let id = session.id.clone();
        let set = self.tab_selections.entry(id.clone()).or_default();
        if !set.remove(&t) {
            set.insert(t);
        }
        if set.is_empty() {
            self.tab_selections.remove(&id);
        }
    }

    // --- delete and tab removal ------------------------------------------

    pub fn show_delete_confirmation(&mut self) {
        if self.cursor_on_tab_row() {
            return;
        }
        let Some(session) = self.selected_session() else {
            return;
        };
        self.confirmation_dialog = Some(ConfirmationDialog {
            message: format!("Delete session '{}'?", session.name),
            confirm_action: ConfirmAction::DeleteSession(session.id.clone()),
            selected_option: false,
        });
    }

    pub fn delete_session_confirmed(&mut self, session_id: &str) {
        if self.store.delete_session(session_id) {
            self.prune_view_state();
            self.clear_tab_selections();
            self.clamp_cursor();
        }
    }

    pub fn remove_selected_tab(&mut self) {
        let Some(t) = self.selected_tab_index else {
            return;
        };
        let Some(session) = self.selected_session() else {
            return;
        };
        let id = session.id.clone();
        match self.store.remove_tab(&id, t) {
            TabRemoval::SessionDeleted => {
                self.prune_view_state();
                self.clear_tab_selections();
                self.selected_tab_index = None;
                self.clamp_cursor();
            }
            TabRemoval::Removed { remaining } => {
                self.clear_tab_selections();
                if t >= remaining {
                    self.selected_tab_index = Some(remaining - 1);
                }
            }
            TabRemoval::NotFound => {}
        }
    }

    // --- drag reorder ----------------------------------------------------

    pub fn start_drag(&mut self) {
        // Only one drag at a time; a grab while dragging is ignored.
        if self.drag_state.is_some() || self.cursor_on_tab_row() {
            return;
        }
        let Some(session) = self.selected_session() else {
            return;
        };
        self.drag_state = Some(DragState {
            session_id: session.id.clone(),
            order: self.store.ordered_ids(),
        });
    }

    pub fn drag_move_up(&mut self) {
        let Some(drag) = &mut self.drag_state else {
            return;
        };
        let Some(pos) = drag.order.iter().position(|id| *id == drag.session_id) else {
            return;
        };
        if pos > 0 {
            drag.order.swap(pos, pos - 1);
            self.selected_session_index = Some(pos - 1);
        }
    }

    pub fn drag_move_down(&mut self) {
        let Some(drag) = &mut self.drag_state else {
            return;
        };
        let Some(pos) = drag.order.iter().position(|id| *id == drag.session_id) else {
            return;
        };
        if pos + 1 < drag.order.len() {
            drag.order.swap(pos, pos + 1);
            self.selected_session_index = Some(pos + 1);
        }
    }

    pub fn drop_drag(&mut self) {
        let Some(drag) = self.drag_state.take() else {
            return;
        };
        self.store.reorder(&drag.order);
        if let Some(pos) = self.store.position(&drag.session_id) {
            self.selected_session_index = Some(pos);
        }
    }

    pub fn cancel_drag(&mut self) {
        let Some(drag) = self.drag_state.take() else {
            return;
        };
        if let Some(pos) = self.store.position(&drag.session_id) {
            self.selected_session_index = Some(pos);
        }
    }

    // --- launches --------------------------------------------------------

    pub fn queue_launch_all(&mut self) {
        if self.cursor_on_tab_row() {
            return;
        }
        let Some(session) = self.selected_session() else {
            return;
        };
        self.pending_async_action = Some(AsyncAction::LaunchAll {
            session_id: session.id.clone(),
        });
    }

    pub fn queue_launch_selected(&mut self) {
        let Some(session) = self.selected_session() else {
            return;
        };
        let session_id = session.id.clone();
        let indices: Vec<usize> = self
            .tab_selections
            .get(&session_id)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default();
        if indices.is_empty() {
            self.notify(Notification::info("No tabs selected"));
            return;
        }
        self.pending_async_action = Some(AsyncAction::LaunchSelected {
            session_id,
            indices,
        });
    }

    pub fn queue_open_selected_tab(&mut self) {
        let Some(tab) = self.selected_tab() else {
            return;
        };
        self.pending_async_action = Some(AsyncAction::OpenSingleTab {
            url: tab.url.clone(),
        });
    }

    // --- async action processing -----------------------------------------

    pub async fn process_async_action(&mut self) -> anyhow::Result<()> {
        if let Some(action) = self.pending_async_action.take() {
            match action {
                AsyncAction::CreateSession { name } => {
                    self.create_session_from_snapshot(&name).await;
                }
                AsyncAction::LaunchAll { session_id } => {
                    self.launch_session(&session_id, None).await;
                }
                AsyncAction::LaunchSelected {
                    session_id,
                    indices,
                } => {
                    self.launch_session(&session_id, Some(indices)).await;
                }
                AsyncAction::OpenSingleTab { url } => {
                    self.open_single_tab(&url).await;
                }
            }
            self.ui_needs_refresh = true;
        }
        Ok(())
    }

    async fn create_session_from_snapshot(&mut self, name: &str) {
        let tabs = match self.host.current_tabs() {
            Ok(tabs) => tabs,
            Err(e) => {
                warn!("Tab snapshot failed: {}", e);
                self.notify(Notification::error(format!("Could not read tabs: {e}")));
                return;
            }
        };
        match self.store.create_session(name, tabs) {
            Ok(session) => {
                self.save_form = None;
                self.clear_tab_selections();
                // The new session lands at the front.
                self.selected_session_index = Some(0);
                self.selected_tab_index = None;
                self.notify(Notification::success(format!(
                    "Saved {} tab(s) as '{}'",
                    session.tab_count(),
                    session.name
                )));
            }
            Err(e) => {
                self.notify(Notification::error(e.to_string()));
            }
        }
    }

    async fn launch_session(&mut self, session_id: &str, indices: Option<Vec<usize>>) {
        let Some(session) = self.store.get(session_id) else {
            self.notify(Notification::error("Session no longer exists"));
            return;
        };
        let session = session.clone();
        let report = match indices {
            Some(indices) => launch_selected(self.host.as_mut(), &session, &indices),
            None => launch_all(self.host.as_mut(), &session),
        };
        info!(
            "Launched '{}': {} opened, {} failed",
            session.name, report.opened, report.failed
        );
        if report.fully_succeeded() {
            self.notify(Notification::success(report.summary()));
            // A clean launch ends the interaction.
            if self.config.quit_after_launch {
                self.should_quit = true;
            }
        } else if report.any_opened() {
            self.notify(Notification::warning(report.summary()));
        } else {
            self.notify(Notification::error("Failed to open any tabs"));
        }
    }

    async fn open_single_tab(&mut self, url: &str) {
        if let Err(e) = open_single(self.host.as_mut(), url) {
            warn!("Failed to open {}: {}", url, e);
            self.notify(Notification::error(format!("Could not open tab: {e}")));
        }
    }

    pub fn expire_notification(&mut self) {
        let expired = self
            .notification
            .as_ref()
            .is_some_and(Notification::is_expired);
        if expired {
            self.notification = None;
            self.ui_needs_refresh = true;
        }
    }
}

pub struct App {
    pub state: AppState,
}

impl App {
    pub fn new(store: SessionStore, host: Box<dyn TabHost>, config: Config) -> Self {
        Self {
            state: AppState::new(store, host, config),
        }
    }

    pub async fn init(&mut self) {
        self.state.store.load();
        if !self.state.store.is_empty() {
            self.state.selected_session_index = Some(0);
        }
    }

    pub async fn tick(&mut self) -> anyhow::Result<()> {
        if let Err(e) = self.state.process_async_action().await {
            warn!("Error processing async action: {}", e);
            self.state.pending_async_action = None;
        }
        self.state.expire_notification();
        Ok(())
    }

    /// True once after a tick changed something the last draw predates.
    pub fn needs_ui_refresh(&mut self) -> bool {
        std::mem::take(&mut self.state.ui_needs_refresh)
    }
}
