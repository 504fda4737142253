// ABOUTME: SessionStore owning the ordered in-memory session collection
// Keeps the collection synchronized with durable storage after every mutation

use thiserror::Error;
use tracing::{info, warn};

use super::persistence::{Storage, SESSIONS_KEY};
use crate::models::{Session, TabEntry};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("Session name cannot be empty")]
    EmptyName,
    #[error("There are no tabs to save")]
    NoTabs,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabRemoval {
    Removed { remaining: usize },
    SessionDeleted,
    NotFound,
}

pub struct SessionStore {
    sessions: Vec<Session>,
    storage: Box<dyn Storage>,
}

impl SessionStore {
    pub fn new(storage: Box<dyn Storage>) -> Self {
        Self {
            sessions: Vec::new(),
            storage,
        }
    }

    /// Any read or parse failure falls back to an empty collection.
    pub fn load(&mut self) {
        self.sessions = match self.storage.get(SESSIONS_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(sessions) => sessions,
                Err(e) => {
                    warn!("Failed to parse saved sessions, starting empty: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to read saved sessions, starting empty: {}", e);
                Vec::new()
            }
        };
        info!("Loaded {} saved session(s)", self.sessions.len());
    }

    /// Persistence failures are logged; the in-memory collection stands.
    pub fn save(&mut self) {
        let serialized = match serde_json::to_string_pretty(&self.sessions) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize sessions, skipping save: {}", e);
                return;
            }
        };
        if let Err(e) = self.storage.set(SESSIONS_KEY, serialized) {
            warn!("Failed to persist sessions: {}", e);
        }
    }

    /// Front-inserts a new session; blank names and empty snapshots are rejected.
    pub fn create_session(
        &mut self,
        name: &str,
        tabs: Vec<TabEntry>,
    ) -> Result<Session, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyName);
        }
        if tabs.is_empty() {
            return Err(StoreError::NoTabs);
        }

        let session = Session::new(name.to_string(), tabs);
        info!(
            "Created session '{}' with {} tab(s)",
            session.name,
            session.tab_count()
        );
        self.sessions.insert(0, session.clone());
        self.save();
        Ok(session)
    }

    pub fn delete_session(&mut self, id: &str) -> bool {
        let before = self.sessions.len();
        self.sessions.retain(|s| s.id != id);
        let deleted = self.sessions.len() != before;
        if deleted {
            info!("Deleted session {}", id);
            self.save();
        }
        deleted
    }

    pub fn rename_session(&mut self, id: &str, new_name: &str) -> bool {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return false;
        }
        let Some(session) = self.sessions.iter_mut().find(|s| s.id == id) else {
            return false;
        };
        session.rename(new_name.to_string());
        self.save();
        true
    }

    /// Removing the last tab deletes the session; zero-tab sessions never persist.
    pub fn remove_tab(&mut self, session_id: &str, tab_index: usize) -> TabRemoval {
        let Some(pos) = self.sessions.iter().position(|s| s.id == session_id) else {
            return TabRemoval::NotFound;
        };
        if self.sessions[pos].remove_tab(tab_index).is_none() {
            return TabRemoval::NotFound;
        }

        let outcome = if self.sessions[pos].tabs.is_empty() {
            let deleted = self.sessions.remove(pos);
            info!(
                "Removed last tab of session '{}', deleting it",
                deleted.name
            );
            TabRemoval::SessionDeleted
        } else {
            TabRemoval::Removed {
                remaining: self.sessions[pos].tab_count(),
            }
        };
        self.save();
        outcome
    }

    /// A permutation, never a filter: unknown ids are ignored, duplicates count once.
    pub fn reorder(&mut self, new_ordered_ids: &[String]) {
        let mut reordered = Vec::with_capacity(self.sessions.len());
        for id in new_ordered_ids {
            if let Some(pos) = self.sessions.iter().position(|s| s.id == *id) {
                reordered.push(self.sessions.remove(pos));
            }
        }
        // Whatever the supplied order omitted keeps its prior relative order
        // at the back.
        reordered.append(&mut self.sessions);
        self.sessions = reordered;
        self.save();
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn get(&self, id: &str) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.sessions.iter().position(|s| s.id == id)
    }

    pub fn ordered_ids(&self) -> Vec<String> {
        self.sessions.iter().map(|s| s.id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
