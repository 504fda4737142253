// ABOUTME: Session data model representing a named group of saved tabs

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::TabEntry;

/// Display format used when the configured one cannot be rendered.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub name: String,
    pub timestamp: DateTime<Utc>,
    pub tabs: Vec<TabEntry>,
}

impl Session {
    pub fn new(name: String, tabs: Vec<TabEntry>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            timestamp: Utc::now(),
            tabs,
        }
    }

    /// Suggested name for a freshly captured session.
    pub fn default_name(format: &str) -> String {
        format!("Session - {}", Local::now().format(usable_format(format)))
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn rename(&mut self, name: String) {
        self.name = name;
    }

    /// Callers decide what to do when the session ends up empty.
    pub fn remove_tab(&mut self, index: usize) -> Option<TabEntry> {
        if index < self.tabs.len() {
            Some(self.tabs.remove(index))
        } else {
            None
        }
    }

    pub fn formatted_timestamp(&self, format: &str) -> String {
        self.timestamp
            .with_timezone(&Local)
            .format(usable_format(format))
            .to_string()
    }
}

/// True when chrono can render every specifier in `format`.
pub fn is_valid_date_format(format: &str) -> bool {
    StrftimeItems::new(format).all(|item| !matches!(item, Item::Error))
}

// chrono's formatter aborts on a bad specifier, which format! turns
// into a panic.
fn usable_format(format: &str) -> &str {
    if is_valid_date_format(format) {
        format
    } else {
        DEFAULT_DATE_FORMAT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with_tabs(count: usize) -> Session {
        let tabs = (0..count)
            .map(|i| TabEntry::new(format!("Tab {i}"), format!("https://example.com/{i}")))
            .collect();
        Session::new("Test Session".to_string(), tabs)
    }

    #[test]
    fn test_new_session_gets_unique_id_and_timestamp() {
        let a = session_with_tabs(1);
        let b = session_with_tabs(1);

        assert_ne!(a.id, b.id);
        assert!(!a.id.is_empty());
        assert_eq!(a.tab_count(), 1);
    }

    #[test]
    fn test_remove_tab_in_bounds() {
        let mut session = session_with_tabs(3);

        let removed = session.remove_tab(1);

        assert_eq!(removed.map(|t| t.title), Some("Tab 1".to_string()));
        assert_eq!(session.tab_count(), 2);
        assert_eq!(session.tabs[0].title, "Tab 0");
        assert_eq!(session.tabs[1].title, "Tab 2");
    }

    #[test]
    fn test_remove_tab_out_of_bounds_is_noop() {
        let mut session = session_with_tabs(2);

        assert!(session.remove_tab(5).is_none());
        assert_eq!(session.tab_count(), 2);
    }

    #[test]
    fn test_rename_replaces_name() {
        let mut session = session_with_tabs(1);

        session.rename("Work".to_string());

        assert_eq!(session.name, "Work");
    }

    #[test]
    fn test_default_name_has_prefix() {
        let name = Session::default_name("%Y-%m-%d %H:%M");
        assert!(name.starts_with("Session - "));
    }

    #[test]
    fn test_default_name_survives_a_bad_format_string() {
        // A trailing % is an unterminated specifier
        let name = Session::default_name("%Y-%m-%d %");

        assert!(name.starts_with("Session - "));
        assert!(name.len() > "Session - ".len(), "The date must still render");
    }

    #[test]
    fn test_formatted_timestamp_survives_a_bad_format_string() {
        let session = session_with_tabs(1);

        assert_eq!(
            session.formatted_timestamp("100%"),
            session.formatted_timestamp(DEFAULT_DATE_FORMAT)
        );
    }

    #[test]
    fn test_date_format_validity_check() {
        assert!(is_valid_date_format("%Y-%m-%d %H:%M"));
        assert!(is_valid_date_format("plain words without specifiers"));
        assert!(!is_valid_date_format("%Y-%m-%d %"));
        assert!(!is_valid_date_format("100%"));
    }

    #[test]
    fn test_round_trips_through_json() {
        let session = session_with_tabs(2);

        let json = serde_json::to_string(&session).unwrap();
        let restored: Session = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, session);
    }
}
