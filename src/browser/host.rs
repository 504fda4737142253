// ABOUTME: TabHost trait, the seam between the session store and the host browser

use thiserror::Error;

use crate::models::TabEntry;

#[derive(Error, Debug)]
pub enum HostError {
    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("No tabs found in the snapshot source")]
    EmptySnapshot,
    #[error("Failed to open {url}: {reason}")]
    OpenFailed { url: String, reason: String },
}

/// Host-browser capability the app consumes: report the currently open tabs
/// and open new ones. Injected so the store and app logic never touch a real
/// browser in tests.
#[cfg_attr(test, mockall::automock)]
pub trait TabHost {
    /// Snapshot of the currently open tabs, in the order the host reports
    /// them. An empty snapshot is an error, not an empty list.
    fn current_tabs(&mut self) -> Result<Vec<TabEntry>, HostError>;

    /// Opens one URL as a new tab. `active` asks the host to focus the new
    /// tab; a desktop host treats it as advisory.
    fn open_tab(&mut self, url: &str, active: bool) -> Result<(), HostError>;
}
