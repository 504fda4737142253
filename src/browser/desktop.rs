// ABOUTME: DesktopHost, the TabHost implementation for a desktop machine
// Snapshots tabs from the clipboard or a file and opens URLs in the default browser

use std::fs;
use std::path::PathBuf;

use arboard::Clipboard;
use tracing::debug;

use super::host::{HostError, TabHost};
use super::snapshot::parse_tab_listing;
use crate::models::TabEntry;

/// Where the "currently open tabs" text comes from. A browser would expose a
/// tab-query API; a desktop host works from text the user exports instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotSource {
    /// System clipboard, read afresh on every snapshot.
    Clipboard,
    /// A file re-read on every snapshot, so edits between saves are seen.
    File(PathBuf),
    /// Fixed text captured once at startup (stdin piping).
    Text(String),
}

pub struct DesktopHost {
    source: SnapshotSource,
}

impl DesktopHost {
    pub fn new(source: SnapshotSource) -> Self {
        Self { source }
    }

    fn snapshot_text(&self) -> Result<String, HostError> {
        match &self.source {
            SnapshotSource::Clipboard => {
                let mut clipboard =
                    Clipboard::new().map_err(|e| HostError::Clipboard(e.to_string()))?;
                clipboard
                    .get_text()
                    .map_err(|e| HostError::Clipboard(e.to_string()))
            }
            SnapshotSource::File(path) => Ok(fs::read_to_string(path)?),
            SnapshotSource::Text(text) => Ok(text.clone()),
        }
    }
}

impl TabHost for DesktopHost {
    fn current_tabs(&mut self) -> Result<Vec<TabEntry>, HostError> {
        let text = self.snapshot_text()?;
        let tabs = parse_tab_listing(&text);
        if tabs.is_empty() {
            return Err(HostError::EmptySnapshot);
        }
        debug!("Snapshot produced {} tab(s)", tabs.len());
        Ok(tabs)
    }

    fn open_tab(&mut self, url: &str, active: bool) -> Result<(), HostError> {
        // The default browser decides its own focus; `active` is advisory
        // for a desktop host.
        debug!("Opening {} (active: {})", url, active);
        open::that_detached(url).map_err(|e| HostError::OpenFailed {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_text_source_snapshots_parsed_tabs() {
        let mut host = DesktopHost::new(SnapshotSource::Text(
            "Docs\nhttps://a.test/docs\nhttps://b.test/".to_string(),
        ));

        let tabs = host.current_tabs().unwrap();

        assert_eq!(tabs.len(), 2);
        assert_eq!(tabs[0].title, "Docs");
    }

    #[test]
    fn test_file_source_rereads_on_each_snapshot() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "https://a.test/").unwrap();
        file.flush().unwrap();
        let mut host = DesktopHost::new(SnapshotSource::File(file.path().to_path_buf()));

        assert_eq!(host.current_tabs().unwrap().len(), 1);

        writeln!(file, "https://b.test/").unwrap();
        file.flush().unwrap();

        assert_eq!(host.current_tabs().unwrap().len(), 2);
    }

    #[test]
    fn test_empty_snapshot_is_an_error() {
        let mut host = DesktopHost::new(SnapshotSource::Text("no links here".to_string()));

        assert!(matches!(
            host.current_tabs(),
            Err(HostError::EmptySnapshot)
        ));
    }

    #[test]
    fn test_missing_file_source_is_io_error() {
        let mut host =
            DesktopHost::new(SnapshotSource::File(PathBuf::from("/no/such/file.txt")));

        assert!(matches!(host.current_tabs(), Err(HostError::Io(_))));
    }
}
