// ABOUTME: Best-effort tab relaunch over a TabHost
// Opens tabs one by one; per-item failures are recorded, never rolled back

use tracing::warn;

use super::host::{HostError, TabHost};
use crate::models::Session;

/// Tally of one launch run. Already-opened tabs stay open on failure; this is
/// a fire sequence, not a transaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LaunchReport {
    pub opened: usize,
    pub failed: usize,
}

impl LaunchReport {
    pub fn any_opened(&self) -> bool {
        self.opened > 0
    }

    pub fn fully_succeeded(&self) -> bool {
        self.opened > 0 && self.failed == 0
    }

    pub fn summary(&self) -> String {
        if self.failed == 0 {
            format!("Opened {} tab(s)", self.opened)
        } else {
            format!(
                "Opened {} tab(s), {} failed to open",
                self.opened, self.failed
            )
        }
    }
}

/// Opens every tab of the session in original order, each as a non-focused
/// new tab.
pub fn launch_all(host: &mut dyn TabHost, session: &Session) -> LaunchReport {
    let all: Vec<usize> = (0..session.tabs.len()).collect();
    launch_selected(host, session, &all)
}

/// Opens the given index subset in the given order; indices outside bounds
/// are silently skipped.
pub fn launch_selected(
    host: &mut dyn TabHost,
    session: &Session,
    indices: &[usize],
) -> LaunchReport {
    let mut report = LaunchReport::default();
    for &index in indices {
        let Some(tab) = session.tabs.get(index) else {
            continue;
        };
        match host.open_tab(&tab.url, false) {
            Ok(()) => report.opened += 1,
            Err(e) => {
                warn!("Failed to open {}: {}", tab.url, e);
                report.failed += 1;
            }
        }
    }
    report
}

/// Opens one tab, focused. Unlike a session launch this does not end the
/// interaction, so the caller keeps the UI up.
pub fn open_single(host: &mut dyn TabHost, url: &str) -> Result<(), HostError> {
    host.open_tab(url, true)
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use mockall::Sequence;

    use super::super::host::MockTabHost;
    use super::*;
    use crate::models::TabEntry;

    fn session_with_urls(urls: &[&str]) -> Session {
        let tabs = urls.iter().map(|u| TabEntry::new("", *u)).collect();
        Session::new("Launch Me".to_string(), tabs)
    }

    #[test]
    fn test_launch_all_opens_every_tab_in_order() {
        let session = session_with_urls(&["https://a.test/", "https://b.test/", "https://c.test/"]);
        let mut host = MockTabHost::new();
        let mut seq = Sequence::new();
        for url in ["https://a.test/", "https://b.test/", "https://c.test/"] {
            host.expect_open_tab()
                .with(eq(url), eq(false))
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_, _| Ok(()));
        }

        let report = launch_all(&mut host, &session);

        assert_eq!(report, LaunchReport { opened: 3, failed: 0 });
        assert!(report.fully_succeeded());
    }

    #[test]
    fn test_launch_continues_past_per_item_failure() {
        let session = session_with_urls(&["https://a.test/", "https://b.test/", "https://c.test/"]);
        let mut host = MockTabHost::new();
        host.expect_open_tab()
            .times(3)
            .returning(|url, _| {
                if url == "https://b.test/" {
                    Err(HostError::OpenFailed {
                        url: url.to_string(),
                        reason: "browser missing".to_string(),
                    })
                } else {
                    Ok(())
                }
            });

        let report = launch_all(&mut host, &session);

        assert_eq!(report, LaunchReport { opened: 2, failed: 1 });
        assert!(report.any_opened());
        assert!(!report.fully_succeeded());
        assert_eq!(report.summary(), "Opened 2 tab(s), 1 failed to open");
    }

    #[test]
    fn test_launch_selected_respects_subset_order_and_skips_out_of_bounds() {
        let session = session_with_urls(&["https://a.test/", "https://b.test/", "https://c.test/"]);
        let mut host = MockTabHost::new();
        let mut seq = Sequence::new();
        for url in ["https://c.test/", "https://a.test/"] {
            host.expect_open_tab()
                .with(eq(url), eq(false))
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_, _| Ok(()));
        }

        let report = launch_selected(&mut host, &session, &[2, 9, 0]);

        assert_eq!(report, LaunchReport { opened: 2, failed: 0 });
    }

    #[test]
    fn test_open_single_requests_focus() {
        let mut host = MockTabHost::new();
        host.expect_open_tab()
            .with(eq("https://a.test/"), eq(true))
            .times(1)
            .returning(|_, _| Ok(()));

        open_single(&mut host, "https://a.test/").unwrap();
    }
}
