// ABOUTME: Parser turning pasted tab-listing text into TabEntry values
// Accepts bare URL lines and the common "title line, then URL line" shape

use crate::models::tab::is_web_url;
use crate::models::TabEntry;

/// Parses free-form tab-listing text, one candidate per line. A line that is
/// an absolute http/https URL becomes a tab; a non-URL line immediately
/// before it becomes that tab's title. Anything else is ignored, so stray
/// separators or prose in a pasted export do no harm.
pub fn parse_tab_listing(text: &str) -> Vec<TabEntry> {
    let mut tabs = Vec::new();
    let mut pending_title: Option<String> = None;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            pending_title = None;
            continue;
        }

        if is_web_url(line) {
            let title = pending_title.take().unwrap_or_default();
            tabs.push(TabEntry::new(title, line));
        } else {
            // Remember the line; it titles the next URL if one follows.
            pending_title = Some(line.to_string());
        }
    }

    tabs
}
