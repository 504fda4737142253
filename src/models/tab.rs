// ABOUTME: TabEntry data model representing one saved browser tab inside a session

use serde::{Deserialize, Serialize};
use url::Url;

/// One saved tab: a title, the URL needed to relaunch it, and an optional
/// favicon URL. Serialized with the camelCase field names browsers use for
/// tab objects, so exported tab listings load cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabEntry {
    #[serde(default)]
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fav_icon_url: Option<String>,
}

impl TabEntry {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        let url = url.into();
        let fav_icon_url = favicon_for(&url);
        Self {
            title: title.into(),
            url,
            fav_icon_url,
        }
    }

    /// Title to show in a list row. Tab titles may legitimately be empty, in
    /// which case the URL is the only useful label.
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            &self.url
        } else {
            &self.title
        }
    }

    /// Glyph standing in for the favicon image a browser would show.
    pub fn favicon_glyph(&self) -> &'static str {
        if self.fav_icon_url.is_some() {
            "●"
        } else {
            "○"
        }
    }
}

/// Returns true when `candidate` is an absolute web URL a browser can open.
pub fn is_web_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// Derives the conventional `<origin>/favicon.ico` location for a web URL.
/// Non-web URLs get no favicon and fall back to the placeholder glyph.
pub fn favicon_for(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return None;
    }
    Some(format!(
        "{}/favicon.ico",
        parsed.origin().ascii_serialization()
    ))
}
