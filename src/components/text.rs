// ABOUTME: Sanitizes user-provided text before it reaches the terminal
// ABOUTME: Strips control characters so hostile tab titles render as plain text

/// Cleans a string for display inside a list row.
///
/// Tabs become single spaces, every other control character (including
/// escape sequences hidden in page titles) is dropped. Markup-looking
/// text such as `<script>` passes through untouched and renders
/// literally.
pub fn sanitize(text: &str) -> String {
    text.chars()
        .map(|ch| if ch == '\t' { ' ' } else { ch })
        .filter(|ch| !ch.is_control())
        .collect()
}
