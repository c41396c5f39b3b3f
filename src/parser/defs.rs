use scraper::Html;

use super::blocks::collect_text;

/// Class labels that carry definitional text, in output order.
pub const CONTENT_LABELS: &[&str] = &["def", "q", "ety", "cs", "note"];

/// All definitional text of one entry: every `def` block, then `q`, `ety`,
/// `cs` and `note`, each trimmed.
///
/// Blocks that trim down to nothing stay in the list as empty strings.
pub fn extract_defs(document: &Html) -> Vec<String> {
    let mut defs = Vec::new();
    for label in CONTENT_LABELS {
        for text in collect_text(document, label) {
            defs.push(strip(&text).to_string());
        }
    }
    defs
}

/// Trim Unicode whitespace plus the ASCII file/group/record/unit separators.
fn strip(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c))
}
