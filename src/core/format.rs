use crate::domain::model::Entry;

/// Renders one entry as an HTML fragment.
///
/// The markup mirrors the feed digest's historical output byte for byte: the
/// score suffix sits between the title and an empty `<b></b>` pair, and the
/// anchor text repeats the URL. Titles and URLs are inserted verbatim, with
/// no HTML escaping (a known gap inherited from the output format).
pub fn format_entry(entry: &Entry) -> String {
    format!(
        "<p>{}{}<b></b><br/> <a href=\"{}\">{}</a></p>",
        entry.title,
        score_suffix(entry.score),
        entry.url,
        entry.url
    )
}

/// Concatenates the fragments for all entries in input order. Empty input
/// yields the empty string.
pub fn render_digest(entries: &[Entry]) -> String {
    let mut body = String::new();
    for entry in entries {
        body.push_str(&format_entry(entry));
    }
    body
}

// Score 1 intentionally lacks the parentheses the default branch adds. The
// asymmetry is long-standing observable output; do not unify.
fn score_suffix(score: i64) -> String {
    match score {
        0 => String::new(),
        1 => " Score: 1".to_string(),
        n => format!(" (Score: {})", n),
    }
}
