//! Infers a page title from the first level-1 heading of a document.

use regex::Regex;
use std::sync::LazyLock;

static LEVEL_ONE_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[\s\x1C-\x1F]+(.+)$").expect("heading pattern is valid"));

/// Returns the text of the first `# Heading` line in `markdown`, or `fallback`
/// when no line qualifies.
///
/// Each line is trimmed before matching, so indented headings count. Exactly
/// one `#` followed by whitespace and at least one more character is required:
/// `## Sub` and a bare `#` are not titles.
pub fn infer_title(markdown: &str, fallback: &str) -> String {
    markdown
        .split(is_line_boundary)
        .find_map(|line| {
            LEVEL_ONE_HEADING
                .captures(line.trim_matches(is_space))
                .and_then(|caps| caps.get(1))
                .map(|text| text.as_str().trim_matches(is_space).to_string())
        })
        .unwrap_or_else(|| fallback.to_string())
}

// Unicode White_Space plus the information separators U+001C..U+001F.
fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

// Same boundaries as Unicode line splitting; "\r\n" yields an empty piece
// between the two characters, which never matches.
fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}
