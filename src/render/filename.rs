use std::sync::LazyLock;

use regex::Regex;

static DISALLOWED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"[/\\:*?"<>|]"#).unwrap());

pub const MAX_STEM_CHARS: usize = 150;
const TRUNCATION_MARK: &str = "...";

/// Turn a title into a filename stem: drop path and shell-hostile characters,
/// trim surrounding spaces and dots, cap the length. May return an empty string.
pub fn sanitize_filename(title: &str) -> String {
    let cleaned = DISALLOWED_RE.replace_all(title, "");
    let trimmed = cleaned.trim_matches(|c: char| c == ' ' || c == '.');
    if trimmed.chars().count() <= MAX_STEM_CHARS {
        trimmed.to_string()
    } else {
        let truncated: String = trimmed.chars().take(MAX_STEM_CHARS).collect();
        format!("{}{}", truncated, TRUNCATION_MARK)
    }
}

// ── Tests ──
