use crate::diagnostics::Diagnostics;
use crate::reference::Reference;

const FENCE: &str = "---";

/// YAML front matter for a reference, or an empty string when the record has
/// no citekey. String values are JSON-encoded, which YAML reads back verbatim.
pub fn build_header(
    reference: &Reference,
    tags: &[String],
    diag: &dyn Diagnostics,
    fallback_id: &str,
) -> String {
    let Some(citekey) = reference.key() else {
        let title = reference
            .title()
            .map(str::to_string)
            .unwrap_or_else(|| format!("Untitled{}", fallback_id));
        diag.warn(&format!(
            "Reference (title: {}) has no '_id'; skipping YAML header",
            title
        ));
        return String::new();
    };

    let mut lines = vec![format!("citekey: {}", citekey)];
    if let Some(title) = reference.title() {
        lines.push(format!("title: {}", encode(title)));
    }
    if let Some(doi) = reference.doi() {
        lines.push(format!("doi: {}", encode(doi)));
    }
    if !tags.is_empty() {
        lines.push(format!("tags: {}", encode(tags)));
    }

    format!("{}\n{}\n{}\n\n", FENCE, lines.join("\n"), FENCE)
}

fn encode<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

// ── Tests ──
