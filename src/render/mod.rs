pub mod body;
pub mod fields;
pub mod filename;
pub mod header;

use crate::diagnostics::Diagnostics;
use crate::reference::Reference;
use filename::sanitize_filename;

/// A rendered note, ready to be written into the vault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub filename: String,
    pub content: String,
    /// Name used when writing under `filename` fails.
    pub fallback_filename: String,
}

/// Reference → front matter + body, named after its title.
/// `index` is the position in the export and only feeds the fallback id.
pub fn render_reference(reference: &Reference, index: usize, diag: &dyn Diagnostics) -> Document {
    let fallback = fallback_id(reference, index);
    let untitled = format!("Untitled{}", fallback);
    let title = reference.title().unwrap_or(&untitled);

    let context = reference.key().unwrap_or(title);
    let tags = fields::collect_tags(
        reference.labels.as_ref(),
        reference.folders.as_ref(),
        diag,
        context,
    );
    let header = header::build_header(reference, &tags, diag, &fallback);
    let body = body::build_body(reference);

    let stem = [title, untitled.as_str()]
        .into_iter()
        .map(sanitize_filename)
        .find(|s| !s.is_empty())
        .unwrap_or_else(|| record_name(index));

    Document {
        filename: format!("{}.md", stem),
        content: header + &body,
        fallback_filename: format!("{}.md", non_empty_or(sanitize_filename(&fallback), index)),
    }
}

/// Citekey, else the export's secondary `id`, else the record position.
pub fn fallback_id(reference: &Reference, index: usize) -> String {
    if let Some(key) = reference.key() {
        return key.to_string();
    }
    match &reference.id {
        Some(serde_json::Value::String(s)) if !s.is_empty() => s.clone(),
        Some(v) if !v.is_null() && !v.is_string() => v.to_string(),
        _ => record_name(index),
    }
}

fn record_name(index: usize) -> String {
    format!("record-{}", index + 1)
}

fn non_empty_or(s: String, index: usize) -> String {
    if s.is_empty() {
        record_name(index)
    } else {
        s
    }
}

// ── Tests ──
