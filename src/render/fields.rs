use serde_json::Value;

use crate::diagnostics::Diagnostics;
use crate::reference::{Attachment, Author, OneOrMany, Published};

pub const PLACEHOLDER: &str = "N/A";

/// Render a scalar for the body: strings verbatim, other JSON values in their
/// JSON text form, absent or null as the placeholder.
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => PLACEHOLDER.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// `YYYY-MM-DD`, with each missing part rendered as `N/A`.
pub fn format_date(published: Option<&Published>) -> String {
    let Some(p) = published else {
        return format!("{0}-{0}-{0}", PLACEHOLDER);
    };
    let year = display_value(p.year.as_ref());
    let month = zero_pad(display_value(p.month.as_ref()));
    let day = zero_pad(display_value(p.day.as_ref()));
    format!("{}-{}-{}", year, month, day)
}

fn zero_pad(s: String) -> String {
    if s.chars().count() < 2 {
        format!("{:0>2}", s)
    } else {
        s
    }
}

pub fn format_authors(authors: Option<&[Author]>) -> String {
    let names: Vec<String> = authors
        .unwrap_or_default()
        .iter()
        .filter_map(Author::display_name)
        .collect();
    if names.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        names.join(", ")
    }
}

pub fn format_urls(urls: Option<&OneOrMany>) -> String {
    let urls: Vec<String> = urls
        .map(OneOrMany::items)
        .unwrap_or_default()
        .iter()
        .map(|u| display_value(Some(u)))
        .collect();
    if urls.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        urls.join(", ")
    }
}

/// Google Drive ids of all attachments that carry one, in source order.
pub fn collect_attachment_ids(attachments: Option<&[Attachment]>) -> Vec<String> {
    attachments
        .unwrap_or_default()
        .iter()
        .filter_map(|a| a.gdrive_id().map(str::to_string))
        .collect()
}

/// Bare file names of the article PDFs, in source order.
pub fn collect_pdf_filenames(attachments: Option<&[Attachment]>) -> Vec<String> {
    attachments
        .unwrap_or_default()
        .iter()
        .filter(|a| a.is_article_pdf())
        .filter_map(Attachment::filename)
        .filter(|f| f.to_lowercase().ends_with(".pdf"))
        .map(|f| base_name(f).to_string())
        .filter(|f| !f.is_empty())
        .collect()
}

fn base_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Labels followed by folders, spaces replaced with underscores. Non-string
/// entries are stringified and reported; `context` names the record in the warning.
pub fn collect_tags(
    labels: Option<&OneOrMany>,
    folders: Option<&OneOrMany>,
    diag: &dyn Diagnostics,
    context: &str,
) -> Vec<String> {
    labels
        .map(OneOrMany::items)
        .unwrap_or_default()
        .into_iter()
        .chain(folders.map(OneOrMany::items).unwrap_or_default())
        .map(|tag| {
            let text = match tag {
                Value::String(s) => s,
                other => {
                    diag.warn(&format!(
                        "Non-string tag {} in record {}; converting to string",
                        other, context
                    ));
                    other.to_string()
                }
            };
            text.replace(' ', "_")
        })
        .collect()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::testing::{Level, Recorder};
    use serde_json::json;

    fn published(v: Value) -> Published {
        serde_json::from_value(v).unwrap()
    }

    fn attachments(v: Value) -> Vec<Attachment> {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn date_full_and_partial() {
        let full = published(json!({"year": 2020, "month": 3, "day": 7}));
        assert_eq!(format_date(Some(&full)), "2020-03-07");
        let year_only = published(json!({"year": 2020}));
        assert_eq!(format_date(Some(&year_only)), "2020-N/A-N/A");
        assert_eq!(format_date(None), "N/A-N/A-N/A");
    }

    #[test]
    fn date_string_parts_are_padded() {
        let p = published(json!({"year": "2019", "month": "11", "day": "5"}));
        assert_eq!(format_date(Some(&p)), "2019-11-05");
    }

    #[test]
    fn authors_mixed_shapes() {
        let authors: Vec<Author> =
            serde_json::from_value(json!([{"first": "Jane", "last": "Doe"}, {"collective": "WHO"}]))
                .unwrap();
        assert_eq!(format_authors(Some(authors.as_slice())), "Jane Doe, WHO");
    }

    #[test]
    fn authors_unresolvable_or_absent() {
        let authors: Vec<Author> = serde_json::from_value(json!([{"orcid": "0000"}])).unwrap();
        assert_eq!(format_authors(Some(authors.as_slice())), "N/A");
        assert_eq!(format_authors(None), "N/A");
    }

    #[test]
    fn urls() {
        let many: OneOrMany = serde_json::from_value(json!(["https://a", "https://b"])).unwrap();
        assert_eq!(format_urls(Some(&many)), "https://a, https://b");
        let empty: OneOrMany = serde_json::from_value(json!([])).unwrap();
        assert_eq!(format_urls(Some(&empty)), "N/A");
        assert_eq!(format_urls(None), "N/A");
    }

    #[test]
    fn attachment_ids_keep_order() {
        let atts = attachments(json!([
            {"gdrive_id": "abc"},
            {"filename": "notes.txt"},
            {"gdrive_id": ""},
            {"gdrive_id": "def"},
        ]));
        assert_eq!(collect_attachment_ids(Some(atts.as_slice())), vec!["abc", "def"]);
        assert!(collect_attachment_ids(None).is_empty());
    }

    #[test]
    fn pdf_filenames_strip_directories() {
        let atts = attachments(json!([
            {"article_pdf": 1, "filename": "folder/Paper Title.PDF"},
            {"article_pdf": 0, "filename": "other.pdf"},
            {"article_pdf": 1, "filename": "supplement.docx"},
            {"article_pdf": 1, "filename": ""},
            {"article_pdf": 1, "filename": "a\\b\\win.pdf"},
        ]));
        assert_eq!(
            collect_pdf_filenames(Some(atts.as_slice())),
            vec!["Paper Title.PDF", "win.pdf"]
        );
    }

    #[test]
    fn tags_combined_and_coerced() {
        let diag = Recorder::default();
        let labels: OneOrMany = serde_json::from_value(json!("Must read")).unwrap();
        let folders: OneOrMany = serde_json::from_value(json!(["Lab papers", 42, "Must read"])).unwrap();
        let tags = collect_tags(Some(&labels), Some(&folders), &diag, "doc1");
        assert_eq!(tags, vec!["Must_read", "Lab_papers", "42", "Must_read"]);
        let warnings = diag.messages(Level::Warn);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("doc1"));
    }

    #[test]
    fn tags_absent_is_empty() {
        let diag = Recorder::default();
        assert!(collect_tags(None, None, &diag, "x").is_empty());
    }

    #[test]
    fn raw_values_pass_through() {
        assert_eq!(display_value(None), "N/A");
        assert_eq!(display_value(Some(&Value::Null)), "N/A");
        assert_eq!(display_value(Some(&json!("en"))), "en");
        assert_eq!(display_value(Some(&json!(31415))), "31415");
        assert_eq!(display_value(Some(&json!(["a", "b"]))), r#"["a","b"]"#);
    }
}
