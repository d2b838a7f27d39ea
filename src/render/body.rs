use super::fields::{
    collect_attachment_ids, collect_pdf_filenames, display_value, format_authors, format_date,
    format_urls,
};
use crate::reference::Reference;

const NO_ATTACHMENTS: &str = "[No attachment links]";

pub fn drive_view_url(id: &str) -> String {
    format!("https://drive.google.com/file/d/{}/view?usp=sharing", id)
}

/// One `- [Attachment N](url)` line per Drive id, or the no-links marker.
pub fn attachment_links(ids: &[String]) -> String {
    if ids.is_empty() {
        return NO_ATTACHMENTS.to_string();
    }
    ids.iter()
        .enumerate()
        .map(|(i, id)| format!("- [Attachment {}]({})", i + 1, drive_view_url(id)))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn build_body(reference: &Reference) -> String {
    let attachments = reference.attachments.as_deref();
    let links = attachment_links(&collect_attachment_ids(attachments));

    let mut body = format!(
        "{links}\n\
         \n\
         Abstract\n\
         \n\
         {abstract_text}\n\
         \n\
         Information\n\
         \n\
         Authors: {authors}\n\
         Journal: {journal}\n\
         Published date: {published}\n\
         PMID: {pmid}\n\
         Keywords: {keywords}\n\
         Language: {language}\n\
         URL: {urls}\n\
         Note: {note}\n",
        links = links,
        abstract_text = display_value(reference.abstract_text.as_ref()),
        authors = format_authors(reference.author.as_deref()),
        journal = display_value(reference.journal.as_ref()),
        published = format_date(reference.published.as_ref()),
        pmid = display_value(reference.pmid.as_ref()),
        keywords = display_value(reference.keywords.as_ref()),
        language = display_value(reference.language.as_ref()),
        urls = format_urls(reference.url.as_ref()),
        note = display_value(reference.note.as_ref()),
    );

    let pdfs = collect_pdf_filenames(attachments);
    if !pdfs.is_empty() {
        body.push('\n');
        for pdf in &pdfs {
            body.push_str(&format!("![[{}]]\n", pdf));
        }
    }

    body
}

// ── Tests ──
