use serde::Deserialize;
use serde_json::Value;

/// One entry of a Paperpile JSON export. Every key is optional; unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Reference {
    #[serde(rename = "_id")]
    pub citekey: Option<String>,
    pub id: Option<Value>,
    pub title: Option<String>,
    pub doi: Option<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<Value>,
    pub author: Option<Vec<Author>>,
    pub published: Option<Published>,
    pub journal: Option<Value>,
    pub pmid: Option<Value>,
    pub keywords: Option<Value>,
    pub language: Option<Value>,
    pub note: Option<Value>,
    pub url: Option<OneOrMany>,
    #[serde(rename = "labelsNamed")]
    pub labels: Option<OneOrMany>,
    #[serde(rename = "foldersNamed")]
    pub folders: Option<OneOrMany>,
    pub attachments: Option<Vec<Attachment>>,
}

impl Reference {
    /// Citekey, ignoring empty strings.
    pub fn key(&self) -> Option<&str> {
        non_empty(self.citekey.as_deref())
    }

    pub fn title(&self) -> Option<&str> {
        non_empty(self.title.as_deref())
    }

    pub fn doi(&self) -> Option<&str> {
        non_empty(self.doi.as_deref())
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

/// Author entry. Variants are tried in order, so `formatted` wins over a
/// first/last pair when both are present.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Author {
    Formatted { formatted: String },
    NamePair { first: String, last: String },
    Collective { collective: String },
    Unknown(Value),
}

impl Author {
    pub fn display_name(&self) -> Option<String> {
        match self {
            Author::Formatted { formatted } => Some(formatted.clone()),
            Author::NamePair { first, last } => Some(format!("{} {}", first, last)),
            Author::Collective { collective } => Some(collective.clone()),
            Author::Unknown(_) => None,
        }
    }
}

/// Publication date parts, each either a number or a string in exports.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Published {
    pub year: Option<Value>,
    pub month: Option<Value>,
    pub day: Option<Value>,
}

/// A field that exports write either as a bare string or as a list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<Value>),
    Other(Value),
}

impl OneOrMany {
    /// Items in source order; a bare string becomes a single item, anything
    /// that is neither string nor list yields nothing.
    pub fn items(&self) -> Vec<Value> {
        match self {
            OneOrMany::One(s) => vec![Value::String(s.clone())],
            OneOrMany::Many(items) => items.clone(),
            OneOrMany::Other(_) => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Attachment {
    pub gdrive_id: Option<Value>,
    pub article_pdf: Option<Value>,
    pub filename: Option<Value>,
}

impl Attachment {
    /// Google Drive file id, when present and non-empty.
    pub fn gdrive_id(&self) -> Option<&str> {
        non_empty(self.gdrive_id.as_ref().and_then(Value::as_str))
    }

    /// True when the attachment is flagged as the article PDF (`article_pdf: 1`).
    pub fn is_article_pdf(&self) -> bool {
        self.article_pdf
            .as_ref()
            .and_then(Value::as_f64)
            .is_some_and(|v| v == 1.0)
    }

    pub fn filename(&self) -> Option<&str> {
        non_empty(self.filename.as_ref().and_then(Value::as_str))
    }
}

/// Decode one array element of the export.
pub fn from_value(value: Value) -> serde_json::Result<Reference> {
    serde_json::from_value(value)
}

// ── Tests ──
