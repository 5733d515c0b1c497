use serde::{Deserialize, Serialize};

/// A registered content origin, as listed by `GET /api/sources`.
///
/// Owned by the server. The panel only keeps the latest snapshot and replaces it
/// wholesale on every reload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    /// Server-assigned identifier, used in the toggle and delete paths.
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: SourceKind,
    pub active: bool,
    #[serde(default)]
    pub validation_score: Option<u8>,
    /// Raw timestamp as sent by the server; see [`crate::dates`].
    pub created_at: String,
    #[serde(default)]
    pub validated_at: Option<String>,
}

impl Source {
    /// Name to show on the card, `None` when the server stored none or an empty one.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().map(str::trim).filter(|n| !n.is_empty())
    }
}

/// Category label of a source.
///
/// The content API stores `rss` for sources registered through a feed and
/// `html` for those relying on the scraping fallback. Unknown labels survive
/// decoding untouched so that the badge still shows whatever the server says.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SourceKind {
    Rss,
    Html,
    Other(String),
}

impl SourceKind {
    pub fn label(&self) -> &str {
        match self {
            SourceKind::Rss => "rss",
            SourceKind::Html => "html",
            SourceKind::Other(label) => label,
        }
    }
}

impl From<String> for SourceKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "rss" => SourceKind::Rss,
            "html" => SourceKind::Html,
            _ => SourceKind::Other(value),
        }
    }
}

impl From<SourceKind> for String {
    fn from(value: SourceKind) -> Self {
        value.label().to_string()
    }
}
