//! Result of `POST /api/sources/validate`.
//!
//! The content API probes a URL for feeds, falls back to HTML scraping for
//! blogs, and answers with a score plus a handful of sample items. Nothing here
//! is persisted: the panel keeps one `ValidationResult` in memory between a
//! validate action and the following add (or the next validate).

use serde::{Deserialize, Serialize};

use super::score::ScoreGrade;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    #[serde(default)]
    pub validation_score: u8,
    #[serde(default)]
    pub rss_found: Vec<DiscoveredFeed>,
    /// Empty when the server found nothing worth recommending.
    #[serde(default)]
    pub recommended_url: String,
    #[serde(default)]
    pub recommended_name: Option<String>,
    #[serde(default)]
    pub can_scrape_html: bool,
    #[serde(default)]
    pub sample_news: Vec<SampleNews>,
    /// URL the server validated, echoed back.
    #[serde(default)]
    pub url: Option<String>,
    /// Discovery method reported by the feed finder (e.g. `common_path`).
    #[serde(default)]
    pub method: Option<String>,
    /// Discovery status (`found`, `not_found`, ...).
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub source_type: Option<OriginType>,
}

impl ValidationResult {
    pub fn grade(&self) -> ScoreGrade {
        ScoreGrade::from_score(self.validation_score)
    }

    /// A source may only be registered after a validation with a nonzero score.
    pub fn allows_registration(&self) -> bool {
        self.validation_score > 0
    }

    pub fn has_feed(&self) -> bool {
        !self.rss_found.is_empty()
    }

    /// Recommended name, ignoring the empty string the server sends when it has none.
    pub fn recommended_name(&self) -> Option<&str> {
        self.recommended_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
    }
}

/// One feed found during discovery.
///
/// Older servers list bare URLs, the current one sends an object with the feed
/// title and entry count. Both shapes decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DiscoveredFeed {
    Url(String),
    Detailed {
        url: String,
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        entries_count: Option<u32>,
    },
}

impl DiscoveredFeed {
    pub fn url(&self) -> &str {
        match self {
            DiscoveredFeed::Url(url) => url,
            DiscoveredFeed::Detailed { url, .. } => url,
        }
    }
}

/// Kind of site the server detected behind the URL. Kinds this side does not
/// know yet decode as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OriginType {
    Blog,
    Reddit,
    Youtube,
    Other(String),
}

impl OriginType {
    pub fn label(&self) -> &str {
        match self {
            OriginType::Blog => "blog",
            OriginType::Reddit => "reddit",
            OriginType::Youtube => "youtube",
            OriginType::Other(label) => label,
        }
    }
}

impl From<String> for OriginType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "blog" => OriginType::Blog,
            "reddit" => OriginType::Reddit,
            "youtube" => OriginType::Youtube,
            _ => OriginType::Other(value),
        }
    }
}

impl From<OriginType> for String {
    fn from(value: OriginType) -> Self {
        value.label().to_string()
    }
}

/// A sample item extracted while validating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleNews {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
    /// ISO timestamp; the server sends `""` when the item has no date.
    #[serde(rename = "pubDate", default)]
    pub pub_date: Option<String>,
    /// Link to the article.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

impl SampleNews {
    pub fn pub_date(&self) -> Option<&str> {
        self.pub_date.as_deref().filter(|d| !d.trim().is_empty())
    }

    pub fn link(&self) -> Option<&str> {
        self.url.as_deref().filter(|u| !u.trim().is_empty())
    }
}
