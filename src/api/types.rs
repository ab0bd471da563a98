//! Wire types exchanged with the summarization backend.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Body of `POST /summarize`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummarizeRequest {
    /// Free-text search topic.
    pub query: String,
    /// Number of posts the backend should scrape; omitted to use its default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl SummarizeRequest {
    /// Create a request for `query` with the backend's default limit.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: None,
        }
    }

    /// Set the post limit.
    #[must_use]
    pub const fn with_limit(mut self, limit: Option<u32>) -> Self {
        self.limit = limit;
        self
    }
}

/// Body returned by `POST /summarize`.
///
/// Every field is optional: the backend answers `{"error": ...}` alone when
/// the scraper found nothing.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummarizeResponse {
    /// Markdown summary.
    #[serde(default)]
    pub summary: Option<String>,
    /// Posts selected as most representative, in backend order.
    #[serde(default)]
    pub top_tweets: Option<Vec<TweetDto>>,
    /// Echo of the query.
    #[serde(default)]
    pub query: Option<String>,
    /// How many posts the summary was built from.
    #[serde(default)]
    pub tweets_fetched: Option<u64>,
    /// Backend-side explanation when nothing could be summarized.
    #[serde(default)]
    pub error: Option<String>,
}

/// One post inside `top_tweets`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TweetDto {
    /// Canonical URL of the post.
    pub tweet_url: String,
    /// Attached media URLs (photos, videos, animated GIFs).
    ///
    /// Entries may also be objects carrying a `url` (or `variants[].url` for
    /// videos); anything else is skipped rather than failing the response.
    #[serde(default, deserialize_with = "lenient_media")]
    pub media: Option<Vec<String>>,
    /// Raw post text.
    #[serde(default)]
    pub text: Option<String>,
}

fn lenient_media<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?;
    Ok(raw.map(|entries| entries.iter().filter_map(media_url).collect()))
}

fn media_url(entry: &Value) -> Option<String> {
    let url = match entry {
        Value::String(url) => Some(url.as_str()),
        Value::Object(fields) => fields.get("url").and_then(Value::as_str).or_else(|| {
            fields
                .get("variants")
                .and_then(Value::as_array)
                .and_then(|variants| variants.iter().find_map(|v| v.get("url")?.as_str()))
        }),
        _ => None,
    };
    if url.is_none() {
        tracing::debug!("Ignoring unrecognized media entry: {entry}");
    }
    url.map(str::to_string)
}

/// Body of `POST /chat`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatRequest {
    /// The user's question.
    pub question: String,
    /// Summary the answer must be grounded in.
    pub context: String,
}

/// Body returned by `POST /chat`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    /// Answer text.
    #[serde(default)]
    pub answer: Option<String>,
}
