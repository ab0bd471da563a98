//! Posts referenced by a summary.

use serde::{Deserialize, Serialize};

use crate::api::TweetDto;

/// Extensions rendered as still images. Matching is case-sensitive.
const IMAGE_EXTENSIONS: [&str; 4] = [".jpg", ".jpeg", ".png", ".gif"];

/// A post related to the current summary.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostReference {
    /// Canonical URL of the post.
    pub source_url: String,
    /// Attached media URLs, in backend order.
    pub media: Vec<String>,
    /// Post text, when the backend included it.
    pub text: Option<String>,
}

impl PostReference {
    /// Create a reference without media or text.
    #[must_use]
    pub fn new(source_url: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            media: Vec::new(),
            text: None,
        }
    }

    /// External identifier: the last `/`-separated segment of the URL.
    ///
    /// `None` when that segment is empty (e.g. a trailing slash).
    #[must_use]
    pub fn post_id(&self) -> Option<&str> {
        self.source_url
            .rsplit('/')
            .next()
            .filter(|segment| !segment.is_empty())
    }

    /// Media attachments paired with how they should be displayed.
    pub fn media_items(&self) -> impl Iterator<Item = (MediaKind, &str)> {
        self.media
            .iter()
            .map(|url| (MediaKind::classify(url), url.as_str()))
    }
}

impl From<TweetDto> for PostReference {
    fn from(dto: TweetDto) -> Self {
        Self {
            source_url: dto.tweet_url,
            media: dto.media.unwrap_or_default(),
            text: dto.text.filter(|t| !t.trim().is_empty()),
        }
    }
}

/// How a media URL is displayed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum MediaKind {
    /// Rendered as `<img>`.
    Image,
    /// Rendered as a video player with a single fallback source.
    Video,
}

impl MediaKind {
    /// Classify a media URL by its extension.
    #[must_use]
    pub fn classify(url: &str) -> Self {
        if IMAGE_EXTENSIONS.iter().any(|ext| url.ends_with(ext)) {
            Self::Image
        } else {
            Self::Video
        }
    }
}
