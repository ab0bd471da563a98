//! State behind the summary section of a page.

use crate::api::{ClientResult, SummarizeResponse};
use crate::model::PostReference;
use crate::views::request::{RequestState, RequestTracker, Ticket};

/// Shown when the backend answered without a summary.
pub const NO_SUMMARY: &str = "No summary available.";
/// Shown when the summarize call failed.
pub const SUMMARY_ERROR: &str = "Error fetching summary.";

/// Label of the search button while idle.
pub const SEARCH_LABEL: &str = "Summarize";
/// Label of the search button while a request is outstanding.
pub const SEARCH_PENDING_LABEL: &str = "Summarizing...";

/// A search that was started and awaits its response.
#[derive(Clone, Debug)]
pub struct SearchTicket {
    ticket: Ticket,
    query: String,
}

impl SearchTicket {
    /// Query to send.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// Query, summary and related posts of one page.
#[derive(Clone, Debug, Default)]
pub struct SummarizerView {
    query: String,
    summary: String,
    posts: Vec<PostReference>,
    tweets_fetched: Option<u64>,
    backend_note: Option<String>,
    generation: u64,
    request: RequestTracker,
}

impl SummarizerView {
    /// Create an empty view: no query, no summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `query` and mark a search as outstanding.
    ///
    /// Empty queries are sent as-is; the backend decides what to do with them.
    pub fn begin(&mut self, query: impl Into<String>) -> SearchTicket {
        self.query = query.into();
        SearchTicket {
            ticket: self.request.begin(),
            query: self.query.clone(),
        }
    }

    /// Apply the outcome of the search started with `ticket`.
    ///
    /// Summary and posts are replaced together. Returns `false` and leaves the
    /// view untouched when a newer search was started in the meantime.
    pub fn complete(
        &mut self,
        ticket: &SearchTicket,
        outcome: ClientResult<SummarizeResponse>,
    ) -> bool {
        if !self.request.finish(ticket.ticket) {
            tracing::debug!(
                "Dropping stale summary for '{}' (search #{})",
                ticket.query,
                ticket.ticket.sequence()
            );
            return false;
        }

        match outcome {
            Ok(response) => {
                let posts: Vec<PostReference> = response
                    .top_tweets
                    .unwrap_or_default()
                    .into_iter()
                    .map(PostReference::from)
                    .collect();
                tracing::info!(
                    "Summary for '{}' received with {} post(s)",
                    ticket.query,
                    posts.len()
                );

                self.summary = response.summary.unwrap_or_else(|| NO_SUMMARY.to_string());
                self.posts = posts;
                self.tweets_fetched = response.tweets_fetched;
                self.backend_note = response.error;
            }
            Err(e) if e.is_transport() => {
                tracing::warn!("Backend unreachable for '{}': {e}", ticket.query);
                self.clear_with_error();
            }
            Err(e) => {
                tracing::error!("Unusable summary for '{}': {e}", ticket.query);
                self.clear_with_error();
            }
        }

        self.generation = ticket.ticket.sequence();
        true
    }

    fn clear_with_error(&mut self) {
        self.summary = SUMMARY_ERROR.to_string();
        self.posts = Vec::new();
        self.tweets_fetched = None;
        self.backend_note = None;
    }

    /// Last submitted query.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current summary; empty until the first search resolves.
    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Whether there is a summary to show (and to chat about).
    #[must_use]
    pub fn has_summary(&self) -> bool {
        !self.summary.is_empty()
    }

    /// Posts that came with the current summary.
    #[must_use]
    pub fn posts(&self) -> &[PostReference] {
        &self.posts
    }

    /// Number of posts the current summary was built from.
    #[must_use]
    pub const fn tweets_fetched(&self) -> Option<u64> {
        self.tweets_fetched
    }

    /// Explanation the backend attached to the current response.
    #[must_use]
    pub fn backend_note(&self) -> Option<&str> {
        self.backend_note.as_deref()
    }

    /// Sequence number of the search currently displayed.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Rendering key for the post at `index`, unique per displayed search.
    #[must_use]
    pub fn post_key(&self, index: usize) -> String {
        match self.posts.get(index).and_then(PostReference::post_id) {
            Some(id) => format!("{}-{id}", self.generation),
            None => format!("{}-#{index}", self.generation),
        }
    }

    /// Request state of the search control.
    #[must_use]
    pub const fn request_state(&self) -> RequestState {
        self.request.state()
    }

    /// Whether a search is outstanding.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.request.is_pending()
    }

    /// Label for the search button.
    #[must_use]
    pub const fn button_label(&self) -> &'static str {
        if self.request.is_pending() {
            SEARCH_PENDING_LABEL
        } else {
            SEARCH_LABEL
        }
    }
}
