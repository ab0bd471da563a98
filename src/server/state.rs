//! Application state shared across all request handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::api::{Backend, BackendClient};
use crate::config::AppConfig;
use crate::views::{ChatView, SummarizerView};

/// State of the summarizer-only page.
#[derive(Default)]
pub struct SummarizerPage {
    /// Query, summary and posts.
    pub summarizer: Arc<RwLock<SummarizerView>>,
}

/// State of the combined summarizer and chat page.
#[derive(Default)]
pub struct CombinedPage {
    /// Query, summary and posts.
    pub summarizer: Arc<RwLock<SummarizerView>>,
    /// Question input and transcript.
    pub chat: Arc<RwLock<ChatView>>,
}

/// Shared application state.
///
/// Each page owns its own views; nothing is shared between routes except the
/// backend handle.
pub struct AppState {
    /// Client used for every backend call.
    pub backend: Arc<dyn Backend>,
    /// `/` page.
    pub summarizer_page: SummarizerPage,
    /// `/chat` page.
    pub combined_page: CombinedPage,
}

impl AppState {
    /// Create the state for the backend described by `config`.
    ///
    /// # Errors
    /// Returns an error if the backend client cannot be created.
    pub fn new(config: &AppConfig) -> Result<Arc<Self>, Box<dyn std::error::Error + Send + Sync>> {
        let client = BackendClient::new(config)
            .map_err(|e| format!("Failed to create backend client: {e}"))?;

        Ok(Self::with_backend(Arc::new(client)))
    }

    /// Create the state around an existing backend.
    #[must_use]
    pub fn with_backend(backend: Arc<dyn Backend>) -> Arc<Self> {
        Arc::new(Self {
            backend,
            summarizer_page: SummarizerPage::default(),
            combined_page: CombinedPage::default(),
        })
    }
}
