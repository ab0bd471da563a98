//! Per-page view state and the request flow that drives it.
//!
//! Each request follows Idle -> Pending -> (Success | Failed) -> Idle. The view
//! lock is held only to begin and to complete a request, never across the
//! backend call. Once begun, the call and its completion run on their own
//! task, so a caller that goes away (client disconnect) cannot leave the view
//! stuck in `Pending`.

pub mod chat;
pub mod request;
pub mod summarizer;

pub use chat::ChatView;
pub use request::{RequestState, RequestTracker, Ticket};
pub use summarizer::SummarizerView;

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::api::Backend;

/// Run one search for `view`.
///
/// Returns whether the response was applied (it is not when a newer search
/// was started while this one was outstanding).
pub async fn search(
    view: &Arc<RwLock<SummarizerView>>,
    backend: &Arc<dyn Backend>,
    query: String,
) -> bool {
    let ticket = view.write().await.begin(query);

    let view = Arc::clone(view);
    let backend = Arc::clone(backend);
    let task = tokio::spawn(async move {
        let outcome = backend.summarize(ticket.query()).await;
        view.write().await.complete(&ticket, outcome)
    });

    task.await.unwrap_or_else(|e| {
        tracing::error!("Search task failed: {e}");
        false
    })
}

/// Ask `question` about the summary currently held by `summarizer`.
///
/// Blank questions, or a page without a summary, send nothing and return
/// `false`.
pub async fn ask(
    chat: &Arc<RwLock<ChatView>>,
    summarizer: &RwLock<SummarizerView>,
    backend: &Arc<dyn Backend>,
    question: &str,
) -> bool {
    let context = summarizer.read().await.summary().to_string();

    let Some(ticket) = chat.write().await.begin(question, &context) else {
        return false;
    };

    let chat = Arc::clone(chat);
    let backend = Arc::clone(backend);
    let task = tokio::spawn(async move {
        let outcome = backend.chat(ticket.question(), ticket.context()).await;
        chat.write().await.complete(&ticket, outcome)
    });

    task.await.unwrap_or_else(|e| {
        tracing::error!("Chat task failed: {e}");
        false
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::Duration;

    use tokio::sync::oneshot;

    use crate::api::{ClientResult, SummarizeResponse};
    use crate::testing::{FakeBackend, summary_response};
    use crate::views::chat::ASK_LABEL;
    use crate::views::summarizer::{SEARCH_LABEL, SEARCH_PENDING_LABEL};

    #[tokio::test]
    async fn test_search_then_ask() {
        let fake = Arc::new(
            FakeBackend::new()
                .with_summary(Ok(summary_response("# AI\nShort overview.", &["https://x.com/u/status/999"])))
                .with_answer(Ok("It is about AI.".to_string())),
        );
        let backend: Arc<dyn Backend> = fake.clone();
        let summarizer = Arc::new(RwLock::new(SummarizerView::new()));
        let chat = Arc::new(RwLock::new(ChatView::new()));

        assert!(search(&summarizer, &backend, "AI".to_string()).await);
        assert!(ask(&chat, &summarizer, &backend, "What is it about?").await);

        let chat = chat.read().await;
        assert_eq!(chat.transcript().len(), 1);
        assert_eq!(fake.chat_contexts(), vec!["# AI\nShort overview.".to_string()]);
    }

    #[tokio::test]
    async fn test_ask_without_summary_sends_nothing() {
        let fake = Arc::new(FakeBackend::new());
        let backend: Arc<dyn Backend> = fake.clone();
        let summarizer = RwLock::new(SummarizerView::new());
        let chat = Arc::new(RwLock::new(ChatView::new()));

        assert!(!ask(&chat, &summarizer, &backend, "hello").await);
        assert!(fake.chat_contexts().is_empty());
        assert!(chat.read().await.transcript().is_empty());
    }

    #[tokio::test]
    async fn test_view_is_pending_while_backend_is_outstanding() {
        let (release, gate) = oneshot::channel::<ClientResult<SummarizeResponse>>();
        let backend: Arc<dyn Backend> = Arc::new(FakeBackend::new().with_gated_summary(gate));
        let summarizer = Arc::new(RwLock::new(SummarizerView::new()));

        let task = {
            let backend = Arc::clone(&backend);
            let summarizer = Arc::clone(&summarizer);
            tokio::spawn(async move { search(&summarizer, &backend, "AI".to_string()).await })
        };

        while !summarizer.read().await.is_pending() {
            tokio::task::yield_now().await;
        }
        assert_eq!(summarizer.read().await.button_label(), SEARCH_PENDING_LABEL);

        release.send(Ok(summary_response("done", &[]))).unwrap();
        assert!(task.await.unwrap());
        assert_eq!(summarizer.read().await.summary(), "done");
        assert!(!summarizer.read().await.is_pending());
    }

    #[tokio::test]
    async fn test_abandoned_search_still_completes() {
        let (release, gate) = oneshot::channel::<ClientResult<SummarizeResponse>>();
        let backend: Arc<dyn Backend> = Arc::new(FakeBackend::new().with_gated_summary(gate));
        let summarizer = Arc::new(RwLock::new(SummarizerView::new()));

        let abandoned = tokio::time::timeout(
            Duration::from_millis(20),
            search(&summarizer, &backend, "AI".to_string()),
        )
        .await;
        assert!(abandoned.is_err());
        assert!(summarizer.read().await.is_pending());

        release.send(Ok(summary_response("done", &[]))).unwrap();
        for _ in 0..1000 {
            if !summarizer.read().await.is_pending() {
                break;
            }
            tokio::task::yield_now().await;
        }

        let view = summarizer.read().await;
        assert!(!view.is_pending());
        assert_eq!(view.button_label(), SEARCH_LABEL);
        assert_eq!(view.summary(), "done");
    }

    #[tokio::test]
    async fn test_abandoned_question_still_completes() {
        let (release, gate) = oneshot::channel::<ClientResult<String>>();
        let backend: Arc<dyn Backend> = Arc::new(
            FakeBackend::new()
                .with_summary(Ok(summary_response("context", &[])))
                .with_gated_answer(gate),
        );
        let summarizer = Arc::new(RwLock::new(SummarizerView::new()));
        let chat = Arc::new(RwLock::new(ChatView::new()));
        assert!(search(&summarizer, &backend, "AI".to_string()).await);

        let abandoned = tokio::time::timeout(
            Duration::from_millis(20),
            ask(&chat, &summarizer, &backend, "why?"),
        )
        .await;
        assert!(abandoned.is_err());
        assert!(chat.read().await.is_pending());

        release.send(Ok("because".to_string())).unwrap();
        for _ in 0..1000 {
            if !chat.read().await.is_pending() {
                break;
            }
            tokio::task::yield_now().await;
        }

        let view = chat.read().await;
        assert!(!view.is_pending());
        assert_eq!(view.button_label(), ASK_LABEL);
        assert_eq!(view.transcript().len(), 1);
    }
}
