//! In-process backend double shared by the unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::api::{Backend, ClientError, ClientResult, SummarizeResponse, TweetDto};

/// Scripted [`Backend`]: replies are consumed in order, an empty script
/// answers with a 503.
#[derive(Default)]
pub struct FakeBackend {
    summaries: Mutex<VecDeque<ClientResult<SummarizeResponse>>>,
    gate: Mutex<Option<oneshot::Receiver<ClientResult<SummarizeResponse>>>>,
    answer_gate: Mutex<Option<oneshot::Receiver<ClientResult<String>>>>,
    answers: Mutex<VecDeque<ClientResult<String>>>,
    queries: Mutex<Vec<String>>,
    contexts: Mutex<Vec<String>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_summary(self, reply: ClientResult<SummarizeResponse>) -> Self {
        self.summaries.lock().unwrap().push_back(reply);
        self
    }

    /// The next summarize call waits until the sender side fires.
    pub fn with_gated_summary(
        self,
        gate: oneshot::Receiver<ClientResult<SummarizeResponse>>,
    ) -> Self {
        *self.gate.lock().unwrap() = Some(gate);
        self
    }

    /// The next chat call waits until the sender side fires.
    pub fn with_gated_answer(self, gate: oneshot::Receiver<ClientResult<String>>) -> Self {
        *self.answer_gate.lock().unwrap() = Some(gate);
        self
    }

    pub fn with_answer(self, reply: ClientResult<String>) -> Self {
        self.answers.lock().unwrap().push_back(reply);
        self
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }

    pub fn chat_contexts(&self) -> Vec<String> {
        self.contexts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Backend for FakeBackend {
    async fn summarize(&self, query: &str) -> ClientResult<SummarizeResponse> {
        self.queries.lock().unwrap().push(query.to_string());

        let gate = self.gate.lock().unwrap().take();
        if let Some(gate) = gate {
            return gate
                .await
                .unwrap_or_else(|_| Err(ClientError::HttpClient("gate dropped".to_string())));
        }

        let next = self.summaries.lock().unwrap().pop_front();
        next.unwrap_or(Err(ClientError::Status(503)))
    }

    async fn chat(&self, _question: &str, context: &str) -> ClientResult<String> {
        self.contexts.lock().unwrap().push(context.to_string());

        let gate = self.answer_gate.lock().unwrap().take();
        if let Some(gate) = gate {
            return gate
                .await
                .unwrap_or_else(|_| Err(ClientError::HttpClient("gate dropped".to_string())));
        }

        let next = self.answers.lock().unwrap().pop_front();
        next.unwrap_or(Err(ClientError::Status(503)))
    }
}

/// Successful `/summarize` body with the given summary and post URLs.
pub fn summary_response(summary: &str, urls: &[&str]) -> SummarizeResponse {
    SummarizeResponse {
        summary: Some(summary.to_string()),
        top_tweets: Some(
            urls.iter()
                .map(|url| TweetDto {
                    tweet_url: (*url).to_string(),
                    media: None,
                    text: None,
                })
                .collect(),
        ),
        ..SummarizeResponse::default()
    }
}
