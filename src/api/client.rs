//! HTTP client for the summarization backend.

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::api::error::{ClientError, ClientResult};
use crate::api::types::{ChatRequest, ChatResponse, SummarizeRequest, SummarizeResponse};
use crate::config::AppConfig;

/// Path of the summarization endpoint, relative to the base URL.
const SUMMARIZE_PATH: &str = "summarize";
/// Path of the chat endpoint, relative to the base URL.
const CHAT_PATH: &str = "chat";

/// Operations the UI needs from the backend.
///
/// Views only see this trait, so tests can swap the HTTP client for an
/// in-process fake.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Summarize posts matching `query`.
    async fn summarize(&self, query: &str) -> ClientResult<SummarizeResponse>;

    /// Answer `question` using `context` as the only source.
    async fn chat(&self, question: &str, context: &str) -> ClientResult<String>;
}

/// `reqwest`-backed implementation of [`Backend`].
#[derive(Clone, Debug)]
pub struct BackendClient {
    client: reqwest::Client,
    base_url: Url,
    post_limit: Option<u32>,
}

impl BackendClient {
    /// Create a client for the backend described by `config`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built or the base URL
    /// cannot carry endpoint paths.
    pub fn new(config: &AppConfig) -> ClientResult<Self> {
        if config.backend_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(config.backend_url.to_string()));
        }

        Ok(Self {
            client: Self::build_client(config)?,
            base_url: config.backend_url.clone(),
            post_limit: config.post_limit,
        })
    }

    fn build_client(config: &AppConfig) -> ClientResult<reqwest::Client> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("trendlens/", env!("CARGO_PKG_VERSION")))
            .gzip(true)
            .brotli(true)
            .deflate(true);

        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        builder
            .build()
            .map_err(|e| ClientError::HttpClient(e.to_string()))
    }

    /// Base URL every endpoint is resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an endpoint below the base URL, keeping any base path.
    ///
    /// # Errors
    /// Returns an error if the base URL cannot carry path segments.
    pub fn endpoint(&self, name: &str) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(name);
        Ok(url)
    }

    async fn post_json<B, R>(&self, name: &str, body: &B) -> ClientResult<R>
    where
        B: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        let url = self.endpoint(name)?;
        tracing::debug!("POST {url}");

        let response = self.client.post(url).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl Backend for BackendClient {
    async fn summarize(&self, query: &str) -> ClientResult<SummarizeResponse> {
        let request = SummarizeRequest::new(query).with_limit(self.post_limit);
        let response: SummarizeResponse = self.post_json(SUMMARIZE_PATH, &request).await?;

        if let Some(error) = &response.error {
            tracing::info!("Backend reported for '{query}': {error}");
        }

        Ok(response)
    }

    async fn chat(&self, question: &str, context: &str) -> ClientResult<String> {
        let request = ChatRequest {
            question: question.to_string(),
            context: context.to_string(),
        };
        let response: ChatResponse = self.post_json(CHAT_PATH, &request).await?;

        response.answer.ok_or(ClientError::MissingField("answer"))
    }
}
