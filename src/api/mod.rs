//! Client side of the summarization backend.
//!
//! The backend exposes two endpoints:
//! - `POST /summarize` turns a search topic into a markdown summary plus the
//!   most representative posts
//! - `POST /chat` answers a question using a summary as context

pub mod client;
pub mod error;
pub mod types;

pub use client::{Backend, BackendClient};
pub use error::{ClientError, ClientResult};
pub use types::{ChatRequest, ChatResponse, SummarizeRequest, SummarizeResponse, TweetDto};
