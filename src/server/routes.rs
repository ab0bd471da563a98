//! HTTP route handlers for the trendlens UI.

use std::sync::Arc;

use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde::Deserialize;

use crate::render::{PageKind, render_page};
use crate::views;

use super::state::AppState;

/// Create the router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/", get(summarizer_page).post(summarizer_search))
        .route("/chat", get(combined_page).post(combined_search))
        .route("/chat/ask", post(combined_ask))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "trendlens",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Search form body.
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    /// The search topic; a missing field is an empty query.
    #[serde(default)]
    pub query: String,
}

/// Question form body.
#[derive(Debug, Deserialize)]
pub struct AskForm {
    /// The user's question.
    #[serde(default)]
    pub question: String,
}

async fn summarizer_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let summarizer = state.summarizer_page.summarizer.read().await;
    Html(render_page(PageKind::Summarizer, &summarizer, None))
}

async fn summarizer_search(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SearchForm>,
) -> Redirect {
    views::search(&state.summarizer_page.summarizer, &state.backend, form.query).await;
    Redirect::to(PageKind::Summarizer.path())
}

async fn combined_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let page = &state.combined_page;
    let summarizer = page.summarizer.read().await;
    let chat = page.chat.read().await;
    Html(render_page(PageKind::Combined, &summarizer, Some(&*chat)))
}

async fn combined_search(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SearchForm>,
) -> Redirect {
    views::search(&state.combined_page.summarizer, &state.backend, form.query).await;
    Redirect::to(PageKind::Combined.path())
}

async fn combined_ask(State(state): State<Arc<AppState>>, Form(form): Form<AskForm>) -> Redirect {
    let page = &state.combined_page;
    if !views::ask(&page.chat, &page.summarizer, &state.backend, &form.question).await {
        tracing::debug!("Question not recorded (blank, no summary, or superseded)");
    }
    Redirect::to(PageKind::Combined.path())
}
