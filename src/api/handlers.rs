use axum::{
    extract::{RawQuery, State},
    response::Html,
};
use std::sync::Arc;
use std::time::Instant;

use crate::generation::{GenerationClient, GenerationError};
use crate::links::build_links;
use crate::need::Need;
use crate::prompt::build_prompt;
use crate::variants::variants_or_fallback;

use super::AppState;
use super::error::PageError;
use super::models::{GenerateParams, ResultsView};
use super::pages::render_results;

pub async fn home_handler(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.home_page.clone())
}

pub async fn generate_handler(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Result<Html<String>, PageError> {
    let start = Instant::now();

    let params = GenerateParams::from_query(query.as_deref());
    let need = Need::parse(&params.need).ok_or(PageError::EmptyNeed)?;

    let settings = &state.config.generation;
    tracing::debug!("API key loaded? {}", settings.has_credential());

    let client = GenerationClient::new(settings).inspect_err(|e| {
        if matches!(e, GenerationError::ClientInit(_)) {
            tracing::error!("LLM init error: {e}");
        }
    })?;

    let prompt = build_prompt(&need);
    let response = client.generate(&prompt).await.inspect_err(|e| {
        tracing::error!("generate error: {e}");
    })?;

    tracing::debug!("raw AI response: {response}");

    let variants = variants_or_fallback(&response, &need);
    tracing::info!(
        variants = variants.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "generated suggestions"
    );

    let view = ResultsView {
        links: build_links(variants),
        need,
    };

    let page = render_results(&view).inspect_err(|e| {
        tracing::error!("template execute error: {e}");
    })?;
    Ok(Html(page))
}
