//! HTTP routes: the `/present` endpoint plus static assets.

use std::path::Path;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Html;
use axum::routing::post;
use axum::{Form, Router};
use serde::Deserialize;
use slides_core::{assemble, normalize_document, HtmlRenderer};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;

use crate::error::{Result, ServerError};

/// Form or query field carrying the document text.
pub const EDITOR_TEXT_FIELD: &str = "editorText";

/// Shared, read-only handler state.
#[derive(Clone, Default)]
pub struct AppState {
    renderer: Arc<HtmlRenderer>,
}

impl AppState {
    /// Create state around a configured renderer.
    pub fn new(renderer: HtmlRenderer) -> Self {
        Self {
            renderer: Arc::new(renderer),
        }
    }
}

/// Body of a `/present` request.
#[derive(Debug, Deserialize)]
pub struct PresentRequest {
    /// Raw document text; absent when the client omitted the field.
    #[serde(rename = "editorText")]
    pub editor_text: Option<String>,
}

/// Build the application router.
pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/present", post(present_form).get(present_query))
        .fallback_service(ServeDir::new(static_dir.as_ref()))
        .with_state(state)
        .layer(CompressionLayer::new())
}

/// POST /present - render a form-encoded document
pub async fn present_form(
    State(state): State<AppState>,
    Form(req): Form<PresentRequest>,
) -> Result<Html<String>> {
    present(&state, req)
}

/// GET /present - render a document passed in the query string
pub async fn present_query(
    State(state): State<AppState>,
    Query(req): Query<PresentRequest>,
) -> Result<Html<String>> {
    present(&state, req)
}

fn present(state: &AppState, req: PresentRequest) -> Result<Html<String>> {
    let text = req
        .editor_text
        .ok_or(ServerError::MissingField(EDITOR_TEXT_FIELD))?;

    let presentation = assemble(&normalize_document(&text));
    log::info!("rendering presentation with {} slides", presentation.len());

    Ok(Html(state.renderer.render_document(&presentation)))
}
