//! Axum route handlers for the memo API.
//!
//! Stateless translation layer: validate the request, call the store or the
//! summarizer, wrap the outcome in the fixed JSON envelopes
//! (`{ memo }` / `{ memos }` / `{ summary }` / `{ ok }` / `{ error }`).

use crate::store::MemoStore;
use crate::summarize::Summarizer;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use memo_types::{
    DeleteAck, ErrorBody, MemoEnvelope, MemoForm, MemoListEnvelope, ServiceStatus,
    SummarizeRequest, SummaryEnvelope,
};
use std::sync::Arc;
use std::time::Instant;

pub struct AppState {
    pub store: Arc<dyn MemoStore>,
    /// Absent when GOOGLE_API_KEY is not configured.
    pub summarizer: Option<Arc<dyn Summarizer>>,
    pub start_time: Instant,
}

pub fn router(state: Arc<AppState>) -> axum::Router {
    axum::Router::new()
        .route("/memos", axum::routing::get(list_memos).post(create_memo))
        .route(
            "/memos/:id",
            axum::routing::put(update_memo).delete(delete_memo),
        )
        .route("/summarize", axum::routing::post(summarize))
        .route("/status", axum::routing::get(status))
        .with_state(state)
}

fn json_ok<T: serde::Serialize>(payload: T) -> Response {
    (StatusCode::OK, Json(payload)).into_response()
}

fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Unwrap a JSON body extractor, turning an unparsable body into a 400.
fn require_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, Response> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => Err(json_error(StatusCode::BAD_REQUEST, rejection.body_text())),
    }
}

// GET /memos
pub async fn list_memos(State(state): State<Arc<AppState>>) -> Response {
    match state.store.list().await {
        Ok(memos) => json_ok(MemoListEnvelope { memos }),
        Err(e) => {
            log::error!("List memos failed: {}", e);
            json_error(StatusCode::INTERNAL_SERVER_ERROR, e)
        }
    }
}

// POST /memos
pub async fn create_memo(
    State(state): State<Arc<AppState>>,
    body: Result<Json<MemoForm>, JsonRejection>,
) -> Response {
    let form = match require_body(body) {
        Ok(form) => form,
        Err(resp) => return resp,
    };
    if form.title.trim().is_empty() || form.content.trim().is_empty() {
        return json_error(StatusCode::BAD_REQUEST, "title and content are required");
    }
    match state.store.create(&form).await {
        Ok(memo) => json_ok(MemoEnvelope { memo }),
        Err(e) => {
            log::error!("Create memo failed: {}", e);
            json_error(StatusCode::INTERNAL_SERVER_ERROR, e)
        }
    }
}

// PUT /memos/:id
pub async fn update_memo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<MemoForm>, JsonRejection>,
) -> Response {
    if id.trim().is_empty() {
        return json_error(StatusCode::BAD_REQUEST, "id required");
    }
    let form = match require_body(body) {
        Ok(form) => form,
        Err(resp) => return resp,
    };
    match state.store.update(&id, &form).await {
        Ok(memo) => json_ok(MemoEnvelope { memo }),
        Err(e) if e.contains("not found") => json_error(StatusCode::NOT_FOUND, e),
        Err(e) => {
            log::error!("Update memo {} failed: {}", id, e);
            json_error(StatusCode::INTERNAL_SERVER_ERROR, e)
        }
    }
}

// DELETE /memos/:id
pub async fn delete_memo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    if id.trim().is_empty() {
        return json_error(StatusCode::BAD_REQUEST, "id required");
    }
    match state.store.delete(&id).await {
        Ok(()) => json_ok(DeleteAck { ok: true }),
        Err(e) => {
            log::error!("Delete memo {} failed: {}", id, e);
            json_error(StatusCode::INTERNAL_SERVER_ERROR, e)
        }
    }
}

// POST /summarize
pub async fn summarize(
    State(state): State<Arc<AppState>>,
    body: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Response {
    let request = match require_body(body) {
        Ok(request) => request,
        Err(resp) => return resp,
    };
    let content = match request.content.as_deref().map(str::trim) {
        Some(content) if !content.is_empty() => content.to_string(),
        _ => return json_error(StatusCode::BAD_REQUEST, "content is required"),
    };
    let summarizer = match &state.summarizer {
        Some(summarizer) => summarizer.clone(),
        None => {
            return json_error(StatusCode::INTERNAL_SERVER_ERROR, "Missing GOOGLE_API_KEY")
        }
    };
    match summarizer
        .summarize(request.title.as_deref(), &content)
        .await
    {
        Ok(summary) => json_ok(SummaryEnvelope { summary }),
        Err(e) => {
            log::error!("Summarize failed: {}", e);
            json_error(StatusCode::INTERNAL_SERVER_ERROR, e)
        }
    }
}

// GET /status
pub async fn status(State(state): State<Arc<AppState>>) -> Response {
    json_ok(ServiceStatus {
        running: true,
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}
