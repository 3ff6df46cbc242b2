//! JSON API
//!
//! Stateless counterparts of the UI actions. Files go to the shared output
//! directory and are downloadable from `/files/{name}`.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};

use crate::{
    domain::{
        language::{self, LanguageEntry},
        ExportedFile, Operation, TransformRequest,
    },
    infrastructure::server::ServerState,
};

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<JsonValue>)>;

#[derive(Debug, Deserialize)]
pub struct CodeRequest {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub language: String,
}

#[derive(Debug, Deserialize)]
pub struct ConvertRequest {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub from_language: String,
    #[serde(default)]
    pub to_language: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExportResponse {
    pub operation: Operation,
    pub file_name: String,
    pub bytes: usize,
    pub download_url: String,
}

impl From<ExportedFile> for ExportResponse {
    fn from(file: ExportedFile) -> Self {
        Self {
            operation: file.operation,
            download_url: format!("/files/{}", file.file_name),
            file_name: file.file_name,
            bytes: file.bytes,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub sessions: usize,
}

pub async fn health_check(State(state): State<ServerState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        sessions: state.sessions.len(),
    })
}

pub async fn list_languages() -> Json<Vec<LanguageEntry>> {
    Json(language::entries())
}

fn internal_error(message: String) -> (StatusCode, Json<JsonValue>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": message })),
    )
}

async fn export(state: &ServerState, request: TransformRequest) -> ApiResult<ExportResponse> {
    let exporter = state.exporter.clone();
    let operation = request.operation();
    let exported = tokio::task::spawn_blocking(move || exporter.export(&request))
        .await
        .map_err(|e| {
            tracing::error!(%operation, "Export task failed: {e}");
            internal_error(e.to_string())
        })?;

    match exported {
        Ok(file) => Ok(Json(file.into())),
        Err(e) => {
            tracing::warn!(%operation, path = %e.path().display(), "Export failed: {e}");
            Err(internal_error(e.to_string()))
        }
    }
}

pub async fn refine(
    State(state): State<ServerState>,
    Json(req): Json<CodeRequest>,
) -> ApiResult<ExportResponse> {
    export(&state, TransformRequest::refine(req.code, req.language)).await
}

pub async fn optimize(
    State(state): State<ServerState>,
    Json(req): Json<CodeRequest>,
) -> ApiResult<ExportResponse> {
    export(&state, TransformRequest::optimize(req.code, req.language)).await
}

pub async fn convert(
    State(state): State<ServerState>,
    Json(req): Json<ConvertRequest>,
) -> ApiResult<ExportResponse> {
    export(
        &state,
        TransformRequest::convert(req.code, req.from_language, req.to_language),
    )
    .await
}
