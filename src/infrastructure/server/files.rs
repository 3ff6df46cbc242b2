//! Downloads of exported files

use std::io::ErrorKind;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::infrastructure::{export::FileExporter, server::ServerState, session::SessionId};

pub async fn session_download(
    State(state): State<ServerState>,
    Path((session, file_name)): Path<(String, String)>,
) -> Response {
    let Ok(id) = SessionId::parse_str(&session) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    if state.sessions.get(id).is_none() {
        return StatusCode::NOT_FOUND.into_response();
    }
    serve_export(&state.sessions.exporter_for(id), &file_name).await
}

pub async fn shared_download(
    State(state): State<ServerState>,
    Path(file_name): Path<String>,
) -> Response {
    serve_export(&state.exporter, &file_name).await
}

async fn serve_export(exporter: &FileExporter, file_name: &str) -> Response {
    let Some(path) = exporter.resolve(file_name) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    match tokio::fs::read(&path).await {
        Ok(bytes) => (
            [
                (
                    header::CONTENT_TYPE,
                    "text/plain; charset=utf-8".to_string(),
                ),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{file_name}\""),
                ),
            ],
            bytes,
        )
            .into_response(),
        Err(e) if e.kind() == ErrorKind::NotFound => StatusCode::NOT_FOUND.into_response(),
        Err(e) => {
            tracing::error!(path = %path.display(), "Failed to read export: {e}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
