//! Session-backed HTML pages

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tracing::{error, warn};

use crate::{
    core::{
        msg::{nav::NavMsg, tool::ToolMsg, Msg},
        state::Panel,
    },
    domain::TransformRequest,
    infrastructure::{server::ServerState, session::SessionId},
    presentation::page::session_url,
};

#[derive(Debug, Deserialize)]
pub struct CodeForm {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub language: String,
}

#[derive(Debug, Deserialize)]
pub struct ConvertForm {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub from_language: String,
    #[serde(default)]
    pub to_language: String,
}

fn parse_session(session: &str) -> Option<SessionId> {
    SessionId::parse_str(session).ok()
}

/// Unknown or expired sessions start over at `/`
fn restart() -> Response {
    Redirect::to("/").into_response()
}

/// Browsers submit textarea content with CRLF line breaks
fn normalize_newlines(code: &str) -> String {
    code.replace("\r\n", "\n")
}

/// Feed `msg` into the session runtime.
///
/// Commands may write files, so the update cycle runs on the blocking pool.
async fn dispatch(state: &ServerState, session: &str, msg: Msg) -> Response {
    let Some(id) = parse_session(session) else {
        return restart();
    };
    let sessions = Arc::clone(&state.sessions);
    let handled = tokio::task::spawn_blocking(move || {
        sessions.with_session(id, |runtime| {
            runtime.dispatch(msg);
        })
    })
    .await;

    match handled {
        Ok(Some(())) => Redirect::to(&session_url(id)).into_response(),
        Ok(None) => {
            warn!(session = %id, "unknown session");
            restart()
        }
        Err(e) => {
            error!(session = %id, "Session update failed: {e}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Creating a session may evict another and delete its exports
pub async fn start_session(State(state): State<ServerState>) -> Response {
    let sessions = Arc::clone(&state.sessions);
    match tokio::task::spawn_blocking(move || sessions.create()).await {
        Ok(id) => Redirect::to(&session_url(id)).into_response(),
        Err(e) => {
            error!("Failed to start session: {e}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn show_page(
    State(state): State<ServerState>,
    Path(session): Path<String>,
) -> Response {
    let Some(id) = parse_session(&session) else {
        return restart();
    };
    let rendered = state
        .sessions
        .with_session(id, |runtime| state.renderer.render(id, runtime.state()));
    match rendered {
        Some(Ok(html)) => Html(html).into_response(),
        Some(Err(e)) => {
            error!(session = %id, "Failed to render page: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
        None => restart(),
    }
}

pub async fn navigate(
    State(state): State<ServerState>,
    Path((session, panel)): Path<(String, String)>,
) -> Response {
    let Ok(panel) = panel.parse::<Panel>() else {
        return StatusCode::NOT_FOUND.into_response();
    };
    dispatch(&state, &session, Msg::Nav(NavMsg::to(panel))).await
}

pub async fn submit_refine(
    State(state): State<ServerState>,
    Path(session): Path<String>,
    Form(form): Form<CodeForm>,
) -> Response {
    let request = TransformRequest::refine(normalize_newlines(&form.code), form.language);
    dispatch(&state, &session, Msg::Tool(ToolMsg::Submit(request))).await
}

pub async fn submit_optimize(
    State(state): State<ServerState>,
    Path(session): Path<String>,
    Form(form): Form<CodeForm>,
) -> Response {
    let request = TransformRequest::optimize(normalize_newlines(&form.code), form.language);
    dispatch(&state, &session, Msg::Tool(ToolMsg::Submit(request))).await
}

pub async fn submit_convert(
    State(state): State<ServerState>,
    Path(session): Path<String>,
    Form(form): Form<ConvertForm>,
) -> Response {
    let request = TransformRequest::convert(
        normalize_newlines(&form.code),
        form.from_language,
        form.to_language,
    );
    dispatch(&state, &session, Msg::Tool(ToolMsg::Submit(request))).await
}
