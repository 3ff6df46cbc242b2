//! Router-level tests driving the HTTP surface with `tower::ServiceExt::oneshot`

use std::path::Path;

use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
    Router,
};
use color_eyre::eyre::Result;
use http_body_util::BodyExt;
use pretty_assertions::assert_eq;
use tempfile::TempDir;
use tower::ServiceExt;

use coderefine::infrastructure::{
    config::Config,
    server::{api::ExportResponse, create_router, ServerState},
};

const FORM: &str = "application/x-www-form-urlencoded";

fn test_app(output_dir: &Path, isolate_sessions: bool) -> Result<Router> {
    let mut config = Config::default();
    config.export.output_dir = output_dir.to_path_buf();
    config.export.isolate_sessions = isolate_sessions;
    Ok(create_router(ServerState::from_config(&config)?))
}

async fn send(app: &Router, request: Request<Body>) -> Result<Response<Body>> {
    Ok(app.clone().oneshot(request).await?)
}

async fn get(app: &Router, uri: &str) -> Result<Response<Body>> {
    send(app, Request::builder().uri(uri).body(Body::empty())?).await
}

async fn post_form(app: &Router, uri: &str, body: &str) -> Result<Response<Body>> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, FORM)
        .body(Body::from(body.to_string()))?;
    send(app, request).await
}

async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Result<Response<Body>> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))?;
    send(app, request).await
}

fn location(response: &Response<Body>) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

async fn body_string(response: Response<Body>) -> Result<String> {
    let bytes = response.into_body().collect().await?.to_bytes();
    Ok(String::from_utf8(bytes.to_vec())?)
}

/// Whether the `<section>` with `id` is rendered without `hidden`
fn is_visible(html: &str, id: &str) -> bool {
    let marker = format!("<section id=\"{id}\"");
    html.find(&marker)
        .map(|start| {
            let tag = &html[start..];
            let end = tag.find('>').unwrap_or(tag.len());
            !tag[..end].contains("hidden")
        })
        .unwrap_or(false)
}

/// Start a session and return its base URL
async fn start_session(app: &Router) -> Result<String> {
    let response = get(app, "/").await?;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let session = location(&response);
    assert!(session.starts_with("/s/"));
    Ok(session)
}

#[tokio::test]
async fn test_new_session_shows_home() -> Result<()> {
    let dir = TempDir::new()?;
    let app = test_app(dir.path(), false)?;
    let session = start_session(&app).await?;

    let response = get(&app, &session).await?;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await?;

    assert!(is_visible(&html, "home-page"));
    assert!(!is_visible(&html, "refine-page"));
    assert!(!is_visible(&html, "optimize-page"));
    assert!(!is_visible(&html, "convert-page"));
    Ok(())
}

#[tokio::test]
async fn test_navigation_round_trip() -> Result<()> {
    let dir = TempDir::new()?;
    let app = test_app(dir.path(), false)?;
    let session = start_session(&app).await?;

    for (panel, id) in [
        ("optimize", "optimize-page"),
        ("home", "home-page"),
        ("convert", "convert-page"),
    ] {
        let response = post_form(&app, &format!("{session}/nav/{panel}"), "").await?;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), session);

        let html = body_string(get(&app, &session).await?).await?;
        let visible: Vec<_> = ["home-page", "refine-page", "optimize-page", "convert-page"]
            .into_iter()
            .filter(|section| is_visible(&html, section))
            .collect();
        assert_eq!(visible, vec![id]);
    }
    Ok(())
}

#[tokio::test]
async fn test_unknown_panel_is_not_found() -> Result<()> {
    let dir = TempDir::new()?;
    let app = test_app(dir.path(), false)?;
    let session = start_session(&app).await?;

    let response = post_form(&app, &format!("{session}/nav/settings"), "").await?;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn test_unknown_session_restarts() -> Result<()> {
    let dir = TempDir::new()?;
    let app = test_app(dir.path(), false)?;

    let response = get(&app, "/s/00000000-0000-4000-8000-000000000000").await?;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    let response = post_form(&app, "/s/garbage/nav/refine", "").await?;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
    Ok(())
}

#[tokio::test]
async fn test_refine_submission_and_download() -> Result<()> {
    let dir = TempDir::new()?;
    let app = test_app(dir.path(), false)?;
    let session = start_session(&app).await?;
    post_form(&app, &format!("{session}/nav/refine"), "").await?;

    let response = post_form(
        &app,
        &format!("{session}/refine"),
        "code=def+f%28%29%3A%0D%0A++return+1&language=Python",
    )
    .await?;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let html = body_string(get(&app, &session).await?).await?;
    assert!(is_visible(&html, "refine-page"));
    let link = format!("{session}/files/refined_code.py");
    assert!(html.contains(&format!("href=\"{link}\"")));

    let response = get(&app, &link).await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_DISPOSITION),
        Some(&header::HeaderValue::from_static(
            "attachment; filename=\"refined_code.py\""
        ))
    );
    assert_eq!(
        body_string(response).await?,
        "# Refined Python code\nDEF F():\n  RETURN 1"
    );
    assert!(dir.path().join("refined_code.py").exists());
    Ok(())
}

#[tokio::test]
async fn test_convert_submission_uses_target_extension() -> Result<()> {
    let dir = TempDir::new()?;
    let app = test_app(dir.path(), false)?;
    let session = start_session(&app).await?;

    post_form(
        &app,
        &format!("{session}/convert"),
        "code=abc&from_language=Java&to_language=C%2B%2B",
    )
    .await?;

    let contents = std::fs::read_to_string(dir.path().join("converted_code.cpp"))?;
    assert_eq!(contents, "# Converted from Java to C++\nabc");

    let html = body_string(get(&app, &session).await?).await?;
    assert!(is_visible(&html, "convert-page"));
    Ok(())
}

#[tokio::test]
async fn test_missing_language_falls_back_to_txt() -> Result<()> {
    let dir = TempDir::new()?;
    let app = test_app(dir.path(), false)?;
    let session = start_session(&app).await?;

    post_form(&app, &format!("{session}/optimize"), "code=").await?;

    let contents = std::fs::read_to_string(dir.path().join("optimized_code.txt"))?;
    assert_eq!(contents, "# Optimized  code\n");
    Ok(())
}

#[tokio::test]
async fn test_download_rejects_unknown_names() -> Result<()> {
    let dir = TempDir::new()?;
    std::fs::write(dir.path().join("secret.txt"), "nope")?;
    let app = test_app(dir.path(), false)?;
    let session = start_session(&app).await?;

    for uri in [
        format!("{session}/files/secret.txt"),
        format!("{session}/files/..%2Fsecret.txt"),
        "/files/secret.txt".to_string(),
        // Valid name, not exported yet
        "/files/refined_code.js".to_string(),
    ] {
        let response = get(&app, &uri).await?;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
    }
    Ok(())
}

#[tokio::test]
async fn test_isolated_sessions_keep_their_own_files() -> Result<()> {
    let dir = TempDir::new()?;
    let app = test_app(dir.path(), true)?;
    let first = start_session(&app).await?;
    let second = start_session(&app).await?;

    post_form(&app, &format!("{first}/refine"), "code=one&language=C").await?;
    post_form(&app, &format!("{second}/refine"), "code=two&language=C").await?;

    let first_file = body_string(get(&app, &format!("{first}/files/refined_code.c")).await?).await?;
    let second_file =
        body_string(get(&app, &format!("{second}/files/refined_code.c")).await?).await?;

    assert_eq!(first_file, "# Refined C code\nONE");
    assert_eq!(second_file, "# Refined C code\nTWO");
    assert!(!dir.path().join("refined_code.c").exists());
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_concurrent_submissions_across_sessions() -> Result<()> {
    let dir = TempDir::new()?;
    let app = test_app(dir.path(), true)?;

    let mut tasks = tokio::task::JoinSet::new();
    for n in 0..8 {
        let app = app.clone();
        tasks.spawn(async move {
            let session = start_session(&app).await?;
            let response =
                post_form(&app, &format!("{session}/optimize"), &format!("code=ab{n}&language=Java"))
                    .await?;
            assert_eq!(response.status(), StatusCode::SEE_OTHER);
            let download = get(&app, &format!("{session}/files/optimized_code.java")).await?;
            Ok::<_, color_eyre::eyre::Report>((n, body_string(download).await?))
        });
    }

    let mut seen = 0;
    while let Some(joined) = tasks.join_next().await {
        let (n, contents) = joined??;
        assert_eq!(contents, format!("# Optimized Java code\n{n}ba"));
        seen += 1;
    }
    assert_eq!(seen, 8);
    Ok(())
}

#[tokio::test]
async fn test_api_convert_and_shared_download() -> Result<()> {
    let dir = TempDir::new()?;
    let app = test_app(dir.path(), false)?;

    let response = post_json(
        &app,
        "/api/convert",
        serde_json::json!({
            "code": "abc",
            "from_language": "Java",
            "to_language": "JavaScript",
        }),
    )
    .await?;
    assert_eq!(response.status(), StatusCode::OK);
    let exported: ExportResponse = serde_json::from_str(&body_string(response).await?)?;
    assert_eq!(exported.file_name, "converted_code.js");
    assert_eq!(exported.download_url, "/files/converted_code.js");

    let response = get(&app, &exported.download_url).await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_string(response).await?,
        "# Converted from Java to JavaScript\nabc"
    );
    Ok(())
}

#[tokio::test]
async fn test_api_refine_and_optimize() -> Result<()> {
    let dir = TempDir::new()?;
    let app = test_app(dir.path(), false)?;

    let response = post_json(
        &app,
        "/api/refine",
        serde_json::json!({ "code": "abc", "language": "Python" }),
    )
    .await?;
    let refined: ExportResponse = serde_json::from_str(&body_string(response).await?)?;
    assert_eq!(refined.file_name, "refined_code.py");
    assert_eq!(refined.bytes, "# Refined Python code\nABC".len());

    let response = post_json(
        &app,
        "/api/optimize",
        serde_json::json!({ "code": "abc", "language": "Go" }),
    )
    .await?;
    let optimized: ExportResponse = serde_json::from_str(&body_string(response).await?)?;
    assert_eq!(optimized.file_name, "optimized_code.txt");
    Ok(())
}

#[tokio::test]
async fn test_api_export_failure_is_500() -> Result<()> {
    let dir = TempDir::new()?;
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "")?;
    let app = test_app(&blocker, false)?;

    let response = post_json(
        &app,
        "/api/refine",
        serde_json::json!({ "code": "abc", "language": "C" }),
    )
    .await?;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = serde_json::from_str(&body_string(response).await?)?;
    assert!(body["error"]
        .as_str()
        .is_some_and(|error| error.starts_with("failed to create output directory")));
    Ok(())
}

#[tokio::test]
async fn test_health_and_languages() -> Result<()> {
    let dir = TempDir::new()?;
    let app = test_app(dir.path(), false)?;
    start_session(&app).await?;

    let health: serde_json::Value =
        serde_json::from_str(&body_string(get(&app, "/api/health").await?).await?)?;
    assert_eq!(health["status"], "ok");
    assert_eq!(health["sessions"], 1);

    let languages: serde_json::Value =
        serde_json::from_str(&body_string(get(&app, "/api/languages").await?).await?)?;
    let names: Vec<_> = languages
        .as_array()
        .map(|entries| entries.iter().filter_map(|e| e["name"].as_str()).collect())
        .unwrap_or_default();
    assert_eq!(names, vec!["Python", "C", "C++", "Java", "JavaScript"]);
    assert_eq!(languages[4]["extension"], ".js");
    Ok(())
}
