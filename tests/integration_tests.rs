//! Integration tests for the Soglab site server
//!
//! Each test starts the real router on an ephemeral port and talks to it
//! over HTTP, so the locale middleware, page handler and health endpoint
//! are exercised together.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use reqwest::{redirect::Policy, Client, StatusCode};
use soglab_site::config::Config;
use soglab_site::routing::BasePath;
use soglab_site::server::{router, AppState};
use tempfile::TempDir;

// ==================== Test Helpers ====================

fn create_test_config(base_path: &str) -> Config {
    Config {
        port: 0,
        base_path: BasePath::parse(base_path).expect("valid base path"),
        messages_dir: Path::new(env!("CARGO_MANIFEST_DIR")).join("messages"),
        export_dir: PathBuf::from("out"),
    }
}

/// Start the server and return its base URL (e.g. "http://127.0.0.1:41234").
async fn spawn_server(base_path: &str) -> String {
    let config = create_test_config(base_path);
    let state = Arc::new(AppState::load(&config).await.expect("load state"));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, router(state)).await.expect("serve");
    });

    format!("http://{}", addr)
}

fn client() -> Client {
    Client::builder()
        .redirect(Policy::none())
        .build()
        .expect("client")
}

async fn get(url: &str) -> (StatusCode, Option<String>, String) {
    let response = client().get(url).send().await.expect("request");
    let status = response.status();
    let location = response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = response.text().await.expect("body");
    (status, location, body)
}

// ==================== Resolution Tests ====================

#[tokio::test]
async fn test_bare_root_redirects_to_default_locale() {
    let server = spawn_server("").await;

    let (status, location, _) = get(&format!("{server}/")).await;
    assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location.as_deref(), Some("/ko"));

    // Following the redirect lands on a page, not another redirect
    let (status, location, body) = get(&format!("{server}/ko")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(location.is_none());
    assert!(body.contains(r#"<html lang="ko">"#));
}

#[tokio::test]
async fn test_redirect_keeps_query() {
    let server = spawn_server("").await;

    let (_, location, _) = get(&format!("{server}/?ref=mail")).await;
    assert_eq!(location.as_deref(), Some("/ko?ref=mail"));
}

#[tokio::test]
async fn test_supported_locales_render() {
    let server = spawn_server("").await;

    for (path, lang, heading) in [
        ("/en", "en", "Engineering tomorrow with technology"),
        ("/en/projects", "en", "A selection of the work Soglab has shipped."),
        ("/ko/about", "ko", "핵심 가치"),
    ] {
        let (status, _, body) = get(&format!("{server}{path}")).await;
        assert_eq!(status, StatusCode::OK, "{path}");
        assert!(body.contains(&format!(r#"<html lang="{lang}">"#)), "{path}");
        assert!(body.contains(heading), "{path}");
    }
}

#[tokio::test]
async fn test_unsupported_locale_is_not_found() {
    let server = spawn_server("").await;

    for path in ["/fr", "/KO", "/en-US/about", "/projects", "/favicon.ico"] {
        let (status, location, body) = get(&format!("{server}{path}")).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{path}");
        assert!(location.is_none(), "{path} must not redirect");
        assert!(body.contains("페이지를 찾을 수 없습니다"), "{path}");
    }
}

#[tokio::test]
async fn test_unknown_page_uses_request_locale() {
    let server = spawn_server("").await;

    let (status, _, body) = get(&format!("{server}/en/blog")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page not found"));
    assert!(body.contains(r#"<a href="/en">Back to home</a>"#));
}

#[tokio::test]
async fn test_doubled_slash_has_no_locale() {
    let server = spawn_server("").await;

    let (status, location, body) = get(&format!("{server}//en/about")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(location.is_none());
    assert!(body.contains(r#"<html lang="ko">"#));
    assert!(body.contains(r#"href="/en/en/about" hreflang="en""#));
}

#[tokio::test]
async fn test_pages_only_answer_get() {
    let server = spawn_server("").await;

    let response = client()
        .post(format!("{server}/ko"))
        .send()
        .await
        .expect("request");
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let response = client()
        .head(format!("{server}/ko/about"))
        .send()
        .await
        .expect("request");
    assert_eq!(response.status(), StatusCode::OK);
}

// ==================== Link Tests ====================

#[tokio::test]
async fn test_page_links_are_localized() {
    let server = spawn_server("").await;

    let (_, _, body) = get(&format!("{server}/en/about")).await;

    assert!(body.contains(r#"<a href="/en/projects">Projects</a>"#));
    assert!(body.contains(r#"<a href="/en/about" aria-current="page">About</a>"#));
    assert!(body.contains(r#"href="/ko/about" hreflang="ko""#));
    assert!(body.contains(r#"href="/en/about" hreflang="en""#));
}

// ==================== Base Path Tests ====================

#[tokio::test]
async fn test_base_path_redirect_and_pages() {
    let server = spawn_server("/soglab").await;

    let (status, location, _) = get(&format!("{server}/soglab")).await;
    assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location.as_deref(), Some("/soglab/ko"));

    let (status, _, body) = get(&format!("{server}/soglab/en/projects")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"href="/soglab/ko/projects" hreflang="ko""#));
    assert!(body.contains(r#"<a href="/soglab/en/about">About</a>"#));
}

#[tokio::test]
async fn test_base_path_required() {
    let server = spawn_server("/soglab").await;

    for path in ["/", "/ko", "/en/projects"] {
        let (status, _, _) = get(&format!("{server}{path}")).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{path}");
    }
}

// ==================== Health Tests ====================

#[tokio::test]
async fn test_health_reports_resolutions() {
    let server = spawn_server("").await;

    get(&format!("{server}/")).await;
    get(&format!("{server}/ko")).await;
    get(&format!("{server}/xx")).await;

    let health: serde_json::Value = client()
        .get(format!("{server}/health"))
        .send()
        .await
        .expect("request")
        .json()
        .await
        .expect("json");

    assert_eq!(health["status"], "ok");
    assert_eq!(health["default_locale"], "ko");
    assert_eq!(health["locales"], serde_json::json!(["ko", "en"]));
    assert_eq!(health["resolutions"]["redirected"], 1);
    assert_eq!(health["resolutions"]["resolved"], 1);
    assert_eq!(health["resolutions"]["not_found"], 1);
}

// ==================== Startup Tests ====================

#[tokio::test]
async fn test_missing_catalog_fails_startup() {
    let temp_dir = TempDir::new().expect("temp dir");
    std::fs::write(temp_dir.path().join("ko.json"), r#"{"nav": {"home": "홈"}}"#)
        .expect("write catalog");

    let mut config = create_test_config("");
    config.messages_dir = temp_dir.path().to_path_buf();

    let err = AppState::load(&config).await.err().expect("load should fail");
    assert!(format!("{err:#}").contains("en"));
}
