mod common;

use axum::extract::Request;
use axum::http::{HeaderValue, header};
use axum::{Router, ServiceExt, routing::get};
use axum_test::TestServer;
use common::StubGateway;
use douyin_fetch::api::handlers::health_handler;
use douyin_fetch::api::middleware::panic;
use douyin_fetch::routes::{app_router, build_router};
use serde_json::json;

fn full_server() -> (TestServer, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let state = common::create_test_state(StubGateway::default(), dir.path());
    (TestServer::new(build_router(state)).unwrap(), dir)
}

#[tokio::test]
async fn test_health_endpoint_success() {
    let app = Router::new().route("/health", get(health_handler));
    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], "douyin-fetch");
    assert!(json["timestamp"].as_i64().unwrap() > 0);
    assert!(json.get("version").is_some());
}

#[tokio::test]
async fn test_index_describes_endpoints() {
    let (server, _dir) = full_server();

    let response = server.get("/").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert!(json["endpoints"].get("/get_download_link").is_some());
    assert!(json["endpoints"].get("/download_video").is_some());
    assert_eq!(json["usage"]["download_video"]["method"], "POST");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (server, _dir) = full_server();

    let response = server.get("/does-not-exist").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "error");
    assert_eq!(json["code"], "not_found");
    assert_eq!(json["details"]["path"], "/does-not-exist");
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let (server, _dir) = full_server();

    let response = server
        .get("/health")
        .add_header(header::ORIGIN, HeaderValue::from_static("https://example.org"))
        .await;

    response.assert_status_ok();
    assert_eq!(response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN), "*");
}

#[tokio::test]
async fn test_trailing_slash_is_trimmed() {
    let dir = tempfile::tempdir().unwrap();
    let state = common::create_test_state(StubGateway::default(), dir.path());
    let app = ServiceExt::<Request>::into_make_service(app_router(state));
    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/get_download_link/")
        .json(&json!({ "share_link": common::SHORT_LINK }))
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_panic_becomes_internal_error() {
    async fn boom() -> &'static str {
        panic!("handler exploded")
    }

    let app = Router::new().route("/boom", get(boom)).layer(panic::layer());
    let server = TestServer::new(app).unwrap();

    let response = server.get("/boom").expect_failure().await;

    response.assert_status_internal_server_error();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "error");
    assert_eq!(json["code"], "internal_error");
}
