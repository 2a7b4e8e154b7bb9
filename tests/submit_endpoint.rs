//! Router-level tests for `GET /` and `POST /submit`.

mod common;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::task::Poll;

use axum::body::{Body, Bytes};
use axum::http::{header, Request, StatusCode};
use dummy_submitter::config::SharedConfig;
use dummy_submitter::http::HttpServer;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use common::{body_text, config_with_code, secured_config, submit_request};

fn app(config: dummy_submitter::Configuration) -> axum::Router {
    HttpServer::new(SharedConfig::new(config)).router()
}

#[tokio::test]
async fn info_returns_build_metadata() {
    let response = app(secured_config("ok", &["abc"]))
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
    assert!(content_type.to_str().unwrap().contains("application/json"));

    let info: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(info["name"], "dummy-submitter");
    assert_eq!(info["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn ok_code_creates_submission() {
    let body = vec![b'x'; 42];
    let response = app(config_with_code("unknown"))
        .oneshot(submit_request(&[("x-code", "ok")], body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();

    let receipt: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(receipt["length"], 42);
    assert_eq!(receipt["location"], location.as_str());

    let uuid = Uuid::parse_str(receipt["uuid"].as_str().unwrap()).unwrap();
    assert_eq!(location, format!("https://example.com/submission/{}", uuid));
}

#[tokio::test]
async fn empty_body_has_zero_length() {
    let response = app(config_with_code("ok"))
        .oneshot(submit_request(&[], Body::empty()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let receipt: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(receipt["length"], 0);
}

#[tokio::test]
async fn error_code_reports_body_length() {
    let response = app(config_with_code("ok"))
        .oneshot(submit_request(&[("x-code", "error")], "seventeen bytes!!"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let text = body_text(response).await;
    assert!(text.contains("17 bytes"), "{}", text);
}

#[tokio::test]
async fn unknown_code_is_bad_request_without_length() {
    let response = app(config_with_code("ok"))
        .oneshot(submit_request(&[("x-code", "bogus")], "1234567"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let text = body_text(response).await;
    assert!(text.contains("BAD REQUEST"));
    assert!(!text.contains('7'));
}

#[tokio::test]
async fn default_code_comes_from_config() {
    let response = app(config_with_code("unknown"))
        .oneshot(submit_request(&[], "data"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app(config_with_code("error"))
        .oneshot(submit_request(&[], "data"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn security_disabled_ignores_authorization() {
    let app = app(config_with_code("ok"));
    for headers in [
        vec![],
        vec![("authorization", "Bearer anything")],
        vec![("authorization", "garbage")],
    ] {
        let response = app
            .clone()
            .oneshot(submit_request(&headers, "doc"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }
}

#[tokio::test]
async fn security_enabled_requires_known_bearer_token() {
    let app = app(secured_config("ok", &["abc"]));

    let response = app
        .clone()
        .oneshot(submit_request(&[("authorization", "Bearer abc")], "doc"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    for headers in [
        vec![("authorization", "Bearer xyz")],
        vec![],
        vec![("authorization", "abc")],
    ] {
        let response = app
            .clone()
            .oneshot(submit_request(&headers, "doc"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(body_text(response).await.starts_with("Unauthorized submission request."));
    }
}

#[tokio::test]
async fn unauthorized_wins_over_code() {
    let response = app(secured_config("ok", &["abc"]))
        .oneshot(submit_request(&[("x-code", "error")], "doc"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A one-chunk body that records whether anything polled it.
fn watched_body(polled: Arc<AtomicBool>) -> Body {
    let mut sent = false;
    Body::from_stream(futures_util::stream::poll_fn(move |_| {
        polled.store(true, Ordering::SeqCst);
        if sent {
            return Poll::Ready(None);
        }
        sent = true;
        Poll::Ready(Some(Ok::<_, std::io::Error>(Bytes::from_static(b"doc"))))
    }))
}

#[tokio::test]
async fn rejected_request_body_is_never_read() {
    let app = app(secured_config("ok", &["abc"]));

    for headers in [vec![], vec![("authorization", "Bearer xyz")]] {
        let polled = Arc::new(AtomicBool::new(false));
        let response = app
            .clone()
            .oneshot(submit_request(&headers, watched_body(polled.clone())))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(!polled.load(Ordering::SeqCst));
    }

    let polled = Arc::new(AtomicBool::new(false));
    let response = app
        .oneshot(submit_request(
            &[("authorization", "Bearer abc")],
            watched_body(polled.clone()),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(polled.load(Ordering::SeqCst));
}

#[tokio::test]
async fn info_needs_no_authorization() {
    let response = app(secured_config("ok", &[]))
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn responses_carry_request_id() {
    let response = app(config_with_code("ok"))
        .oneshot(submit_request(&[], "doc"))
        .await
        .unwrap();
    let id = response.headers().get("x-request-id").unwrap();
    assert!(Uuid::parse_str(id.to_str().unwrap()).is_ok());
}

#[tokio::test]
async fn large_bodies_are_accepted() {
    let body = vec![0u8; 5 * 1024 * 1024];
    let response = app(config_with_code("ok"))
        .oneshot(submit_request(&[], body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let receipt: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(receipt["length"], 5 * 1024 * 1024);
}

#[tokio::test]
async fn snapshot_swap_applies_to_next_request() {
    let server = HttpServer::new(SharedConfig::new(config_with_code("unknown")));
    let app = server.router();

    let response = app.clone().oneshot(submit_request(&[], "doc")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    server.config().replace(config_with_code("ok"));
    let response = app.oneshot(submit_request(&[], "doc")).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
}
