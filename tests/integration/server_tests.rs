//! Integration tests for the HTTP boundary
//!
//! Requests are driven through the router with `oneshot`; remote pages and the
//! captcha endpoint are served by wiremock.

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use link_slurp::config::{FetcherConfig, RecaptchaConfig};
use link_slurp::feedback::{CaptchaVerifier, FeedbackService, MailQueue, MailRelay, OutgoingMail};
use link_slurp::server::{create_app, AppState};
use link_slurp::slurp::Slurper;
use link_slurp::MailError;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower::util::ServiceExt;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Relay that records messages instead of sending them
#[derive(Default)]
struct RecordingRelay {
    delivered: Mutex<Vec<OutgoingMail>>,
}

#[async_trait]
impl MailRelay for RecordingRelay {
    async fn deliver(&self, mail: &OutgoingMail) -> Result<(), MailError> {
        self.delivered.lock().await.push(mail.clone());
        Ok(())
    }
}

fn create_test_slurper() -> Slurper {
    let config = FetcherConfig {
        user_agent: "TestSlurper/1.0".to_string(),
        timeout_secs: 2,
        connect_timeout_secs: 1,
    };
    Slurper::new(&config).expect("Failed to build slurper")
}

fn app_without_feedback() -> Router {
    create_app(AppState::new(create_test_slurper(), None), None)
}

/// Builds an app whose captcha endpoint is `captcha_server`
fn app_with_feedback(captcha_server: &MockServer, relay: Arc<RecordingRelay>) -> Router {
    let slurper = create_test_slurper();
    let verifier = CaptchaVerifier::new(
        slurper.client().clone(),
        &RecaptchaConfig {
            private_key: "test-key".to_string(),
            verify_url: format!("{}/verify", captcha_server.uri()),
        },
    );
    let (queue, _worker) = MailQueue::start(relay, 4);
    let feedback = FeedbackService::new(verifier, queue, "Owner <owner@example.com>");
    create_app(AppState::new(slurper, Some(feedback)), None)
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

async fn post_json(app: Router, uri: &str, json: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(json.to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

const FEEDBACK_BODY: &str = r#"{"yourEmail":"ada@example.com","yourName":"Ada","feedback":"Lovely","captcha":{"challenge":"chal","response":"resp"}}"#;

#[tokio::test]
async fn test_slurp_route_returns_links() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<a href='/a'>A</a>"))
        .mount(&mock_server)
        .await;

    let origin = format!("{}/page", mock_server.uri());
    let (status, body) = get(app_without_feedback(), &format!("/slurp?urlToScrape={}", origin)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        format!(
            r#"{{"success":true,"links":[{{"href":"{}/a","content":"A"}}]}}"#,
            origin
        )
    );
}

#[tokio::test]
async fn test_slurp_route_failure_is_still_ok_status() {
    let (status, body) = get(app_without_feedback(), "/slurp?urlToScrape=not-a-url").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"success":false,"links":null}"#);
}

#[tokio::test]
async fn test_slurp_route_without_parameter() {
    let (status, body) = get(app_without_feedback(), "/slurp").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"success":false,"links":null}"#);
}

#[tokio::test]
async fn test_check_route_reports_status() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let (status, body) = get(
        app_without_feedback(),
        &format!("/check?urlToCheck={}/gone", mock_server.uri()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"status":"404 Not Found","statusCode":404}"#);
}

#[tokio::test]
async fn test_check_route_bad_gateway_on_transport_failure() {
    let (status, _body) = get(app_without_feedback(), "/check?urlToCheck=not-a-url").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_email_route_without_mail_config() {
    let (status, body) = post_json(app_without_feedback(), "/email", FEEDBACK_BODY).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"success":false}"#);
}

#[tokio::test]
async fn test_email_route_delivers_after_valid_captcha() {
    let captcha_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/verify"))
        .and(body_string_contains("privatekey=test-key"))
        .and(body_string_contains("response=resp"))
        .respond_with(ResponseTemplate::new(200).set_body_string("true\nsuccess"))
        .expect(1)
        .mount(&captcha_server)
        .await;

    let relay = Arc::new(RecordingRelay::default());
    let app = app_with_feedback(&captcha_server, relay.clone());
    let (status, body) = post_json(app, "/email", FEEDBACK_BODY).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"success":true}"#);

    let delivered = relay.delivered.lock().await;
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].from, "Ada <ada@example.com>");
    assert_eq!(delivered[0].to, "Owner <owner@example.com>");
    assert_eq!(delivered[0].body, "Lovely");
}

#[tokio::test]
async fn test_email_route_rejects_invalid_captcha() {
    let captcha_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/verify"))
        .respond_with(ResponseTemplate::new(200).set_body_string("false\nincorrect-captcha-sol"))
        .mount(&captcha_server)
        .await;

    let relay = Arc::new(RecordingRelay::default());
    let app = app_with_feedback(&captcha_server, relay.clone());
    let (_, body) = post_json(app, "/email", FEEDBACK_BODY).await;

    assert_eq!(body, r#"{"success":false}"#);
    assert!(relay.delivered.lock().await.is_empty());
}

#[tokio::test]
async fn test_email_route_rejects_malformed_body() {
    let captcha_server = MockServer::start().await;
    let relay = Arc::new(RecordingRelay::default());
    let app = app_with_feedback(&captcha_server, relay.clone());

    let (status, body) = post_json(app, "/email", "{not json").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"success":false}"#);
    assert!(relay.delivered.lock().await.is_empty());
}

#[tokio::test]
async fn test_static_files_served_as_fallback() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>Slurp</h1>").unwrap();
    std::fs::create_dir(dir.path().join("css")).unwrap();
    std::fs::write(dir.path().join("css").join("site.css"), "body {}").unwrap();

    let static_dir = dir.path().to_str().unwrap().to_string();
    let app = || create_app(AppState::new(create_test_slurper(), None), Some(static_dir.as_str()));

    let (status, body) = get(app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "<h1>Slurp</h1>");

    let (status, body) = get(app(), "/css/site.css").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "body {}");

    let (status, _) = get(app(), "/missing.js").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_route_without_static_dir() {
    let (status, _) = get(app_without_feedback(), "/index.html").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
