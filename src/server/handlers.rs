//! HTTP handlers
//!
//! Every handler answers with JSON. Scrape and feedback failures are reported
//! in the body with a 200 status; only the status check maps transport
//! failures onto an HTTP error.

use crate::check::{check_status, StatusReport};
use crate::feedback::FeedbackSubmission;
use crate::server::AppState;
use axum::{
    body::Bytes,
    extract::{ConnectInfo, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Query string of `GET /slurp`
#[derive(Debug, Deserialize)]
pub struct SlurpParams {
    #[serde(rename = "urlToScrape", default)]
    pub url_to_scrape: String,
}

/// Query string of `GET /check`
#[derive(Debug, Deserialize)]
pub struct CheckParams {
    #[serde(rename = "urlToCheck", default)]
    pub url_to_check: String,
}

/// Body of the `POST /email` response
#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub success: bool,
}

/// GET /slurp?urlToScrape=... - List the links of a remote page
///
/// # Response
/// - `{"success":true,"links":[{"href":...,"content":...}]}` on success
/// - `{"success":false,"links":null}` when the page could not be fetched
pub async fn slurp_handler(
    State(state): State<AppState>,
    Query(params): Query<SlurpParams>,
) -> impl IntoResponse {
    let body = state.slurper.scrape_json(&params.url_to_scrape).await;
    ([(header::CONTENT_TYPE, "application/json")], body)
}

/// GET /check?urlToCheck=... - Report the HTTP status of a remote URL
///
/// # Errors
/// - 502 Bad Gateway: the URL could not be requested
pub async fn check_handler(
    State(state): State<AppState>,
    Query(params): Query<CheckParams>,
) -> Result<Json<StatusReport>, (StatusCode, String)> {
    match check_status(state.slurper.client(), &params.url_to_check).await {
        Ok(report) => Ok(Json(report)),
        Err(e) => {
            tracing::warn!("Status check failed: {}", e);
            Err((StatusCode::BAD_GATEWAY, e.to_string()))
        }
    }
}

/// POST /email - Send captcha-gated feedback to the site owner
///
/// Malformed bodies, rejected captchas and failed deliveries all answer
/// `{"success":false}`.
pub async fn email_handler(
    State(state): State<AppState>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    body: Bytes,
) -> Json<FeedbackResponse> {
    let Some(feedback) = state.feedback.as_ref() else {
        tracing::warn!("Feedback received but mail is not configured");
        return Json(FeedbackResponse { success: false });
    };

    let submission: FeedbackSubmission = match serde_json::from_slice(&body) {
        Ok(submission) => submission,
        Err(e) => {
            tracing::info!("Rejected malformed feedback body: {}", e);
            return Json(FeedbackResponse { success: false });
        }
    };

    let remote_ip = connect_info
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_default();

    let success = feedback.submit(&remote_ip, submission).await;
    Json(FeedbackResponse { success })
}
