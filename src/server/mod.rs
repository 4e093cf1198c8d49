//! HTTP server for Link-Slurp
//!
//! Routes:
//! - `GET /slurp?urlToScrape=` - link extraction
//! - `GET /check?urlToCheck=` - status passthrough
//! - `POST /email` - captcha-gated feedback
//! - everything else - static files from the configured directory

mod handlers;

pub use handlers::{
    check_handler, email_handler, slurp_handler, CheckParams, FeedbackResponse, SlurpParams,
};

use crate::config::Config;
use crate::feedback::FeedbackService;
use crate::slurp::Slurper;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Shared handler state
///
/// Holds no per-request data; every scrape runs independently.
#[derive(Clone)]
pub struct AppState {
    pub slurper: Slurper,
    pub feedback: Option<FeedbackService>,
}

impl AppState {
    pub fn new(slurper: Slurper, feedback: Option<FeedbackService>) -> Self {
        Self { slurper, feedback }
    }
}

/// Builds the router; `static_dir` serves every unmatched path when set
pub fn create_app(state: AppState, static_dir: Option<&str>) -> Router {
    let router = Router::new()
        .route("/slurp", get(slurp_handler))
        .route("/check", get(check_handler))
        .route("/email", post(email_handler));

    let router = match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

/// Runs the server until Ctrl-C
///
/// Feedback mail is only enabled when both `[smtp]` and `[recaptcha]` are
/// configured. Mail still queued at shutdown is delivered before returning.
pub async fn serve(config: Config) -> crate::Result<()> {
    let slurper = Slurper::new(&config.fetcher)?;

    let (feedback, mail_worker) = match (&config.smtp, &config.recaptcha) {
        (Some(smtp), Some(recaptcha)) => {
            let (service, worker) =
                FeedbackService::from_config(slurper.client().clone(), smtp, recaptcha)?;
            (Some(service), Some(worker))
        }
        _ => {
            tracing::warn!("Feedback mail disabled: [smtp] and [recaptcha] are both required");
            (None, None)
        }
    };

    let app = create_app(
        AppState::new(slurper, feedback),
        config.server.static_dir.as_deref(),
    );

    let listener = tokio::net::TcpListener::bind(&config.server.bind_address).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    if let Some(worker) = mail_worker {
        tracing::info!("Waiting for queued mail to be delivered");
        if let Err(e) = worker.await {
            tracing::error!("Mail worker ended abnormally: {}", e);
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
