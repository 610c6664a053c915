//! HTTP Server for the Mock Backend
//!
//! Serves the mock retrieve-date lookup the way the original proxy
//! bundle exposes it: a single resource that ignores request input and
//! answers with the generated payload, plus a health endpoint.

use axum::{
    body::Body,
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use simswap_core::{
    generate_default, ResponseContext, CONTENT_TYPE_JSON, CONTENT_TYPE_VAR, RESPONSE_CONTENT_VAR,
};
use tower_http::cors::CorsLayer;
use tracing::{error, info};

/// Run the mock backend server
///
/// Binds to localhost on the given port and serves until shutdown.
pub async fn run_server(port: u16) -> Result<(), String> {
    // CORS layer - allow all for a mock/demo surface
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(tower_http::cors::Any);

    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/sim-swap/v0/retrieve-date", post(retrieve_date_handler))
        .layer(cors);

    // Bind to localhost
    let addr = format!("127.0.0.1:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| format!("Failed to bind to {}: {e}", addr))?;

    eprintln!("[SIMSWAP MOCK] Listening on http://{}", addr);
    info!("Mock backend listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| format!("Server error: {e}"))?;

    Ok(())
}

/// Health check endpoint
async fn health_handler() -> (StatusCode, &'static str) {
    (StatusCode::OK, "Mock backend is healthy")
}

/// Mock retrieve-date handler
///
/// Runs the generator, publishes its output through a response context
/// (header first, body second), and maps the context onto the HTTP
/// response. Request input is ignored by design.
async fn retrieve_date_handler() -> Response {
    let mock = match generate_default() {
        Ok(mock) => mock,
        Err(e) => {
            error!("Mock generation failed: {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Mock generation failed").into_response();
        }
    };

    let mut ctx = ResponseContext::new();
    mock.apply_to(&mut ctx);

    let content_type = ctx.get(CONTENT_TYPE_VAR).unwrap_or(CONTENT_TYPE_JSON);
    let body = ctx.get(RESPONSE_CONTENT_VAR).unwrap_or_default();

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body.to_string()))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}
