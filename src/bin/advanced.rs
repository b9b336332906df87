//! Advanced demo server — every route wrapped in the counting middleware.
//!
//! Run with:
//!   RUST_LOG=info cargo run --bin stoa-advanced
//!
//! Try:
//!   curl http://localhost:8082/stats
//!   curl 'http://localhost:8082/greet?name=Ada'

use std::sync::Arc;

use stoa::{handlers, middleware, AppState, Handler, Request, Response, Router, Server};
use tracing::info;

const ENDPOINTS: &[&str] = &["/", "/api", "/stats", "/health", "/greet"];

const FEATURES: &[&str] = &["middleware", "logging", "metrics", "concurrency"];

const WELCOME: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>stoa advanced server</title>
  <style>
    body { font-family: Arial, sans-serif; margin: 40px; }
    .feature { background: #e8f4f8; padding: 15px; margin: 10px 0; border-radius: 5px; }
  </style>
</head>
<body>
  <h1>stoa advanced server</h1>
  <p>Demonstrates the request counting and timing middleware.</p>
  <div class="feature">
    <strong>Features:</strong>
    <ul>
      <li>Request logging middleware</li>
      <li>Atomic request counting</li>
      <li>Performance timing</li>
      <li>Structured JSON responses</li>
    </ul>
  </div>
  <p>Check the <a href="/stats">/stats</a> endpoint for server statistics.</p>
</body>
</html>
"#;

async fn index(_req: Request) -> Response {
    Response::html(WELCOME)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let state = Arc::new(AppState::new("advanced-server", "2.0.0", ENDPOINTS));
    info!(endpoints = ?state.endpoints(), "starting advanced server");

    // Every route goes through the counting middleware, so /stats sees the
    // full request total.
    let app = Router::new()
        .get("/", traced(&state, index))
        .get("/api", traced(&state, handlers::api(Arc::clone(&state), FEATURES)))
        .get("/stats", traced(&state, handlers::stats(Arc::clone(&state))))
        .get("/health", traced(&state, handlers::health(Arc::clone(&state))))
        .get("/greet", traced(&state, handlers::greet(Arc::clone(&state))));

    Server::bind("0.0.0.0:8082")
        .serve(app)
        .await
        .expect("server error");
}

fn traced(state: &Arc<AppState>, handler: impl Handler) -> impl Handler {
    middleware::trace(Arc::clone(state), handler)
}
