//! Main demo server — plain routes, no middleware.
//!
//! Run with:
//!   RUST_LOG=info cargo run --bin stoa-server
//!
//! Try:
//!   curl http://localhost:8080/
//!   curl http://localhost:8080/api
//!   curl http://localhost:8080/health
//!   curl http://localhost:8080/info
//!   curl http://localhost:8080/time

use std::sync::Arc;

use stoa::{handlers, AppState, Request, Response, Router, Server};
use tracing::info;

const ENDPOINTS: &[&str] = &["/", "/api", "/health", "/info", "/time"];

const WELCOME: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>stoa main server</title>
  <style>
    body { font-family: Arial, sans-serif; margin: 40px; line-height: 1.6; }
    .endpoint { background: #f4f4f4; padding: 15px; margin: 10px 0; border-radius: 5px; }
  </style>
</head>
<body>
  <h1>stoa main server</h1>
  <p>A small demo of the stoa HTTP toolkit.</p>
  <div class="endpoint">
    <strong>GET /</strong> - this welcome page<br>
    <strong>GET /api</strong> - JSON API response<br>
    <strong>GET /health</strong> - health check status<br>
    <strong>GET /info</strong> - server information<br>
    <strong>GET /time</strong> - current server time
  </div>
</body>
</html>
"#;

async fn index(_req: Request) -> Response {
    Response::html(WELCOME)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let state = Arc::new(AppState::new("main-server", "1.0.0", ENDPOINTS));
    info!(endpoints = ?state.endpoints(), "starting main server");

    let app = Router::new()
        .get("/", index)
        .get("/api", handlers::api(Arc::clone(&state), &[]))
        .get("/health", handlers::health(Arc::clone(&state)))
        .get("/info", handlers::info(Arc::clone(&state)))
        .get("/time", handlers::time(Arc::clone(&state)));

    Server::bind("0.0.0.0:8080")
        .serve(app)
        .await
        .expect("server error");
}
