//! # stoa
//!
//! A small HTTP demo-server toolkit. One minimal framework, one middleware,
//! two example servers. Nothing more.
//!
//! ## What's here
//!
//! - Radix-tree routing — O(path-length) lookup via [`matchit`]
//! - Async I/O — tokio + hyper, HTTP/1.1 and HTTP/2
//! - Graceful shutdown — SIGTERM / Ctrl-C, drains in-flight requests
//! - [`middleware::trace`] — per-request sequence number, method, path,
//!   status, and latency, logged through [`tracing`]
//! - A shared [`AppState`] carrying service identity, start time, and the
//!   request counter — built once at bootstrap and passed by `Arc`, never a
//!   global
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use stoa::{handlers, middleware, AppState, Router, Server};
//!
//! #[tokio::main]
//! async fn main() {
//!     tracing_subscriber::fmt::init();
//!
//!     let state = Arc::new(AppState::new(
//!         "demo-server",
//!         "1.0.0",
//!         &["/api", "/health"],
//!     ));
//!
//!     let app = Router::new()
//!         .get("/api",    middleware::trace(Arc::clone(&state), handlers::api(Arc::clone(&state), &[])))
//!         .get("/health", middleware::trace(Arc::clone(&state), handlers::health(Arc::clone(&state))));
//!
//!     Server::bind("0.0.0.0:8080").serve(app).await.unwrap();
//! }
//! ```

mod error;
mod handler;
mod request;
mod response;
mod router;
mod server;
mod state;

pub mod handlers;
pub mod middleware;
pub mod models;

pub use error::Error;
pub use handler::Handler;
pub use request::Request;
pub use response::{IntoResponse, Response, ResponseBuilder};
pub use router::Router;
pub use server::Server;
pub use state::{AppState, RequestCounter};
