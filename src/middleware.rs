//! Middleware layer.
//!
//! Middleware composes cross-cutting behavior around a handler without
//! changing its contract: the wrapped handler's response passes through
//! untouched.
//!
//! The one middleware shipped here is [`trace`], which numbers and times
//! every request it sees.

use std::sync::Arc;
use std::time::Instant;

use tracing::info;

use crate::handler::{ErasedHandler, Handler};
use crate::request::Request;
use crate::state::AppState;

/// Wraps `handler` with request counting and entry/exit logging.
///
/// On each invocation the wrapper:
/// 1. draws the next sequence value from the state's counter;
/// 2. logs the sequence, method, and path;
/// 3. invokes the wrapped handler;
/// 4. logs the sequence, response status, and elapsed time.
///
/// The sequence reflects the order increments landed, not network arrival
/// order. A panic inside the wrapped handler propagates and the completion
/// line is never logged; the entry line always is.
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use stoa::{handlers, middleware, AppState, Router};
///
/// let state = Arc::new(AppState::new("svc", "1.0.0", &["/greet"]));
/// let app = Router::new()
///     .get("/greet", middleware::trace(Arc::clone(&state), handlers::greet(state)));
/// ```
pub fn trace(state: Arc<AppState>, handler: impl Handler) -> impl Handler {
    let inner = handler.into_boxed_handler();
    move |req: Request| {
        let state = Arc::clone(&state);
        let inner = Arc::clone(&inner);
        async move {
            let seq = state.counter().next();
            let method = req.method().clone();
            let path = req.path().to_owned();
            info!(seq, %method, %path, "request received");

            let start = Instant::now();
            let response = inner.call(req).await;
            let elapsed = start.elapsed();

            info!(
                seq,
                status = response.status_code().as_u16(),
                elapsed_us = elapsed.as_micros() as u64,
                "request completed"
            );
            response
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::Response;

    use std::collections::HashMap;

    use bytes::Bytes;
    use http::{HeaderMap, Method, StatusCode};
    use tokio::task::JoinSet;

    fn request(path: &str) -> Request {
        Request::new(
            Method::GET,
            path.to_owned(),
            None,
            HeaderMap::new(),
            Bytes::new(),
            HashMap::new(),
        )
    }

    async fn echo_path(req: Request) -> Response {
        Response::text(req.path().to_owned())
    }

    #[tokio::test]
    async fn response_passes_through_unchanged() {
        let state = Arc::new(AppState::new("test", "0.0.0", &[]));
        let wrapped = trace(Arc::clone(&state), echo_path).into_boxed_handler();

        let response = wrapped.call(request("/hello")).await;
        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(response.body(), b"/hello");
        assert_eq!(state.counter().total(), 1);
    }

    #[tokio::test]
    async fn concurrent_requests_each_counted_once() {
        let state = Arc::new(AppState::new("test", "0.0.0", &[]));
        let wrapped = trace(Arc::clone(&state), echo_path).into_boxed_handler();

        let n = 100;
        let mut tasks = JoinSet::new();
        for i in 0..n {
            let wrapped = Arc::clone(&wrapped);
            tasks.spawn(async move { wrapped.call(request(&format!("/req/{i}"))).await });
        }

        let mut completed = 0u64;
        while let Some(result) = tasks.join_next().await {
            assert_eq!(result.unwrap().status_code(), StatusCode::OK);
            completed += 1;
        }

        assert_eq!(completed, n);
        assert_eq!(state.counter().total(), n);
    }
}
