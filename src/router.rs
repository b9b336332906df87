//! Radix-tree request router.
//!
//! One tree per HTTP method. You register a path, you get a handler back at
//! request time. That is all.

use std::collections::HashMap;
use std::sync::Arc;

use http::Method;
use matchit::Router as MatchitRouter;

use crate::handler::{BoxedHandler, Handler};

/// The application router.
///
/// Build it once at startup; pass it to [`Server::serve`](crate::Server::serve).
/// Registration methods return `self` so routes chain naturally.
pub struct Router {
    routes: HashMap<Method, MatchitRouter<BoxedHandler>>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: HashMap::new() }
    }

    /// Register a `GET` handler. Path parameters use `{name}` syntax and are
    /// retrieved with [`Request::param`](crate::Request::param).
    ///
    /// # Panics
    ///
    /// Panics on a malformed or conflicting route pattern. Routes are
    /// registered at startup, before the listener binds, so this can never
    /// fire mid-traffic.
    pub fn get(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::GET, path, handler)
    }

    /// Register a handler for an arbitrary method + path pair.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    pub(crate) fn lookup(
        &self,
        method: &Method,
        path: &str,
    ) -> Option<(BoxedHandler, HashMap<String, String>)> {
        let tree = self.routes.get(method)?;
        let matched = tree.at(path).ok()?;
        let handler = Arc::clone(matched.value);
        let params = matched
            .params
            .iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Some((handler, params))
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::ErasedHandler;
    use crate::request::Request;
    use crate::response::Response;

    use bytes::Bytes;
    use http::HeaderMap;

    async fn pong(_req: Request) -> Response {
        Response::text("pong")
    }

    fn request(params: HashMap<String, String>) -> Request {
        Request::new(Method::GET, "/".to_owned(), None, HeaderMap::new(), Bytes::new(), params)
    }

    #[tokio::test]
    async fn lookup_finds_registered_route() {
        let router = Router::new().get("/ping", pong);

        let (handler, params) = router.lookup(&Method::GET, "/ping").unwrap();
        assert!(params.is_empty());

        let response = handler.call(request(params)).await;
        assert_eq!(response.body(), b"pong");
    }

    #[test]
    fn lookup_misses_unregistered_path_and_method() {
        let router = Router::new().get("/ping", pong);

        assert!(router.lookup(&Method::GET, "/pong").is_none());
        assert!(router.lookup(&Method::POST, "/ping").is_none());
    }

    #[test]
    fn lookup_captures_path_params() {
        let router = Router::new().get("/users/{id}", pong);

        let (_, params) = router.lookup(&Method::GET, "/users/42").unwrap();
        assert_eq!(params.get("id").map(String::as_str), Some("42"));
    }
}
