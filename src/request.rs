//! Incoming HTTP request type.

use std::borrow::Cow;
use std::collections::HashMap;

use bytes::Bytes;
use http::{HeaderMap, Method};

/// An incoming HTTP request.
///
/// Built by the server from the hyper request after the body has been
/// collected; handlers never see a partially-read request.
pub struct Request {
    method: Method,
    path: String,
    query: Option<String>,
    headers: HeaderMap,
    body: Bytes,
    params: HashMap<String, String>,
}

impl Request {
    pub(crate) fn new(
        method: Method,
        path: String,
        query: Option<String>,
        headers: HeaderMap,
        body: Bytes,
        params: HashMap<String, String>,
    ) -> Self {
        Self { method, path, query, headers, body, params }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Case-insensitive header lookup. Non-UTF-8 header values read as absent.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Returns a named path parameter.
    ///
    /// For a route `/users/{id}`, `req.param("id")` on `/users/42` returns
    /// `Some("42")`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Returns the first query-string value for `key`, percent-decoded.
    ///
    /// `/greet?name=Ada%20Lovelace` → `req.query("name")` is
    /// `Some("Ada Lovelace")`.
    pub fn query(&self, key: &str) -> Option<Cow<'_, str>> {
        let raw = self.query.as_deref()?;
        form_urlencoded::parse(raw.as_bytes()).find_map(|(k, v)| (k == key).then_some(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get(path: &str, query: Option<&str>) -> Request {
        Request::new(
            Method::GET,
            path.to_owned(),
            query.map(str::to_owned),
            HeaderMap::new(),
            Bytes::new(),
            HashMap::new(),
        )
    }

    #[test]
    fn query_returns_first_value() {
        let req = get("/greet", Some("name=Ada&name=Grace"));
        assert_eq!(req.query("name").as_deref(), Some("Ada"));
    }

    #[test]
    fn query_percent_decodes() {
        let req = get("/greet", Some("name=Ada%20Lovelace"));
        assert_eq!(req.query("name").as_deref(), Some("Ada Lovelace"));
    }

    #[test]
    fn query_decodes_plus_as_space() {
        let req = get("/greet", Some("name=Ada+Lovelace"));
        assert_eq!(req.query("name").as_deref(), Some("Ada Lovelace"));
    }

    #[test]
    fn header_lookup_is_case_insensitive_and_body_is_exposed() {
        let mut headers = HeaderMap::new();
        headers.insert(
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static("application/json"),
        );
        let req = Request::new(
            Method::POST,
            "/users".to_owned(),
            None,
            headers,
            Bytes::from_static(b"{\"name\":\"alice\"}"),
            HashMap::new(),
        );

        assert_eq!(req.header("Content-Type"), Some("application/json"));
        assert_eq!(req.header("content-type"), Some("application/json"));
        assert_eq!(req.header("x-missing"), None);
        assert_eq!(req.body(), b"{\"name\":\"alice\"}");
    }

    #[test]
    fn query_missing_key_is_none() {
        let req = get("/greet", Some("other=1"));
        assert_eq!(req.query("name"), None);

        let req = get("/greet", None);
        assert_eq!(req.query("name"), None);
    }
}
