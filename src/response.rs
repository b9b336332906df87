//! Outgoing HTTP response type and the [`IntoResponse`] conversion trait.
//!
//! Build a [`Response`] in your handler and return it. That is the entire
//! job description.

use bytes::Bytes;
use http::StatusCode;
use http_body_util::Full;
use serde::Serialize;
use tracing::error;

/// An outgoing HTTP response.
///
/// # Shortcuts (200 OK)
///
/// ```rust
/// use stoa::Response;
///
/// Response::text("hello");
/// Response::html("<h1>hello</h1>");
/// Response::json(&serde_json::json!({ "id": 1 }));
/// Response::status(http::StatusCode::NO_CONTENT);
/// ```
///
/// # Builder (custom status or headers)
///
/// ```rust
/// use http::StatusCode;
/// use stoa::Response;
///
/// Response::builder()
///     .status(StatusCode::CREATED)
///     .header("location", "/users/42")
///     .json(&serde_json::json!({ "id": 42 }));
/// ```
pub struct Response {
    status: StatusCode,
    headers: Vec<(String, String)>,
    body: Bytes,
}

impl Response {
    /// `200 OK` — `application/json`, serialized with serde_json.
    ///
    /// Serialization of a well-formed value does not fail in practice; if it
    /// does, the failure is logged and the response degrades to a bodyless
    /// `500 Internal Server Error`.
    pub fn json<T: Serialize>(value: &T) -> Self {
        match serde_json::to_vec(value) {
            Ok(bytes) => Self::with_body("application/json", bytes.into()),
            Err(e) => {
                error!("response serialization failed: {e}");
                Self::status(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }

    /// `200 OK` — `text/plain; charset=utf-8`.
    pub fn text(body: impl Into<String>) -> Self {
        Self::with_body("text/plain; charset=utf-8", body.into().into())
    }

    /// `200 OK` — `text/html; charset=utf-8`.
    pub fn html(body: impl Into<String>) -> Self {
        Self::with_body("text/html; charset=utf-8", body.into().into())
    }

    /// Response with no body.
    pub fn status(status: StatusCode) -> Self {
        Self { status, headers: Vec::new(), body: Bytes::new() }
    }

    /// Builder for responses that need a custom status or extra headers.
    pub fn builder() -> ResponseBuilder {
        ResponseBuilder { status: StatusCode::OK, headers: Vec::new() }
    }

    pub fn status_code(&self) -> StatusCode {
        self.status
    }

    #[cfg(test)]
    pub(crate) fn body(&self) -> &[u8] {
        &self.body
    }

    #[cfg(test)]
    pub(crate) fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    fn with_body(content_type: &str, body: Bytes) -> Self {
        Self {
            status: StatusCode::OK,
            headers: vec![("content-type".to_owned(), content_type.to_owned())],
            body,
        }
    }

    pub(crate) fn into_hyper(self) -> http::Response<Full<Bytes>> {
        let mut builder = http::Response::builder().status(self.status);
        for (name, value) in &self.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        // The only failure mode left is a malformed header name or value,
        // which handlers in this crate never produce.
        builder
            .body(Full::new(self.body))
            .unwrap_or_else(|e| {
                error!("malformed response dropped: {e}");
                http::Response::builder()
                    .status(StatusCode::INTERNAL_SERVER_ERROR)
                    .body(Full::new(Bytes::new()))
                    .expect("empty 500 response is always valid")
            })
    }
}

/// Fluent builder for [`Response`].
///
/// Obtain via [`Response::builder()`]. Defaults to `200 OK`. Terminated by a
/// typed body method.
pub struct ResponseBuilder {
    status: StatusCode,
    headers: Vec<(String, String)>,
}

impl ResponseBuilder {
    pub fn status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }

    /// Terminate with a JSON body (`application/json`).
    pub fn json<T: Serialize>(self, value: &T) -> Response {
        let mut response = Response::json(value);
        if response.status == StatusCode::OK {
            response.status = self.status;
            response.headers.extend(self.headers);
        }
        response
    }

    /// Terminate with a plain-text body (`text/plain; charset=utf-8`).
    pub fn text(self, body: impl Into<String>) -> Response {
        let mut response = Response::text(body);
        response.status = self.status;
        response.headers.extend(self.headers);
        response
    }

    /// Terminate with no body.
    pub fn no_body(self) -> Response {
        Response { status: self.status, headers: self.headers, body: Bytes::new() }
    }
}

/// Conversion into an HTTP [`Response`].
///
/// Implemented for the types handlers commonly return; implement it on your
/// own types to return them directly.
pub trait IntoResponse {
    fn into_response(self) -> Response;
}

impl IntoResponse for Response {
    fn into_response(self) -> Response {
        self
    }
}

impl IntoResponse for &'static str {
    fn into_response(self) -> Response {
        Response::text(self)
    }
}

impl IntoResponse for String {
    fn into_response(self) -> Response {
        Response::text(self)
    }
}

/// Return a status directly from a handler: `return StatusCode::NOT_FOUND`.
impl IntoResponse for StatusCode {
    fn into_response(self) -> Response {
        Response::status(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Serialize, Deserialize)]
    struct Probe {
        id: u32,
    }

    #[test]
    fn json_sets_content_type_and_round_trips() {
        let response = Response::json(&Probe { id: 7 });
        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(response.header("content-type"), Some("application/json"));

        let parsed: Probe = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(parsed.id, 7);
    }

    #[test]
    fn builder_applies_status_and_headers() {
        let response = Response::builder()
            .status(StatusCode::CREATED)
            .header("location", "/users/42")
            .json(&Probe { id: 42 });

        assert_eq!(response.status_code(), StatusCode::CREATED);
        assert_eq!(response.header("location"), Some("/users/42"));
    }

    #[test]
    fn status_only_has_empty_body() {
        let response = Response::status(StatusCode::NO_CONTENT);
        assert!(response.body().is_empty());
        assert_eq!(response.header("content-type"), None);
    }

    #[test]
    fn into_hyper_preserves_status_and_headers() {
        let hyper_response = Response::html("<h1>ok</h1>").into_hyper();
        assert_eq!(hyper_response.status(), StatusCode::OK);
        assert_eq!(
            hyper_response.headers().get("content-type").unwrap(),
            "text/html; charset=utf-8"
        );
    }
}
