//! Transport-neutral request and response values.
//!
//! The dispatcher works on these rather than on axum types so it can be driven
//! directly from tests or another listener.

use axum::http::{header, HeaderMap, HeaderValue, Method, StatusCode, Uri};
use axum::response::IntoResponse;
use bytes::Bytes;

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// An incoming HTTP request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub uri: Uri,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl HttpRequest {
    pub fn new(method: Method, uri: Uri) -> Self {
        Self {
            method,
            uri,
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// The request path without its query string.
    pub fn path(&self) -> &str {
        self.uri.path()
    }
}

/// An outgoing HTTP response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl HttpResponse {
    /// A JSON response with the headers every protocol reply carries.
    pub fn json(status: StatusCode, body: impl Into<Bytes>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// The body parsed as JSON.
    pub fn json_body(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

impl IntoResponse for HttpResponse {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.headers, self.body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_path_drops_query() {
        let request = HttpRequest::new(Method::GET, Uri::from_static("/status?verbose=1"));
        assert_eq!(request.path(), "/status");
        assert!(request.body.is_empty());
    }

    #[test]
    fn test_json_response_headers() {
        let response = HttpResponse::json(StatusCode::OK, r#"{"value":null}"#);
        assert_eq!(response.headers[header::CONTENT_TYPE], JSON_CONTENT_TYPE);
        assert_eq!(response.headers[header::CACHE_CONTROL], "no-cache");
        assert_eq!(response.json_body().unwrap()["value"], serde_json::Value::Null);
    }
}
