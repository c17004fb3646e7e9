//! [`Response`] to HTTP encoding, one codec per dialect.

use axum::http::StatusCode;
use serde_json::{json, Value};
use tracing::error;

use driverhub_protocols::error_codes::{self, UNHANDLED_ERROR};
use driverhub_protocols::{Dialect, Response};

use crate::transport::HttpResponse;

/// Encodes a response for the wire.
pub trait ResponseCodec: Send + Sync {
    fn encode(&self, response: &Response) -> HttpResponse;
}

/// Legacy JSON wire protocol: every reply is HTTP 200 and the outcome lives in
/// the `status` and `state` body fields.
#[derive(Debug, Default, Clone, Copy)]
pub struct LegacyResponseCodec;

impl ResponseCodec for LegacyResponseCodec {
    fn encode(&self, response: &Response) -> HttpResponse {
        let body = json!({
            "sessionId": response.session_id(),
            "status": response.status(),
            "state": response.state(),
            "value": response.value(),
        });
        to_http(StatusCode::OK, &body)
    }
}

/// W3C protocol: the HTTP status reflects the outcome, and error values carry
/// `error`, `message` and `stacktrace`.
#[derive(Debug, Default, Clone, Copy)]
pub struct W3cResponseCodec;

impl ResponseCodec for W3cResponseCodec {
    fn encode(&self, response: &Response) -> HttpResponse {
        let value = if response.is_success() {
            response.value().clone()
        } else {
            json!({
                "error": response.state(),
                "message": error_message(response),
                "stacktrace": "",
            })
        };
        let body = json!({
            "sessionId": response.session_id(),
            "status": response.status(),
            "value": value,
        });
        let status = StatusCode::from_u16(error_codes::http_status(response.status()))
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        to_http(status, &body)
    }
}

/// The codec for a dialect.
pub fn codec_for(dialect: Dialect) -> &'static dyn ResponseCodec {
    match dialect {
        Dialect::Oss => &LegacyResponseCodec,
        Dialect::W3c => &W3cResponseCodec,
    }
}

fn error_message(response: &Response) -> String {
    match response.value() {
        Value::Null => response.state().to_string(),
        Value::String(message) => message.clone(),
        Value::Object(map) => match map.get("message") {
            Some(Value::String(message)) => message.clone(),
            _ => response.value().to_string(),
        },
        other => other.to_string(),
    }
}

fn to_http(status: StatusCode, body: &Value) -> HttpResponse {
    match serde_json::to_vec(body) {
        Ok(bytes) => HttpResponse::json(status, bytes),
        Err(err) => {
            error!(error = %err, "Failed to serialize response body");
            let fallback = format!(
                r#"{{"status":{UNHANDLED_ERROR},"value":{{"error":"unknown error","message":"unserializable response"}}}}"#
            );
            HttpResponse::json(StatusCode::INTERNAL_SERVER_ERROR, fallback)
        }
    }
}

#[cfg(test)]
#[path = "response_tests.rs"]
mod tests;
