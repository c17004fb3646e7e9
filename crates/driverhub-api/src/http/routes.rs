//! HTTP route definitions.
//!
//! The protocol has its own route table, so axum only supplies a fallback
//! that hands every request to the dispatcher.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::extract::State;
use axum::http::Request;
use axum::response::{IntoResponse, Response};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::error::DecodeError;
use crate::state::AppState;
use crate::transport::HttpRequest;

/// Create the router serving every protocol path.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .fallback(dispatch)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn dispatch(State(state): State<Arc<AppState>>, request: Request<Body>) -> Response {
    let (parts, body) = request.into_parts();
    let body = match to_bytes(body, state.max_body_bytes).await {
        Ok(body) => body,
        Err(err) => {
            let error = DecodeError::UnreadableBody {
                limit: state.max_body_bytes,
                message: err.to_string(),
            };
            return state
                .dispatcher
                .reject(&parts.method, &parts.uri, error)
                .into_response();
        }
    };

    let request = HttpRequest {
        method: parts.method,
        uri: parts.uri,
        headers: parts.headers,
        body,
    };
    state.dispatcher.handle_request(request).await.into_response()
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
