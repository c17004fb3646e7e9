//! HTTP adapter between axum and the dispatcher.

pub mod routes;
