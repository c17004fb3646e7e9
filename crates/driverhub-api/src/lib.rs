//! # driverhub API
//!
//! HTTP front end of the driverhub remote WebDriver server.
//!
//! ## Request flow
//!
//! ```text
//! axum fallback ──▶ HttpRequest ──▶ Dispatcher
//!                                     │ CommandCodec::decode   (route table)
//!                                     │ HandlerRegistry::lookup
//!                                     │ Handler::execute
//!                                     ▼
//!                   HttpResponse ◀── ResponseCodec (legacy or W3C)
//! ```
//!
//! Every failure along the way is translated into a protocol error response
//! through [`driverhub_protocols::error_codes`].

pub mod codec;
pub mod dispatcher;
pub mod error;
pub mod handlers;
pub mod http;
pub mod server;
pub mod state;
pub mod transport;

pub use codec::{CommandCodec, ResponseCodec, Route, RouteMatch};
pub use dispatcher::Dispatcher;
pub use error::{DecodeError, DispatchError, ServerError};
pub use handlers::register_builtin_handlers;
pub use http::routes::create_router;
pub use server::HubServer;
pub use state::AppState;
pub use transport::{HttpRequest, HttpResponse};
