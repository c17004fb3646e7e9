//! Wire codecs: HTTP requests to commands, responses to HTTP.

pub mod catalog;
mod command;
mod response;
mod template;

pub use catalog::{builtin_routes, RouteDefinition};
pub use command::{CommandCodec, Route, RouteMatch};
pub use response::{codec_for, LegacyResponseCodec, ResponseCodec, W3cResponseCodec};
pub use template::UriTemplate;
