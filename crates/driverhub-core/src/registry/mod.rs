//! Registry binding command names to handler factories.

mod handler;

pub use handler::HandlerRegistry;
