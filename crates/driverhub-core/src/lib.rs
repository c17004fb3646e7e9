//! # driverhub Core
//!
//! Shared, process-wide state for the driverhub dispatcher.
//!
//! ## Components
//!
//! - [`HandlerRegistry`] - Command name to handler factory bindings
//! - [`MemorySessionStore`] - In-memory sessions and driver profiles

pub mod registry;
pub mod session;

pub use registry::HandlerRegistry;
pub use session::MemorySessionStore;
