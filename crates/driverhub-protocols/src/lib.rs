//! # driverhub Protocols
//!
//! Wire-level value types and collaborator traits for the driverhub remote
//! WebDriver front end. Contains no dispatch logic.
//!
//! ## Core Types
//!
//! - [`Command`] - A decoded protocol operation
//! - [`Response`] - The outcome of a command, with status and state
//! - [`DriverError`] - Failures raised by handlers
//! - [`error_codes`] - Status/state/HTTP translation tables
//! - [`names`] - Command names handlers are registered under
//!
//! ## Core Traits
//!
//! - [`Handler`] / [`HandlerFactory`] - Per-command execution
//! - [`SessionStore`] - Session lookup for handler factories
//! - [`DialectSource`] - Dialect negotiated by a session

pub mod command;
pub mod dialect;
pub mod error;
pub mod error_codes;
pub mod handler;
pub mod names;
pub mod response;
pub mod session;

pub use command::{Command, Parameters};
pub use dialect::Dialect;
pub use error::{DriverError, ErrorKind};
pub use handler::{Handler, HandlerFactory};
pub use response::Response;
pub use session::{DialectSource, DriverProfile, Session, SessionStore};
