//! Error types for the driverhub protocol layer.

mod driver;

pub use driver::*;
