//! System-level modules
//!
//! Process-wide setup that is not part of request handling.

pub mod logging;

pub use logging::init_logging;
