//! Mode routing
//!
//! - Server mode (HTTP server)
//! - CLI mode (one-shot commands such as `config-gen`)

pub mod cli;
pub mod server;

pub use cli::run_config_gen;
pub use server::run_server;
