//! userql - A minimal GraphQL API over an in-memory user list
//!
//! # Architecture
//! - `storage`: `User` model and the in-memory `UserStore`
//! - `api`: GraphQL schema, HTTP services and middleware
//! - `config`: Static configuration (TOML + environment)
//! - `runtime`: Server bootstrap, shutdown and CLI modes
//! - `system`: Logging setup

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod runtime;
pub mod storage;
pub mod system;
