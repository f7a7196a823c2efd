pub mod graphql;
pub mod middleware;
pub mod services;
