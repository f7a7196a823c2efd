pub mod graphql;
pub mod health;
pub mod index;

pub use graphql::{GraphQlService, graphql_routes};
pub use health::{HealthService, health_routes};
pub use index::{IndexService, index_routes};

use actix_web::web;

use crate::api::graphql::UserSchema;
use crate::config::GraphQlConfig;

/// Register shared state and every route on an actix `App`
///
/// ```ignore
/// App::new().configure(|cfg| configure_app(cfg, schema.clone(), graphql_config.clone()))
/// ```
pub fn configure_app(cfg: &mut web::ServiceConfig, schema: UserSchema, graphql: GraphQlConfig) {
    let graphql_resource = graphql_routes(&graphql);

    cfg.app_data(web::Data::new(schema))
        .app_data(web::Data::new(graphql))
        .service(graphql_resource)
        .service(health_routes())
        .service(index_routes());
}
