use actix_web::{HttpResponse, Responder, web};
use tracing::trace;

use crate::config::GraphQlConfig;

pub struct IndexService;

impl IndexService {
    pub async fn welcome(config: web::Data<GraphQlConfig>) -> impl Responder {
        trace!("Received index request");

        HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body(welcome_message(&config.path))
    }
}

pub fn welcome_message(graphql_path: &str) -> String {
    format!(
        "Welcome to GraphQL API Demo! Visit {} to access the API.",
        graphql_path
    )
}

pub fn index_routes() -> actix_web::Resource {
    web::resource("/")
        .route(web::get().to(IndexService::welcome))
        .route(web::head().to(IndexService::welcome))
}
