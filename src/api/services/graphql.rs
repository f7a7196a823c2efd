use actix_web::{HttpResponse, Responder, web};
use async_graphql::http::GraphiQLSource;
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};
use tracing::trace;

use crate::api::graphql::UserSchema;
use crate::config::GraphQlConfig;

/// GraphQL Service
pub struct GraphQlService;

impl GraphQlService {
    pub async fn execute(schema: web::Data<UserSchema>, req: GraphQLRequest) -> GraphQLResponse {
        let request = req.into_inner();
        trace!(
            "Executing GraphQL operation {:?}",
            request.operation_name.as_deref().unwrap_or("<anonymous>")
        );
        schema.execute(request).await.into()
    }

    // GraphiQL IDE，指向当前配置的 GraphQL 端点
    pub async fn playground(config: web::Data<GraphQlConfig>) -> impl Responder {
        trace!("Serving GraphiQL for {}", config.path);

        HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(GraphiQLSource::build().endpoint(&config.path).finish())
    }
}

/// GraphQL 路由配置
///
/// `POST` always executes; `GET` serves GraphiQL only when the playground is
/// enabled, otherwise actix answers 405.
pub fn graphql_routes(config: &GraphQlConfig) -> actix_web::Resource {
    let resource =
        web::resource(config.path.as_str()).route(web::post().to(GraphQlService::execute));

    if config.playground {
        resource.route(web::get().to(GraphQlService::playground))
    } else {
        resource
    }
}
