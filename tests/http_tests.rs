//! HTTP route tests
//!
//! Drives the actix app exactly as the server assembles it: GraphQL endpoint,
//! `/`, `/health` and the request middleware.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use actix_web::{App, HttpMessage, HttpRequest, HttpResponse, web};
use serde_json::{Value, json};

use userql::api::graphql::build_schema;
use userql::api::middleware::{RequestId, RequestIdMiddleware, TimingMiddleware};
use userql::api::services::configure_app;
use userql::config::GraphQlConfig;
use userql::storage::UserStore;

fn graphql_body(query: &str) -> Value {
    json!({ "query": query })
}

#[actix_rt::test]
async fn test_index_returns_welcome_text() {
    let schema = build_schema(Arc::new(UserStore::with_demo_users()));
    let app = test::init_service(
        App::new().configure(|cfg| configure_app(cfg, schema.clone(), GraphQlConfig::default())),
    )
    .await;

    let req = TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    assert_eq!(
        body,
        "Welcome to GraphQL API Demo! Visit /graphql to access the API."
    );
}

#[actix_rt::test]
async fn test_index_mentions_configured_path() {
    let schema = build_schema(Arc::new(UserStore::new()));
    let graphql = GraphQlConfig {
        path: "/api/graphql".to_string(),
        ..GraphQlConfig::default()
    };
    let app = test::init_service(
        App::new().configure(|cfg| configure_app(cfg, schema.clone(), graphql.clone())),
    )
    .await;

    let req = TestRequest::get().uri("/").to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert_eq!(
        body,
        "Welcome to GraphQL API Demo! Visit /api/graphql to access the API."
    );

    let req = TestRequest::post()
        .uri("/api/graphql")
        .set_json(graphql_body("{ users { id } }"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({ "data": { "users": [] } }));
}

#[actix_rt::test]
async fn test_health_returns_healthy() {
    let schema = build_schema(Arc::new(UserStore::new()));
    let app = test::init_service(
        App::new().configure(|cfg| configure_app(cfg, schema.clone(), GraphQlConfig::default())),
    )
    .await;

    let req = TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "status": "healthy" }));

    let req = TestRequest::default()
        .method(actix_web::http::Method::HEAD)
        .uri("/health")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_rt::test]
async fn test_graphql_post_round_trip_shares_store() {
    let store = Arc::new(UserStore::with_demo_users());
    let schema = build_schema(store.clone());
    let app = test::init_service(
        App::new().configure(|cfg| configure_app(cfg, schema.clone(), GraphQlConfig::default())),
    )
    .await;

    let req = TestRequest::post()
        .uri("/graphql")
        .set_json(graphql_body(
            r#"mutation { createUser(name: "Carl") { id name age } }"#,
        ))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body,
        json!({ "data": { "createUser": { "id": "3", "name": "Carl", "age": 0 } } })
    );
    assert_eq!(store.len(), 3);

    let req = TestRequest::post()
        .uri("/graphql")
        .set_json(graphql_body("{ users { name } }"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body,
        json!({ "data": { "users": [
            { "name": "Alice" }, { "name": "Bob" }, { "name": "Carl" }
        ] } })
    );
}

#[actix_rt::test]
async fn test_graphql_update_missing_reports_error() {
    let schema = build_schema(Arc::new(UserStore::with_demo_users()));
    let app = test::init_service(
        App::new().configure(|cfg| configure_app(cfg, schema.clone(), GraphQlConfig::default())),
    )
    .await;

    let req = TestRequest::post()
        .uri("/graphql")
        .set_json(graphql_body(
            r#"mutation { updateUser(id: "9", name: "Ghost") { id } }"#,
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"], json!({ "updateUser": null }));
    assert_eq!(body["errors"][0]["message"], json!("User not found"));
}

#[actix_rt::test]
async fn test_graphiql_served_on_get_when_enabled() {
    let schema = build_schema(Arc::new(UserStore::new()));
    let app = test::init_service(
        App::new().configure(|cfg| configure_app(cfg, schema.clone(), GraphQlConfig::default())),
    )
    .await;

    let req = TestRequest::get().uri("/graphql").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"), "{}", content_type);
}

#[actix_rt::test]
async fn test_graphiql_disabled_rejects_get() {
    let schema = build_schema(Arc::new(UserStore::new()));
    let graphql = GraphQlConfig {
        playground: false,
        ..GraphQlConfig::default()
    };
    let app = test::init_service(
        App::new().configure(|cfg| configure_app(cfg, schema.clone(), graphql.clone())),
    )
    .await;

    let req = TestRequest::get().uri("/graphql").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// =============================================================================
// Middleware
// =============================================================================

async fn ok_handler() -> HttpResponse {
    HttpResponse::Ok().body("OK")
}

#[actix_rt::test]
async fn test_request_id_generated_when_absent() {
    let app = test::init_service(
        App::new()
            .wrap(TimingMiddleware)
            .wrap(RequestIdMiddleware)
            .route("/ping", web::get().to(ok_handler)),
    )
    .await;

    let req = TestRequest::get().uri("/ping").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let id = resp
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .expect("x-request-id header should be set");
    assert_eq!(id.len(), 36);
}

#[actix_rt::test]
async fn test_request_id_echoes_client_value() {
    let app = test::init_service(
        App::new()
            .wrap(RequestIdMiddleware)
            .route("/ping", web::get().to(ok_handler)),
    )
    .await;

    let req = TestRequest::get()
        .uri("/ping")
        .insert_header(("X-Request-ID", "trace-abc-123"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(
        resp.headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok()),
        Some("trace-abc-123")
    );
}

async fn request_id_handler(req: HttpRequest) -> HttpResponse {
    let id = req
        .extensions()
        .get::<RequestId>()
        .map(|id| id.0.clone())
        .unwrap_or_default();
    HttpResponse::Ok().body(id)
}

#[actix_rt::test]
async fn test_request_id_visible_to_handlers_and_matches_header() {
    let app = test::init_service(
        App::new()
            .wrap(TimingMiddleware)
            .wrap(RequestIdMiddleware)
            .route("/whoami", web::get().to(request_id_handler)),
    )
    .await;

    let req = TestRequest::get().uri("/whoami").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let header = resp
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .expect("x-request-id header should be set");
    let body = test::read_body(resp).await;
    assert_eq!(body, header.as_bytes());
}

#[actix_rt::test]
async fn test_unknown_route_is_not_found() {
    let schema = build_schema(Arc::new(UserStore::new()));
    let app = test::init_service(
        App::new()
            .wrap(RequestIdMiddleware)
            .configure(|cfg| configure_app(cfg, schema.clone(), GraphQlConfig::default())),
    )
    .await;

    let req = TestRequest::get().uri("/nope").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
