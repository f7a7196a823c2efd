//! Server mode
//!
//! Builds the user store and schema, then serves the GraphQL endpoint and
//! the status routes until the server exits or Ctrl+C arrives.

use actix_web::{
    App, HttpServer,
    middleware::{Compress, DefaultHeaders},
    web,
};
use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::api::middleware::{RequestIdMiddleware, TimingMiddleware};
use crate::api::services::configure_app;
use crate::config::get_config;
use crate::runtime::lifetime;

/// Run the HTTP server
///
/// **Note**: Config and logging must be initialized before calling this
/// function.
pub async fn run_server() -> Result<()> {
    let started_at = chrono::Utc::now();

    let startup = lifetime::startup::prepare_server_startup();
    let store = startup.store.clone();
    let schema = startup.schema.clone();

    let config = get_config();
    let graphql_config = config.graphql.clone();
    let cpu_count = config.server.cpu_count.clamp(1, 32);

    if graphql_config.playground {
        info!("GraphiQL available at GET {}", graphql_config.path);
    }

    let bind_address = format!("{}:{}", config.server.host, config.server.port);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TimingMiddleware) // 最内层，RequestId 已写入扩展
            .wrap(RequestIdMiddleware)
            .wrap(Compress::default())
            .wrap(DefaultHeaders::new().add(("Cache-Control", "no-cache, no-store, must-revalidate")))
            .app_data(web::PayloadConfig::new(1024 * 1024))
            .configure(|cfg| configure_app(cfg, schema.clone(), graphql_config.clone()))
    })
    .keep_alive(std::time::Duration::from_secs(30))
    .workers(cpu_count)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    info!(
        "Server ready at http://{}{} using {} workers",
        bind_address,
        config.graphql.path,
        cpu_count
    );

    tokio::select! {
        res = server => {
            res.context("HTTP server terminated with an error")?;
        }
        _ = lifetime::shutdown::listen_for_shutdown(&store, started_at) => {
            warn!("Graceful shutdown complete");
        }
    }

    Ok(())
}
