use std::sync::Arc;

use tracing::debug;

use crate::api::graphql::{UserSchema, build_schema};
use crate::storage::{StorageFactory, UserStore};

pub struct StartupContext {
    pub store: Arc<UserStore>,
    pub schema: UserSchema,
}

/// 准备服务器启动的上下文：用户存储和 GraphQL schema
///
/// **Note**: the global config must be initialized first.
pub fn prepare_server_startup() -> StartupContext {
    let start_time = std::time::Instant::now();
    debug!("Starting pre-startup processing...");

    let store = StorageFactory::create();
    let schema = build_schema(store.clone());

    debug!("Pre-startup processing completed in {:?}", start_time.elapsed());
    StartupContext { store, schema }
}
