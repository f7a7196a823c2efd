use std::sync::Arc;

pub mod models;
pub mod user_store;

pub use models::{User, UserPatch};
pub use user_store::UserStore;

pub struct StorageFactory;

impl StorageFactory {
    /// Build the process-wide user store from the loaded configuration.
    pub fn create() -> Arc<UserStore> {
        let config = crate::config::get_config();

        let store = if config.graphql.seed_demo_users {
            UserStore::with_demo_users()
        } else {
            UserStore::new()
        };

        tracing::info!("User store ready with {} users", store.len());
        Arc::new(store)
    }
}
