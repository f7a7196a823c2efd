use std::sync::{Arc, OnceLock};

use super::StaticConfig;

static CONFIG: OnceLock<Arc<StaticConfig>> = OnceLock::new();

/// Get the global configuration instance
///
/// # Panics
/// If [`init_config`] has not been called yet.
pub fn get_config() -> Arc<StaticConfig> {
    CONFIG
        .get()
        .expect("Config not initialized. Call init_config() first.")
        .clone()
}

/// Initialize the global configuration
///
/// Loads from `path` (or "config.toml" in the current directory) and applies
/// `USERQL__*` environment overrides. Later calls are no-ops.
///
/// # Examples
/// ```no_run
/// use userql::config::init_config;
/// init_config(None);
/// ```
pub fn init_config(path: Option<&str>) {
    CONFIG.get_or_init(|| Arc::new(StaticConfig::load(path)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_config_is_set_once() {
        init_config(None);
        let first = get_config();
        init_config(Some("does-not-exist.toml"));
        assert!(Arc::ptr_eq(&first, &get_config()));
        assert!(first.graphql.path.starts_with('/'));
    }
}
