use std::sync::OnceLock;

use super::{DEFAULT_CONFIG_PATH, StaticConfig};

static CONFIG: OnceLock<StaticConfig> = OnceLock::new();

/// Get the global configuration instance
///
/// Falls back to loading [`DEFAULT_CONFIG_PATH`] if [`init_config`] was
/// never called.
pub fn get_config() -> &'static StaticConfig {
    CONFIG.get_or_init(|| StaticConfig::load(DEFAULT_CONFIG_PATH))
}

/// Initialize the global configuration from `path` (or the default file).
///
/// Only the first call has any effect.
pub fn init_config(path: Option<&str>) -> &'static StaticConfig {
    CONFIG.get_or_init(|| StaticConfig::load(path.unwrap_or(DEFAULT_CONFIG_PATH)))
}
