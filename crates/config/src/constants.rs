pub const TOP_LEVEL_DOMAIN: &str = "org";
pub const AUTHOR: &str = "docsearch";
pub const APP_NAME: &str = "docsearch";

pub const CONFIG_FILE_NAME: &str = "docsearch.toml";

/// Overrides the platform config directory when set.
pub const CONFIG_DIR_ENV: &str = "DOCSEARCH_CONFIG_DIR";
