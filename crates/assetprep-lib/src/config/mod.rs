mod loader;
mod model;

pub use loader::load_config;
pub use model::{
    AssetsConfig, CREATED_AT_KEY, ConfigValue, RELEASE_TAG_KEY, RELEASE_URL_KEY, ReservedKeys,
    UPDATED_AT_KEY,
};

/// Name of the configuration file looked up directly under the project root.
pub const CONFIG_FILE_NAME: &str = "assets-config.yml";
