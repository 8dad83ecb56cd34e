// Core configuration types
mod core;
mod loader;
mod rules;

pub use self::core::ClassmapConfig;
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
pub use rules::{IgnorableConfig, LayerConfig, ServiceConfig, SourcesConfig};
