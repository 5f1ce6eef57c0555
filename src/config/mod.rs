//! Configuration: TOML file under the user config directory, every field
//! defaulted, validated after load, CLI flags layered on top by `main`.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, ListingSettings, LoggingConfig};
