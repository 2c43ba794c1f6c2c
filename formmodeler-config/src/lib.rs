//! FormModeler configuration management using Figment
//!
//! Loads the settings a field registry is built with. Values come from
//! several sources, later ones overriding earlier ones:
//!
//! - defaults ([`FieldsConfig::default`])
//! - `~/.formmodeler/fields.{toml,yaml,yml,json}`
//! - `./.formmodeler/fields.{toml,yaml,yml,json}`
//! - files passed to [`ConfigLoader::with_file`]
//! - `FORMMODELER_*` environment variables
//!
//! ```toml
//! default_single_entity = "SubForm"
//! default_multiple_entity = "MultipleSubForm"
//! builtin_providers = true
//! ```
//!
//! ```no_run
//! use formmodeler_config::load_configuration;
//!
//! let config = load_configuration()?;
//! println!("fallback for lists: {}", config.default_multiple_entity);
//! # Ok::<(), formmodeler_config::ConfigError>(())
//! ```

/// File discovery logic for configuration files
pub mod discovery;
/// Error types and handling
pub mod error;
/// Figment-based loader
pub mod loader;
/// Configuration value types
pub mod types;

pub use discovery::{ConfigFile, ConfigFormat, ConfigScope, FileDiscovery, CONFIG_DIR_NAME};
pub use error::{ConfigError, ConfigResult};
pub use loader::{load_configuration, ConfigLoader, ENV_PREFIX};
pub use types::{FieldsConfig, DEFAULT_MULTIPLE_ENTITY, DEFAULT_SINGLE_ENTITY};
