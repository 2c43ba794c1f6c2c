//! Configuration loader using Figment

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use tracing::{debug, info, trace};

use crate::discovery::{ConfigFormat, FileDiscovery};
use crate::{ConfigError, ConfigResult, FieldsConfig};

/// Prefix for environment variables, e.g. `FORMMODELER_DEFAULT_SINGLE_ENTITY`.
pub const ENV_PREFIX: &str = "FORMMODELER_";

/// Loads [`FieldsConfig`] from every source in precedence order.
///
/// Later sources override earlier ones:
/// 1. Default values
/// 2. Discovered files (global, then project)
/// 3. Files added with [`ConfigLoader::with_file`]
/// 4. Environment variables prefixed with `FORMMODELER_`
pub struct ConfigLoader {
    discovery: FileDiscovery,
    files: Vec<PathBuf>,
    use_env: bool,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            discovery: FileDiscovery::new(),
            files: Vec::new(),
            use_env: true,
        }
    }

    /// Use a custom discovery instead of the current and home directories.
    pub fn with_discovery(mut self, discovery: FileDiscovery) -> Self {
        self.discovery = discovery;
        self
    }

    /// Merge an explicit configuration file over the discovered ones.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.push(path.into());
        self
    }

    /// Skip environment variables.
    pub fn without_env(mut self) -> Self {
        self.use_env = false;
        self
    }

    /// Load and validate the configuration.
    pub fn load(&self) -> ConfigResult<FieldsConfig> {
        let config: FieldsConfig = self.build_figment()?.extract()?;
        config.validate()?;

        info!(
            default_single_entity = %config.default_single_entity,
            default_multiple_entity = %config.default_multiple_entity,
            builtin_providers = config.builtin_providers,
            "loaded fields configuration"
        );
        Ok(config)
    }

    fn build_figment(&self) -> ConfigResult<Figment> {
        debug!("Building figment configuration with precedence order");

        let mut figment = Figment::from(Serialized::defaults(FieldsConfig::default()));

        for config_file in self.discovery.discover_all() {
            figment = figment.merge(file_provider(&config_file.path, config_file.format));
        }

        for path in &self.files {
            if !path.is_file() {
                return Err(ConfigError::FileNotFound { path: path.clone() });
            }
            let format =
                ConfigFormat::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat {
                    format: path
                        .extension()
                        .map(|e| e.to_string_lossy().into_owned())
                        .unwrap_or_default(),
                })?;
            figment = figment.merge(file_provider(path, format));
        }

        if self.use_env {
            trace!("Merging {}* environment variables", ENV_PREFIX);
            figment = figment
                .merge(Env::prefixed(ENV_PREFIX).map(|key| key.as_str().to_lowercase().into()));
        }

        Ok(figment)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn file_provider(path: &Path, format: ConfigFormat) -> Figment {
    trace!("Loading config file: {} ({:?})", path.display(), format);
    match format {
        ConfigFormat::Toml => Figment::from(Toml::file(path)),
        ConfigFormat::Yaml => Figment::from(Yaml::file(path)),
        ConfigFormat::Json => Figment::from(Json::file(path)),
    }
}

/// Load the configuration from the standard locations.
pub fn load_configuration() -> ConfigResult<FieldsConfig> {
    ConfigLoader::new().load()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn isolated(project: &TempDir, global: &TempDir) -> ConfigLoader {
        ConfigLoader::new()
            .without_env()
            .with_discovery(FileDiscovery::with_directories(
                Some(project.path().to_path_buf()),
                Some(global.path().to_path_buf()),
            ))
    }

    #[test]
    fn test_defaults_without_files() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        let config = isolated(&project, &global).load().unwrap();
        assert_eq!(config, FieldsConfig::default());
    }

    #[test]
    fn test_project_overrides_global() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        fs::write(
            global.path().join("fields.toml"),
            "default_single_entity = \"GlobalLookup\"\ndefault_multiple_entity = \"GlobalTable\"\n",
        )
        .unwrap();
        fs::write(
            project.path().join("fields.yaml"),
            "default_single_entity: ProjectLookup\n",
        )
        .unwrap();

        let config = isolated(&project, &global).load().unwrap();
        assert_eq!(config.default_single_entity, "ProjectLookup");
        assert_eq!(config.default_multiple_entity, "GlobalTable");
    }

    #[test]
    fn test_explicit_file_overrides_discovered() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        fs::write(
            project.path().join("fields.toml"),
            "builtin_providers = true\n",
        )
        .unwrap();
        let explicit = global.path().join("custom.json");
        fs::write(&explicit, r#"{"builtin_providers": false}"#).unwrap();

        let config = isolated(&project, &global)
            .with_file(&explicit)
            .load()
            .unwrap();
        assert!(!config.builtin_providers);
    }

    #[test]
    fn test_missing_explicit_file_errors() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        let err = isolated(&project, &global)
            .with_file(project.path().join("absent.toml"))
            .load()
            .unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound { .. }));
    }

    #[test]
    fn test_unsupported_explicit_format_errors() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        let ini = project.path().join("fields.ini");
        fs::write(&ini, "x=1").unwrap();
        let err = isolated(&project, &global).with_file(ini).load().unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat { ref format } if format == "ini"));
    }

    #[test]
    fn test_invalid_value_fails_parse() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        fs::write(
            project.path().join("fields.toml"),
            "builtin_providers = \"sometimes\"\n",
        )
        .unwrap();
        let err = isolated(&project, &global).load().unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_blank_code_fails_validation() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        fs::write(
            project.path().join("fields.toml"),
            "default_multiple_entity = \"\"\n",
        )
        .unwrap();
        let err = isolated(&project, &global).load().unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { .. }));
    }
}
