//! Configuration file discovery system
//!
//! Finds FormModeler configuration files in the global (`~/.formmodeler/`)
//! and project (`./.formmodeler/`) directories.

use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

/// Name of the configuration directory in both the home and project roots.
pub const CONFIG_DIR_NAME: &str = ".formmodeler";

const FILE_STEMS: [&str; 2] = ["fields", "formmodeler"];
const FILE_EXTENSIONS: [&str; 4] = ["toml", "yaml", "yml", "json"];

/// A discovered configuration file
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    /// Full path to the configuration file
    pub path: PathBuf,
    /// Detected format of the file
    pub format: ConfigFormat,
    /// Where the file was found
    pub scope: ConfigScope,
}

/// Configuration file format detected from file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Detect format from a path's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

/// Configuration scope indicating where the file was discovered
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConfigScope {
    /// `~/.formmodeler/`
    Global,
    /// `./.formmodeler/`
    Project,
}

/// File discovery service for finding configuration files
#[derive(Debug)]
pub struct FileDiscovery {
    project_dir: Option<PathBuf>,
    global_dir: Option<PathBuf>,
    /// Resolve missing directories from the current and home directories
    resolve_defaults: bool,
}

impl Default for FileDiscovery {
    fn default() -> Self {
        Self {
            project_dir: None,
            global_dir: None,
            resolve_defaults: true,
        }
    }
}

impl FileDiscovery {
    /// Discover in the current directory and the home directory, resolved
    /// when `discover_all` runs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discover in fixed directories instead of the current and home ones.
    /// A `None` directory skips that scope.
    pub fn with_directories(project_dir: Option<PathBuf>, global_dir: Option<PathBuf>) -> Self {
        Self {
            project_dir,
            global_dir,
            resolve_defaults: false,
        }
    }

    /// Discover all configuration files, global before project, so that
    /// merging in order lets project files override global ones.
    pub fn discover_all(&self) -> Vec<ConfigFile> {
        let (project_dir, global_dir) = if self.resolve_defaults {
            (Self::resolve_project_dir(), Self::resolve_global_dir())
        } else {
            (self.project_dir.clone(), self.global_dir.clone())
        };

        let mut files = Vec::new();
        if let Some(ref dir) = global_dir {
            files.extend(self.search_directory(dir, ConfigScope::Global));
        }
        if let Some(ref dir) = project_dir {
            files.extend(self.search_directory(dir, ConfigScope::Project));
        }

        debug!("Discovered {} configuration files", files.len());
        for file in &files {
            trace!("Found config: {} ({:?})", file.path.display(), file.format);
        }

        files
    }

    fn search_directory(&self, dir: &Path, scope: ConfigScope) -> Vec<ConfigFile> {
        if !dir.exists() {
            debug!("Directory does not exist: {}", dir.display());
            return Vec::new();
        }
        if !dir.is_dir() {
            warn!("Path exists but is not a directory: {}", dir.display());
            return Vec::new();
        }

        let mut files = Vec::new();
        for stem in FILE_STEMS {
            for ext in FILE_EXTENSIONS {
                let path = dir.join(format!("{stem}.{ext}"));
                if !path.is_file() {
                    continue;
                }
                if let Some(format) = ConfigFormat::from_extension(ext) {
                    files.push(ConfigFile {
                        path,
                        format,
                        scope,
                    });
                }
            }
        }
        files
    }

    fn resolve_project_dir() -> Option<PathBuf> {
        let dir = std::env::current_dir().ok()?.join(CONFIG_DIR_NAME);
        dir.is_dir().then_some(dir)
    }

    fn resolve_global_dir() -> Option<PathBuf> {
        let dir = dirs::home_dir()?.join(CONFIG_DIR_NAME);
        dir.is_dir().then_some(dir)
    }
}
