use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::registry::Registry;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// On-disk TOML configuration structure.
/// All fields are optional so partial configs work (merge with defaults).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    pub paths: Option<PathsConfig>,
    pub title: Option<TitleConfig>,
    /// Replaces the built-in registry when present.
    pub documents: Option<Vec<DocumentConfig>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    pub root: Option<String>,
    pub output: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TitleConfig {
    pub min_chars: Option<usize>,
    pub max_chars: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentConfig {
    pub path: String,
    pub standard: String,
}

impl ConfigFile {
    /// The configured registry, if `[[documents]]` entries were given.
    pub fn registry(&self, root: &Path) -> Option<Registry> {
        self.documents.as_ref().map(|docs| {
            Registry::from_pairs(root, docs.iter().map(|d| (&d.path, d.standard.clone())))
        })
    }
}

/// Platform config directory path: `<config_dir>/pmindex/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("pmindex").join("config.toml"))
}

/// Load config by cascading CWD `.pmindex.toml` over platform config.
/// CWD values override platform values.
pub fn load_config() -> ConfigFile {
    let platform = config_path().and_then(|p| load_from_path(&p));
    let cwd = load_from_path(Path::new(".pmindex.toml"));

    match (platform, cwd) {
        (None, None) => ConfigFile::default(),
        (Some(p), None) => p,
        (None, Some(c)) => c,
        (Some(p), Some(c)) => merge(p, c),
    }
}

/// Load a config from a specific path. Returns `None` if the file doesn't
/// exist or can't be parsed.
pub fn load_from_path(path: &Path) -> Option<ConfigFile> {
    match load_explicit(path) {
        Ok(config) => Some(config),
        Err(ConfigError::Read { .. }) => None,
        Err(e) => {
            tracing::warn!(error = %e, "ignoring unparseable config file");
            None
        }
    }
}

/// Load a config the user asked for by name; unlike [`load_from_path`] a
/// missing or malformed file is an error.
pub fn load_explicit(path: &Path) -> Result<ConfigFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Merge two configs: `overlay` values take precedence over `base`.
pub fn merge(base: ConfigFile, overlay: ConfigFile) -> ConfigFile {
    ConfigFile {
        paths: Some(PathsConfig {
            root: overlay
                .paths
                .as_ref()
                .and_then(|p| p.root.clone())
                .or_else(|| base.paths.as_ref().and_then(|p| p.root.clone())),
            output: overlay
                .paths
                .as_ref()
                .and_then(|p| p.output.clone())
                .or_else(|| base.paths.as_ref().and_then(|p| p.output.clone())),
        }),
        title: Some(TitleConfig {
            min_chars: overlay
                .title
                .as_ref()
                .and_then(|t| t.min_chars)
                .or_else(|| base.title.as_ref().and_then(|t| t.min_chars)),
            max_chars: overlay
                .title
                .as_ref()
                .and_then(|t| t.max_chars)
                .or_else(|| base.title.as_ref().and_then(|t| t.max_chars)),
        }),
        documents: overlay.documents.or(base.documents),
    }
}
