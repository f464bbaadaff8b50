//! Locating, reading and writing configuration files.
//!
//! Discovery mirrors the lint engine's own search: starting from a directory,
//! each ancestor is checked for one of [`CONFIG_FILE_NAMES`] until the user's
//! home directory has been searched.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::CommitlintConfig;
use crate::data;
use crate::error::ConfigError;

/// Environment variable naming a configuration file that bypasses discovery.
pub const CONFIG_ENV_VAR: &str = "COMMITLINT_CONFIG";

/// File names searched for in each directory, in priority order.
pub const CONFIG_FILE_NAMES: [&str; 4] = [
    ".commitlintrc",
    ".commitlintrc.json",
    ".commitlintrc.yaml",
    ".commitlintrc.yml",
];

/// Encoding of a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.json`
    Json,
    /// `.yaml`, `.yml` and the extensionless `.commitlintrc`.
    Yaml,
    /// `.js` and `.mjs`; write-only.
    EsModule,
}

impl ConfigFormat {
    /// Infers the format from a file name.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let extension = path.extension().and_then(|e| e.to_str());
        match extension {
            Some("json") => Ok(Self::Json),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("js" | "mjs") => Ok(Self::EsModule),
            None if path.file_name().is_some_and(|n| n == ".commitlintrc") => Ok(Self::Yaml),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Reads and validates a configuration file.
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<CommitlintConfig> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)?;
    if format == ConfigFormat::EsModule {
        // Only the JS engine can evaluate a module.
        return Err(ConfigError::UnsupportedFormat(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;

    let config = match format {
        ConfigFormat::Json => data::from_json::<CommitlintConfig>(&content),
        _ => data::from_yaml::<CommitlintConfig>(&content),
    }
    .with_context(|| format!("Failed to parse configuration file: {}", path.display()))?;

    tracing::debug!(
        "Loaded {} rule overrides from {}",
        config.rules().len(),
        path.display()
    );
    Ok(config)
}

/// Writes a configuration in the format implied by `path`.
pub fn save_to_path<P: AsRef<Path>>(config: &CommitlintConfig, path: P) -> Result<()> {
    let path = path.as_ref();
    let content = match ConfigFormat::from_path(path)? {
        ConfigFormat::Json => data::to_json(config)?,
        ConfigFormat::Yaml => data::to_yaml(config)?,
        ConfigFormat::EsModule => data::to_es_module(config)?,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write configuration file: {}", path.display()))?;

    tracing::debug!("Wrote configuration to {}", path.display());
    Ok(())
}

/// Finds and loads the configuration that applies to a directory.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    start_dir: PathBuf,
    stop_dir: Option<PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        let start_dir = match env::current_dir() {
            Ok(dir) => dir,
            Err(err) => {
                tracing::warn!("Cannot read current directory ({err}), searching from \".\" only");
                PathBuf::from(".")
            }
        };
        Self {
            start_dir,
            stop_dir: dirs::home_dir(),
        }
    }
}

impl ConfigLoader {
    /// Searches from the current directory up to the home directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Searches from `start_dir` instead of the current directory.
    pub fn with_start_dir(mut self, start_dir: impl Into<PathBuf>) -> Self {
        self.start_dir = start_dir.into();
        self
    }

    /// Stops the search after `stop_dir` has been checked.
    pub fn with_stop_dir(mut self, stop_dir: impl Into<PathBuf>) -> Self {
        self.stop_dir = Some(stop_dir.into());
        self
    }

    /// Returns the nearest configuration file, if any.
    pub fn discover(&self) -> Option<PathBuf> {
        for dir in self.start_dir.ancestors() {
            for name in CONFIG_FILE_NAMES {
                let candidate = dir.join(name);
                if candidate.is_file() {
                    tracing::debug!("Discovered configuration file {}", candidate.display());
                    return Some(candidate);
                }
            }
            if self.stop_dir.as_deref() == Some(dir) {
                break;
            }
        }
        None
    }

    /// Loads the effective configuration.
    ///
    /// `COMMITLINT_CONFIG` wins when set; otherwise the nearest discovered
    /// file is used, falling back to [`CommitlintConfig::project`].
    pub fn load(&self) -> Result<CommitlintConfig> {
        let explicit = env::var_os(CONFIG_ENV_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        self.load_with_override(explicit.as_deref())
    }

    /// Like [`ConfigLoader::load`] with the explicit path passed in directly.
    pub fn load_with_override(&self, explicit: Option<&Path>) -> Result<CommitlintConfig> {
        if let Some(path) = explicit {
            tracing::debug!("Using configuration file from {CONFIG_ENV_VAR}: {}", path.display());
            return load_from_path(path);
        }

        match self.discover() {
            Some(path) => load_from_path(path),
            None => {
                tracing::debug!(
                    "No configuration file found from {}, using project defaults",
                    self.start_dir.display()
                );
                Ok(CommitlintConfig::project())
            }
        }
    }
}
