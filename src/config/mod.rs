use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_BULLET: &str = "•";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not find config directory")]
    NoConfigDir,

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Presentation settings. Nothing in here affects what gets rendered, only
/// how it is shown.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Glyph in front of each list entry
    pub bullet: String,

    /// Draw the key-hint footer in the terminal view
    pub show_footer: bool,

    /// kitty-style colour file to take the palette from
    pub theme_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bullet: DEFAULT_BULLET.to_string(),
            show_footer: true,
            theme_file: None,
        }
    }
}

impl AppConfig {
    /// `$XDG_CONFIG_HOME/packing-list/config.toml`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("packing-list").join("config.toml"))
    }

    /// Load an explicitly requested file. Any failure is an error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: AppConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(config.normalized())
    }

    /// Load from the default location, falling back to defaults. Never writes.
    pub fn load() -> Self {
        match Self::default_path() {
            Ok(path) => Self::load_at(&path),
            Err(e) => {
                tracing::debug!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Like `load_from`, but a missing or broken file yields defaults
    fn load_at(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    fn normalized(mut self) -> Self {
        if self.bullet.trim().is_empty() {
            self.bullet = DEFAULT_BULLET.to_string();
        }
        self.theme_file = self.theme_file.map(expand_home);
        self
    }
}

/// `~/x` -> `$HOME/x`; anything else is returned as is
fn expand_home(path: PathBuf) -> PathBuf {
    if let (Ok(rest), Some(home)) = (path.strip_prefix("~"), dirs::home_dir()) {
        return home.join(rest);
    }
    path
}
