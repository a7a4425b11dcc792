use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized, Toml},
};

use crate::config::ImprintConfig;
use crate::error::{ConfigError, Result};

/// Config file names searched for, in order.
pub const CONFIG_FILES: [&str; 2] = ["imprint.toml", "imprint.json"];

const ENV_PREFIX: &str = "IMPRINT_";
const ENV_KEYS: [&str; 3] = ["root", "display_base", "log_dependents"];

impl ImprintConfig {
    /// Find a config file in `dir`.
    pub fn discover(dir: &Path) -> Option<PathBuf> {
        CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// Load configuration for a project directory.
    ///
    /// `explicit` must exist when given; otherwise `dir` is searched for one
    /// of [`CONFIG_FILES`], and a project without one runs on defaults.
    /// Relative paths inside the file are resolved against the file's
    /// directory.
    pub fn load(dir: &Path, explicit: Option<&Path>) -> Result<Self> {
        let file = match explicit {
            Some(path) if !path.is_file() => {
                return Err(ConfigError::NotFound(path.to_path_buf()).into());
            }
            Some(path) => Some(path.to_path_buf()),
            None => Self::discover(dir),
        };

        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = &file {
            tracing::debug!(path = %path.display(), "loading config file");
            figment = if path.extension().is_some_and(|ext| ext == "json") {
                figment.merge(Json::file(path))
            } else {
                figment.merge(Toml::file(path))
            };
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).only(&ENV_KEYS));

        let mut config: Self = figment.extract().map_err(ConfigError::from)?;

        let base = file
            .as_deref()
            .and_then(Path::parent)
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or(dir);
        config.resolve_paths(base);
        Ok(config)
    }
}
