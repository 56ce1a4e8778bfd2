use once_cell::sync::Lazy;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;
use tracing::debug;

use super::ChromatoneConfig;
use super::sources::{EnvConfig, FileConfig};

static DEFAULT_CONFIG_LOCATIONS: Lazy<Vec<PathBuf>> = Lazy::new(|| {
    vec![
        PathBuf::from("chromatone.toml"),
        PathBuf::from("config/chromatone.toml"),
    ]
});

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    /// Overrides to use instead of reading the process environment.
    pub env: Option<EnvConfig>,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env(mut self, env: EnvConfig) -> Self {
        self.options.env = Some(env);
        self
    }

    pub fn load(&self) -> Result<ChromatoneConfig, ConfigLoadError> {
        let env = self
            .options
            .env
            .clone()
            .unwrap_or_else(EnvConfig::gather);
        let file = self.load_file_config(&env)?;
        let config = compose_config(file.unwrap_or_default(), env);
        validate(&config)?;
        Ok(config)
    }

    fn load_file_config(
        &self,
        env: &EnvConfig,
    ) -> Result<Option<FileConfig>, ConfigLoadError> {
        let (path, explicit) = if let Some(path) = &self.options.config_path {
            (path.clone(), true)
        } else if let Some(path) = &env.config_path {
            (path.clone(), true)
        } else {
            match DEFAULT_CONFIG_LOCATIONS
                .iter()
                .find(|candidate| candidate.exists())
            {
                Some(path) => (path.clone(), false),
                None => return Ok(None),
            }
        };

        if !path.exists() {
            if explicit {
                return Err(ConfigLoadError::MissingConfig { path });
            }
            return Ok(None);
        }

        read_file_config(&path).map(Some)
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConfigLoadError> {
    let contents =
        fs::read_to_string(path).map_err(|err| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source: err,
        })?;
    let file: FileConfig =
        toml::from_str(&contents).map_err(|err| ConfigLoadError::Parse {
            path: path.to_path_buf(),
            source: err,
        })?;
    debug!(path = ?path, "Loaded configuration file");
    Ok(file)
}

fn compose_config(file: FileConfig, env: EnvConfig) -> ChromatoneConfig {
    let defaults = ChromatoneConfig::default();

    ChromatoneConfig {
        state_key: env
            .state_key
            .or(file.storage.state_key)
            .unwrap_or(defaults.state_key),
        preset_prefix: env
            .preset_prefix
            .or(file.storage.preset_prefix)
            .unwrap_or(defaults.preset_prefix),
        store_path: env.store_path.or(file.storage.path),
        log_filter: env
            .log_filter
            .or(file.logging.filter)
            .unwrap_or(defaults.log_filter),
    }
}

fn validate(config: &ChromatoneConfig) -> Result<(), ConfigLoadError> {
    if config.state_key.is_empty() {
        return Err(ConfigLoadError::Invalid(
            "state_key must not be empty".into(),
        ));
    }
    if config.preset_prefix.is_empty() {
        return Err(ConfigLoadError::Invalid(
            "preset_prefix must not be empty".into(),
        ));
    }
    if config.state_key.starts_with(&config.preset_prefix) {
        return Err(ConfigLoadError::Invalid(format!(
            "state_key '{}' would be listed as a preset under prefix '{}'",
            config.state_key, config.preset_prefix
        )));
    }
    Ok(())
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("configuration file missing: {path}")]
    MissingConfig { path: PathBuf },
    #[error("failed to read configuration {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
