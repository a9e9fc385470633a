use crate::error::{ConfigError, StorageError};
use crate::utils::validation::FqdnOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.toml";
const APP_DIR_NAME: &str = "edgekit";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Flags applied to every `fqdn` check before command-line flags
    pub fqdn: FqdnOptions,
    pub client_ip: ClientIpSettings,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ClientIpSettings {
    /// Used when `client-ip` is run without `--remote-host`
    pub default_remote_host: Option<String>,
}

impl Config {
    /// Load the configuration file, falling back to defaults when it does not exist
    pub fn load(path: Option<PathBuf>) -> crate::Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::default_path()?,
        };

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|e| StorageError::ConfigParseError {
                message: e.to_string(),
            })?;

        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: Option<PathBuf>) -> crate::Result<()> {
        let config_path = match path {
            Some(p) => p,
            None => Self::default_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::FileIo {
                path: parent.to_string_lossy().to_string(),
                source,
            })?;
        }

        let toml_content = self.to_toml()?;

        fs::write(&config_path, toml_content).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        Ok(())
    }

    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string(self).map_err(|e| {
            StorageError::ConfigSaveFailed {
                message: e.to_string(),
            }
            .into()
        })
    }

    /// `<dir>/config.toml`
    pub fn path_in(dir: &Path) -> PathBuf {
        dir.join(CONFIG_FILE_NAME)
    }

    /// `<config_dir>/edgekit/config.toml` for the current user.
    pub fn default_path() -> crate::Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(StorageError::ConfigDirNotFound)?;
        Ok(Self::path_in(&config_dir.join(APP_DIR_NAME)))
    }

    fn validate(&self) -> crate::Result<()> {
        if let Some(host) = &self.client_ip.default_remote_host {
            if host.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "client_ip.default_remote_host".to_string(),
                    value: host.clone(),
                    reason: "must not be blank".to_string(),
                }
                .into());
            }
        }
        Ok(())
    }
}
