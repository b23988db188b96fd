use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::api::constants;
use crate::api::models::CredentialSet;

/// Environment variable overriding the config file location
pub const CONFIG_PATH_ENV: &str = "GRAPH_SEARCH_CLI_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthConfig {
    pub tenant_id: String,
    pub client_id: String,
    pub client_secret: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default = "default_resource")]
    pub resource: String,
    #[serde(default = "default_authority")]
    pub authority: String,
}

fn default_resource() -> String {
    constants::GRAPH_RESOURCE.to_string()
}

fn default_authority() -> String {
    constants::AUTHORITY_HOST.to_string()
}

impl AuthConfig {
    /// Delegated password grant when a user is configured, app-only otherwise
    pub fn credential_set(&self) -> CredentialSet {
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => CredentialSet::UsernamePassword {
                username: username.clone(),
                password: password.clone(),
                client_id: self.client_id.clone(),
                client_secret: self.client_secret.clone(),
            },
            _ => CredentialSet::ClientCredentials {
                client_id: self.client_id.clone(),
                client_secret: self.client_secret.clone(),
            },
        }
    }

    /// Short description of how this environment signs in
    pub fn sign_in_mode(&self) -> String {
        match (&self.username, &self.password) {
            (Some(username), Some(_)) => format!("delegated as {}", username),
            _ => "app-only".to_string(),
        }
    }

    /// One-line summary used when listing environments
    pub fn summary(&self) -> String {
        format!("tenant {}, {}", self.tenant_id, self.sign_in_mode())
    }
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    pub current_environment: Option<String>,
    #[serde(default)]
    pub environments: BTreeMap<String, AuthConfig>,
    #[serde(skip)]
    path: Option<PathBuf>,
}

impl Config {
    pub fn get_config_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }

        let config_dir = if cfg!(target_os = "linux") {
            // Use XDG config directory on Linux
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join("graph-search-cli")
        } else {
            // Use home directory with dot prefix on Windows/Mac
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(".graph-search-cli")
        };

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        debug!("Loading config from: {:?}", config_path);

        if !config_path.exists() {
            info!("Config file doesn't exist, using default config");
            return Ok(Self {
                path: Some(config_path.to_path_buf()),
                ..Self::default()
            });
        }

        let config_content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        let mut config: Config = toml::from_str(&config_content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;
        config.path = Some(config_path.to_path_buf());

        debug!(
            "Loaded config with {} environments",
            config.environments.len()
        );
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = match &self.path {
            Some(path) => path.clone(),
            None => Self::get_config_path()?,
        };
        debug!("Saving config to: {:?}", config_path);

        if let Some(config_dir) = config_path.parent() {
            if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
                fs::create_dir_all(config_dir)
                    .with_context(|| format!("Failed to create config directory: {:?}", config_dir))?;
                info!("Created config directory: {:?}", config_dir);
            }
        }

        let config_content =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(&config_path, config_content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        info!("Config saved successfully");
        Ok(())
    }

    pub fn add_environment(&mut self, name: String, auth_config: AuthConfig) -> Result<()> {
        info!("Adding environment: {}", name);
        self.environments.insert(name.clone(), auth_config);

        // Set as current environment if it's the first one
        if self.current_environment.is_none() {
            self.current_environment = Some(name.clone());
            info!("Set {} as current environment", name);
        }

        self.save()
    }

    pub fn get_environment(&self, name: &str) -> Option<&AuthConfig> {
        self.environments.get(name)
    }

    pub fn get_current_auth(&self) -> Option<&AuthConfig> {
        let current_env = self.current_environment.as_ref()?;
        self.environments.get(current_env)
    }

    pub fn get_current_environment_name(&self) -> Option<&String> {
        self.current_environment.as_ref()
    }

    pub fn set_current_environment(&mut self, name: String) -> Result<()> {
        if !self.environments.contains_key(&name) {
            anyhow::bail!("Environment '{}' not found", name);
        }

        info!("Setting current environment to: {}", name);
        self.current_environment = Some(name);
        self.save()
    }

    pub fn list_environments(&self) -> Vec<&String> {
        self.environments.keys().collect()
    }

    /// `name (tenant ..., sign-in)` per environment, in name order, current one marked
    pub fn environment_labels(&self) -> Vec<String> {
        self.environments
            .iter()
            .map(|(name, auth)| {
                let marker = if self.current_environment.as_ref() == Some(name) {
                    " [current]"
                } else {
                    ""
                };
                format!("{} ({}){}", name, auth.summary(), marker)
            })
            .collect()
    }

    pub fn remove_environment(&mut self, name: &str) -> Result<()> {
        if !self.environments.contains_key(name) {
            anyhow::bail!("Environment '{}' not found", name);
        }

        info!("Removing environment: {}", name);
        self.environments.remove(name);

        // If this was the current environment, clear it
        if self.current_environment.as_deref() == Some(name) {
            warn!("Removed current environment, clearing current selection");
            self.current_environment = None;
        }

        self.save()
    }
}
