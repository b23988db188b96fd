use anyhow::Result;
use log::info;
use std::path::Path;

use crate::api::constants;
use crate::config::AuthConfig;

pub const TENANT_ID_VAR: &str = "GRAPH_TENANT_ID";
pub const CLIENT_ID_VAR: &str = "GRAPH_CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "GRAPH_CLIENT_SECRET";
pub const USERNAME_VAR: &str = "GRAPH_USERNAME";
pub const PASSWORD_VAR: &str = "GRAPH_PASSWORD";
pub const RESOURCE_VAR: &str = "GRAPH_RESOURCE";
pub const AUTHORITY_VAR: &str = "GRAPH_AUTHORITY";

#[derive(Debug, Clone)]
pub struct Credentials {
    pub tenant_id: String,
    pub client_id: String,
    pub client_secret: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub resource: Option<String>,
    pub authority: Option<String>,
}

impl Credentials {
    pub fn from_env() -> Result<Credentials> {
        info!("Importing from environment variables");
        Self::read_vars(|name| format!("{} environment variable not set", name))
    }

    pub fn from_env_file(path: &str) -> Result<Credentials> {
        info!("Importing from .env file: {}", path);

        if !Path::new(path).exists() {
            anyhow::bail!("Environment file not found: {}", path);
        }

        dotenvy::from_path(path)
            .map_err(|e| anyhow::anyhow!("Failed to load .env file '{}': {}", path, e))?;

        Self::read_vars(|name| format!("{} not found in .env file: {}", name, path))
    }

    /// Whether the required variables are present in the process environment
    pub fn env_available() -> bool {
        [TENANT_ID_VAR, CLIENT_ID_VAR, CLIENT_SECRET_VAR]
            .iter()
            .all(|name| std::env::var(name).is_ok())
    }

    fn read_vars(missing: impl Fn(&str) -> String) -> Result<Credentials> {
        let required = |name: &str| std::env::var(name).map_err(|_| anyhow::anyhow!(missing(name)));
        let optional = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());

        Ok(Credentials {
            tenant_id: required(TENANT_ID_VAR)?,
            client_id: required(CLIENT_ID_VAR)?,
            client_secret: required(CLIENT_SECRET_VAR)?,
            username: optional(USERNAME_VAR),
            password: optional(PASSWORD_VAR),
            resource: optional(RESOURCE_VAR),
            authority: optional(AUTHORITY_VAR),
        })
    }

    pub fn into_auth_config(self) -> AuthConfig {
        AuthConfig {
            tenant_id: self.tenant_id,
            client_id: self.client_id,
            client_secret: self.client_secret,
            username: self.username,
            password: self.password,
            resource: self
                .resource
                .unwrap_or_else(|| constants::GRAPH_RESOURCE.to_string()),
            authority: self
                .authority
                .unwrap_or_else(|| constants::AUTHORITY_HOST.to_string()),
        }
    }
}
