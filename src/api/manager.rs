use super::auth::AuthManager;
use super::client::GraphClient;
use super::models::TokenInfo;
use crate::auth::Credentials;
use crate::config::{AuthConfig, Config};

/// Name reported for credentials taken from `GRAPH_*` variables
pub const ENV_VARS_ENVIRONMENT: &str = ".env";

/// Resolves environments and hands out authenticated Graph clients
pub struct ClientManager {
    auth_manager: AuthManager,
    config: Config,
}

impl ClientManager {
    pub fn new(config: Config) -> Self {
        Self {
            auth_manager: AuthManager::new(),
            config,
        }
    }

    /// Pick the environment to use: explicit name, current selection, then process variables
    pub fn resolve_environment(&self, env_name: Option<&str>) -> anyhow::Result<(String, AuthConfig)> {
        if let Some(name) = env_name {
            let auth = self
                .config
                .get_environment(name)
                .ok_or_else(|| anyhow::anyhow!("Environment '{}' not found", name))?;
            return Ok((name.to_string(), auth.clone()));
        }

        if let (Some(name), Some(auth)) = (
            self.config.get_current_environment_name(),
            self.config.get_current_auth(),
        ) {
            return Ok((name.clone(), auth.clone()));
        }

        // Fall back to a .env file in the working directory, then process variables
        dotenvy::dotenv().ok();
        if Credentials::env_available() {
            let credentials = Credentials::from_env()?;
            return Ok((ENV_VARS_ENVIRONMENT.to_string(), credentials.into_auth_config()));
        }

        anyhow::bail!(
            "No environment selected. Use 'graph-search-cli auth setup' to create one or specify --env."
        )
    }

    pub async fn authenticate(&self, env_name: Option<&str>) -> anyhow::Result<(AuthConfig, TokenInfo)> {
        let (name, auth) = self.resolve_environment(env_name)?;
        let token = self.auth_manager.authenticate(&name, &auth).await?;
        Ok((auth, token))
    }

    /// Get a configured GraphClient for the specified (or current) environment
    pub async fn get_client(&self, env_name: Option<&str>) -> anyhow::Result<GraphClient> {
        let (auth, token) = self.authenticate(env_name).await?;

        if token.is_expired() {
            anyhow::bail!("Received an access token that has already expired. Please re-authenticate.");
        }

        GraphClient::new(auth.resource, token.access_token)
    }
}
