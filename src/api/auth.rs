use super::constants;
use super::error::RequestError;
use super::models::{CredentialSet, TokenInfo};
use super::odata::handle_rejected_odata_json;
use crate::config::AuthConfig;
use serde_json::Value;
use std::time::{Duration, SystemTime};

/// Acquires Entra ID access tokens for configured environments
pub struct AuthManager {
    http_client: reqwest::Client,
}

impl AuthManager {
    pub fn new() -> Self {
        Self {
            http_client: reqwest::Client::new(),
        }
    }

    /// Request a token for `auth.resource` using the environment's grant
    pub async fn authenticate(&self, env_name: &str, auth: &AuthConfig) -> anyhow::Result<TokenInfo> {
        let credentials = auth.credential_set();
        let token_url = constants::token_endpoint(&auth.authority, &auth.tenant_id);
        let scope = constants::default_scope(&auth.resource);

        log::info!(
            "Authenticating environment {} against {} using {} grant",
            env_name,
            token_url,
            credentials.grant_name()
        );

        let mut form = vec![
            ("grant_type", credentials.grant_name().to_string()),
            ("client_id", credentials.client_id().to_string()),
            ("scope", scope),
        ];
        match &credentials {
            CredentialSet::ClientCredentials { client_secret, .. } => {
                form.push(("client_secret", client_secret.clone()));
            }
            CredentialSet::UsernamePassword {
                username,
                password,
                client_secret,
                ..
            } => {
                form.push(("username", username.clone()));
                form.push(("password", password.clone()));
                if !client_secret.is_empty() {
                    form.push(("client_secret", client_secret.clone()));
                }
            }
        }

        let response = self.http_client.post(&token_url).form(&form).send().await?;
        let status = response.status();
        log::debug!("Token request status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = handle_rejected_odata_json(RequestError::Status {
                status: status.as_u16(),
                body,
            });
            anyhow::bail!("Authentication failed: {}", err);
        }

        let token_data: Value = response.json().await?;
        let access_token = token_data
            .get("access_token")
            .and_then(|t| t.as_str())
            .ok_or_else(|| anyhow::anyhow!("No access token in response"))?;

        // Default to 1 hour if not provided
        let expires_in = token_data
            .get("expires_in")
            .and_then(|e| e.as_u64())
            .unwrap_or(3600);

        log::info!("Successfully authenticated for environment {}", env_name);

        Ok(TokenInfo {
            access_token: access_token.to_string(),
            expires_at: SystemTime::now() + Duration::from_secs(expires_in),
        })
    }
}

impl Default for AuthManager {
    fn default() -> Self {
        Self::new()
    }
}
