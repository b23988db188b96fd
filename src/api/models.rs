use std::time::SystemTime;

/// Grant used to obtain an access token for an environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSet {
    ClientCredentials {
        client_id: String,
        client_secret: String,
    },
    UsernamePassword {
        username: String,
        password: String,
        client_id: String,
        client_secret: String,
    },
}

impl CredentialSet {
    pub fn client_id(&self) -> &str {
        match self {
            CredentialSet::ClientCredentials { client_id, .. }
            | CredentialSet::UsernamePassword { client_id, .. } => client_id,
        }
    }

    pub fn grant_name(&self) -> &'static str {
        match self {
            CredentialSet::ClientCredentials { .. } => "client_credentials",
            CredentialSet::UsernamePassword { .. } => "password",
        }
    }
}

/// Access token obtained for an environment
#[derive(Debug, Clone)]
pub struct TokenInfo {
    pub access_token: String,
    pub expires_at: SystemTime,
}

impl TokenInfo {
    pub fn is_expired(&self) -> bool {
        self.expires_at <= SystemTime::now()
    }
}
