use anyhow::Result;
use dialoguer::{Confirm, Input, Password, Select};
use crate::auth::credentials::Credentials;

pub fn prompt_environment_name(default_name: Option<String>) -> Result<String> {
    if let Some(name) = default_name {
        Ok(name)
    } else {
        let name = Input::<String>::new()
            .with_prompt("Environment name (e.g., 'production', 'test')")
            .interact()?;
        Ok(name)
    }
}

/// Yes/no question that defaults to "no"
pub fn prompt_confirmation(prompt: &str) -> Result<bool> {
    Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
}

pub fn prompt_overwrite_confirmation(env_name: &str) -> Result<bool> {
    prompt_confirmation(&format!("Environment '{}' already exists. Overwrite?", env_name))
}

pub fn prompt_save_anyway_confirmation() -> Result<bool> {
    prompt_confirmation("Save configuration anyway?")
}

pub fn prompt_remove_confirmation(env_name: &str) -> Result<bool> {
    prompt_confirmation(&format!("Remove environment '{}'?", env_name))
}

/// Fill in whatever the command line did not provide.
///
/// A username switches the environment to delegated sign-in, in which case
/// the password is prompted for as well.
pub fn prompt_credentials(partial: Credentials) -> Result<Credentials> {
    let tenant_id = if !partial.tenant_id.is_empty() {
        partial.tenant_id
    } else {
        Input::<String>::new()
            .with_prompt("Entra ID tenant (e.g., contoso.onmicrosoft.com)")
            .interact()?
    };

    let client_id = if !partial.client_id.is_empty() {
        partial.client_id
    } else {
        Input::<String>::new()
            .with_prompt("Entra ID Application Client ID")
            .interact()?
    };

    let client_secret = if !partial.client_secret.is_empty() {
        partial.client_secret
    } else {
        Password::new()
            .with_prompt("Entra ID Application Client Secret")
            .interact()?
    };

    let username = match partial.username {
        Some(u) => Some(u),
        None => {
            let u = Input::<String>::new()
                .with_prompt("Username (leave empty for app-only access)")
                .allow_empty(true)
                .interact()?;
            Some(u).filter(|u| !u.is_empty())
        }
    };

    let password = match (&username, partial.password) {
        (None, _) => None,
        (Some(_), Some(p)) => Some(p),
        (Some(_), None) => Some(Password::new().with_prompt("Password").interact()?),
    };

    Ok(Credentials {
        tenant_id,
        client_id,
        client_secret,
        username,
        password,
        resource: partial.resource,
        authority: partial.authority,
    })
}

/// Pick one of `labels`, starting on the current environment; returns its index
pub fn prompt_environment_selection(labels: &[String], current: Option<usize>) -> Result<usize> {
    Ok(Select::new()
        .with_prompt("Environment to use")
        .items(labels)
        .default(current.unwrap_or(0))
        .interact()?)
}
