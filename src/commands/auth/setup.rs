use anyhow::Result;
use colored::*;
use log::{error, info, warn};

use crate::api::AuthManager;
use crate::auth::Credentials;
use crate::config::Config;
use crate::ui::{
    prompt_credentials, prompt_environment_name, prompt_overwrite_confirmation,
    prompt_save_anyway_confirmation,
};

#[derive(Debug, Default)]
pub struct SetupOptions {
    pub name: Option<String>,
    pub tenant_id: Option<String>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub resource: Option<String>,
    pub authority: Option<String>,
    pub from_env: bool,
    pub from_env_file: Option<String>,
}

impl SetupOptions {
    /// Credentials fully specified by flags, if every required flag is present
    fn command_line_credentials(&self) -> Option<Credentials> {
        Some(Credentials {
            tenant_id: self.tenant_id.clone()?,
            client_id: self.client_id.clone()?,
            client_secret: self.client_secret.clone()?,
            username: self.username.clone(),
            password: self.password.clone(),
            resource: self.resource.clone(),
            authority: self.authority.clone(),
        })
    }

    fn partial_credentials(self) -> Credentials {
        Credentials {
            tenant_id: self.tenant_id.unwrap_or_default(),
            client_id: self.client_id.unwrap_or_default(),
            client_secret: self.client_secret.unwrap_or_default(),
            username: self.username,
            password: self.password,
            resource: self.resource,
            authority: self.authority,
        }
    }
}

pub async fn setup_command(options: SetupOptions) -> Result<()> {
    info!("Starting auth setup");

    let mut config = Config::load()?;
    let interactive = !options.from_env
        && options.from_env_file.is_none()
        && options.command_line_credentials().is_none();

    let (env_name, credentials) = if options.from_env {
        let env_name = options.name.unwrap_or_else(|| "from-env".to_string());
        let credentials = Credentials::from_env()?;
        println!("{} Imported credentials from environment variables", "✓".green());
        (env_name, credentials)
    } else if let Some(ref env_file_path) = options.from_env_file {
        let env_name = options.name.clone().unwrap_or_else(|| "from-env-file".to_string());
        let credentials = Credentials::from_env_file(env_file_path)?;
        println!("{} Imported credentials from .env file: {}", "✓".green(), env_file_path);
        (env_name, credentials)
    } else if let Some(credentials) = options.command_line_credentials() {
        info!("Using command line parameters");
        let env_name = options.name.unwrap_or_else(|| "cli-setup".to_string());
        (env_name, credentials)
    } else {
        info!("Starting interactive setup");

        let env_name = prompt_environment_name(options.name.clone())?;

        if config.environments.contains_key(&env_name) && !prompt_overwrite_confirmation(&env_name)? {
            println!("Setup cancelled.");
            return Ok(());
        }

        let credentials = prompt_credentials(options.partial_credentials())?;
        (env_name, credentials)
    };

    if !interactive && config.environments.contains_key(&env_name) {
        warn!("Environment '{}' already exists, overwriting", env_name);
    }

    let auth_config = credentials.into_auth_config();

    // Test authentication before saving
    println!("\nTesting authentication...");
    match AuthManager::new().authenticate(&env_name, &auth_config).await {
        Ok(_) => {
            println!("{} Authentication test successful", "✓".green());
            config.add_environment(env_name.clone(), auth_config)?;
            println!("{} Environment '{}' saved successfully", "✓".green(), env_name);

            if config.get_current_environment_name() == Some(&env_name) {
                println!("{} Set as current environment", "✓".green());
            }
        }
        Err(e) => {
            error!("Authentication test failed: {}", e);
            println!("{} Authentication test failed: {}", "✗".red(), e);

            let save_anyway = if interactive {
                prompt_save_anyway_confirmation()?
            } else {
                true
            };

            if save_anyway {
                config.add_environment(env_name.clone(), auth_config)?;
                println!(
                    "{} Environment '{}' saved (authentication failed)",
                    "⚠".yellow(),
                    env_name
                );
            } else {
                println!("Setup cancelled.");
            }
        }
    }

    Ok(())
}
