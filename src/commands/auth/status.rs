use anyhow::Result;
use colored::*;
use log::{error, info};
use std::time::SystemTime;

use crate::api::AuthManager;
use crate::config::Config;

pub async fn status_command() -> Result<()> {
    info!("Executing auth status command");

    let config = Config::load()?;

    println!("Graph Search CLI Authentication Status");
    println!("======================================");

    if config.environments.is_empty() {
        println!("No environments configured.");
        println!("Run 'graph-search-cli auth setup' to create one.");
        return Ok(());
    }

    println!("Configured environments:");
    for label in config.environment_labels() {
        println!("  {}", label);
    }

    let (Some(current_env_name), Some(current_auth)) =
        (config.get_current_environment_name(), config.get_current_auth())
    else {
        println!("\nNo current environment selected.");
        println!("Run 'graph-search-cli auth select' to choose one.");
        return Ok(());
    };

    println!("\nCurrent Environment: {}", current_env_name.bright_green().bold());
    println!("  Tenant: {}", current_auth.tenant_id);
    println!("  Client ID: {}", current_auth.client_id);
    println!("  Resource: {}", current_auth.resource);
    println!("  Sign-in: {}", current_auth.sign_in_mode());

    println!("\nTesting authentication...");
    match AuthManager::new().authenticate(current_env_name, current_auth).await {
        Ok(token) => {
            info!("Authentication test successful");
            let remaining = token
                .expires_at
                .duration_since(SystemTime::now())
                .map(|d| d.as_secs() / 60)
                .unwrap_or(0);
            println!("{} Authentication successful (token valid for {} min)", "✓".green(), remaining);
        }
        Err(e) => {
            error!("Authentication test failed: {}", e);
            println!("{} Authentication failed: {}", "✗".red(), e);
        }
    }

    Ok(())
}
