use anyhow::Result;
use colored::*;
use log::{info, warn};

use crate::config::Config;
use crate::ui::prompt_remove_confirmation;

pub async fn remove_command(name: String, force: bool) -> Result<()> {
    info!("Removing environment: {}", name);

    let mut config = Config::load()?;
    let removed = remove_environment(&mut config, &name, force, prompt_remove_confirmation)?;

    if !removed {
        println!("Removal cancelled.");
        return Ok(());
    }

    println!("{} Removed environment '{}'", "✓".green(), name);
    match config.get_current_environment_name() {
        Some(current) => println!("Current environment: {}", current),
        None => println!("No current environment. Run 'graph-search-cli auth select' to choose one."),
    }

    Ok(())
}

/// Remove `name` unless `confirm` declines; returns whether the environment was removed
fn remove_environment<F>(config: &mut Config, name: &str, force: bool, confirm: F) -> Result<bool>
where
    F: FnOnce(&str) -> Result<bool>,
{
    if !config.environments.contains_key(name) {
        if config.environments.is_empty() {
            anyhow::bail!("Environment '{}' not found. No environments are configured.", name);
        }
        anyhow::bail!(
            "Environment '{}' not found. Configured environments: {}",
            name,
            config.environment_labels().join(", ")
        );
    }

    if config.get_current_environment_name().map(String::as_str) == Some(name) {
        warn!("Removing the current environment '{}'", name);
    }

    if !force && !confirm(name)? {
        return Ok(false);
    }

    config.remove_environment(name)?;
    Ok(true)
}
