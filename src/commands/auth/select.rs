use anyhow::Result;
use colored::*;
use log::info;

use crate::config::Config;
use crate::ui::prompt_environment_selection;

pub async fn select_command(name: Option<String>) -> Result<()> {
    info!("Starting auth select");

    let mut config = Config::load()?;
    let selected = select_environment(&mut config, name, prompt_environment_selection)?;

    let summary = config
        .get_environment(&selected)
        .map(|auth| auth.summary())
        .unwrap_or_default();
    println!(
        "{} Selected environment: {} ({})",
        "✓".green(),
        selected.bright_green().bold(),
        summary
    );

    Ok(())
}

/// Make `name` current, or let `choose` pick an index from the environment labels
fn select_environment<F>(config: &mut Config, name: Option<String>, choose: F) -> Result<String>
where
    F: FnOnce(&[String], Option<usize>) -> Result<usize>,
{
    if config.environments.is_empty() {
        anyhow::bail!("No environments configured. Run 'graph-search-cli auth setup' to create one.");
    }

    let selected = match name {
        Some(name) if config.environments.contains_key(&name) => name,
        Some(name) => anyhow::bail!(
            "Environment '{}' not found. Configured environments: {}",
            name,
            config.environment_labels().join(", ")
        ),
        None => {
            let names: Vec<String> = config.list_environments().into_iter().cloned().collect();
            let current = config
                .get_current_environment_name()
                .and_then(|current| names.iter().position(|n| n == current));
            let index = choose(&config.environment_labels(), current)?;
            names
                .get(index)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("No environment at position {}", index))?
        }
    };

    config.set_current_environment(selected.clone())?;
    Ok(selected)
}
