pub mod remove;
pub mod select;
pub mod setup;
pub mod status;

pub use remove::remove_command;
pub use select::select_command;
pub use setup::{SetupOptions, setup_command};
pub use status::status_command;

use anyhow::Result;

use crate::cli::commands::AuthSubcommands;

pub async fn auth_command(command: AuthSubcommands) -> Result<()> {
    match command {
        AuthSubcommands::Setup {
            name,
            tenant_id,
            client_id,
            client_secret,
            username,
            password,
            resource,
            authority,
            from_env,
            from_env_file,
        } => {
            setup_command(SetupOptions {
                name,
                tenant_id,
                client_id,
                client_secret,
                username,
                password,
                resource,
                authority,
                from_env,
                from_env_file,
            })
            .await
        }
        AuthSubcommands::Select { name } => select_command(name).await,
        AuthSubcommands::Remove { name, force } => remove_command(name, force).await,
        AuthSubcommands::Status => status_command().await,
    }
}
