pub mod external_connection;

use anyhow::Result;

use crate::cli::commands::search::{ExternalConnectionSubcommands, SearchSubcommands};

pub async fn search_command(command: SearchSubcommands, env: Option<String>) -> Result<()> {
    match command {
        SearchSubcommands::ExternalConnection { command } => match command {
            ExternalConnectionSubcommands::Add(args) => {
                external_connection::add_command(args, env).await
            }
        },
    }
}
