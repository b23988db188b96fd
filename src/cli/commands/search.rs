use clap::{Args, Subcommand};

#[derive(Args)]
pub struct SearchCommands {
    #[command(subcommand)]
    pub command: SearchSubcommands,
}

#[derive(Subcommand)]
pub enum SearchSubcommands {
    /// Manage Microsoft Search external connections
    #[command(name = "externalconnection")]
    ExternalConnection {
        #[command(subcommand)]
        command: ExternalConnectionSubcommands,
    },
}

#[derive(Subcommand)]
pub enum ExternalConnectionSubcommands {
    /// Adds a new External Connection for Microsoft Search
    Add(ExternalConnectionAddArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ExternalConnectionAddArgs {
    /// Developer-provided unique ID of the connection (3-32 alphanumeric characters)
    #[arg(short, long)]
    pub id: String,

    /// Display name of the connection to be displayed in the Microsoft 365 admin center
    #[arg(short, long)]
    pub name: String,

    /// Description of the connection displayed in the Microsoft 365 admin center
    #[arg(short, long)]
    pub description: String,

    /// Comma-separated collection of application IDs for registered Entra applications
    /// that are allowed to manage the connection and its items
    #[arg(
        long = "authorizedAppIds",
        value_name = "authorizedAppIds",
        num_args = 0..=1,
        default_missing_value = ""
    )]
    pub authorized_app_ids: Option<String>,
}
