use clap::{Args, Subcommand};

#[derive(Args)]
pub struct AuthCommands {
    #[command(subcommand)]
    pub command: AuthSubcommands,
}

#[derive(Subcommand)]
pub enum AuthSubcommands {
    /// Set up authentication for a new environment
    Setup {
        /// Name for this environment (e.g., "production", "test")
        #[arg(short, long)]
        name: Option<String>,
        /// Entra ID tenant ID or domain
        #[arg(long)]
        tenant_id: Option<String>,
        /// Entra ID application (client) ID
        #[arg(long)]
        client_id: Option<String>,
        /// Entra ID application client secret
        #[arg(long)]
        client_secret: Option<String>,
        /// Username for delegated sign-in (omit for app-only access)
        #[arg(long, requires = "password")]
        username: Option<String>,
        /// Password for delegated sign-in
        #[arg(long, requires = "username")]
        password: Option<String>,
        /// Microsoft Graph resource URL
        #[arg(long)]
        resource: Option<String>,
        /// Entra ID authority host
        #[arg(long)]
        authority: Option<String>,
        /// Import credentials from environment variables
        #[arg(long, conflicts_with = "from_env_file")]
        from_env: bool,
        /// Import credentials from specified .env file
        #[arg(long)]
        from_env_file: Option<String>,
    },
    /// Select the current authentication environment
    Select {
        /// Environment name to select
        name: Option<String>,
    },
    /// Remove an authentication environment
    Remove {
        /// Environment name to remove
        name: String,
        /// Force removal without confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// Show current authentication status
    Status,
}
