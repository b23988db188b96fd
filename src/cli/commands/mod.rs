pub mod auth;
pub mod search;

pub use auth::{AuthCommands, AuthSubcommands};
pub use search::{SearchCommands, SearchSubcommands};
