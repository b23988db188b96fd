pub mod auth;
pub mod search;

pub use auth::auth_command;
pub use search::search_command;
