//! Microsoft Graph API module
//!
//! Typed request descriptors, the HTTP client seam used by commands, token
//! acquisition for configured environments, and translation of service
//! rejections into user-facing errors.

pub mod auth;
pub mod client;
pub mod constants;
pub mod error;
pub mod manager;
pub mod models;
pub mod odata;
pub mod request;

pub use auth::AuthManager;
pub use client::{GraphClient, HttpClient};
pub use error::{CommandError, RequestError};
pub use manager::ClientManager;
pub use models::{CredentialSet, TokenInfo};
pub use odata::handle_rejected_odata_json;
pub use request::{RequestOptions, ResponseType};
