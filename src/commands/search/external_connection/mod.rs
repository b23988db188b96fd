//! `search externalconnection` commands

pub mod add;
pub mod payload;
pub mod validation;

pub use add::{add_command, build_request, create_external_connection};
pub use payload::{ConnectionConfiguration, ConnectionSpec, ExternalConnectionPayload};
pub use validation::{ValidationError, validate_id};
