use anyhow::Result;
use log::{debug, info};
use serde_json::Value;

use super::payload::{ConnectionSpec, ExternalConnectionPayload};
use crate::api::client::HttpClient;
use crate::api::constants::{self, headers};
use crate::api::error::CommandError;
use crate::api::odata::handle_rejected_odata_json;
use crate::api::request::{RequestOptions, ResponseType};
use crate::api::ClientManager;
use crate::cli::commands::search::ExternalConnectionAddArgs;
use crate::config::Config;

/// Add a new external connection for Microsoft Search
///
/// The id is validated before any credentials are read or requests are made.
pub async fn add_command(args: ExternalConnectionAddArgs, env: Option<String>) -> Result<()> {
    let spec = ConnectionSpec::from(args);
    spec.validate()?;

    debug!(
        "Telemetry properties: {}",
        Value::Object(spec.telemetry_properties())
    );

    let client_manager = ClientManager::new(Config::load()?);
    let client = client_manager.get_client(env.as_deref()).await?;

    create_external_connection(&client, client.resource(), &spec).await?;

    info!("Created external connection {}", spec.id);
    Ok(())
}

/// Issue the single POST creating the connection described by `spec`
pub async fn create_external_connection<C>(
    client: &C,
    resource: &str,
    spec: &ConnectionSpec,
) -> Result<(), CommandError>
where
    C: HttpClient + ?Sized,
{
    let request = build_request(resource, &spec.to_payload())?;

    client
        .post(request)
        .await
        .map(|_| ())
        .map_err(handle_rejected_odata_json)
}

pub fn build_request(resource: &str, payload: &ExternalConnectionPayload) -> Result<RequestOptions, CommandError> {
    let body = serde_json::to_value(payload).map_err(|e| CommandError::new(e.to_string()))?;

    Ok(RequestOptions::new(constants::external_connections_endpoint(resource))
        .header("accept", headers::ACCEPT_JSON_NO_METADATA)
        .response_type(ResponseType::Json)
        .json(body))
}

impl From<ExternalConnectionAddArgs> for ConnectionSpec {
    fn from(args: ExternalConnectionAddArgs) -> Self {
        Self {
            id: args.id,
            name: args.name,
            description: args.description,
            authorized_app_ids: args.authorized_app_ids,
        }
    }
}
