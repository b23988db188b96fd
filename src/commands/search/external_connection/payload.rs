use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::validation::{ValidationError, validate_id};

/// User-supplied description of the connection to create
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionSpec {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Raw comma-separated application ids, as typed
    pub authorized_app_ids: Option<String>,
}

/// Request body for `POST /external/connections`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalConnectionPayload {
    pub id: String,
    pub name: String,
    pub description: String,
    pub configuration: ConnectionConfiguration,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionConfiguration {
    pub authorized_app_ids: Vec<String>,
}

impl ConnectionSpec {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_id(&self.id)
    }

    /// Split the raw app id list on commas.
    ///
    /// Segments are kept verbatim: no trimming, empty segments and duplicates
    /// survive, so `"app1, app2"` yields `["app1", " app2"]`.
    pub fn authorized_app_id_list(&self) -> Vec<String> {
        match self.authorized_app_ids.as_deref() {
            Some(raw) if !raw.is_empty() => raw.split(',').map(str::to_string).collect(),
            _ => Vec::new(),
        }
    }

    pub fn to_payload(&self) -> ExternalConnectionPayload {
        ExternalConnectionPayload {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            configuration: ConnectionConfiguration {
                authorized_app_ids: self.authorized_app_id_list(),
            },
        }
    }

    pub fn telemetry_properties(&self) -> Map<String, Value> {
        let mut properties = Map::new();
        properties.insert(
            "authorizedAppIds".to_string(),
            Value::Bool(self.authorized_app_ids.is_some()),
        );
        properties
    }
}
