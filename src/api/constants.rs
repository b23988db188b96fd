//! API Constants and Configuration for the Microsoft Graph REST API

/// Default Microsoft Graph resource URL
pub const GRAPH_RESOURCE: &str = "https://graph.microsoft.com";

/// Default Entra ID authority host
pub const AUTHORITY_HOST: &str = "https://login.microsoftonline.com";

/// Microsoft Graph API version
pub const API_VERSION: &str = "v1.0";

/// Collection path for Microsoft Search external connections
pub const EXTERNAL_CONNECTIONS_PATH: &str = "external/connections";

/// User agent sent with every request
pub const USER_AGENT: &str = "graph-search-cli/0.1";

/// Standard headers for Microsoft Graph requests
pub mod headers {
    /// Accept header asking the service to omit OData annotations
    pub const ACCEPT_JSON_NO_METADATA: &str = "application/json;odata.metadata=none";

    /// Correlation header understood by Microsoft Graph
    pub const CLIENT_REQUEST_ID: &str = "client-request-id";
}

/// Build the external connections collection URL for a resource
pub fn external_connections_endpoint(resource: &str) -> String {
    format!(
        "{}/{}/{}",
        resource.trim_end_matches('/'),
        API_VERSION,
        EXTERNAL_CONNECTIONS_PATH
    )
}

/// Build the OAuth 2.0 v2 token endpoint for a tenant
pub fn token_endpoint(authority: &str, tenant_id: &str) -> String {
    format!(
        "{}/{}/oauth2/v2.0/token",
        authority.trim_end_matches('/'),
        urlencoding::encode(tenant_id)
    )
}

/// Scope requesting every application permission granted on a resource
pub fn default_scope(resource: &str) -> String {
    format!("{}/.default", resource.trim_end_matches('/'))
}
