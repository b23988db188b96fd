use super::constants::{self, headers};
use super::error::RequestError;
use super::request::{RequestOptions, ResponseType};
use anyhow::Context;
use async_trait::async_trait;
use log::{debug, warn};
use serde_json::Value;
use std::time::{Duration, Instant};

/// Transport used by commands to talk to the service
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Issue a POST described by `request` and return the decoded response body
    async fn post(&self, request: RequestOptions) -> Result<Value, RequestError>;
}

/// Microsoft Graph client bound to one resource URL and access token
#[derive(Clone)]
pub struct GraphClient {
    resource: String,
    http_client: reqwest::Client,
    access_token: String,
}

impl GraphClient {
    pub fn new(resource: String, access_token: String) -> anyhow::Result<Self> {
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(constants::USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self::with_custom_client(resource, access_token, http_client))
    }

    /// Create a new client with custom HTTP client configuration
    pub fn with_custom_client(resource: String, access_token: String, http_client: reqwest::Client) -> Self {
        Self {
            resource,
            http_client,
            access_token,
        }
    }

    /// Base resource URL requests are issued against
    pub fn resource(&self) -> &str {
        &self.resource
    }

    async fn read_body(response: reqwest::Response, response_type: ResponseType) -> Result<Value, RequestError> {
        let text = response.text().await?;
        match response_type {
            ResponseType::Text => Ok(Value::String(text)),
            ResponseType::Json if text.trim().is_empty() => Ok(Value::Null),
            ResponseType::Json => Ok(serde_json::from_str(&text)?),
        }
    }
}

#[async_trait]
impl HttpClient for GraphClient {
    async fn post(&self, request: RequestOptions) -> Result<Value, RequestError> {
        let correlation_id = uuid::Uuid::new_v4().to_string();
        debug!("POST {} (client-request-id: {})", request.url, correlation_id);

        let mut builder = self
            .http_client
            .post(&request.url)
            .bearer_auth(&self.access_token)
            .header(headers::CLIENT_REQUEST_ID, &correlation_id);

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let started = Instant::now();
        let response = builder.send().await?;
        let status = response.status();
        debug!(
            "POST {} returned {} in {:.2}ms",
            request.url,
            status,
            started.elapsed().as_secs_f64() * 1000.0
        );

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Request {} failed with status {}", correlation_id, status);
            return Err(RequestError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Self::read_body(response, request.response_type).await
    }
}
