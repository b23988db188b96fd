use anyhow::Result;
use httpmock::prelude::*;
use serde_json::json;
use std::process::Output;
use tokio::process::Command;

const TENANT: &str = "contoso.onmicrosoft.com";

/// Run `search externalconnection add` with credentials pointed at `server`
async fn run_add(server: &MockServer, id: &str) -> Result<Output> {
    let dir = tempfile::tempdir()?;

    let output = Command::new(env!("CARGO_BIN_EXE_graph-search-cli"))
        .args([
            "search",
            "externalconnection",
            "add",
            "-i",
            id,
            "-n",
            "Contoso HR",
            "-d",
            "Connection to index Contoso HR system",
        ])
        .current_dir(dir.path())
        .env("GRAPH_SEARCH_CLI_CONFIG", dir.path().join("config.toml"))
        .env("GRAPH_TENANT_ID", TENANT)
        .env("GRAPH_CLIENT_ID", "client")
        .env("GRAPH_CLIENT_SECRET", "secret")
        .env("GRAPH_RESOURCE", server.base_url())
        .env("GRAPH_AUTHORITY", server.base_url())
        .env_remove("GRAPH_USERNAME")
        .env_remove("GRAPH_PASSWORD")
        .env_remove("RUST_LOG")
        .output()
        .await?;

    Ok(output)
}

async fn mock_token(server: &MockServer) -> httpmock::Mock<'_> {
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path(format!("/{}/oauth2/v2.0/token", TENANT));
            then.status(200).json_body(json!({
                "token_type": "Bearer",
                "expires_in": 3599,
                "access_token": "issued-token"
            }));
        })
        .await
}

#[tokio::test]
async fn test_conflict_exits_non_zero_with_service_message() -> Result<()> {
    let server = MockServer::start_async().await;
    let token_mock = mock_token(&server).await;
    let connection_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/v1.0/external/connections");
            then.status(409)
                .header("content-type", "application/json")
                .body(
                    r#"{"error":{"code":"NameAlreadyExists","message":"A connection with id 'ContosoHR' already exists."}}"#,
                );
        })
        .await;

    let output = run_add(&server, "ContosoHR").await?;
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1), "stderr: {}", stderr);
    assert!(
        stderr.contains("Error: A connection with id 'ContosoHR' already exists."),
        "stderr: {}",
        stderr
    );
    assert!(output.stdout.is_empty());

    token_mock.assert_calls_async(1).await;
    connection_mock.assert_calls_async(1).await;
    Ok(())
}

#[tokio::test]
async fn test_created_connection_exits_zero() -> Result<()> {
    let server = MockServer::start_async().await;
    mock_token(&server).await;
    let connection_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/v1.0/external/connections");
            then.status(201).json_body(json!({ "id": "ContosoHR" }));
        })
        .await;

    let output = run_add(&server, "ContosoHR").await?;

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(output.stdout.is_empty());
    connection_mock.assert_calls_async(1).await;
    Ok(())
}

#[tokio::test]
async fn test_invalid_id_exits_non_zero_without_requests() -> Result<()> {
    let server = MockServer::start_async().await;
    let token_mock = mock_token(&server).await;

    let output = run_add(&server, "my_id").await?;
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1), "stderr: {}", stderr);
    assert!(
        stderr.contains("Error: ID must only contain alphanumeric characters."),
        "stderr: {}",
        stderr
    );

    token_mock.assert_calls_async(0).await;
    Ok(())
}
