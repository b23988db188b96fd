//! Translation of rejected OData/JSON responses into user-facing command errors.

use super::error::{CommandError, RequestError};
use log::debug;
use serde_json::Value;

/// Convert a failed request into the error reported to the user.
///
/// Service payloads are searched for a message in the shapes used across
/// Microsoft 365 endpoints: SharePoint's `odata.error`, Graph's `error`
/// object, the token endpoint's `error_description`, and a bare `message`.
pub fn handle_rejected_odata_json(err: RequestError) -> CommandError {
    debug!("Translating rejected request: {:?}", err);

    match err {
        RequestError::Status { status, body } => {
            match serde_json::from_str::<Value>(&body) {
                Ok(json) => from_error_body(&json).unwrap_or_else(|| fallback(status, &body)),
                Err(_) => fallback(status, &body),
            }
        }
        other => CommandError::new(other.to_string()),
    }
}

fn from_error_body(json: &Value) -> Option<CommandError> {
    if let Some(message) = json.pointer("/odata.error/message/value").and_then(Value::as_str) {
        return Some(CommandError::new(message));
    }

    if let Some(error) = json.get("error") {
        if let Some(message) = error.get("message").and_then(Value::as_str) {
            return Some(match error.get("code").and_then(Value::as_str) {
                Some(code) => CommandError::with_code(message, code),
                None => CommandError::new(message),
            });
        }
    }

    if let Some(description) = json.get("error_description").and_then(Value::as_str) {
        return Some(CommandError::new(description));
    }

    json.get("message")
        .and_then(Value::as_str)
        .map(CommandError::new)
}

fn fallback(status: u16, body: &str) -> CommandError {
    if body.trim().is_empty() {
        CommandError::new(format!("Request failed with status code {}", status))
    } else {
        CommandError::new(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(status: u16, body: &str) -> RequestError {
        RequestError::Status {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_graph_error_keeps_code() {
        let err = handle_rejected_odata_json(status(
            409,
            r#"{"error":{"code":"NameAlreadyExists","message":"A connection with the same id already exists."}}"#,
        ));
        assert_eq!(err.message, "A connection with the same id already exists.");
        assert_eq!(err.code.as_deref(), Some("NameAlreadyExists"));
    }

    #[test]
    fn test_sharepoint_odata_error() {
        let err = handle_rejected_odata_json(status(
            400,
            r#"{"odata.error":{"code":"-1","message":{"lang":"en-US","value":"Invalid request"}}}"#,
        ));
        assert_eq!(err.to_string(), "Invalid request");
        assert_eq!(err.code, None);
    }

    #[test]
    fn test_token_endpoint_error_description() {
        let err = handle_rejected_odata_json(status(
            401,
            r#"{"error":"invalid_client","error_description":"AADSTS7000215: Invalid client secret provided."}"#,
        ));
        assert_eq!(err.message, "AADSTS7000215: Invalid client secret provided.");
    }

    #[test]
    fn test_plain_text_and_empty_bodies() {
        assert_eq!(
            handle_rejected_odata_json(status(502, "Bad Gateway")).message,
            "Bad Gateway"
        );
        assert_eq!(
            handle_rejected_odata_json(status(503, "")).message,
            "Request failed with status code 503"
        );
    }

    #[test]
    fn test_unrecognised_json_falls_back_to_body() {
        let err = handle_rejected_odata_json(status(500, r#"{"unexpected":true}"#));
        assert_eq!(err.message, r#"{"unexpected":true}"#);
    }

    #[test]
    fn test_decode_error_uses_display_text() {
        let decode = serde_json::from_str::<Value>("not json").unwrap_err();
        let err = handle_rejected_odata_json(RequestError::Decode(decode));
        assert!(err.message.starts_with("Invalid JSON response:"));
    }
}
