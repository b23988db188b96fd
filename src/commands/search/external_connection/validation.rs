//! Identifier rules enforced by Microsoft Search for external connections.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

pub const MIN_ID_LENGTH: usize = 3;
pub const MAX_ID_LENGTH: usize = 32;

/// Prefix reserved for first-party connectors
pub const RESERVED_PREFIX: &str = "Microsoft";

/// Identifiers already used by built-in Microsoft Search sources (case-sensitive)
pub const RESERVED_IDS: &[&str] = &[
    "None",
    "Directory",
    "Exchange",
    "ExchangeArchive",
    "LinkedIn",
    "Mailbox",
    "OneDriveBusiness",
    "SharePoint",
    "Teams",
    "Yammer",
    "Connectors",
    "TaskFabric",
    "PowerBI",
    "Assistant",
    "TopicEngine",
    "MSFT_All_Connectors",
];

// ASCII only; `\w` would also admit underscores
static ALPHANUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9]*$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("ID must be between 3 and 32 characters in length.")]
    Length,

    #[error("ID must only contain alphanumeric characters.")]
    NotAlphanumeric,

    #[error("ID cannot begin with Microsoft")]
    ReservedPrefix,

    #[error("ID cannot be one of the following values: {}.", RESERVED_IDS.join(", "))]
    ReservedId,
}

/// Check a connection id against the service rules, first failing rule wins
pub fn validate_id(id: &str) -> Result<(), ValidationError> {
    // Counted in UTF-16 code units, the unit the service measures ids in
    let length = id.encode_utf16().count();

    if !(MIN_ID_LENGTH..=MAX_ID_LENGTH).contains(&length) {
        return Err(ValidationError::Length);
    }

    if !ALPHANUMERIC.is_match(id) {
        return Err(ValidationError::NotAlphanumeric);
    }

    if length > RESERVED_PREFIX.len() && id.starts_with(RESERVED_PREFIX) {
        return Err(ValidationError::ReservedPrefix);
    }

    if RESERVED_IDS.contains(&id) {
        return Err(ValidationError::ReservedId);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_bounds() {
        assert_eq!(validate_id(""), Err(ValidationError::Length));
        assert_eq!(validate_id("ab"), Err(ValidationError::Length));
        assert_eq!(validate_id(&"a".repeat(33)), Err(ValidationError::Length));
        assert_eq!(validate_id("abc"), Ok(()));
        assert_eq!(validate_id(&"a".repeat(32)), Ok(()));
    }

    #[test]
    fn test_length_counts_utf16_code_units() {
        // Each emoji is two UTF-16 code units
        assert_eq!(validate_id("😀😀"), Err(ValidationError::NotAlphanumeric));
        let too_long = format!("{}😀", "a".repeat(31));
        assert_eq!(validate_id(&too_long), Err(ValidationError::Length));
        assert_eq!(validate_id("é"), Err(ValidationError::Length));
    }

    #[test]
    fn test_length_checked_before_characters() {
        // Too short and non-alphanumeric: the length rule reports first
        assert_eq!(validate_id("a_"), Err(ValidationError::Length));
    }

    #[test]
    fn test_rejects_non_alphanumeric() {
        assert_eq!(validate_id("my_id"), Err(ValidationError::NotAlphanumeric));
        assert_eq!(validate_id("my-id"), Err(ValidationError::NotAlphanumeric));
        assert_eq!(validate_id("my id"), Err(ValidationError::NotAlphanumeric));
        assert_eq!(validate_id("café12"), Err(ValidationError::NotAlphanumeric));
        assert_eq!(validate_id("abc\n"), Err(ValidationError::NotAlphanumeric));
    }

    #[test]
    fn test_microsoft_prefix() {
        assert_eq!(validate_id("MicrosoftTeams123"), Err(ValidationError::ReservedPrefix));
        assert_eq!(validate_id("Microsoft1"), Err(ValidationError::ReservedPrefix));
        assert_eq!(validate_id("Microsoft"), Ok(()));
        assert_eq!(validate_id("microsoftTeams"), Ok(()));
    }

    #[test]
    fn test_reserved_ids() {
        for id in RESERVED_IDS.iter().filter(|id| !id.contains('_')) {
            assert_eq!(validate_id(id), Err(ValidationError::ReservedId), "{}", id);
        }
        // Caught by the character rule before the reserved list
        assert_eq!(validate_id("MSFT_All_Connectors"), Err(ValidationError::NotAlphanumeric));
        assert_eq!(validate_id("sharepoint"), Ok(()));
    }

    #[test]
    fn test_reserved_message_lists_all_values() {
        assert_eq!(
            validate_id("SharePoint").unwrap_err().to_string(),
            "ID cannot be one of the following values: None, Directory, Exchange, \
             ExchangeArchive, LinkedIn, Mailbox, OneDriveBusiness, SharePoint, Teams, \
             Yammer, Connectors, TaskFabric, PowerBI, Assistant, TopicEngine, \
             MSFT_All_Connectors."
        );
    }

    #[test]
    fn test_accepts_valid_id() {
        assert_eq!(validate_id("Contoso1"), Ok(()));
        assert_eq!(validate_id("contosoHR2024"), Ok(()));
    }
}
