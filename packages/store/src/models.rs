//! # Domain models for the user console
//!
//! Defines the record shape exchanged with the REST backend and the small
//! enums the user-management view switches on.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`User`] | A single user record. `id` is absent until the backend assigns one; every other field is a plain string. Serialised with camelCase keys (`firstName`, `lastName`, ...) in declaration order. |
//! | [`ViewMode`] | How the visible page is presented: a table, pretty-printed JSON, or delimited plain text. |
//!
//! ## Helper functions
//!
//! - [`parse_generate_count`] — validates the free-form count typed into the
//!   bulk-generate prompt. Anything that is not a non-negative integer is
//!   rejected and the generate request is never issued.

use serde::{Deserialize, Serialize};

/// Upper bound shown in the bulk-generate prompt. The backend enforces its
/// own limit; the console only displays this one.
pub const GENERATE_ADVISORY_MAX: u32 = 100;

/// Value pre-filled in the bulk-generate prompt.
pub const GENERATE_DEFAULT_COUNT: u32 = 10;

/// A user record as stored by the backend.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Server-assigned identifier, `None` for records not yet created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
}

impl User {
    /// First and last name joined by a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Copy of this record with the identifier stripped, used as the body of
    /// create and update requests.
    pub fn without_id(&self) -> Self {
        Self {
            id: None,
            ..self.clone()
        }
    }
}

/// Presentation of the visible page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Table,
    Json,
    Text,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::Table, ViewMode::Json, ViewMode::Text];

    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Table => "Table",
            ViewMode::Json => "JSON",
            ViewMode::Text => "Text",
        }
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Parse the count entered in the bulk-generate prompt.
///
/// Only whole, non-negative decimal counts are accepted. Fractions, signs,
/// exponents and hex literals return `None`, so the caller drops the request
/// instead of sending a count the generate endpoint cannot take.
pub fn parse_generate_count(input: &str) -> Option<u32> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<u32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> User {
        User {
            id: Some(7),
            first_name: "Jane".into(),
            last_name: "Smith".into(),
            email: "jane.smith@email.com".into(),
            phone: "+1-555-0124".into(),
            address: "456 Oak Ave".into(),
            city: "Los Angeles".into(),
            country: "USA".into(),
        }
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.starts_with(r#"{"id":7,"firstName":"Jane","lastName":"Smith""#));
    }

    #[test]
    fn test_missing_id_is_omitted_and_defaulted() {
        let body = serde_json::to_value(sample().without_id()).unwrap();
        assert!(body.get("id").is_none());

        let parsed: User = serde_json::from_str(r#"{"firstName":"Bob"}"#).unwrap();
        assert_eq!(parsed.id, None);
        assert_eq!(parsed.first_name, "Bob");
        assert_eq!(parsed.country, "");
    }

    #[test]
    fn test_full_name() {
        assert_eq!(sample().full_name(), "Jane Smith");
    }

    #[test]
    fn test_parse_generate_count() {
        assert_eq!(parse_generate_count("10"), Some(10));
        assert_eq!(parse_generate_count("  25 "), Some(25));
        assert_eq!(parse_generate_count("250"), Some(250));
        assert_eq!(parse_generate_count(""), None);
        assert_eq!(parse_generate_count("ten"), None);
        assert_eq!(parse_generate_count("-3"), None);
        assert_eq!(parse_generate_count("1.5"), None);
        assert_eq!(parse_generate_count("1e2"), None);
        assert_eq!(parse_generate_count("0x10"), None);
    }
}
