//! Raw search response shapes.

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// Body returned by the search endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    /// Matching issues, in the order the tracker returned them.
    #[serde(default)]
    pub issues: Vec<RawIssue>,

    /// Total number of matches, which may exceed `issues.len()`.
    pub total: Option<u64>,
}

/// One issue as returned by the tracker.
#[derive(Debug, Deserialize)]
pub struct RawIssue {
    pub key: String,
    pub fields: RawFields,
}

/// The requested subset of an issue's fields.
#[derive(Debug, Deserialize)]
pub struct RawFields {
    pub summary: Option<String>,
    pub duedate: Option<String>,
    pub status: Option<RawStatus>,

    /// Everything else, including the custom start-date field.
    #[serde(flatten)]
    pub custom: HashMap<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStatus {
    pub status_category: Option<RawStatusCategory>,
}

#[derive(Debug, Deserialize)]
pub struct RawStatusCategory {
    pub name: String,
}

impl RawFields {
    /// Returns a custom field's string value, treating null as absent.
    ///
    /// Non-string values are rendered as JSON text so they surface in errors.
    #[must_use]
    pub fn custom_string(&self, field: &str) -> Option<String> {
        match self.custom.get(field)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Returns the status-category name, if reported.
    #[must_use]
    pub fn status_category_name(&self) -> Option<&str> {
        self.status
            .as_ref()?
            .status_category
            .as_ref()
            .map(|category| category.name.as_str())
    }
}
