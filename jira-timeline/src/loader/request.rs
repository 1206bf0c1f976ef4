//! Search request body.

use crate::issues::DUE_DATE_FIELD;
use serde::Serialize;

/// Body of the search `POST`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub jql: String,
    pub max_results: u32,
    pub fields: Vec<String>,
}

impl SearchRequest {
    /// Builds a request for the fields the timeline needs.
    #[must_use]
    pub fn new(jql: &str, max_results: u32, start_date_field: &str) -> Self {
        Self {
            jql: jql.to_string(),
            max_results,
            fields: vec![
                "key".to_string(),
                "summary".to_string(),
                start_date_field.to_string(),
                DUE_DATE_FIELD.to_string(),
                "status".to_string(),
            ],
        }
    }
}
