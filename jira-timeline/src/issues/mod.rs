//! Issue records and search response mapping.
//!
//! This module turns the raw search response into normalised [`Issue`]
//! records: dates are parsed, status categories are bucketed, and malformed
//! values are reported with the offending issue key and field.

mod date;
mod error;
mod issue;
mod response;
mod status;

pub use date::parse_api_date;
pub use error::ParseError;
pub use issue::Issue;
pub use response::{RawFields, RawIssue, RawStatus, RawStatusCategory, SearchResponse};
pub use status::StatusCategory;

use chrono::NaiveDate;
use tracing::{debug, warn};

/// Field id of the due date.
pub const DUE_DATE_FIELD: &str = "duedate";

/// Maps a search response onto issues, preserving the response order.
///
/// # Arguments
///
/// * `response` - Decoded search response
/// * `start_date_field` - Field id holding the start date
/// * `skip_unscheduled` - Drop issues without a start date instead of failing
///
/// # Errors
///
/// Returns [`ParseError`] for the first issue with a malformed date, or with
/// no start date when `skip_unscheduled` is off.
pub fn map_search_response(
    response: SearchResponse,
    start_date_field: &str,
    skip_unscheduled: bool,
) -> Result<Vec<Issue>, ParseError> {
    if let Some(total) = response.total {
        if total > response.issues.len() as u64 {
            warn!(
                total,
                returned = response.issues.len(),
                "Search matched more issues than were returned"
            );
        }
    }

    let mut issues = Vec::with_capacity(response.issues.len());
    for raw in response.issues {
        match map_issue(raw, start_date_field) {
            Ok(issue) => issues.push(issue),
            Err(ParseError::MissingField { key, field }) if skip_unscheduled => {
                warn!(key = %key, field = %field, "Skipping issue without a start date");
            }
            Err(e) => return Err(e),
        }
    }

    debug!(count = issues.len(), "Mapped search response");
    Ok(issues)
}

/// Maps a single raw issue.
///
/// # Errors
///
/// Returns [`ParseError::MissingField`] when the start date is absent and
/// [`ParseError::InvalidDate`] when either date is malformed.
pub fn map_issue(raw: RawIssue, start_date_field: &str) -> Result<Issue, ParseError> {
    let start_date = match raw.fields.custom_string(start_date_field) {
        Some(value) => parse_field(&raw.key, start_date_field, &value)?,
        None => {
            return Err(ParseError::MissingField {
                key: raw.key,
                field: start_date_field.to_string(),
            })
        }
    };

    let end_date = match raw.fields.duedate.as_deref() {
        Some(value) => Some(parse_field(&raw.key, DUE_DATE_FIELD, value)?),
        None => None,
    };

    let status = raw
        .fields
        .status_category_name()
        .map_or(StatusCategory::Other, StatusCategory::from_name);

    Ok(Issue {
        summary: raw.fields.summary.unwrap_or_default(),
        key: raw.key,
        start_date,
        end_date,
        status,
    })
}

fn parse_field(key: &str, field: &str, value: &str) -> Result<NaiveDate, ParseError> {
    parse_api_date(value).ok_or_else(|| ParseError::InvalidDate {
        key: key.to_string(),
        field: field.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const START_FIELD: &str = "customfield_11104";

    fn response(issues: serde_json::Value) -> SearchResponse {
        serde_json::from_value(json!({ "issues": issues })).unwrap()
    }

    fn raw_issue(key: &str, start: serde_json::Value, due: serde_json::Value, category: &str) -> serde_json::Value {
        json!({
            "key": key,
            "fields": {
                "summary": format!("Summary of {key}"),
                "customfield_11104": start,
                "duedate": due,
                "status": { "statusCategory": { "name": category } }
            }
        })
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn maps_issues_in_response_order() {
        let response = response(json!([
            raw_issue("B-2", json!("2024-02-01"), json!("2024-02-10"), "Done"),
            raw_issue("A-1", json!("2024-01-01"), json!("2024-01-05"), "To Do"),
        ]));

        let issues = map_search_response(response, START_FIELD, false).unwrap();

        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].key, "B-2");
        assert_eq!(issues[0].status, StatusCategory::Done);
        assert_eq!(issues[1].key, "A-1");
        assert_eq!(issues[1].summary, "Summary of A-1");
        assert_eq!(issues[1].start_date, date(2024, 1, 1));
        assert_eq!(issues[1].end_date, Some(date(2024, 1, 5)));
        assert_eq!(issues[1].status, StatusCategory::ToDo);
    }

    #[test]
    fn empty_response_is_valid() {
        let issues = map_search_response(response(json!([])), START_FIELD, false).unwrap();
        assert!(issues.is_empty());
    }

    #[test]
    fn null_due_date_is_allowed() {
        let response = response(json!([raw_issue(
            "A-1",
            json!("2024-01-01"),
            json!(null),
            "In Progress"
        )]));

        let issues = map_search_response(response, START_FIELD, false).unwrap();
        assert_eq!(issues[0].end_date, None);
        assert_eq!(issues[0].status, StatusCategory::InProgress);
    }

    #[test]
    fn missing_start_date_names_issue_and_field() {
        let response = response(json!([raw_issue("A-1", json!(null), json!("2024-01-05"), "Done")]));

        let result = map_search_response(response, START_FIELD, false);
        assert_eq!(
            result,
            Err(ParseError::MissingField {
                key: "A-1".to_string(),
                field: START_FIELD.to_string(),
            })
        );
    }

    #[test]
    fn skip_unscheduled_drops_issues_without_start_date() {
        let response = response(json!([
            raw_issue("A-1", json!(null), json!("2024-01-05"), "Done"),
            raw_issue("A-2", json!("2024-01-02"), json!("2024-01-05"), "Done"),
        ]));

        let issues = map_search_response(response, START_FIELD, true).unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].key, "A-2");
    }

    #[test]
    fn skip_unscheduled_still_rejects_malformed_dates() {
        let response = response(json!([raw_issue("A-1", json!("next week"), json!(null), "Done")]));

        let result = map_search_response(response, START_FIELD, true);
        assert!(matches!(result, Err(ParseError::InvalidDate { .. })));
    }

    #[test]
    fn malformed_due_date_names_issue_and_field() {
        let response = response(json!([raw_issue("A-7", json!("2024-01-01"), json!("2024-99-01"), "Done")]));

        let result = map_search_response(response, START_FIELD, false);
        assert_eq!(
            result,
            Err(ParseError::InvalidDate {
                key: "A-7".to_string(),
                field: "duedate".to_string(),
                value: "2024-99-01".to_string(),
            })
        );
    }

    #[test]
    fn non_string_start_date_is_invalid() {
        let response = response(json!([raw_issue("A-1", json!(20240101), json!(null), "Done")]));

        let result = map_search_response(response, START_FIELD, false);
        assert!(matches!(result, Err(ParseError::InvalidDate { value, .. }) if value == "20240101"));
    }

    #[test]
    fn missing_status_maps_to_other() {
        let response = response(json!([{
            "key": "A-1",
            "fields": { "customfield_11104": "2024-01-01" }
        }]));

        let issues = map_search_response(response, START_FIELD, false).unwrap();
        assert_eq!(issues[0].status, StatusCategory::Other);
        assert_eq!(issues[0].summary, "");
    }

    #[test]
    fn unrecognised_status_maps_to_other() {
        let response = response(json!([raw_issue(
            "A-1",
            json!("2024-01-01"),
            json!(null),
            "Blocked by legal"
        )]));

        let issues = map_search_response(response, START_FIELD, false).unwrap();
        assert_eq!(issues[0].status, StatusCategory::Other);
    }

    #[test]
    fn custom_start_field_is_honoured() {
        let response = response(json!([{
            "key": "A-1",
            "fields": {
                "customfield_99": "24-06-01",
                "status": { "statusCategory": { "name": "Done" } }
            }
        }]));

        let issues = map_search_response(response, "customfield_99", false).unwrap();
        assert_eq!(issues[0].start_date, date(2024, 6, 1));
    }
}
