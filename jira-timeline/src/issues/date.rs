//! Date parsing for tracker date fields.

use chrono::NaiveDate;

/// Parses a tracker date such as `"2024-03-15"` or `"24-03-15"`.
///
/// Two-digit years are taken to be in the 2000s. Returns `None` unless the
/// value is exactly three dash-separated integers forming a real calendar date.
#[must_use]
pub fn parse_api_date(value: &str) -> Option<NaiveDate> {
    let mut parts = value.trim().split('-');
    let year: i32 = parts.next()?.trim().parse().ok()?;
    let month: u32 = parts.next()?.trim().parse().ok()?;
    let day: u32 = parts.next()?.trim().parse().ok()?;
    if parts.next().is_some() {
        return None;
    }

    let year = if year < 100 { year + 2000 } else { year };
    NaiveDate::from_ymd_opt(year, month, day)
}
