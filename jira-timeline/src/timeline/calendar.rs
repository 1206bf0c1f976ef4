//! Calendar arithmetic.

use chrono::{Datelike, NaiveDate, Weekday};

/// Three-letter month abbreviations, January first.
const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Signed number of whole days from `from` to `to`.
#[must_use]
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// Abbreviated English name of the date's month.
#[must_use]
pub fn month_abbreviation(date: NaiveDate) -> &'static str {
    MONTH_NAMES[date.month0() as usize]
}

/// Whether the date opens a new week on the timeline.
#[must_use]
pub fn is_week_start(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Mon
}

/// Lazy sequence of calendar days in `[start, end)`.
///
/// The end day itself is never yielded.
#[derive(Debug, Clone)]
pub struct CalendarDays {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for CalendarDays {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.filter(|day| *day < self.end)?;
        self.next = current.succ_opt();
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .next
            .map_or(0, |day| days_between(day, self.end).max(0) as usize);
        (remaining, Some(remaining))
    }
}

/// Returns the days from `start` up to, but not including, `end`.
#[must_use]
pub fn calendar_days(start: NaiveDate, end: NaiveDate) -> CalendarDays {
    CalendarDays {
        next: Some(start),
        end,
    }
}
