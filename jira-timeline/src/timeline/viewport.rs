//! Viewport sizing.

use super::days_between;
use chrono::NaiveDate;

/// Padding added on each side of the horizontal extent, in days.
pub const MARGIN: i64 = 10;

/// Smallest content width and height before padding.
pub const MIN_EXTENT: i64 = 100;

/// Vertical distance between two issue rows.
pub const ROW_HEIGHT: i64 = 15;

/// Visible region of the timeline.
///
/// Horizontal units are days from today; vertical units are row offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub left: i64,
    pub top: i64,
    pub width: i64,
    pub height: i64,
}

impl Viewport {
    /// Fits the viewport around `[lowest, highest]` and `rows` issue rows.
    #[must_use]
    pub fn fit(today: NaiveDate, lowest: NaiveDate, highest: NaiveDate, rows: usize) -> Self {
        let rows = i64::try_from(rows).unwrap_or(i64::MAX / ROW_HEIGHT);
        Self {
            left: days_between(today, lowest) - MARGIN,
            top: -MARGIN,
            width: MIN_EXTENT.max(days_between(lowest, highest)) + 2 * MARGIN,
            height: MIN_EXTENT.max(rows.saturating_mul(ROW_HEIGHT)) + 2 * MARGIN,
        }
    }

    /// Lowest visible vertical coordinate.
    #[must_use]
    pub fn bottom(&self) -> i64 {
        self.top + self.height
    }

    /// Value of the SVG `viewBox` attribute.
    #[must_use]
    pub fn view_box(&self) -> String {
        format!("{} {} {} {}", self.left, self.top, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn single_day_still_gets_minimum_extent() {
        let day = date(2024, 1, 10);
        let viewport = Viewport::fit(day, day, day, 1);

        assert_eq!(viewport.width, 120);
        assert_eq!(viewport.height, 120);
        assert!(viewport.width >= MIN_EXTENT && viewport.height >= MIN_EXTENT);
    }

    #[test]
    fn zero_rows_still_gets_minimum_extent() {
        let day = date(2024, 1, 10);
        let viewport = Viewport::fit(day, day, day, 0);

        assert_eq!(viewport.height, 120);
        assert_eq!(viewport.left, -10);
        assert_eq!(viewport.top, -10);
    }

    #[test]
    fn wide_range_and_many_rows_grow_the_viewport() {
        let today = date(2024, 1, 1);
        let viewport = Viewport::fit(today, date(2024, 1, 11), date(2024, 12, 31), 20);

        assert_eq!(viewport.left, 0);
        assert_eq!(viewport.width, 355 + 20);
        assert_eq!(viewport.height, 300 + 20);
    }

    #[test]
    fn inverted_range_keeps_minimum_width() {
        let viewport = Viewport::fit(date(2024, 1, 1), date(2024, 2, 1), date(2024, 1, 1), 1);
        assert_eq!(viewport.width, 120);
    }

    #[test]
    fn formats_view_box() {
        let viewport = Viewport {
            left: -40,
            top: -10,
            width: 120,
            height: 130,
        };
        assert_eq!(viewport.view_box(), "-40 -10 120 130");
        assert_eq!(viewport.bottom(), 120);
    }
}
