//! Timeline layout.
//!
//! Places issues on a shared coordinate system: days from today on the
//! horizontal axis, row index on the vertical axis. The output is a flat list
//! of [`Shape`]s in drawing order, ready to be rendered.

mod calendar;
mod shape;
mod viewport;

pub use calendar::{calendar_days, days_between, is_week_start, month_abbreviation, CalendarDays};
pub use shape::{GridLineKind, Shape};
pub use viewport::{Viewport, MARGIN, MIN_EXTENT, ROW_HEIGHT};

use crate::issues::Issue;
use chrono::{Datelike, NaiveDate};

/// Height of an issue bar.
pub const BAR_HEIGHT: i64 = 14;

/// Radius of the marker drawn for zero-length issues.
pub const MARKER_RADIUS: i64 = 3;

/// A laid-out timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    /// Visible region.
    pub viewport: Viewport,

    /// Shapes in drawing order; later shapes are drawn on top.
    pub shapes: Vec<Shape>,
}

impl Timeline {
    /// Number of issue bars.
    #[must_use]
    pub fn bar_count(&self) -> usize {
        self.count(|shape| matches!(shape, Shape::Bar { .. }))
    }

    /// Number of zero-length issue markers.
    #[must_use]
    pub fn marker_count(&self) -> usize {
        self.count(|shape| matches!(shape, Shape::Marker { .. }))
    }

    /// Number of gridlines of the given kind.
    #[must_use]
    pub fn grid_line_count(&self, kind: GridLineKind) -> usize {
        self.count(|shape| matches!(shape, Shape::GridLine { kind: k, .. } if *k == kind))
    }

    fn count(&self, predicate: impl Fn(&Shape) -> bool) -> usize {
        self.shapes.iter().filter(|shape| predicate(*shape)).count()
    }
}

/// Lays out `issues` relative to `today`.
///
/// Issues keep their input order, one row each. Gridlines are drawn first,
/// then issues, then the line marking today.
#[must_use]
pub fn layout(issues: &[Issue], today: NaiveDate) -> Timeline {
    let lowest = issues
        .iter()
        .map(|issue| issue.start_date)
        .min()
        .unwrap_or(today);
    let highest = issues
        .iter()
        .filter_map(|issue| issue.end_date)
        .max()
        .unwrap_or(lowest);

    let viewport = Viewport::fit(today, lowest, highest, issues.len());
    let mut shapes = Vec::new();

    for day in calendar_days(lowest, highest) {
        let x = days_between(today, day);
        if day.day() == 1 {
            shapes.push(grid_line(&viewport, x, GridLineKind::Month));
            shapes.push(Shape::MonthTag {
                x,
                y: viewport.top,
                label: month_abbreviation(day),
            });
        } else if is_week_start(day) {
            shapes.push(grid_line(&viewport, x, GridLineKind::Week));
        }
    }

    for (row, issue) in (0_i64..).zip(issues) {
        let x = days_between(today, issue.start_date);
        let y = row * ROW_HEIGHT;
        let width = issue.elapsed_days();

        if width > 0 {
            shapes.push(Shape::Bar {
                x,
                y,
                width,
                height: BAR_HEIGHT,
                status: issue.status,
            });
        } else {
            shapes.push(Shape::Marker {
                cx: x,
                cy: y + BAR_HEIGHT / 2,
                r: MARKER_RADIUS,
                status: issue.status,
            });
        }

        shapes.push(Shape::Label {
            x: x + 2,
            y: y + 9,
            text: issue.label(),
        });
    }

    shapes.push(grid_line(&viewport, 0, GridLineKind::Now));

    Timeline { viewport, shapes }
}

fn grid_line(viewport: &Viewport, x: i64, kind: GridLineKind) -> Shape {
    Shape::GridLine {
        x,
        y1: viewport.top,
        y2: viewport.bottom(),
        kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issues::StatusCategory;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn issue(key: &str, start: NaiveDate, end: Option<NaiveDate>, status: StatusCategory) -> Issue {
        Issue {
            key: key.to_string(),
            summary: format!("summary {key}"),
            start_date: start,
            end_date: end,
            status,
        }
    }

    fn grid_lines(timeline: &Timeline) -> Vec<(i64, GridLineKind)> {
        timeline
            .shapes
            .iter()
            .filter_map(|shape| match shape {
                Shape::GridLine { x, kind, .. } => Some((*x, *kind)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn draws_bar_and_marker_with_status() {
        let today = date(2024, 1, 1);
        let issues = vec![
            issue("A", date(2024, 1, 1), Some(date(2024, 1, 5)), StatusCategory::ToDo),
            issue("B", date(2024, 1, 10), Some(date(2024, 1, 10)), StatusCategory::Done),
        ];

        let timeline = layout(&issues, today);

        assert!(timeline.shapes.contains(&Shape::Bar {
            x: 0,
            y: 0,
            width: 4,
            height: 14,
            status: StatusCategory::ToDo,
        }));
        assert!(timeline.shapes.contains(&Shape::Marker {
            cx: 9,
            cy: 22,
            r: 3,
            status: StatusCategory::Done,
        }));
        assert_eq!(timeline.bar_count(), 1);
        assert_eq!(timeline.marker_count(), 1);
    }

    #[test]
    fn missing_or_inverted_due_date_draws_marker() {
        let today = date(2024, 1, 1);
        let issues = vec![
            issue("A", date(2024, 1, 3), None, StatusCategory::InProgress),
            issue("B", date(2024, 1, 3), Some(date(2024, 1, 1)), StatusCategory::Other),
        ];

        let timeline = layout(&issues, today);

        assert_eq!(timeline.bar_count(), 0);
        assert_eq!(timeline.marker_count(), 2);
    }

    #[test]
    fn labels_follow_bars() {
        let today = date(2024, 1, 1);
        let issues = vec![issue("A", date(2024, 1, 4), Some(date(2024, 1, 8)), StatusCategory::ToDo)];

        let timeline = layout(&issues, today);

        assert!(timeline.shapes.contains(&Shape::Label {
            x: 5,
            y: 9,
            text: "A summary A".to_string(),
        }));
    }

    #[test]
    fn rows_follow_input_order() {
        let today = date(2024, 1, 1);
        let issues = vec![
            issue("LATE", date(2024, 3, 1), Some(date(2024, 3, 5)), StatusCategory::ToDo),
            issue("EARLY", date(2024, 1, 1), Some(date(2024, 1, 5)), StatusCategory::ToDo),
            issue("MID", date(2024, 2, 1), Some(date(2024, 2, 5)), StatusCategory::ToDo),
        ];

        let timeline = layout(&issues, today);
        let rows: Vec<(String, i64)> = timeline
            .shapes
            .iter()
            .filter_map(|shape| match shape {
                Shape::Label { y, text, .. } => Some((text.clone(), *y)),
                _ => None,
            })
            .collect();

        assert_eq!(
            rows,
            vec![
                ("LATE summary LATE".to_string(), 9),
                ("EARLY summary EARLY".to_string(), 24),
                ("MID summary MID".to_string(), 39),
            ]
        );
    }

    #[test]
    fn empty_input_renders_minimum_grid() {
        let today = date(2024, 1, 17);
        let timeline = layout(&[], today);

        assert_eq!(timeline.viewport.width, 120);
        assert_eq!(timeline.viewport.height, 120);
        assert_eq!(timeline.viewport.left, -10);
        assert_eq!(
            timeline.shapes,
            vec![Shape::GridLine {
                x: 0,
                y1: -10,
                y2: 110,
                kind: GridLineKind::Now,
            }]
        );
    }

    #[test]
    fn viewport_never_collapses() {
        let today = date(2024, 6, 1);
        let day = date(2024, 6, 5);
        let issues = vec![issue("A", day, Some(day), StatusCategory::Done)];

        let timeline = layout(&issues, today);

        assert!(timeline.viewport.width >= 100);
        assert!(timeline.viewport.height >= 100);
        assert_eq!(timeline.viewport.left, 4 - 10);
    }

    #[test]
    fn viewport_spans_issue_dates() {
        let today = date(2024, 1, 15);
        let issues = vec![
            issue("A", date(2024, 1, 1), Some(date(2024, 3, 1)), StatusCategory::ToDo),
            issue("B", date(2024, 2, 1), Some(date(2024, 6, 29)), StatusCategory::ToDo),
        ];

        let timeline = layout(&issues, today);

        assert_eq!(timeline.viewport.left, -14 - 10);
        assert_eq!(timeline.viewport.width, 180 + 20);
        assert_eq!(timeline.viewport.height, 100 + 20);
    }

    #[test]
    fn month_start_on_monday_gets_only_month_line() {
        // 2024-01-01 and 2024-04-01 are both Mondays.
        let today = date(2024, 1, 1);
        let issues = vec![issue("A", date(2024, 1, 1), Some(date(2024, 1, 31)), StatusCategory::ToDo)];

        let timeline = layout(&issues, today);

        assert_eq!(
            grid_lines(&timeline),
            vec![
                (0, GridLineKind::Month),
                (7, GridLineKind::Week),
                (14, GridLineKind::Week),
                (21, GridLineKind::Week),
                (28, GridLineKind::Week),
                (0, GridLineKind::Now),
            ]
        );
        assert!(timeline.shapes.contains(&Shape::MonthTag {
            x: 0,
            y: -10,
            label: "Jan",
        }));
    }

    #[test]
    fn at_most_one_gridline_per_day() {
        let today = date(2024, 1, 1);
        let issues = vec![issue("A", date(2024, 1, 1), Some(date(2024, 12, 31)), StatusCategory::ToDo)];

        let timeline = layout(&issues, today);
        let mut days: Vec<i64> = grid_lines(&timeline)
            .into_iter()
            .filter(|(_, kind)| *kind != GridLineKind::Now)
            .map(|(x, _)| x)
            .collect();
        let total = days.len();
        days.dedup();

        assert_eq!(days.len(), total);
        assert_eq!(timeline.grid_line_count(GridLineKind::Month), 12);
        // 2024 has 53 Mondays, the last on 12-30. Three open a month (Jan, Apr, Jul).
        assert_eq!(timeline.grid_line_count(GridLineKind::Week), 53 - 3);
    }

    #[test]
    fn day_scan_excludes_final_day() {
        // The range ends on 2024-02-01, a month start that is never visited.
        let today = date(2024, 1, 1);
        let issues = vec![issue("A", date(2024, 1, 29), Some(date(2024, 2, 1)), StatusCategory::ToDo)];

        let timeline = layout(&issues, today);

        assert_eq!(timeline.grid_line_count(GridLineKind::Month), 0);
        assert_eq!(
            grid_lines(&timeline),
            vec![(28, GridLineKind::Week), (0, GridLineKind::Now)]
        );
    }

    #[test]
    fn now_line_is_drawn_last_across_viewport() {
        let today = date(2024, 1, 1);
        let issues = vec![issue("A", date(2024, 1, 1), Some(date(2024, 2, 15)), StatusCategory::ToDo)];

        let timeline = layout(&issues, today);

        assert_eq!(
            timeline.shapes.last(),
            Some(&Shape::GridLine {
                x: 0,
                y1: timeline.viewport.top,
                y2: timeline.viewport.top + timeline.viewport.height,
                kind: GridLineKind::Now,
            })
        );
        assert_eq!(timeline.grid_line_count(GridLineKind::Now), 1);
    }
}
