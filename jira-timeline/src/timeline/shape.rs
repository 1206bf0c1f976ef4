//! Drawable shapes produced by the layout pass.

use crate::issues::StatusCategory;

/// Kind of vertical gridline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridLineKind {
    /// First day of a month.
    Month,
    /// A Monday that does not open a month.
    Week,
    /// Today.
    Now,
}

impl GridLineKind {
    /// Stylesheet class of lines of this kind.
    #[must_use]
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Month => "month-line",
            Self::Week => "week-line",
            Self::Now => "now-line",
        }
    }
}

/// One visual element of the timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// Horizontal bar spanning an issue's start to due date.
    Bar {
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        status: StatusCategory,
    },

    /// Circle standing in for an issue with no positive duration.
    Marker {
        cx: i64,
        cy: i64,
        r: i64,
        status: StatusCategory,
    },

    /// Issue label drawn over its bar or marker.
    Label { x: i64, y: i64, text: String },

    /// Vertical line across the whole viewport.
    GridLine {
        x: i64,
        y1: i64,
        y2: i64,
        kind: GridLineKind,
    },

    /// Rounded tag naming the month a month line opens.
    MonthTag { x: i64, y: i64, label: &'static str },
}
