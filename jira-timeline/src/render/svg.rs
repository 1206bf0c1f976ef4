//! SVG serialisation of a laid-out timeline.

use crate::issues::StatusCategory;
use crate::timeline::{Shape, Timeline};
use handlebars::html_escape;

/// Element id of the rendered SVG.
pub const SVG_ID: &str = "jira-timeline";

/// Renders the timeline as a standalone `<svg>` element.
///
/// Elements are emitted in the timeline's drawing order.
#[must_use]
pub fn render_svg(timeline: &Timeline) -> String {
    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" id=\"{SVG_ID}\" viewBox=\"{}\" preserveAspectRatio=\"xMinYMin meet\">\n",
        timeline.viewport.view_box()
    );

    for shape in &timeline.shapes {
        svg.push_str(&render_shape(shape));
        svg.push('\n');
    }

    svg.push_str("</svg>");
    svg
}

fn render_shape(shape: &Shape) -> String {
    match shape {
        Shape::Bar {
            x,
            y,
            width,
            height,
            status,
        } => format!(
            "<rect x=\"{x}\" y=\"{y}\" width=\"{width}\" height=\"{height}\" class=\"{}\"/>",
            status_class(*status)
        ),
        Shape::Marker { cx, cy, r, status } => format!(
            "<circle cx=\"{cx}\" cy=\"{cy}\" r=\"{r}\" class=\"{}\"/>",
            status_class(*status)
        ),
        Shape::Label { x, y, text } => {
            format!("<text x=\"{x}\" y=\"{y}\">{}</text>", html_escape(text))
        }
        Shape::GridLine { x, y1, y2, kind } => format!(
            "<line x1=\"{x}\" y1=\"{y1}\" x2=\"{x}\" y2=\"{y2}\" class=\"{}\"/>",
            kind.css_class()
        ),
        Shape::MonthTag { x, y, label } => format!(
            "<rect x=\"{}\" y=\"{}\" width=\"20\" height=\"8\" rx=\"2\" ry=\"2\" class=\"month-line\"/>\
             <text x=\"{}\" y=\"{}\" class=\"month-line\">{label}</text>",
            x - 10,
            y + 3,
            x - 7,
            y + 9
        ),
    }
}

/// Class list for a bar or marker.
fn status_class(status: StatusCategory) -> String {
    match status.css_class() {
        Some(class) => format!("bar {class}"),
        None => "bar".to_string(),
    }
}
