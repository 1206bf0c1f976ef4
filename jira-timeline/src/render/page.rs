//! Surface page rendering using Handlebars.

use super::RenderError;
use handlebars::Handlebars;
use serde_json::{json, Value};

/// Name the surface template is registered under.
const SURFACE_TEMPLATE: &str = "surface";

/// The surface document: a stylesheet and a container that removes itself
/// when clicked, holding either the timeline or a failure notice.
const SURFACE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{{title}}</title>
<style>
body { margin: 0; background-color: #222222; font-family: sans-serif; }
div#timeline-container { height: 95%; width: 95%; position: absolute; left: 2.5%; top: 2.5%; z-index: 100; overflow: auto; cursor: pointer; }
div#timeline-container p.caption { color: #cccccc; font-size: 12px; margin: 0 0 4px 0; }
div#timeline-container div.failure { color: #eeeeee; background-color: #5a1a1a; border: 1px solid #aa3333; padding: 16px; }
svg#jira-timeline { border: 1px solid black; background-color: #181808f8; }
svg#jira-timeline .bar, svg#jira-timeline text { stroke: #666666; stroke-width: 1px; paint-order: stroke; }
svg#jira-timeline .bar { fill: red; }
svg#jira-timeline .status-bar-inprogress { fill: blue; }
svg#jira-timeline .status-bar-done { fill: green; }
svg#jira-timeline .status-bar-todo { fill: gray; }
svg#jira-timeline text { fill: #eeeeee; font-size: 6px; }
svg#jira-timeline .now-line { stroke-width: 1px; stroke: green; }
svg#jira-timeline line.month-line { stroke-width: 0.2px; stroke: #666666ff; }
svg#jira-timeline rect.month-line { stroke-width: 0.2px; fill: #666666ff; }
svg#jira-timeline text.month-line { fill: #cccccc; font-size: 6px; }
svg#jira-timeline .week-line { stroke-width: 0.1px; stroke: #99999966; }
</style>
</head>
<body>
<div id="timeline-container" title="Click to dismiss" onclick="this.remove()">
{{#if failure}}
<div class="failure">
<h1>Timeline unavailable</h1>
<p>{{failure}}</p>
</div>
{{else}}
<p class="caption">{{caption}}</p>
{{{svg}}}
{{/if}}
</div>
</body>
</html>
"#;

/// Creates a configured Handlebars registry with the surface template.
///
/// The registry is configured with:
/// - HTML escaping (titles and messages come from user input)
/// - Strict mode (catches missing variables)
///
/// # Errors
///
/// Returns an error if the built-in template fails to register.
pub fn create_handlebars_registry() -> Result<Handlebars<'static>, RenderError> {
    let mut hbs = Handlebars::new();
    hbs.set_strict_mode(true);
    hbs.register_template_string(SURFACE_TEMPLATE, SURFACE_HTML)?;
    Ok(hbs)
}

/// Renders the surface page around a timeline or a failure message.
pub struct PageRenderer {
    handlebars: Handlebars<'static>,
}

impl PageRenderer {
    /// Creates a new page renderer.
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in template fails to register.
    pub fn new() -> Result<Self, RenderError> {
        Ok(Self {
            handlebars: create_handlebars_registry()?,
        })
    }

    /// Renders a page showing the SVG timeline.
    ///
    /// # Arguments
    ///
    /// * `title` - Page title, usually the query
    /// * `caption` - Line shown above the timeline
    /// * `svg` - Rendered SVG markup, inserted verbatim
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_timeline(
        &self,
        title: &str,
        caption: &str,
        svg: &str,
    ) -> Result<String, RenderError> {
        self.render(&json!({
            "title": title,
            "caption": caption,
            "svg": svg,
            "failure": ""
        }))
    }

    /// Renders a page reporting that the timeline could not be produced.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_failure(&self, title: &str, message: &str) -> Result<String, RenderError> {
        self.render(&json!({
            "title": title,
            "caption": "",
            "svg": "",
            "failure": message
        }))
    }

    fn render(&self, data: &Value) -> Result<String, RenderError> {
        Ok(self.handlebars.render(SURFACE_TEMPLATE, data)?)
    }
}
