#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod issues;
pub mod loader;
pub mod render;
pub mod runner;
pub mod summary;
pub mod timeline;
pub mod trigger;

pub use config::{load_config, ConfigError, TimelineConfig};
pub use issues::{
    map_issue, map_search_response, parse_api_date, Issue, ParseError, SearchResponse,
    StatusCategory,
};
pub use loader::{jql_from_page_url, IssueLoader, LoadError, SearchRequest};
pub use render::{render_svg, PageRenderer, RenderError, Surface};
pub use runner::{Runner, RunnerConfig, RunnerError};
pub use summary::{RunOutcome, RunSummary};
pub use timeline::{
    calendar_days, days_between, layout, CalendarDays, GridLineKind, Shape, Timeline, Viewport,
};
pub use trigger::{Trigger, TriggerCoordinator};
