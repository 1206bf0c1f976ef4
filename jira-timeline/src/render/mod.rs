//! Timeline rendering.
//!
//! Serialises a laid-out [`Timeline`](crate::timeline::Timeline) as SVG and
//! writes it, wrapped in a small HTML page, into a [`Surface`].

mod error;
mod page;
mod surface;
mod svg;

pub use error::RenderError;
pub use page::{create_handlebars_registry, PageRenderer};
pub use surface::Surface;
pub use svg::{render_svg, SVG_ID};
