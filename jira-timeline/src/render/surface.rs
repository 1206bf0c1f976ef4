//! The persistent output surface.

use super::{render_svg, PageRenderer, RenderError};
use crate::timeline::Timeline;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Handle to the document the timeline is drawn into.
///
/// Each `show_*` call replaces the whole document, so showing twice leaves a
/// single timeline rather than two stacked ones.
pub struct Surface {
    path: PathBuf,
    pages: PageRenderer,
}

impl Surface {
    /// Opens the surface at `path`, reusing the document if it exists.
    ///
    /// Missing parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if the directory cannot be created or the page
    /// template cannot be registered.
    pub fn create_or_reuse(path: impl Into<PathBuf>) -> Result<Self, RenderError> {
        let path = path.into();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| RenderError::Io {
                path: parent.display().to_string(),
                source: e,
            })?;
        }

        if path.exists() {
            debug!(path = %path.display(), "Reusing existing surface");
        } else {
            debug!(path = %path.display(), "Creating surface");
        }

        Ok(Self {
            path,
            pages: PageRenderer::new()?,
        })
    }

    /// Location of the surface document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replaces the surface contents with the given timeline.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if rendering or writing fails.
    pub fn show_timeline(
        &self,
        title: &str,
        caption: &str,
        timeline: &Timeline,
    ) -> Result<(), RenderError> {
        let svg = render_svg(timeline);
        let page = self.pages.render_timeline(title, caption, &svg)?;
        self.replace(&page)?;
        info!(path = %self.path.display(), shapes = timeline.shapes.len(), "Timeline rendered");
        Ok(())
    }

    /// Replaces the surface contents with a failure notice.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if rendering or writing fails.
    pub fn show_failure(&self, title: &str, message: &str) -> Result<(), RenderError> {
        let page = self.pages.render_failure(title, message)?;
        self.replace(&page)?;
        info!(path = %self.path.display(), "Failure notice rendered");
        Ok(())
    }

    /// Removes the surface document. Dismissing an absent surface is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Io`] if the file exists but cannot be removed.
    pub fn dismiss(self) -> Result<(), RenderError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "Surface dismissed");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }

    /// Atomically swaps in new contents via a sibling temp file.
    fn replace(&self, contents: &str) -> Result<(), RenderError> {
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let mut file = NamedTempFile::new_in(dir).map_err(|e| self.io_error(e))?;
        file.write_all(contents.as_bytes())
            .map_err(|e| self.io_error(e))?;
        file.persist(&self.path)
            .map_err(|e| self.io_error(e.error))?;
        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> RenderError {
        RenderError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}
