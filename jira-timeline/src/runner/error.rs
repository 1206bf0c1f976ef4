//! Runner error types.

/// Errors that can occur while running a trigger.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Loading issues failed; a failure notice was written to the surface.
    #[error(transparent)]
    Load(#[from] crate::loader::LoadError),

    /// Writing the surface failed.
    #[error(transparent)]
    Render(#[from] crate::render::RenderError),
}
