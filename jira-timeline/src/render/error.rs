//! Rendering error types.

/// Errors that can occur while writing the surface.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Failed to write or remove the surface file.
    #[error("Failed to update surface '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Handlebars rendering error.
    #[error("Template rendering error: {0}")]
    RenderError(#[from] handlebars::RenderError),

    /// Template registration error.
    #[error("Template registration error: {0}")]
    RegistrationError(#[from] handlebars::TemplateError),
}
