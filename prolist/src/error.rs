use thiserror::Error;

/// Failure raised while rendering a row.
///
/// Rows never fail on their own inputs; these come from caller callbacks and
/// are passed up unchanged to whoever drives the render.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("{name} failed: {message}")]
    Callback { name: &'static str, message: String },
}

impl RenderError {
    /// Build an error for a named callback.
    pub fn callback(name: &'static str, message: impl Into<String>) -> Self {
        Self::Callback {
            name,
            message: message.into(),
        }
    }
}

/// Failure loading a [`ListConfig`](crate::config::ListConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}
