use thiserror::Error;

/// Failures surfaced by the catalog client.
///
/// The slices collapse every variant into a single message string; the
/// variants only matter for logging.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP error {status}: {message}")]
    Response { status: u16, message: String },

    #[error("Unexpected response shape at '{path}': {source}")]
    Decode {
        path: String,
        source: serde_json::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CatalogError {
    /// The catalog reports unknown movie ids as 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::Response { status: 404, .. })
    }

    pub fn kind(&self) -> &'static str {
        match self {
            CatalogError::Transport(_) => "transport",
            CatalogError::Response { .. } => "response",
            CatalogError::Decode { .. } => "decode",
            CatalogError::Config(_) => "config",
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
