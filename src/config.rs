use std::time::Duration;

use crate::error::{CatalogError, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Where the catalog lives and how to authenticate against it.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub access_token: String,
    pub base_url: String,
    pub image_base_url: String,
    pub request_timeout: Duration,
}

impl CatalogConfig {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Reads `TMDB_ACCESS_TOKEN`, `TMDB_BASE_URL`, `TMDB_IMAGE_BASE_URL` and
    /// `TMDB_TIMEOUT_SECS`, after loading a `.env` file if one exists.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup("TMDB_ACCESS_TOKEN")
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| CatalogError::Config("TMDB_ACCESS_TOKEN must be set".to_string()))?;

        let mut config = Self::new(token.trim());

        if let Some(url) = lookup("TMDB_BASE_URL").filter(|u| !u.trim().is_empty()) {
            config.base_url = trim_url(&url);
        }
        if let Some(url) = lookup("TMDB_IMAGE_BASE_URL").filter(|u| !u.trim().is_empty()) {
            config.image_base_url = trim_url(&url);
        }
        if let Some(secs) = lookup("TMDB_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                CatalogError::Config(format!("TMDB_TIMEOUT_SECS must be a number, got '{secs}'"))
            })?;
            config.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = trim_url(url);
        self
    }
}

fn trim_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
