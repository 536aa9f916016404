use crate::config::CatalogConfig;
use crate::error::{CatalogError, Result};
use crate::filters::DiscoverFilters;
use crate::images::{resolve_image_url, ImageKind};
use crate::models::{Credits, Genre, GenreList, MovieDetail, MoviePage, Video, VideoList};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Instant;

/// The remote catalog as seen by the state slices.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// `GET /discover/movie` with the given page and filters.
    async fn list_movies(&self, page: u32, filters: &DiscoverFilters) -> Result<MoviePage>;

    /// `GET /search/movie`. Genre, year and sort do not apply to this mode.
    async fn search_movies(&self, query: &str, page: u32) -> Result<MoviePage>;

    async fn get_movie_detail(&self, id: i64) -> Result<MovieDetail>;

    async fn get_movie_credits(&self, id: i64) -> Result<Credits>;

    async fn get_movie_videos(&self, id: i64) -> Result<Vec<Video>>;

    async fn list_genres(&self) -> Result<Vec<Genre>>;
}

pub struct CatalogClient {
    client: Client,
    base_url: String,
    image_base_url: String,
    access_token: String,
}

impl CatalogClient {
    pub fn new(config: CatalogConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url,
            image_base_url: config.image_base_url,
            access_token: config.access_token,
        })
    }

    /// Image URL against the configured image host.
    pub fn image_url(&self, path: Option<&str>, size: &str, kind: ImageKind) -> String {
        resolve_image_url(&self.image_base_url, path, size, kind)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!(url = %url, "Requesting catalog endpoint");

        let start_time = Instant::now();
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.access_token)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(url = %url, error = %e, "Catalog request failed");
                CatalogError::Transport(e)
            })?;

        let status = response.status();
        tracing::debug!(url = %url, status = %status, elapsed = ?start_time.elapsed(), "Catalog request completed");

        let body = response.text().await?;
        if !status.is_success() {
            tracing::warn!(url = %url, status = status.as_u16(), "Catalog returned an error status");
            return Err(CatalogError::Response {
                status: status.as_u16(),
                message: status_message(&body),
            });
        }

        decode(&body).map_err(|e| {
            tracing::warn!(url = %url, error = %e, "Could not decode catalog response");
            e
        })
    }
}

#[async_trait]
impl CatalogApi for CatalogClient {
    async fn list_movies(&self, page: u32, filters: &DiscoverFilters) -> Result<MoviePage> {
        let url = discover_url(&self.base_url, page, filters);
        let movies: MoviePage = self.get_json(&url).await?;
        tracing::debug!(
            page = movies.page,
            results = movies.results.len(),
            total_pages = movies.total_pages,
            "Fetched discovery page"
        );
        Ok(movies)
    }

    async fn search_movies(&self, query: &str, page: u32) -> Result<MoviePage> {
        if query.trim().is_empty() {
            tracing::debug!("Search query is blank, returning empty results");
            return Ok(MoviePage {
                page: 1,
                results: Vec::new(),
                total_pages: 1,
                total_results: 0,
            });
        }

        let url = search_url(&self.base_url, query, page);
        let movies: MoviePage = self.get_json(&url).await?;
        tracing::debug!(query = %query, results = movies.results.len(), "Fetched search page");
        Ok(movies)
    }

    async fn get_movie_detail(&self, id: i64) -> Result<MovieDetail> {
        self.get_json(&format!("{}/movie/{}", self.base_url, id)).await
    }

    async fn get_movie_credits(&self, id: i64) -> Result<Credits> {
        self.get_json(&format!("{}/movie/{}/credits", self.base_url, id))
            .await
    }

    async fn get_movie_videos(&self, id: i64) -> Result<Vec<Video>> {
        let videos: VideoList = self
            .get_json(&format!("{}/movie/{}/videos", self.base_url, id))
            .await?;
        Ok(videos.results)
    }

    async fn list_genres(&self) -> Result<Vec<Genre>> {
        let list: GenreList = self
            .get_json(&format!("{}/genre/movie/list", self.base_url))
            .await?;
        Ok(list.genres)
    }
}

pub(crate) fn discover_url(base_url: &str, page: u32, filters: &DiscoverFilters) -> String {
    let mut url = format!(
        "{}/discover/movie?page={}&sort_by={}",
        base_url, page, filters.sort_by
    );
    if let Some(genre) = &filters.genre {
        url.push_str(&format!("&with_genres={}", urlencoding::encode(genre)));
    }
    if let Some(year) = &filters.year {
        url.push_str(&format!("&primary_release_year={}", urlencoding::encode(year)));
    }
    url
}

pub(crate) fn search_url(base_url: &str, query: &str, page: u32) -> String {
    format!(
        "{}/search/movie?query={}&page={}",
        base_url,
        urlencoding::encode(query),
        page
    )
}

pub(crate) fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    let deserializer = &mut serde_json::Deserializer::from_str(body);
    serde_path_to_error::deserialize(deserializer).map_err(|e| CatalogError::Decode {
        path: e.path().to_string(),
        source: e.into_inner(),
    })
}

// Error bodies look like {"status_code":34,"status_message":"..."}
fn status_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            json.get("status_message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.chars().take(200).collect())
}
