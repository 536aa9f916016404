//! In-memory catalog used by the store tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use moviedeck::models::{CastMember, Credits, CrewMember, Genre, Movie, MovieDetail, MoviePage, Video};
use moviedeck::{CatalogApi, CatalogError, DiscoverFilters, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Discover { page: u32, filters: DiscoverFilters },
    Search { query: String, page: u32 },
    Detail(i64),
    Credits(i64),
    Videos(i64),
    Genres,
}

pub struct FakeCatalog {
    total_pages: u32,
    videos: Vec<Video>,
    page_delays: HashMap<u32, Duration>,
    detail_delay: Duration,
    fail_lists: AtomicBool,
    fail_detail: AtomicBool,
    fail_credits: AtomicBool,
    fail_videos: AtomicBool,
    calls: Mutex<Vec<Call>>,
}

impl FakeCatalog {
    pub fn new(total_pages: u32) -> Self {
        Self {
            total_pages,
            videos: Vec::new(),
            page_delays: HashMap::new(),
            detail_delay: Duration::ZERO,
            fail_lists: AtomicBool::new(false),
            fail_detail: AtomicBool::new(false),
            fail_credits: AtomicBool::new(false),
            fail_videos: AtomicBool::new(false),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_videos(mut self, videos: Vec<Video>) -> Self {
        self.videos = videos;
        self
    }

    /// Delays list and search responses for `page`.
    pub fn with_page_delay(mut self, page: u32, delay: Duration) -> Self {
        self.page_delays.insert(page, delay);
        self
    }

    pub fn with_detail_delay(mut self, delay: Duration) -> Self {
        self.detail_delay = delay;
        self
    }

    pub fn fail_lists(&self, fail: bool) {
        self.fail_lists.store(fail, Ordering::SeqCst);
    }

    pub fn fail_detail(&self, fail: bool) {
        self.fail_detail.store(fail, Ordering::SeqCst);
    }

    pub fn fail_credits(&self, fail: bool) {
        self.fail_credits.store(fail, Ordering::SeqCst);
    }

    pub fn fail_videos(&self, fail: bool) {
        self.fail_videos.store(fail, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_call(&self) -> Option<Call> {
        self.calls.lock().unwrap().last().cloned()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    async fn page(&self, page: u32, prefix: &str) -> Result<MoviePage> {
        if let Some(delay) = self.page_delays.get(&page) {
            tokio::time::sleep(*delay).await;
        }
        if self.fail_lists.load(Ordering::SeqCst) {
            return Err(server_error());
        }
        let base = i64::from(page) * 100;
        Ok(MoviePage {
            page,
            results: (1..=2).map(|i| movie(base + i, &format!("{prefix} {}", base + i))).collect(),
            total_pages: self.total_pages,
            total_results: u64::from(self.total_pages) * 20,
        })
    }
}

pub fn server_error() -> CatalogError {
    CatalogError::Response {
        status: 500,
        message: "Internal error".to_string(),
    }
}

pub fn movie(id: i64, title: &str) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        overview: String::new(),
        poster_path: None,
        backdrop_path: None,
        release_date: "2001-01-01".to_string(),
        vote_average: 7.0,
        vote_count: 10,
        genre_ids: vec![28],
        popularity: 1.0,
        adult: false,
        original_language: "en".to_string(),
        original_title: title.to_string(),
        video: false,
    }
}

pub fn video(id: &str, video_type: &str, site: &str, official: bool) -> Video {
    Video {
        id: id.to_string(),
        key: format!("key-{id}"),
        name: id.to_string(),
        site: site.to_string(),
        video_type: video_type.to_string(),
        official,
        published_at: "2020-01-01T00:00:00.000Z".to_string(),
    }
}

#[async_trait]
impl CatalogApi for FakeCatalog {
    async fn list_movies(&self, page: u32, filters: &DiscoverFilters) -> Result<MoviePage> {
        self.record(Call::Discover { page, filters: filters.clone() });
        self.page(page, "Discovered").await
    }

    async fn search_movies(&self, query: &str, page: u32) -> Result<MoviePage> {
        self.record(Call::Search { query: query.to_string(), page });
        self.page(page, query).await
    }

    async fn get_movie_detail(&self, id: i64) -> Result<MovieDetail> {
        self.record(Call::Detail(id));
        tokio::time::sleep(self.detail_delay).await;
        if self.fail_detail.load(Ordering::SeqCst) {
            return Err(CatalogError::Response {
                status: 404,
                message: "The resource you requested could not be found.".to_string(),
            });
        }
        let detail = serde_json::from_value(serde_json::json!({
            "id": id,
            "title": format!("Movie {id}"),
            "overview": format!("Synopsis of {id}"),
            "runtime": 100,
            "budget": 1000,
            "revenue": 5000,
            "status": "Released",
        }))
        .expect("fake detail decodes");
        Ok(detail)
    }

    async fn get_movie_credits(&self, id: i64) -> Result<Credits> {
        self.record(Call::Credits(id));
        if self.fail_credits.load(Ordering::SeqCst) {
            return Err(server_error());
        }
        Ok(Credits {
            id,
            cast: vec![CastMember {
                id: id * 10,
                name: format!("Actor of {id}"),
                character: "Lead".to_string(),
                profile_path: None,
                order: 0,
            }],
            crew: vec![CrewMember {
                id: id * 10 + 1,
                name: format!("Director of {id}"),
                job: "Director".to_string(),
                department: "Directing".to_string(),
                profile_path: None,
            }],
        })
    }

    async fn get_movie_videos(&self, id: i64) -> Result<Vec<Video>> {
        self.record(Call::Videos(id));
        if self.fail_videos.load(Ordering::SeqCst) {
            return Err(server_error());
        }
        Ok(self.videos.clone())
    }

    async fn list_genres(&self) -> Result<Vec<Genre>> {
        self.record(Call::Genres);
        Ok(vec![Genre { id: 28, name: "Action".to_string() }])
    }
}
