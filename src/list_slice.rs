//! The currently displayed page of movies.

use crate::error::CatalogError;
use crate::filters::DiscoverFilters;
use crate::models::{Movie, MoviePage};
use crate::pagination::{clamp_page, clamp_total_pages, PageWindow, DEFAULT_VISIBLE_PAGES, MAX_PAGES};
use crate::slice::{FetchStatus, RequestTracker};

/// What a list fetch asked the catalog for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListQuery {
    Discover { page: u32, filters: DiscoverFilters },
    Search { query: String, page: u32 },
}

impl ListQuery {
    pub fn page(&self) -> u32 {
        match self {
            ListQuery::Discover { page, .. } | ListQuery::Search { page, .. } => *page,
        }
    }

    pub fn is_search(&self) -> bool {
        matches!(self, ListQuery::Search { .. })
    }
}

#[derive(Debug, Clone)]
pub struct ListState {
    pub movies: Vec<Movie>,
    pub status: FetchStatus,
    pub error: Option<String>,
    pub current_page: u32,
    /// As reported by the catalog; see [`ListState::display_total_pages`].
    pub total_pages: u32,
    pub total_results: u64,
    pub search_query: String,
    /// Last dispatched query, replayed by retry.
    pub last_query: Option<ListQuery>,
    requests: RequestTracker,
    loaded: bool,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            movies: Vec::new(),
            status: FetchStatus::Idle,
            error: None,
            current_page: 1,
            total_pages: 1,
            total_results: 0,
            search_query: String::new(),
            last_query: None,
            requests: RequestTracker::default(),
            loaded: false,
        }
    }
}

impl ListState {
    /// Enters `Loading` for `query` and returns the sequence number its
    /// response must present.
    pub fn start(&mut self, query: ListQuery) -> u64 {
        let seq = self.requests.issue();
        tracing::debug!(seq, page = query.page(), search = query.is_search(), "List fetch started");
        self.status = FetchStatus::Loading;
        self.error = None;
        self.last_query = Some(query);
        seq
    }

    /// Commits a page. Search results record the query; discovery results
    /// clear it. Returns `false` if the response was superseded.
    pub fn complete(&mut self, seq: u64, query: &ListQuery, page: MoviePage) -> bool {
        if !self.requests.is_current(seq) {
            tracing::debug!(seq, latest = self.requests.latest(), "Discarding stale list response");
            return false;
        }

        self.status = FetchStatus::Loaded;
        self.movies = page.results;
        self.total_pages = page.total_pages.max(1);
        self.current_page = clamp_page(page.page, self.total_pages);
        if self.current_page != page.page {
            tracing::debug!(page = page.page, total_pages = self.total_pages, "Catalog page out of range");
        }
        self.loaded = true;
        self.total_results = page.total_results;
        self.search_query = match query {
            ListQuery::Search { query, .. } => query.clone(),
            ListQuery::Discover { .. } => String::new(),
        };
        true
    }

    /// Records the failure; the previous movies stay on screen.
    pub fn fail(&mut self, seq: u64, query: &ListQuery, err: &CatalogError) -> bool {
        if !self.requests.is_current(seq) {
            tracing::debug!(seq, latest = self.requests.latest(), "Discarding stale list failure");
            return false;
        }

        tracing::warn!(kind = err.kind(), error = %err, "List fetch failed");
        let action = if query.is_search() { "search" } else { "fetch" };
        self.status = FetchStatus::Errored;
        self.error = Some(format!("Failed to {action} movies: {err}"));
        true
    }

    /// Moves the pager to `page`, pulled into range, and returns the page
    /// actually selected.
    pub fn set_current_page(&mut self, page: u32) -> u32 {
        self.current_page = clamp_page(page, self.page_limit());
        self.current_page
    }

    /// Highest selectable page: the capped catalog total once a page has
    /// loaded, otherwise the catalog-wide maximum.
    pub fn page_limit(&self) -> u32 {
        if self.loaded {
            self.display_total_pages()
        } else {
            MAX_PAGES
        }
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn clear(&mut self) {
        self.movies.clear();
        self.current_page = 1;
        self.total_pages = 1;
        self.total_results = 0;
        self.loaded = false;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
        if self.status == FetchStatus::Errored {
            self.status = if self.movies.is_empty() { FetchStatus::Idle } else { FetchStatus::Loaded };
        }
    }

    /// Page count offered by the pager.
    pub fn display_total_pages(&self) -> u32 {
        clamp_total_pages(self.total_pages)
    }

    pub fn page_window(&self) -> PageWindow {
        PageWindow::new(self.current_page, self.display_total_pages(), DEFAULT_VISIBLE_PAGES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: i64) -> Movie {
        Movie {
            id,
            title: format!("Movie {id}"),
            overview: String::new(),
            poster_path: None,
            backdrop_path: None,
            release_date: String::new(),
            vote_average: 0.0,
            vote_count: 0,
            genre_ids: Vec::new(),
            popularity: 0.0,
            adult: false,
            original_language: "en".to_string(),
            original_title: format!("Movie {id}"),
            video: false,
        }
    }

    fn page(number: u32, ids: &[i64], total_pages: u32) -> MoviePage {
        MoviePage {
            page: number,
            results: ids.iter().copied().map(movie).collect(),
            total_pages,
            total_results: u64::from(total_pages) * 20,
        }
    }

    fn discover(page: u32) -> ListQuery {
        ListQuery::Discover { page, filters: DiscoverFilters::default() }
    }

    #[test]
    fn discovery_result_clears_search_query() {
        let mut state = ListState::default();
        state.set_search_query("matrix");

        let query = discover(2);
        let seq = state.start(query.clone());
        assert_eq!(state.status, FetchStatus::Loading);
        assert!(state.complete(seq, &query, page(2, &[1, 2], 10)));

        assert_eq!(state.status, FetchStatus::Loaded);
        assert_eq!(state.current_page, 2);
        assert_eq!(state.search_query, "");
        assert_eq!(state.movies.len(), 2);
    }

    #[test]
    fn search_result_records_query() {
        let mut state = ListState::default();
        let query = ListQuery::Search { query: "alien".into(), page: 1 };
        let seq = state.start(query.clone());
        state.complete(seq, &query, page(1, &[9], 1));
        assert_eq!(state.search_query, "alien");
    }

    #[test]
    fn failure_keeps_previous_movies() {
        let mut state = ListState::default();
        let first = discover(1);
        let seq = state.start(first.clone());
        state.complete(seq, &first, page(1, &[1, 2, 3], 5));

        let second = discover(2);
        let seq = state.start(second.clone());
        let err = CatalogError::Response { status: 500, message: "boom".into() };
        assert!(state.fail(seq, &second, &err));

        assert_eq!(state.status, FetchStatus::Errored);
        assert_eq!(state.movies.len(), 3);
        assert!(state.error.as_deref().unwrap().starts_with("Failed to fetch movies"));

        let seq = state.start(second.clone());
        assert!(state.error.is_none());
        state.complete(seq, &second, page(2, &[4], 5));
        assert_eq!(state.current_page, 2);
    }

    #[test]
    fn superseded_response_is_ignored() {
        let mut state = ListState::default();
        let slow = discover(1);
        let slow_seq = state.start(slow.clone());
        let fast = discover(2);
        let fast_seq = state.start(fast.clone());

        assert!(state.complete(fast_seq, &fast, page(2, &[20], 10)));
        assert!(!state.complete(slow_seq, &slow, page(1, &[10], 10)));
        assert_eq!(state.current_page, 2);
        assert_eq!(state.movies[0].id, 20);
    }

    #[test]
    fn clear_resets_paging() {
        let mut state = ListState::default();
        let query = discover(7);
        let seq = state.start(query.clone());
        state.complete(seq, &query, page(7, &[1], 30));

        state.clear();
        assert!(state.movies.is_empty());
        assert_eq!(state.current_page, 1);
        assert_eq!(state.total_pages, 1);
        assert_eq!(state.total_results, 0);
    }

    #[test]
    fn pager_is_capped_at_five_hundred_pages() {
        let mut state = ListState::default();
        let query = discover(1);
        let seq = state.start(query.clone());
        state.complete(seq, &query, page(1, &[1], 1000));

        assert_eq!(state.total_pages, 1000);
        assert_eq!(state.display_total_pages(), 500);
        assert_eq!(state.page_window().total, 500);
    }

    #[test]
    fn page_past_the_end_is_committed_as_last_page() {
        let mut state = ListState::default();
        let query = ListQuery::Search { query: "heat".into(), page: 3 };
        let seq = state.start(query.clone());
        assert!(state.complete(seq, &query, page(3, &[], 1)));

        assert_eq!(state.current_page, 1);
        assert_eq!(state.total_pages, 1);
    }

    #[test]
    fn selected_page_stays_within_loaded_total() {
        let mut state = ListState::default();
        assert_eq!(state.page_limit(), 500);
        assert_eq!(state.set_current_page(0), 1);
        assert_eq!(state.set_current_page(501), 500);

        let query = discover(1);
        let seq = state.start(query.clone());
        state.complete(seq, &query, page(1, &[1], 10));
        assert_eq!(state.page_limit(), 10);
        assert_eq!(state.set_current_page(600), 10);
        assert_eq!(state.current_page, 10);

        state.clear();
        assert_eq!(state.page_limit(), 500);
    }

    #[test]
    fn clearing_an_error_restores_the_resting_status() {
        let mut state = ListState::default();
        let query = discover(1);
        let seq = state.start(query.clone());
        state.fail(seq, &query, &CatalogError::Config("offline".into()));
        state.clear_error();
        assert!(state.error.is_none());
        assert_eq!(state.status, FetchStatus::Idle);

        let seq = state.start(query.clone());
        state.complete(seq, &query, page(1, &[1], 2));
        let next = discover(2);
        let seq = state.start(next.clone());
        state.fail(seq, &next, &CatalogError::Config("offline".into()));
        state.clear_error();
        assert_eq!(state.status, FetchStatus::Loaded);
        assert_eq!(state.movies.len(), 1);
    }
}
