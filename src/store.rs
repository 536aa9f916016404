//! Application state: the list, detail and filter slices plus the catalog
//! they are filled from.
//!
//! Each slice sits behind its own lock and is only written by the intents
//! below. Locks are never held across a catalog call.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::catalog_client::CatalogApi;
use crate::detail_fetch::fetch_detail_bundle;
use crate::detail_slice::DetailState;
use crate::filters::{DiscoverFilters, FilterState, FilterUpdate};
use crate::list_slice::{ListQuery, ListState};
use crate::pagination::{clamp_page, MAX_PAGES};
use crate::slice::FetchStatus;

pub struct AppStore {
    api: Arc<dyn CatalogApi>,
    list: Mutex<ListState>,
    detail: Mutex<DetailState>,
    filters: Mutex<FilterState>,
}

impl AppStore {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self {
            api,
            list: Mutex::new(ListState::default()),
            detail: Mutex::new(DetailState::default()),
            filters: Mutex::new(FilterState::default()),
        }
    }

    pub fn api(&self) -> &dyn CatalogApi {
        self.api.as_ref()
    }

    pub async fn list(&self) -> ListState {
        self.list.lock().await.clone()
    }

    pub async fn detail(&self) -> DetailState {
        self.detail.lock().await.clone()
    }

    pub async fn filters(&self) -> FilterState {
        self.filters.lock().await.clone()
    }

    /// Discovery fetch; `None` means unfiltered, most popular first.
    pub async fn request_list(&self, page: u32, filters: Option<DiscoverFilters>) {
        self.run_list_query(ListQuery::Discover {
            page: clamp_page(page, MAX_PAGES),
            filters: filters.unwrap_or_default(),
        })
        .await;
    }

    /// Search fetch. The query is trimmed; a blank one is served by
    /// discovery with the current filters.
    pub async fn request_search(&self, query: &str, page: u32) {
        let query = query.trim();
        if query.is_empty() {
            let filters = self.discover_filters().await;
            self.request_list(page, Some(filters)).await;
            return;
        }

        self.run_list_query(ListQuery::Search {
            query: query.to_string(),
            page: clamp_page(page, MAX_PAGES),
        })
        .await;
    }

    /// Fetches `page` in whichever mode is active: the current search if
    /// there is one, otherwise discovery with the current filters.
    pub async fn change_page(&self, page: u32) {
        let (page, search_query) = {
            let mut list = self.list.lock().await;
            let page = list.set_current_page(page);
            (page, list.search_query.clone())
        };

        if search_query.is_empty() {
            let filters = self.discover_filters().await;
            self.request_list(page, Some(filters)).await;
        } else {
            self.request_search(&search_query, page).await;
        }
    }

    /// A blank query falls back to discovery with the current filters.
    pub async fn submit_search(&self, query: &str) {
        let query = query.trim();
        self.list.lock().await.set_search_query(query);
        self.request_search(query, 1).await;
    }

    /// Updates one filter field without fetching.
    pub async fn set_filter(&self, update: FilterUpdate) {
        self.filters.lock().await.apply(update);
    }

    /// Updates one filter field and reloads page 1 in the active mode.
    pub async fn apply_filter(&self, update: FilterUpdate) {
        self.set_filter(update).await;
        let search_query = self.list.lock().await.search_query.clone();

        if search_query.is_empty() {
            let filters = self.discover_filters().await;
            self.request_list(1, Some(filters)).await;
        } else {
            self.request_search(&search_query, 1).await;
        }
    }

    /// Back to defaults: no filters, no search, page 1 of the popular list.
    pub async fn clear_filters(&self) {
        self.filters.lock().await.clear();
        {
            let mut list = self.list.lock().await;
            list.set_search_query("");
            list.clear();
        }
        self.request_list(1, None).await;
    }

    /// Clears whatever was shown before fetching `id`, so two movies are
    /// never mixed.
    pub async fn request_detail(&self, id: i64) {
        let seq = {
            let mut detail = self.detail.lock().await;
            detail.clear();
            detail.start(id)
        };

        let result = fetch_detail_bundle(self.api.as_ref(), id).await;

        let mut detail = self.detail.lock().await;
        match result {
            Ok(bundle) => {
                detail.complete(seq, bundle);
            }
            Err(e) => {
                detail.fail(seq, &e);
            }
        }
    }

    pub async fn clear_detail(&self) {
        self.detail.lock().await.clear();
    }

    /// Replays the last list intent, or the first discovery page if none.
    pub async fn retry_list(&self) {
        let last_query = self.list.lock().await.last_query.clone();
        match last_query {
            Some(query) => self.run_list_query(query).await,
            None => {
                let filters = self.discover_filters().await;
                self.request_list(1, Some(filters)).await;
            }
        }
    }

    pub async fn retry_detail(&self) {
        let movie_id = self.detail.lock().await.movie_id;
        if let Some(id) = movie_id {
            self.request_detail(id).await;
        }
    }

    /// First discovery page, unless something is already shown or pending.
    pub async fn load_initial(&self) {
        let should_load = {
            let list = self.list.lock().await;
            list.movies.is_empty() && list.status == FetchStatus::Idle && list.error.is_none()
        };
        if should_load {
            self.request_list(1, None).await;
        }
    }

    async fn discover_filters(&self) -> DiscoverFilters {
        DiscoverFilters::from_state(&*self.filters.lock().await)
    }

    async fn run_list_query(&self, query: ListQuery) {
        let seq = self.list.lock().await.start(query.clone());

        let result = match &query {
            ListQuery::Discover { page, filters } => self.api.list_movies(*page, filters).await,
            ListQuery::Search { query, page } => self.api.search_movies(query, *page).await,
        };

        let mut list = self.list.lock().await;
        match result {
            Ok(page) => {
                list.complete(seq, &query, page);
            }
            Err(e) => {
                list.fail(seq, &query, &e);
            }
        }
    }
}
