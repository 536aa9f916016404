//! Movie catalog browser core.
//!
//! A typed client for the remote movie catalog, plus the list, detail and
//! filter state a front-end renders from.

pub mod catalog_client;
pub mod config;
pub mod detail_fetch;
pub mod detail_slice;
pub mod display;
pub mod error;
pub mod filters;
pub mod images;
pub mod list_slice;
pub mod models;
pub mod pagination;
pub mod search;
pub mod slice;
pub mod store;

pub use catalog_client::{CatalogApi, CatalogClient};
pub use config::CatalogConfig;
pub use detail_fetch::{fetch_detail_bundle, select_trailer, DetailBundle};
pub use detail_slice::DetailState;
pub use error::{CatalogError, Result};
pub use filters::{DiscoverFilters, FilterPatch, FilterState, FilterUpdate, SortBy};
pub use images::{resolve_image_url, ImageKind};
pub use list_slice::{ListQuery, ListState};
pub use slice::FetchStatus;
pub use store::AppStore;
