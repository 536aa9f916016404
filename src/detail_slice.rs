//! The movie currently shown in the detail view.

use crate::detail_fetch::{select_trailer, DetailBundle};
use crate::error::CatalogError;
use crate::models::{CastMember, CrewMember, MovieDetail, Video};
use crate::slice::{FetchStatus, RequestTracker};

#[derive(Debug, Clone, Default)]
pub struct DetailState {
    /// Id of the movie being shown or loaded.
    pub movie_id: Option<i64>,
    pub movie_detail: Option<MovieDetail>,
    pub cast: Vec<CastMember>,
    pub crew: Vec<CrewMember>,
    pub videos: Vec<Video>,
    pub status: FetchStatus,
    pub error: Option<String>,
    requests: RequestTracker,
}

impl DetailState {
    pub fn start(&mut self, id: i64) -> u64 {
        let seq = self.requests.issue();
        tracing::debug!(seq, movie_id = id, "Detail fetch started");
        self.movie_id = Some(id);
        self.status = FetchStatus::Loading;
        self.error = None;
        seq
    }

    /// Replaces the shown movie wholesale. Returns `false` if superseded.
    pub fn complete(&mut self, seq: u64, bundle: DetailBundle) -> bool {
        if !self.requests.is_current(seq) {
            tracing::debug!(seq, latest = self.requests.latest(), "Discarding stale detail response");
            return false;
        }

        self.status = FetchStatus::Loaded;
        self.movie_detail = Some(bundle.detail);
        self.cast = bundle.cast;
        self.crew = bundle.crew;
        self.videos = bundle.videos;
        true
    }

    /// No partial detail survives a failure.
    pub fn fail(&mut self, seq: u64, err: &CatalogError) -> bool {
        if !self.requests.is_current(seq) {
            tracing::debug!(seq, latest = self.requests.latest(), "Discarding stale detail failure");
            return false;
        }

        tracing::warn!(movie_id = ?self.movie_id, kind = err.kind(), error = %err, "Detail fetch failed");
        self.wipe();
        self.status = FetchStatus::Errored;
        self.error = Some(format!("Failed to fetch movie details: {err}"));
        true
    }

    /// Back to idle; any fetch still in flight is ignored when it lands.
    pub fn clear(&mut self) {
        self.requests.invalidate();
        self.wipe();
        self.movie_id = None;
        self.status = FetchStatus::Idle;
        self.error = None;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
        if self.status == FetchStatus::Errored {
            self.status = FetchStatus::Idle;
        }
    }

    pub fn trailer(&self) -> Option<&Video> {
        select_trailer(&self.videos)
    }

    fn wipe(&mut self) {
        self.movie_detail = None;
        self.cast.clear();
        self.crew.clear();
        self.videos.clear();
    }
}
