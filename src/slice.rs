//! Bookkeeping shared by the list and detail slices.

use serde::Serialize;

/// Request lifecycle of a slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Errored,
}

impl FetchStatus {
    pub fn is_loading(self) -> bool {
        self == FetchStatus::Loading
    }
}

/// Hands out a sequence number per dispatched fetch so a slow, superseded
/// response cannot overwrite the result of a later one.
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    latest: u64,
}

impl RequestTracker {
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.latest
    }

    /// Makes every outstanding sequence number stale.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }

    pub fn latest(&self) -> u64 {
        self.latest
    }
}
