use std::ops::RangeInclusive;

/// The catalog refuses pages beyond this.
pub const MAX_PAGES: u32 = 500;

pub const DEFAULT_VISIBLE_PAGES: u32 = 5;

pub fn clamp_total_pages(remote_total: u32) -> u32 {
    remote_total.clamp(1, MAX_PAGES)
}

/// Pulls `page` into `1..=total_pages`, with the total itself capped.
pub fn clamp_page(page: u32, total_pages: u32) -> u32 {
    page.clamp(1, clamp_total_pages(total_pages))
}

/// The run of page buttons around the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub current: u32,
    pub total: u32,
    pub start: u32,
    pub end: u32,
}

impl PageWindow {
    pub fn new(current: u32, total: u32, max_visible: u32) -> Self {
        let total = total.max(1);
        let current = current.clamp(1, total);
        let max_visible = max_visible.max(1);

        let delta = max_visible / 2;
        let mut start = current.saturating_sub(delta).max(1);
        let end = total.min(start + max_visible - 1);
        if end - start + 1 < max_visible {
            start = (end + 1).saturating_sub(max_visible).max(1);
        }

        Self { current, total, start, end }
    }

    pub fn pages(&self) -> RangeInclusive<u32> {
        self.start..=self.end
    }

    /// Nothing to page through.
    pub fn is_hidden(&self) -> bool {
        self.total <= 1
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total
    }

    pub fn shows_first(&self) -> bool {
        self.start > 1
    }

    pub fn leading_ellipsis(&self) -> bool {
        self.start > 2
    }

    pub fn shows_last(&self) -> bool {
        self.end < self.total
    }

    pub fn trailing_ellipsis(&self) -> bool {
        self.end + 1 < self.total
    }
}
