use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Holds back search text until typing pauses.
///
/// Every `submit` supersedes the ones before it; only the latest text is
/// released once the quiet period has passed.
#[derive(Debug, Clone)]
pub struct SearchDebouncer {
    delay: Duration,
    generation: Arc<AtomicU64>,
}

impl Default for SearchDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl SearchDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Resolves to `Some(text)` if nothing was submitted during the quiet
    /// period, `None` otherwise.
    pub async fn submit(&self, text: impl Into<String>) -> Option<String> {
        let text = text.into();
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        tokio::time::sleep(self.delay).await;

        if self.generation.load(Ordering::SeqCst) == ticket {
            Some(text)
        } else {
            tracing::trace!(text = %text, "Search input superseded");
            None
        }
    }
}
