//! Async Load Helpers
//!
//! Three-state load status for page components and request tickets that
//! keep stale responses from writing into torn-down or re-targeted views.

use std::fmt::Display;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Status of a page-level fetch
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Error(String),
    Loaded(T),
}

impl<T> LoadState<T> {
    /// Collapse a fetch result; every failure becomes the same `message`.
    pub fn from_result<E: Display>(result: Result<T, E>, message: &str) -> Self {
        match result {
            Ok(value) => LoadState::Loaded(value),
            Err(e) => {
                log::warn!("{}: {}", message, e);
                LoadState::Error(message.to_string())
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

/// Issues request tickets. Starting a new request or cancelling the
/// tracker invalidates every ticket handed out before.
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    generation: Arc<AtomicU64>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, invalidating older tickets.
    pub fn begin(&self) -> Ticket {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.ticket_for(generation)
    }

    /// Ticket for work that should be dropped if a new request starts or
    /// the tracker is cancelled, without itself invalidating anything.
    pub fn watch(&self) -> Ticket {
        self.ticket_for(self.generation.load(Ordering::SeqCst))
    }

    /// Invalidate all outstanding tickets (component teardown).
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    fn ticket_for(&self, generation: u64) -> Ticket {
        Ticket {
            generation,
            current: Arc::clone(&self.generation),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Ticket {
    generation: u64,
    current: Arc<AtomicU64>,
}

impl Ticket {
    pub fn is_current(&self) -> bool {
        self.current.load(Ordering::SeqCst) == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_result() {
        let ok: LoadState<u32> = LoadState::from_result(Ok::<_, String>(5), "failed");
        assert_eq!(ok, LoadState::Loaded(5));
        assert!(!ok.is_loading());

        let err: LoadState<u32> = LoadState::from_result(Err("HTTP 500"), "failed");
        assert_eq!(err, LoadState::Error("failed".to_string()));
        assert!(!err.is_loading());
    }

    #[test]
    fn test_new_request_invalidates_older_ticket() {
        let tracker = RequestTracker::new();
        let first = tracker.begin();
        assert!(first.is_current());

        let second = tracker.begin();
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn test_cancel_invalidates_everything() {
        let tracker = RequestTracker::new();
        let load = tracker.begin();
        let submit = tracker.watch();
        assert!(submit.is_current());

        tracker.cancel();
        assert!(!load.is_current());
        assert!(!submit.is_current());
    }

    #[test]
    fn test_watch_does_not_invalidate_load() {
        let tracker = RequestTracker::new();
        let load = tracker.begin();
        let _submit = tracker.watch();
        assert!(load.is_current());
    }

    #[test]
    fn test_clones_share_generation() {
        let tracker = RequestTracker::new();
        let ticket = tracker.begin();
        tracker.clone().cancel();
        assert!(!ticket.is_current());
    }
}
