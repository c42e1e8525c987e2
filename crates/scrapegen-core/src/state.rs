//! Loading indicator shared by the form and its submissions.
//!
//! Each submission holds a [`LoadingGuard`] for its whole run; the indicator
//! reads as loading while at least one guard is alive.

use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Default)]
pub struct UiState {
    in_flight: AtomicUsize,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Number of submissions currently running.
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Marks one submission as started; it ends when the guard is dropped.
    pub fn begin(&self) -> LoadingGuard<'_> {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        LoadingGuard { state: self }
    }
}

/// Clears this submission's share of the loading flag when dropped.
pub struct LoadingGuard<'a> {
    state: &'a UiState,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}
