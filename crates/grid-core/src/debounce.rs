use instant::Instant;
use std::time::Duration;

/// Coalesces bursts of requests: only the last one survives, and only once
/// `window` has passed without a newer request.
#[derive(Clone, Debug)]
pub struct ResizeDebouncer<T> {
    window: Duration,
    pending: Option<(T, Instant)>,
}

impl<T: Copy> ResizeDebouncer<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Record `value`, pushing the deadline to `now + window`.
    pub fn request(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.window));
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The most recent request, if its deadline has passed at `now`.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match self.pending {
            Some((value, deadline)) if now >= deadline => {
                self.pending = None;
                Some(value)
            }
            _ => None,
        }
    }
}
