use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared cancel intent between the view host and the operation driver.
///
/// Fire-and-forget: requesting cancellation sets the flag and returns. There
/// is no acknowledgment — the driver observes the flag at its next check and
/// aborts its own work.
#[derive(Clone)]
pub struct CancelFlag {
    cancelled: Arc<AtomicBool>,
}

impl Default for CancelFlag {
    fn default() -> Self {
        Self::new()
    }
}

impl CancelFlag {
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn request(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    pub fn clear(&self) {
        self.cancelled.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_clear() {
        assert!(!CancelFlag::new().is_cancelled());
    }

    #[test]
    fn test_request_is_visible_to_clones() {
        let flag = CancelFlag::new();
        let observer = flag.clone();

        flag.request();
        assert!(observer.is_cancelled());
    }

    #[test]
    fn test_request_is_idempotent() {
        let flag = CancelFlag::new();
        flag.request();
        flag.request();
        assert!(flag.is_cancelled());

        flag.clear();
        assert!(!flag.is_cancelled());
    }
}
