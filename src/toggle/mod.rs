use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{error, info, warn};

use crate::error::{AppError, AppResult};

/// Demo switch that makes business endpoints fail on purpose.
///
/// Cloning shares the underlying flag, so every clone held by the router
/// state observes the same transitions.
#[derive(Debug, Clone, Default)]
pub struct BugToggle {
    enabled: Arc<AtomicBool>,
}

impl BugToggle {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: Arc::new(AtomicBool::new(enabled)),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    /// Switch to injected-failure mode. Returns the new state.
    pub fn enable(&self) -> bool {
        let was = self.enabled.swap(true, Ordering::SeqCst);
        warn!(was_enabled = was, "BUG MODE ENABLED - API will return 500 errors!");
        true
    }

    /// Restore normal operation. Returns the new state.
    pub fn disable(&self) -> bool {
        let was = self.enabled.swap(false, Ordering::SeqCst);
        info!(was_enabled = was, "Bug mode disabled - API restored to normal");
        false
    }

    /// Fails with `failure` as the error detail while the toggle is on.
    pub fn check(&self, failure: impl Into<String>) -> AppResult<()> {
        if self.is_enabled() {
            let failure = failure.into();
            error!("BUG: {}!", failure);
            return Err(AppError::InjectedFailure(failure));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_from_configured_state() {
        assert!(!BugToggle::default().is_enabled());
        assert!(!BugToggle::new(false).is_enabled());
        assert!(BugToggle::new(true).is_enabled());
    }

    #[test]
    fn transitions_are_idempotent() {
        let toggle = BugToggle::new(false);
        assert!(toggle.enable());
        assert!(toggle.enable());
        assert!(toggle.is_enabled());
        assert!(!toggle.disable());
        assert!(!toggle.disable());
        assert!(!toggle.is_enabled());
    }

    #[test]
    fn clones_share_state() {
        let toggle = BugToggle::new(false);
        let other = toggle.clone();
        toggle.enable();
        assert!(other.is_enabled());
        other.disable();
        assert!(!toggle.is_enabled());
    }

    #[test]
    fn check_short_circuits_only_when_enabled() {
        let toggle = BugToggle::new(false);
        assert!(toggle.check("Order processing failed").is_ok());

        toggle.enable();
        let err = toggle.check("Order processing failed").unwrap_err();
        assert_eq!(err.to_string(), "Internal Server Error: Order processing failed");
    }

    #[test]
    fn concurrent_toggling_settles() {
        let toggle = BugToggle::new(false);
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let t = toggle.clone();
                std::thread::spawn(move || {
                    for _ in 0..200 {
                        if i % 2 == 0 {
                            t.enable();
                        } else {
                            t.disable();
                        }
                        let _ = t.is_enabled();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        toggle.disable();
        assert!(!toggle.is_enabled());
    }
}
