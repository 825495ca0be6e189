//! Dashboard Lifetime
//!
//! Shared flag that marks whether the owning dashboard is still mounted.
//! Operations check it after their remote call and before touching state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{DashboardError, DashboardResult};

/// Cloneable handle; every clone observes the same flag
#[derive(Debug, Clone, Default)]
pub struct Lifetime {
    ended: Arc<AtomicBool>,
}

impl Lifetime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the dashboard as gone. Idempotent.
    pub fn end(&self) {
        self.ended.store(true, Ordering::Release);
    }

    pub fn is_alive(&self) -> bool {
        !self.ended.load(Ordering::Acquire)
    }

    pub fn ensure_alive(&self) -> DashboardResult<()> {
        if self.is_alive() {
            Ok(())
        } else {
            Err(DashboardError::Detached)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_the_flag() {
        let lifetime = Lifetime::new();
        let handle = lifetime.clone();
        assert!(handle.ensure_alive().is_ok());

        lifetime.end();
        assert!(!handle.is_alive());
        assert_eq!(handle.ensure_alive(), Err(DashboardError::Detached));
    }
}
