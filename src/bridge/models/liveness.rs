//! # Connection Liveness
//!
//! Whether the remote counterpart is attached and can receive outbound events.
//! The tracker is owned by the sync engine; command callbacks only get a
//! read-only [`LivenessHandle`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of feeding a connection signal into the tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LivenessTransition {
    /// false -> true
    Regained,
    /// true -> false
    Lost,
    Unchanged,
}

#[derive(Debug)]
pub struct LivenessTracker {
    live: Arc<AtomicBool>,
}

impl LivenessTracker {
    pub fn new(initially_live: bool) -> Self {
        Self {
            live: Arc::new(AtomicBool::new(initially_live)),
        }
    }

    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::SeqCst)
    }

    pub fn set_live(&mut self, live: bool) -> LivenessTransition {
        let was_live = self.live.swap(live, Ordering::SeqCst);
        match (was_live, live) {
            (false, true) => LivenessTransition::Regained,
            (true, false) => LivenessTransition::Lost,
            _ => LivenessTransition::Unchanged,
        }
    }

    pub fn handle(&self) -> LivenessHandle {
        LivenessHandle {
            live: Arc::clone(&self.live),
        }
    }
}

/// Read-only view of the liveness flag
#[derive(Debug, Clone)]
pub struct LivenessHandle {
    live: Arc<AtomicBool>,
}

impl LivenessHandle {
    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::SeqCst)
    }
}
