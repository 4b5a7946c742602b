//! Redraw throttling keyed on snapshot content.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::core::BoardSnapshot;

/// Decides when a frame is worth drawing.
///
/// A frame is drawn when the snapshot changed, and otherwise at most once per
/// `refresh_interval_ms` so resizes and terminal damage still get repaired.
#[derive(Debug, Clone)]
pub struct RenderThrottle {
    refresh_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: u64,
    has_rendered: bool,
}

impl RenderThrottle {
    pub fn new(refresh_interval_ms: u64) -> Self {
        Self {
            refresh_interval_ms,
            last_render_ms: 0,
            last_fingerprint: 0,
            has_rendered: false,
        }
    }

    pub fn fingerprint(snap: &BoardSnapshot) -> u64 {
        let mut h = DefaultHasher::new();
        snap.hash(&mut h);
        h.finish()
    }

    pub fn should_render(&mut self, now_ms: u64, snap: &BoardSnapshot) -> bool {
        let fingerprint = Self::fingerprint(snap);

        if !self.has_rendered || fingerprint != self.last_fingerprint {
            self.has_rendered = true;
            self.last_render_ms = now_ms;
            self.last_fingerprint = fingerprint;
            return true;
        }

        if now_ms.saturating_sub(self.last_render_ms) >= self.refresh_interval_ms {
            self.last_render_ms = now_ms;
            return true;
        }

        false
    }

    /// Force the next call to render.
    pub fn invalidate(&mut self) {
        self.has_rendered = false;
    }
}
