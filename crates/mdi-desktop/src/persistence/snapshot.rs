//! Snapshot serialization for desktop pane state

use serde::{Deserialize, Serialize};
use crate::frame::{FrameId, PersistedFrame};

/// Snapshot of desktop pane state for persistence
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// Version for migration support
    pub version: u32,
    /// Most recently activated frame, if still open when captured
    pub active_frame: Option<FrameId>,
    /// Persisted frames, back to front
    pub frames: Vec<PersistedFrame>,
}

impl Snapshot {
    /// Current snapshot version
    pub const CURRENT_VERSION: u32 = 1;

    /// Create a new snapshot
    pub fn new(active_frame: Option<FrameId>, frames: Vec<PersistedFrame>) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            active_frame,
            frames,
        }
    }

    /// Check if snapshot needs migration
    pub fn needs_migration(&self) -> bool {
        self.version < Self::CURRENT_VERSION
    }

    /// Migrate snapshot to current version
    pub fn migrate(&mut self) {
        // Add migration logic as versions increase
        self.version = Self::CURRENT_VERSION;
    }
}
