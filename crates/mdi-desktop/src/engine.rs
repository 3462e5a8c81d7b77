//! Desktop engine coordinating pane components

use crate::desktop::ActivationCoordinator;
use crate::frame::{FrameConfig, FrameId, FrameManager, PersistedFrame, Refused};
use crate::persistence::Snapshot;

/// Desktop engine for one pane
///
/// This is the main entry point for pane operations, owning:
/// - Frame manager (frame CRUD, flags, z-order, focus stack)
/// - Activation coordinator (selection and maximize transfer)
pub struct DesktopEngine {
    /// Frame manager
    pub frames: FrameManager,
    /// Activation coordinator
    activation: ActivationCoordinator,
}

impl Default for DesktopEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopEngine {
    /// Create a new desktop engine
    pub fn new() -> Self {
        Self {
            frames: FrameManager::new(),
            activation: ActivationCoordinator::new(),
        }
    }

    /// Create a new frame
    pub fn create_frame(&mut self, config: FrameConfig) -> FrameId {
        self.frames.create(config)
    }

    /// Activate a frame
    ///
    /// Fire-and-forget: refusals are absorbed by the coordinator.
    pub fn activate(&mut self, id: FrameId) {
        self.activation.activate(&mut self.frames, id);
    }

    /// The currently active frame, or `None` if none or disposed
    pub fn active_frame(&self) -> Option<FrameId> {
        self.activation.current(&self.frames)
    }

    /// Close a frame
    ///
    /// Subject to veto. A closed frame stays resolvable until disposed but
    /// no longer takes part in selection or focus.
    pub fn close_frame(&mut self, id: FrameId) -> Result<(), Refused> {
        self.frames.set_closed(id, true)?;
        let _ = self.frames.set_selected(id, false);
        self.frames.drop_from_focus(id);
        Ok(())
    }

    /// Dispose a frame, reclaiming it entirely
    pub fn dispose_frame(&mut self, id: FrameId) {
        self.frames.dispose(id);
    }

    /// Capture a snapshot of the pane
    ///
    /// Closed frames are not persisted; frame order is back to front.
    pub fn snapshot(&self) -> Snapshot {
        let frames: Vec<PersistedFrame> = self
            .frames
            .frames_by_z()
            .into_iter()
            .filter(|f| !f.closed)
            .map(|f| f.to_persisted())
            .collect();
        Snapshot::new(self.active_frame(), frames)
    }

    /// Restore pane state from a snapshot, replacing the current state
    ///
    /// The activation slot is reinstated only if the referenced frame
    /// survived in the snapshot.
    pub fn restore(&mut self, mut snapshot: Snapshot) {
        if snapshot.needs_migration() {
            snapshot.migrate();
        }
        self.frames = FrameManager::from_persisted(&snapshot.frames);
        self.activation = ActivationCoordinator::new();
        if let Some(id) = snapshot.active_frame {
            if self.frames.contains(id) {
                self.activation.restore_current(id);
            }
        }
    }
}
