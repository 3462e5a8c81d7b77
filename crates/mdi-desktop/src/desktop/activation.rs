//! Activation coordination for a desktop pane
//!
//! Moves the single "selected" token between child frames and carries the
//! maximized state along with activation, MDI style: maximize follows the
//! active frame rather than being an independent per-frame property.

use crate::frame::{FrameId, FrameKind, FrameManager};

/// Coordinates frame activation for one desktop pane
///
/// Tracks the most recently activated frame by ID only. IDs are never
/// reused, so once the frame is disposed the slot resolves to "no current
/// frame"; the coordinator never keeps a frame alive. Each pane owns its
/// own coordinator.
#[derive(Clone, Copy, Debug, Default)]
pub struct ActivationCoordinator {
    /// Most recently activated frame, if not superseded since
    current: Option<FrameId>,
}

impl ActivationCoordinator {
    /// Create a coordinator with no current frame
    pub fn new() -> Self {
        Self { current: None }
    }

    /// The current frame, or `None` if unset or disposed
    pub fn current(&self, frames: &FrameManager) -> Option<FrameId> {
        self.current.filter(|&id| frames.contains(id))
    }

    /// Point the coordinator at a frame restored from a snapshot
    pub(crate) fn restore_current(&mut self, id: FrameId) {
        self.current = Some(id);
    }

    /// Activate a frame
    ///
    /// Raises `f`, moves selection to it, and transfers the maximized state
    /// from the previously active frame when eligible. Refusals from the
    /// frames are absorbed here and never surfaced: a refused raise stops
    /// the whole sequence before any flag is touched, while refusals of the
    /// individual flag changes are skipped over and the sequence continues.
    pub fn activate(&mut self, frames: &mut FrameManager, f: FrameId) {
        let current = self.current(frames);

        if frames.raise(f).is_err() {
            return;
        }

        if let Some(c) = current.filter(|&c| c != f) {
            Self::transfer_maximized(frames, c, f);
            if frames.get(c).is_some_and(|prev| prev.selected) {
                let _ = frames.set_selected(c, false);
            }
        }

        if frames.get(f).is_some_and(|target| !target.selected) {
            let _ = frames.set_selected(f, true);
        }

        if current != Some(f) {
            self.current = Some(f);
        }
    }

    /// Move the maximized state from the previous frame `c` to the newly
    /// activated frame `f`, when `c` holds it in a transferable way
    fn transfer_maximized(frames: &mut FrameManager, c: FrameId, f: FrameId) {
        let transferable = frames.get(c).is_some_and(|prev| {
            !prev.closed && prev.maximized && prev.kind != FrameKind::OptionDialog && !prev.iconified
        });
        if !transferable {
            return;
        }

        let _ = frames.set_maximized(c, false);

        let Some(target) = frames.get(f) else { return };
        if !target.maximizable {
            return;
        }
        if !target.maximized {
            let _ = frames.set_maximized(f, true);
        } else if target.iconified {
            // Key-bound frame switching can land on a frame that is still
            // maximized but iconified; de-iconify it instead of touching
            // the maximized flag.
            let _ = frames.set_iconified(f, false);
        } else {
            let _ = frames.set_maximized(f, false);
        }
    }
}
