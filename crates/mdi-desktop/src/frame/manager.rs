//! Frame manager for lifecycle, flags, and z-order

use std::collections::HashMap;
use super::{AllowAll, Frame, FrameChange, FrameConfig, FrameId, PersistedFrame, Refused, VetoPolicy};

/// Frame manager handling frame lifecycle, vetoable state changes, z-order,
/// and the focus stack of one desktop pane
pub struct FrameManager {
    /// All frames by ID
    frames: HashMap<FrameId, Frame>,
    /// Focus stack (most recently raised at end)
    focus_stack: Vec<FrameId>,
    /// Next frame ID (never reused)
    next_id: u64,
    /// Next z-order value
    next_z: u32,
    /// Review hook for vetoable changes
    veto: Box<dyn VetoPolicy>,
}

impl Default for FrameManager {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameManager {
    /// Create a new frame manager
    pub fn new() -> Self {
        Self {
            frames: HashMap::new(),
            focus_stack: Vec::new(),
            next_id: 1,
            next_z: 1,
            veto: Box::new(AllowAll),
        }
    }

    /// Rebuild a manager from persisted frames (back to front order)
    pub fn from_persisted(persisted: &[PersistedFrame]) -> Self {
        let mut manager = Self::new();
        for p in persisted {
            let z_order = manager.next_z;
            manager.next_z += 1;
            manager.frames.insert(p.id, Frame::from_persisted(p, z_order));
            manager.focus_stack.push(p.id);
            manager.next_id = manager.next_id.max(p.id + 1);
        }

        // A snapshot edited outside this crate may carry more than one
        // selected frame; keep only the topmost.
        let top_selected = manager
            .focus_stack
            .iter()
            .rev()
            .copied()
            .find(|id| manager.frames.get(id).is_some_and(|f| f.selected));
        if let Some(keep) = top_selected {
            for frame in manager.frames.values_mut() {
                if frame.id != keep {
                    frame.selected = false;
                }
            }
        }

        manager
    }

    /// Install the veto policy consulted before each vetoable change
    pub fn set_veto_policy(&mut self, policy: Box<dyn VetoPolicy>) {
        self.veto = policy;
    }

    /// Create a new frame
    pub fn create(&mut self, config: FrameConfig) -> FrameId {
        let id = self.next_id;
        self.next_id += 1;

        let z_order = self.next_z;
        self.next_z += 1;

        let frame = Frame {
            id,
            title: config.title,
            kind: config.kind,
            maximizable: config.maximizable,
            closed: false,
            maximized: false,
            iconified: false,
            selected: false,
            z_order,
        };

        self.frames.insert(id, frame);
        self.focus_stack.push(id);

        id
    }

    /// Get a frame by ID (`None` once the frame has been disposed)
    pub fn get(&self, id: FrameId) -> Option<&Frame> {
        self.frames.get(&id)
    }

    /// Get a mutable frame by ID
    pub fn get_mut(&mut self, id: FrameId) -> Option<&mut Frame> {
        self.frames.get_mut(&id)
    }

    /// Whether the frame is still resolvable (not disposed)
    pub fn contains(&self, id: FrameId) -> bool {
        self.frames.contains_key(&id)
    }

    /// Raise a frame to the top of the stack (default activation behavior)
    ///
    /// Subject to veto; a refused raise leaves stack and z-order untouched.
    /// Raising a disposed ID is refused.
    pub fn raise(&mut self, id: FrameId) -> Result<(), Refused> {
        let frame = self.frames.get(&id).ok_or(Refused)?;
        self.veto.review(frame, FrameChange::Activate)?;

        self.focus_stack.retain(|&fid| fid != id);
        self.focus_stack.push(id);

        if let Some(frame) = self.frames.get_mut(&id) {
            frame.z_order = self.next_z;
            self.next_z += 1;
        }
        Ok(())
    }

    /// Set the selected flag
    pub fn set_selected(&mut self, id: FrameId, selected: bool) -> Result<(), Refused> {
        self.apply(id, FrameChange::Selected(selected))
    }

    /// Set the maximized flag
    pub fn set_maximized(&mut self, id: FrameId, maximized: bool) -> Result<(), Refused> {
        self.apply(id, FrameChange::Maximized(maximized))
    }

    /// Set the iconified flag
    pub fn set_iconified(&mut self, id: FrameId, iconified: bool) -> Result<(), Refused> {
        self.apply(id, FrameChange::Iconified(iconified))
    }

    /// Set the closed flag
    pub fn set_closed(&mut self, id: FrameId, closed: bool) -> Result<(), Refused> {
        self.apply(id, FrameChange::Closed(closed))
    }

    /// Review and apply a flag change
    ///
    /// A change to the value the flag already holds is a no-op `Ok` and the
    /// veto policy is not consulted.
    fn apply(&mut self, id: FrameId, change: FrameChange) -> Result<(), Refused> {
        let frame = self.frames.get(&id).ok_or(Refused)?;
        let unchanged = match change {
            FrameChange::Activate => false,
            FrameChange::Selected(v) => frame.selected == v,
            FrameChange::Maximized(v) => frame.maximized == v,
            FrameChange::Iconified(v) => frame.iconified == v,
            FrameChange::Closed(v) => frame.closed == v,
        };
        if unchanged {
            return Ok(());
        }
        self.veto.review(frame, change)?;

        let frame = self.frames.get_mut(&id).ok_or(Refused)?;
        match change {
            FrameChange::Activate => {}
            FrameChange::Selected(v) => frame.selected = v,
            FrameChange::Maximized(v) => frame.maximized = v,
            FrameChange::Iconified(v) => frame.iconified = v,
            FrameChange::Closed(v) => frame.closed = v,
        }
        Ok(())
    }

    /// Dispose a frame, reclaiming its slot
    ///
    /// Not vetoable. IDs retained by the embedder resolve to `None` from
    /// here on.
    pub fn dispose(&mut self, id: FrameId) {
        self.frames.remove(&id);
        self.focus_stack.retain(|&fid| fid != id);
    }

    /// Drop a frame from the focus stack without disposing it
    pub(crate) fn drop_from_focus(&mut self, id: FrameId) {
        self.focus_stack.retain(|&fid| fid != id);
    }

    /// The currently selected frame, if any
    pub fn selected_frame(&self) -> Option<FrameId> {
        self.frames.values().find(|f| f.selected).map(|f| f.id)
    }

    /// Topmost frame on the focus stack that is neither iconified nor closed
    pub fn topmost(&self) -> Option<FrameId> {
        for &id in self.focus_stack.iter().rev() {
            if let Some(frame) = self.frames.get(&id) {
                if !frame.iconified && !frame.closed {
                    return Some(id);
                }
            }
        }
        None
    }

    /// Get frames sorted by z-order (back to front)
    pub fn frames_by_z(&self) -> Vec<&Frame> {
        let mut frames: Vec<&Frame> = self.frames.values().collect();
        frames.sort_by_key(|f| f.z_order);
        frames
    }

    /// Get all frames
    pub fn all_frames(&self) -> impl Iterator<Item = &Frame> {
        self.frames.values()
    }

    /// Get the number of live frames
    pub fn count(&self) -> usize {
        self.frames.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::FrameKind;
    use std::cell::Cell;
    use std::rc::Rc;

    fn config(title: &str) -> FrameConfig {
        FrameConfig {
            title: title.to_string(),
            ..Default::default()
        }
    }

    /// Refuses one kind of change, counting every review
    struct Gatekeeper {
        refuse: FrameChange,
        reviews: Rc<Cell<usize>>,
    }

    impl VetoPolicy for Gatekeeper {
        fn review(&mut self, _frame: &Frame, change: FrameChange) -> Result<(), Refused> {
            self.reviews.set(self.reviews.get() + 1);
            if change == self.refuse {
                Err(Refused)
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_frame_creation() {
        let mut fm = FrameManager::new();
        let id = fm.create(config("Test"));

        assert!(fm.get(id).is_some());
        assert_eq!(fm.count(), 1);
        assert_eq!(fm.get(id).unwrap().kind, FrameKind::Standard);
        assert!(fm.get(id).unwrap().maximizable);
        assert!(!fm.get(id).unwrap().selected);
    }

    #[test]
    fn test_raise_and_topmost() {
        let mut fm = FrameManager::new();
        let id1 = fm.create(config("Frame 1"));
        let id2 = fm.create(config("Frame 2"));

        assert_eq!(fm.topmost(), Some(id2));

        fm.raise(id1).unwrap();
        assert_eq!(fm.topmost(), Some(id1));
        assert!(fm.get(id1).unwrap().z_order > fm.get(id2).unwrap().z_order);
    }

    #[test]
    fn test_topmost_skips_iconified() {
        let mut fm = FrameManager::new();
        let id1 = fm.create(config("Frame 1"));
        let id2 = fm.create(config("Frame 2"));

        fm.set_iconified(id2, true).unwrap();
        assert_eq!(fm.topmost(), Some(id1));
    }

    #[test]
    fn test_unchanged_flag_skips_review() {
        let mut fm = FrameManager::new();
        let id = fm.create(config("Test"));

        let reviews = Rc::new(Cell::new(0));
        fm.set_veto_policy(Box::new(Gatekeeper {
            refuse: FrameChange::Maximized(true),
            reviews: reviews.clone(),
        }));

        // Already false: no review, no refusal.
        fm.set_maximized(id, false).unwrap();
        assert_eq!(reviews.get(), 0);

        assert_eq!(fm.set_maximized(id, true), Err(Refused));
        assert_eq!(reviews.get(), 1);
        assert!(!fm.get(id).unwrap().maximized);
    }

    #[test]
    fn test_refused_raise_leaves_stack() {
        let mut fm = FrameManager::new();
        let id1 = fm.create(config("Frame 1"));
        let id2 = fm.create(config("Frame 2"));

        fm.set_veto_policy(Box::new(Gatekeeper {
            refuse: FrameChange::Activate,
            reviews: Rc::new(Cell::new(0)),
        }));

        let z_before = fm.get(id1).unwrap().z_order;
        assert_eq!(fm.raise(id1), Err(Refused));
        assert_eq!(fm.topmost(), Some(id2));
        assert_eq!(fm.get(id1).unwrap().z_order, z_before);
    }

    #[test]
    fn test_dispose() {
        let mut fm = FrameManager::new();
        let id = fm.create(config("Test"));

        assert_eq!(fm.count(), 1);
        fm.dispose(id);
        assert_eq!(fm.count(), 0);
        assert!(fm.get(id).is_none());
        assert_eq!(fm.raise(id), Err(Refused));
    }

    #[test]
    fn test_ids_never_reused() {
        let mut fm = FrameManager::new();
        let id1 = fm.create(config("Frame 1"));
        fm.dispose(id1);
        let id2 = fm.create(config("Frame 2"));

        assert_ne!(id1, id2);
        assert!(fm.get(id1).is_none());
    }

    #[test]
    fn test_from_persisted_keeps_only_topmost_selected() {
        let mut fm = FrameManager::new();
        let id1 = fm.create(config("Frame 1"));
        let id2 = fm.create(config("Frame 2"));
        fm.get_mut(id1).unwrap().selected = true;
        fm.get_mut(id2).unwrap().selected = true;

        let persisted: Vec<PersistedFrame> =
            fm.frames_by_z().into_iter().map(|f| f.to_persisted()).collect();
        let mut restored = FrameManager::from_persisted(&persisted);

        assert_eq!(restored.selected_frame(), Some(id2));
        assert!(!restored.get(id1).unwrap().selected);
        assert_eq!(restored.count(), 2);

        // New IDs continue past the persisted ones.
        let id3 = restored.create(config("Frame 3"));
        assert!(id3 > id2);
    }
}
