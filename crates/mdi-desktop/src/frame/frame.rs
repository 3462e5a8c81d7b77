//! Frame struct and state flags

use serde::{Deserialize, Serialize};
use super::FrameId;

/// Frame kind - determines activation behavior
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameKind {
    /// Standard document frame participating in maximize transfer
    #[default]
    Standard,
    /// Dialog-style frame exempt from maximize transfer on activation
    OptionDialog,
}

/// A child frame hosted in a desktop pane
///
/// The boolean facets are orthogonal: a frame can be maximized while
/// iconified (it restores to full size), and a closed frame stays
/// resolvable until it is disposed.
#[derive(Clone, Debug)]
pub struct Frame {
    /// Unique identifier
    pub id: FrameId,
    /// Frame title
    pub title: String,
    /// Frame kind (standard or option dialog)
    pub kind: FrameKind,
    /// Whether the frame may be maximized
    pub maximizable: bool,
    /// Whether the frame has been closed
    pub closed: bool,
    /// Whether the frame fills the desktop area
    pub maximized: bool,
    /// Whether the frame is collapsed to an icon
    pub iconified: bool,
    /// Whether the frame is the selected (active) frame of its pane
    pub selected: bool,
    /// Z-order (higher = on top)
    pub z_order: u32,
}

/// Persisted state of a single frame
///
/// Z-order is not stored; it is rebuilt from vector order on restore.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PersistedFrame {
    /// Frame identifier (kept stable so IDs retained by the embedder
    /// remain valid across a restore)
    pub id: FrameId,
    /// Frame title
    pub title: String,
    /// Frame kind
    #[serde(default)]
    pub kind: FrameKind,
    /// Whether the frame may be maximized
    pub maximizable: bool,
    /// Maximized flag
    #[serde(default)]
    pub maximized: bool,
    /// Iconified flag
    #[serde(default)]
    pub iconified: bool,
    /// Selected flag
    #[serde(default)]
    pub selected: bool,
}

impl Frame {
    /// Capture the persistable state of this frame
    pub fn to_persisted(&self) -> PersistedFrame {
        PersistedFrame {
            id: self.id,
            title: self.title.clone(),
            kind: self.kind,
            maximizable: self.maximizable,
            maximized: self.maximized,
            iconified: self.iconified,
            selected: self.selected,
        }
    }

    /// Rebuild a frame from persisted state at the given z-order
    pub fn from_persisted(persisted: &PersistedFrame, z_order: u32) -> Self {
        Self {
            id: persisted.id,
            title: persisted.title.clone(),
            kind: persisted.kind,
            maximizable: persisted.maximizable,
            closed: false,
            maximized: persisted.maximized,
            iconified: persisted.iconified,
            selected: persisted.selected,
            z_order,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persisted_round_trip() {
        let frame = Frame {
            id: 7,
            title: "Report".to_string(),
            kind: FrameKind::OptionDialog,
            maximizable: false,
            closed: false,
            maximized: true,
            iconified: false,
            selected: true,
            z_order: 12,
        };

        let restored = Frame::from_persisted(&frame.to_persisted(), 3);
        assert_eq!(restored.id, 7);
        assert_eq!(restored.title, "Report");
        assert_eq!(restored.kind, FrameKind::OptionDialog);
        assert!(!restored.maximizable);
        assert!(restored.maximized);
        assert!(restored.selected);
        assert_eq!(restored.z_order, 3);
    }
}
