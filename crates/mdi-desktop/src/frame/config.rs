//! Frame configuration for creation

use super::FrameKind;

/// Configuration for creating a frame
#[derive(Clone, Debug)]
pub struct FrameConfig {
    /// Frame title
    pub title: String,
    /// Frame kind (standard or option dialog)
    pub kind: FrameKind,
    /// Whether the frame may be maximized
    pub maximizable: bool,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            kind: FrameKind::default(),
            maximizable: true,
        }
    }
}
