//! Frame management module
//!
//! Provides child-frame lifecycle, vetoable state changes, and focus/z-order
//! management for one desktop pane.

#[allow(clippy::module_inception)]
mod frame;
mod config;
mod veto;
mod manager;

pub use frame::{Frame, FrameKind, PersistedFrame};
pub use config::FrameConfig;
pub use veto::{AllowAll, FrameChange, Refused, VetoPolicy};
pub use manager::FrameManager;

/// Unique frame identifier
///
/// IDs are assigned monotonically and never reused within a pane, so a
/// retained ID whose frame has been disposed acts as a decayed weak
/// reference: resolving it yields `None`.
pub type FrameId = u64;
