//! MDI Desktop Pane Core
//!
//! This crate provides the state-management core for an MDI-style desktop
//! pane: a set of child frames sharing one desktop area, of which at most
//! one is selected and (normally) at most one is maximized.
//!
//! - Frame lifecycle (create, close, dispose, z-order, focus stack)
//! - Vetoable state changes (a frame may refuse selection, maximize, ...)
//! - Activation coordination (selection moves to the activated frame and
//!   the maximized state is carried along with it)
//! - State serialization for persistence
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`frame`]: Frame lifecycle, flags, and the veto seam
//! - [`desktop`]: Activation coordination for one pane
//! - [`persistence`]: State serialization for storage
//!
//! ## Example
//!
//! ```rust
//! use mdi_desktop::{DesktopEngine, FrameConfig};
//!
//! let mut engine = DesktopEngine::new();
//! let editor = engine.create_frame(FrameConfig {
//!     title: "Editor".to_string(),
//!     ..Default::default()
//! });
//! let console = engine.create_frame(FrameConfig {
//!     title: "Console".to_string(),
//!     ..Default::default()
//! });
//!
//! engine.activate(editor);
//! engine.activate(console);
//! assert_eq!(engine.active_frame(), Some(console));
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is plain Rust, testable
//!    without any windowing host
//! 2. **Explicit Refusal**: Vetoable changes return `Result<(), Refused>`;
//!    best-effort callers discard the refusal visibly
//! 3. **Weak Tracking**: The active-frame slot holds an ID that is never
//!    reused, so a disposed frame resolves to "no current frame" instead of
//!    being kept alive
//! 4. **Single Threaded**: One pane is owned and mutated by one thread; no
//!    locking, no suspension

pub mod frame;
pub mod desktop;
pub mod persistence;

mod engine;

pub use engine::DesktopEngine;
pub use frame::{
    AllowAll, Frame, FrameChange, FrameConfig, FrameId, FrameKind, FrameManager, PersistedFrame,
    Refused, VetoPolicy,
};
pub use desktop::ActivationCoordinator;
pub use persistence::Snapshot;
