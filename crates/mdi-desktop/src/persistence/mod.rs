//! State persistence module
//!
//! Provides serializable snapshots of desktop pane state.

mod snapshot;

pub use snapshot::Snapshot;
