//! Vetoable frame mutations
//!
//! Frame state changes are submitted to the pane's veto policy before they
//! are applied. Refusal is an expected outcome, not a failure: callers that
//! proceed best-effort discard the `Refused` case explicitly.

use core::fmt;
use super::frame::Frame;

/// A frame state change was declined
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Refused;

impl fmt::Display for Refused {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frame state change refused")
    }
}

impl std::error::Error for Refused {}

/// A proposed frame state change
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameChange {
    /// Raise the frame to the top of the stack and give it focus
    Activate,
    /// Change the selected flag
    Selected(bool),
    /// Change the maximized flag
    Maximized(bool),
    /// Change the iconified flag
    Iconified(bool),
    /// Change the closed flag
    Closed(bool),
}

/// Review hook for frame state changes
///
/// One policy is installed per pane. It sees the frame as it is *before*
/// the change is applied; returning `Err(Refused)` leaves the frame
/// untouched.
pub trait VetoPolicy {
    /// Review a proposed change to `frame`
    fn review(&mut self, frame: &Frame, change: FrameChange) -> Result<(), Refused>;
}

/// Default policy permitting every change
#[derive(Clone, Copy, Debug, Default)]
pub struct AllowAll;

impl VetoPolicy for AllowAll {
    fn review(&mut self, _frame: &Frame, _change: FrameChange) -> Result<(), Refused> {
        Ok(())
    }
}
