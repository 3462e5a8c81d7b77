//! Desktop pane coordination module
//!
//! Provides activation coordination across the child frames of one pane.

mod activation;

pub use activation::ActivationCoordinator;
