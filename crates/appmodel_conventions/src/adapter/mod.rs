//! Adapters that lift node-level conventions to application-wide ones.
//!
//! Each adapter wraps exactly one node-level convention and implements
//! [`ApplicationModelConvention`](crate::ApplicationModelConvention) by
//! walking the application model down to its target level:
//!
//! - [`ControllerApplicationModelConvention`] - every controller, in order
//! - [`ActionApplicationModelConvention`] - controller-major, action-minor
//! - [`ParameterApplicationModelConvention`] - ordered by
//!   (controller, action, parameter)
//!
//! Traversal stops at the first error returned by the wrapped convention and
//! hands that error back as-is. Nodes visited before the failure keep
//! whatever the convention did to them.

mod action;
mod controller;
mod parameter;

pub use action::ActionApplicationModelConvention;
pub use controller::ControllerApplicationModelConvention;
pub use parameter::ParameterApplicationModelConvention;
