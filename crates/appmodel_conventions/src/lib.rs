//! # appmodel_conventions
//!
//! Conventions applied across an application model.
//!
//! This crate provides:
//! - Convention traits for the whole application and for single controllers,
//!   actions and parameters
//! - Adapters that apply a node-level convention to every matching node
//! - Registration of node-level conventions on an ordered [`ConventionList`]
//! - [`apply_conventions`] to run a list against a model
//!
//! ## Example
//!
//! ```rust
//! use appmodel_conventions::{
//!     ConventionError, ConventionList, ConventionListExt, apply_conventions,
//! };
//! use appmodel_tree::{ApplicationModel, ControllerModel, ParameterModel};
//!
//! let mut conventions = ConventionList::new();
//! conventions.add_controller_convention(
//!     |controller: &mut ControllerModel| -> Result<(), ConventionError> {
//!         controller.route_template = Some(format!("api/{}", controller.name.to_lowercase()));
//!         Ok(())
//!     },
//! )?;
//!
//! let mut application = ApplicationModel::new().with_controller(ControllerModel::new("Orders"));
//! apply_conventions(&mut application, &conventions)?;
//!
//! assert_eq!(application.controllers[0].route_template.as_deref(), Some("api/orders"));
//! # Ok::<(), ConventionError>(())
//! ```

pub mod adapter;
mod convention;
mod error;
mod registration;
mod runner;


pub use adapter::{
    ActionApplicationModelConvention, ControllerApplicationModelConvention,
    ParameterApplicationModelConvention,
};
pub use convention::{
    ActionModelConvention, ApplicationModelConvention, ControllerModelConvention, ConventionList,
    ParameterModelConvention,
};
pub use error::ConventionError;
pub use registration::{
    ConventionListExt, add_action_convention, add_controller_convention,
    add_parameter_convention,
};
pub use runner::apply_conventions;
