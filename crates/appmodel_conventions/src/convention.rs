//! Convention traits.
//!
//! - [`ApplicationModelConvention`] - applies to the whole application model;
//!   the unit stored in a [`ConventionList`]
//! - [`ControllerModelConvention`] - applies to one controller
//! - [`ActionModelConvention`] - applies to one action
//! - [`ParameterModelConvention`] - applies to one parameter
//!
//! The three node-level traits are implemented for closures, so a rule can be
//! written inline:
//!
//! ```rust
//! use appmodel_conventions::{ConventionError, ControllerModelConvention};
//! use appmodel_tree::ControllerModel;
//!
//! let lowercase_routes = |controller: &mut ControllerModel| -> Result<(), ConventionError> {
//!     controller.route_template = Some(format!("api/{}", controller.name.to_lowercase()));
//!     Ok(())
//! };
//!
//! let mut controller = ControllerModel::new("Orders");
//! lowercase_routes.apply(&mut controller).unwrap();
//! assert_eq!(controller.route_template.as_deref(), Some("api/orders"));
//! ```

use appmodel_tree::{ActionModel, ApplicationModel, ControllerModel, ParameterModel};

use crate::ConventionError;

/// Ordered list of application-wide conventions.
///
/// Insertion order is execution order.
pub type ConventionList = Vec<Box<dyn ApplicationModelConvention>>;

/// A convention applied to the whole application model.
pub trait ApplicationModelConvention {
    /// Applies the convention.
    ///
    /// `None` stands for an absent application model and must be rejected
    /// with [`ConventionError::InvalidArgument`] before any other work.
    fn apply(&self, application: Option<&mut ApplicationModel>) -> Result<(), ConventionError>;
}

/// A convention applied to a single controller.
pub trait ControllerModelConvention {
    fn apply(&self, controller: &mut ControllerModel) -> Result<(), ConventionError>;
}

/// A convention applied to a single action.
pub trait ActionModelConvention {
    fn apply(&self, action: &mut ActionModel) -> Result<(), ConventionError>;
}

/// A convention applied to a single parameter.
pub trait ParameterModelConvention {
    fn apply(&self, parameter: &mut ParameterModel) -> Result<(), ConventionError>;
}

impl<F> ControllerModelConvention for F
where
    F: Fn(&mut ControllerModel) -> Result<(), ConventionError>,
{
    fn apply(&self, controller: &mut ControllerModel) -> Result<(), ConventionError> {
        self(controller)
    }
}

impl<F> ActionModelConvention for F
where
    F: Fn(&mut ActionModel) -> Result<(), ConventionError>,
{
    fn apply(&self, action: &mut ActionModel) -> Result<(), ConventionError> {
        self(action)
    }
}

impl<F> ParameterModelConvention for F
where
    F: Fn(&mut ParameterModel) -> Result<(), ConventionError>,
{
    fn apply(&self, parameter: &mut ParameterModel) -> Result<(), ConventionError> {
        self(parameter)
    }
}
