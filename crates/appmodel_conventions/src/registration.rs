//! Registering node-level conventions on a [`ConventionList`].
//!
//! Each function wraps the convention in the matching adapter and appends it
//! to the end of the list. Registration never removes or reorders existing
//! entries, and registering the same convention more than once is allowed.

use std::sync::Arc;

use tracing::debug;

use crate::{
    ActionApplicationModelConvention, ActionModelConvention, ControllerApplicationModelConvention,
    ControllerModelConvention, ConventionError, ConventionList, ParameterApplicationModelConvention,
    ParameterModelConvention,
};

/// Appends a convention applied to every controller.
///
/// Fails with [`ConventionError::InvalidArgument`] if either argument is
/// `None`; the list is left untouched in that case.
pub fn add_controller_convention(
    conventions: Option<&mut ConventionList>,
    convention: Option<Arc<dyn ControllerModelConvention>>,
) -> Result<(), ConventionError> {
    let conventions =
        conventions.ok_or_else(|| ConventionError::invalid_argument("conventions"))?;
    let adapter = ControllerApplicationModelConvention::new(convention)?;

    conventions.push(Box::new(adapter));
    debug!(
        conventions = conventions.len(),
        "Registered controller convention"
    );
    Ok(())
}

/// Appends a convention applied to every action.
///
/// Fails with [`ConventionError::InvalidArgument`] if either argument is
/// `None`; the list is left untouched in that case.
pub fn add_action_convention(
    conventions: Option<&mut ConventionList>,
    convention: Option<Arc<dyn ActionModelConvention>>,
) -> Result<(), ConventionError> {
    let conventions =
        conventions.ok_or_else(|| ConventionError::invalid_argument("conventions"))?;
    let adapter = ActionApplicationModelConvention::new(convention)?;

    conventions.push(Box::new(adapter));
    debug!(
        conventions = conventions.len(),
        "Registered action convention"
    );
    Ok(())
}

/// Appends a convention applied to every parameter.
///
/// Fails with [`ConventionError::InvalidArgument`] if either argument is
/// `None`; the list is left untouched in that case.
pub fn add_parameter_convention(
    conventions: Option<&mut ConventionList>,
    convention: Option<Arc<dyn ParameterModelConvention>>,
) -> Result<(), ConventionError> {
    let conventions =
        conventions.ok_or_else(|| ConventionError::invalid_argument("conventions"))?;
    let adapter = ParameterApplicationModelConvention::new(convention)?;

    conventions.push(Box::new(adapter));
    debug!(
        conventions = conventions.len(),
        "Registered parameter convention"
    );
    Ok(())
}

/// Method-style registration on a [`ConventionList`].
///
/// # Example
///
/// ```rust
/// use appmodel_conventions::{ConventionError, ConventionList, ConventionListExt};
/// use appmodel_tree::ActionModel;
///
/// let mut conventions = ConventionList::new();
/// conventions
///     .add_action_convention(|action: &mut ActionModel| -> Result<(), ConventionError> {
///         action.http_method.get_or_insert_with(|| "GET".to_string());
///         Ok(())
///     })
///     .unwrap();
///
/// assert_eq!(conventions.len(), 1);
/// ```
pub trait ConventionListExt {
    /// Appends a convention applied to every controller.
    fn add_controller_convention(
        &mut self,
        convention: impl ControllerModelConvention + 'static,
    ) -> Result<(), ConventionError>;

    /// Appends a convention applied to every action.
    fn add_action_convention(
        &mut self,
        convention: impl ActionModelConvention + 'static,
    ) -> Result<(), ConventionError>;

    /// Appends a convention applied to every parameter.
    fn add_parameter_convention(
        &mut self,
        convention: impl ParameterModelConvention + 'static,
    ) -> Result<(), ConventionError>;
}

impl ConventionListExt for ConventionList {
    fn add_controller_convention(
        &mut self,
        convention: impl ControllerModelConvention + 'static,
    ) -> Result<(), ConventionError> {
        add_controller_convention(Some(self), Some(Arc::new(convention)))
    }

    fn add_action_convention(
        &mut self,
        convention: impl ActionModelConvention + 'static,
    ) -> Result<(), ConventionError> {
        add_action_convention(Some(self), Some(Arc::new(convention)))
    }

    fn add_parameter_convention(
        &mut self,
        convention: impl ParameterModelConvention + 'static,
    ) -> Result<(), ConventionError> {
        add_parameter_convention(Some(self), Some(Arc::new(convention)))
    }
}
