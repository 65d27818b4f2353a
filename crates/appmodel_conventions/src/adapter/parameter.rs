use std::sync::Arc;

use appmodel_tree::ApplicationModel;
use tracing::{debug, trace};

use crate::{ApplicationModelConvention, ConventionError, ParameterModelConvention};

/// Applies a [`ParameterModelConvention`] to every parameter of every action.
///
/// Parameters are visited in (controller, action, parameter) order.
pub struct ParameterApplicationModelConvention {
    convention: Arc<dyn ParameterModelConvention>,
}

impl ParameterApplicationModelConvention {
    /// Wraps a parameter convention.
    ///
    /// Fails with [`ConventionError::InvalidArgument`] if `convention` is `None`.
    pub fn new(
        convention: Option<Arc<dyn ParameterModelConvention>>,
    ) -> Result<Self, ConventionError> {
        let convention =
            convention.ok_or_else(|| ConventionError::invalid_argument("convention"))?;
        Ok(Self { convention })
    }

    /// Returns the wrapped convention.
    pub fn convention(&self) -> &Arc<dyn ParameterModelConvention> {
        &self.convention
    }
}

impl ApplicationModelConvention for ParameterApplicationModelConvention {
    fn apply(&self, application: Option<&mut ApplicationModel>) -> Result<(), ConventionError> {
        let application =
            application.ok_or_else(|| ConventionError::invalid_argument("application"))?;

        debug!(
            parameters = application.parameter_count(),
            "Applying parameter convention"
        );

        for controller in &mut application.controllers {
            for action in &mut controller.actions {
                for parameter in &mut action.parameters {
                    trace!(
                        controller = %controller.name,
                        action = %action.name,
                        parameter = %parameter.name,
                        "Visiting parameter"
                    );
                    self.convention.apply(parameter)?;
                }
            }
        }

        Ok(())
    }
}
