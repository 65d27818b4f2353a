use std::sync::Arc;

use appmodel_tree::ApplicationModel;
use tracing::{debug, trace};

use crate::{ApplicationModelConvention, ConventionError, ControllerModelConvention};

/// Applies a [`ControllerModelConvention`] to every controller.
pub struct ControllerApplicationModelConvention {
    convention: Arc<dyn ControllerModelConvention>,
}

impl ControllerApplicationModelConvention {
    /// Wraps a controller convention.
    ///
    /// Fails with [`ConventionError::InvalidArgument`] if `convention` is `None`.
    pub fn new(
        convention: Option<Arc<dyn ControllerModelConvention>>,
    ) -> Result<Self, ConventionError> {
        let convention =
            convention.ok_or_else(|| ConventionError::invalid_argument("convention"))?;
        Ok(Self { convention })
    }

    /// Returns the wrapped convention.
    pub fn convention(&self) -> &Arc<dyn ControllerModelConvention> {
        &self.convention
    }
}

impl ApplicationModelConvention for ControllerApplicationModelConvention {
    fn apply(&self, application: Option<&mut ApplicationModel>) -> Result<(), ConventionError> {
        let application =
            application.ok_or_else(|| ConventionError::invalid_argument("application"))?;

        debug!(
            controllers = application.controllers.len(),
            "Applying controller convention"
        );

        for controller in &mut application.controllers {
            trace!(controller = %controller.name, "Visiting controller");
            self.convention.apply(controller)?;
        }

        Ok(())
    }
}
