use std::sync::Arc;

use appmodel_tree::ApplicationModel;
use tracing::{debug, trace};

use crate::{ActionModelConvention, ApplicationModelConvention, ConventionError};

/// Applies an [`ActionModelConvention`] to every action of every controller.
pub struct ActionApplicationModelConvention {
    convention: Arc<dyn ActionModelConvention>,
}

impl ActionApplicationModelConvention {
    /// Wraps an action convention.
    ///
    /// Fails with [`ConventionError::InvalidArgument`] if `convention` is `None`.
    pub fn new(
        convention: Option<Arc<dyn ActionModelConvention>>,
    ) -> Result<Self, ConventionError> {
        let convention =
            convention.ok_or_else(|| ConventionError::invalid_argument("convention"))?;
        Ok(Self { convention })
    }

    /// Returns the wrapped convention.
    pub fn convention(&self) -> &Arc<dyn ActionModelConvention> {
        &self.convention
    }
}

impl ApplicationModelConvention for ActionApplicationModelConvention {
    fn apply(&self, application: Option<&mut ApplicationModel>) -> Result<(), ConventionError> {
        let application =
            application.ok_or_else(|| ConventionError::invalid_argument("application"))?;

        debug!(
            actions = application.action_count(),
            "Applying action convention"
        );

        for controller in &mut application.controllers {
            for action in &mut controller.actions {
                trace!(
                    controller = %controller.name,
                    action = %action.name,
                    "Visiting action"
                );
                self.convention.apply(action)?;
            }
        }

        Ok(())
    }
}
