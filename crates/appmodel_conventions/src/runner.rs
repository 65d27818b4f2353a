//! Running a convention list against an application model.

use appmodel_tree::ApplicationModel;
use tracing::{debug, info};

use crate::{ApplicationModelConvention, ConventionError};

/// Applies every convention to `application` in list order.
///
/// Stops at the first convention that fails and returns its error unchanged.
/// Conventions that ran before the failure keep their effects.
pub fn apply_conventions(
    application: &mut ApplicationModel,
    conventions: &[Box<dyn ApplicationModelConvention>],
) -> Result<(), ConventionError> {
    for (index, convention) in conventions.iter().enumerate() {
        debug!(index, "Applying convention");
        convention.apply(Some(&mut *application))?;
    }

    info!(
        conventions = conventions.len(),
        controllers = application.controllers.len(),
        actions = application.action_count(),
        parameters = application.parameter_count(),
        "Applied conventions"
    );
    Ok(())
}
