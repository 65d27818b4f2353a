//! Loading an application model from a JSON description.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use jsonschema::Validator;
use tracing::debug;

use crate::{ApplicationModel, ModelError};

// Embed the schema
const SCHEMA_JSON: &str = include_str!("../../../schemas/v1/application.json");
static MODEL_SCHEMA: OnceLock<Validator> = OnceLock::new();

impl ApplicationModel {
    /// Loads a model description from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| ModelError::config(format!("Failed to read model: {}", e)))?;

        debug!("Loading application model from {}", path.display());
        Self::from_json(&content)
    }

    /// Parses a model description from a JSON string with schema validation.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| ModelError::config(format!("Invalid JSON: {}", e)))?;

        let schema = MODEL_SCHEMA.get_or_init(|| {
            let schema_json: serde_json::Value =
                serde_json::from_str(SCHEMA_JSON).expect("Invalid embedded model schema");
            Validator::new(&schema_json).expect("Invalid model schema compilation")
        });

        if let Err(e) = schema.validate(&value) {
            let error_msg = format!("{} at {}", e, e.instance_path());
            return Err(ModelError::config(format!(
                "Model validation failed: {}",
                error_msg
            )));
        }

        let model: Self = serde_json::from_value(value)
            .map_err(|e| ModelError::parse(format!("Invalid model: {}", e)))?;

        debug!(
            controllers = model.controllers.len(),
            actions = model.action_count(),
            parameters = model.parameter_count(),
            "Parsed application model"
        );

        Ok(model)
    }
}
