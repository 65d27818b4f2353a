//! Application model nodes.
//!
//! The tree has a fixed depth: an [`ApplicationModel`] owns ordered
//! [`ControllerModel`]s, each controller owns ordered [`ActionModel`]s and
//! each action owns ordered [`ParameterModel`]s. Child order is significant
//! and is the order in which conventions visit the nodes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Free-form metadata attached to a node.
pub type Properties = BTreeMap<String, serde_json::Value>;

/// The whole application model.
///
/// # Example
///
/// ```rust
/// use appmodel_tree::{ActionModel, ApplicationModel, ControllerModel, ParameterModel};
///
/// let application = ApplicationModel::new().with_controller(
///     ControllerModel::new("Orders").with_action(
///         ActionModel::new("Get").with_parameter(ParameterModel::new("id")),
///     ),
/// );
///
/// assert_eq!(application.action_count(), 1);
/// assert_eq!(application.parameter_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationModel {
    /// Controllers in declaration order.
    #[serde(default)]
    pub controllers: Vec<ControllerModel>,

    /// Application-wide metadata.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: Properties,
}

impl ApplicationModel {
    /// Creates an empty application model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a controller.
    pub fn with_controller(mut self, controller: ControllerModel) -> Self {
        self.controllers.push(controller);
        self
    }

    /// Sets an application-wide property.
    pub fn with_property(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    /// Total number of actions across all controllers.
    pub fn action_count(&self) -> usize {
        self.controllers.iter().map(|c| c.actions.len()).sum()
    }

    /// Total number of parameters across all actions of all controllers.
    pub fn parameter_count(&self) -> usize {
        self.controllers
            .iter()
            .flat_map(|c| c.actions.iter())
            .map(|a| a.parameters.len())
            .sum()
    }

    /// Finds a controller by name.
    pub fn controller(&self, name: &str) -> Option<&ControllerModel> {
        self.controllers.iter().find(|c| c.name == name)
    }
}

/// A controller: one logical grouping of actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControllerModel {
    pub name: String,

    /// Route template applied to every action of this controller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_template: Option<String>,

    /// Actions in declaration order.
    #[serde(default)]
    pub actions: Vec<ActionModel>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: Properties,
}

impl ControllerModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            route_template: None,
            actions: Vec::new(),
            properties: Properties::new(),
        }
    }

    pub fn with_route_template(mut self, template: impl Into<String>) -> Self {
        self.route_template = Some(template.into());
        self
    }

    pub fn with_action(mut self, action: ActionModel) -> Self {
        self.actions.push(action);
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    /// Finds an action by name.
    pub fn action(&self, name: &str) -> Option<&ActionModel> {
        self.actions.iter().find(|a| a.name == name)
    }
}

/// An action: one callable operation of a controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionModel {
    pub name: String,

    /// HTTP method this action responds to (e.g. `GET`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_method: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_template: Option<String>,

    /// Parameters in declaration order.
    #[serde(default)]
    pub parameters: Vec<ParameterModel>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: Properties,
}

impl ActionModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            http_method: None,
            route_template: None,
            parameters: Vec::new(),
            properties: Properties::new(),
        }
    }

    pub fn with_http_method(mut self, method: impl Into<String>) -> Self {
        self.http_method = Some(method.into());
        self
    }

    pub fn with_route_template(mut self, template: impl Into<String>) -> Self {
        self.route_template = Some(template.into());
        self
    }

    pub fn with_parameter(mut self, parameter: ParameterModel) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    /// Finds a parameter by name.
    pub fn parameter(&self, name: &str) -> Option<&ParameterModel> {
        self.parameters.iter().find(|p| p.name == name)
    }
}

/// A single input parameter of an action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterModel {
    pub name: String,

    /// Where the parameter value is bound from, if decided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binding_source: Option<BindingSource>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: Properties,
}

impl ParameterModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            binding_source: None,
            properties: Properties::new(),
        }
    }

    pub fn with_binding_source(mut self, source: BindingSource) -> Self {
        self.binding_source = Some(source);
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.properties.insert(key.into(), value);
        self
    }
}

/// Source a parameter value is bound from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BindingSource {
    Path,
    Query,
    Header,
    Body,
    Form,
    Services,
}
