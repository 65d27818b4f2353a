//! # appmodel_tree
//!
//! The application model: a fixed-depth tree of controllers, actions and
//! parameters that conventions read and mutate.
//!
//! ## Example
//!
//! ```rust
//! use appmodel_tree::ApplicationModel;
//!
//! let model = ApplicationModel::from_json(r#"{
//!     "controllers": [
//!         { "name": "Orders", "actions": [{ "name": "Get", "parameters": [{ "name": "id" }] }] }
//!     ]
//! }"#).unwrap();
//!
//! assert_eq!(model.parameter_count(), 1);
//! ```

mod error;
mod load;
mod model;

pub use error::ModelError;
pub use model::{
    ActionModel, ApplicationModel, BindingSource, ControllerModel, ParameterModel, Properties,
};
