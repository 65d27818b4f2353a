//! End-to-end tests: load an application model from JSON, register
//! conventions at every level and apply the list.

use std::path::PathBuf;
use std::sync::Once;

use appmodel_conventions::{
    ConventionError, ConventionList, ConventionListExt, apply_conventions,
};
use appmodel_tree::{ActionModel, ApplicationModel, BindingSource, ControllerModel, ParameterModel};
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use serde_json::json;

static TRACING: Once = Once::new();

fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

#[fixture]
fn shop() -> ApplicationModel {
    init_tracing();
    ApplicationModel::from_file(fixtures_dir().join("shop.json")).expect("Failed to load fixture")
}

fn default_routes(controller: &mut ControllerModel) -> Result<(), ConventionError> {
    if controller.route_template.is_none() {
        controller.route_template = Some(format!("api/{}", controller.name.to_lowercase()));
    }
    Ok(())
}

fn default_methods(action: &mut ActionModel) -> Result<(), ConventionError> {
    action.http_method.get_or_insert_with(|| "GET".to_string());
    if action.name == "Ping" {
        action.properties.insert("apiVisible".to_string(), json!(false));
    }
    Ok(())
}

fn default_binding(parameter: &mut ParameterModel) -> Result<(), ConventionError> {
    parameter.binding_source.get_or_insert(BindingSource::Query);
    Ok(())
}

fn standard_conventions() -> ConventionList {
    let mut conventions = ConventionList::new();
    conventions.add_controller_convention(default_routes).unwrap();
    conventions.add_action_convention(default_methods).unwrap();
    conventions.add_parameter_convention(default_binding).unwrap();
    conventions
}

#[rstest]
fn test_fixture_shape(shop: ApplicationModel) {
    assert_eq!(shop.controllers.len(), 3);
    assert_eq!(shop.action_count(), 5);
    assert_eq!(shop.parameter_count(), 5);
    assert_eq!(shop.properties["title"], "Shop");
}

#[rstest]
fn test_controller_routes(mut shop: ApplicationModel) {
    apply_conventions(&mut shop, &standard_conventions()).unwrap();

    let routes: Vec<Option<&str>> = shop
        .controllers
        .iter()
        .map(|c| c.route_template.as_deref())
        .collect();
    assert_eq!(
        routes,
        vec![Some("api/orders"), Some("api/people"), Some("api/health")]
    );
}

#[rstest]
fn test_action_methods(mut shop: ApplicationModel) {
    apply_conventions(&mut shop, &standard_conventions()).unwrap();

    let methods: Vec<(&str, &str)> = shop
        .controllers
        .iter()
        .flat_map(|c| c.actions.iter())
        .map(|a| (a.name.as_str(), a.http_method.as_deref().unwrap_or_default()))
        .collect();
    assert_eq!(
        methods,
        vec![
            ("List", "GET"),
            ("Get", "GET"),
            ("Create", "POST"),
            ("Search", "GET"),
            ("Ping", "GET"),
        ]
    );

    let ping = shop.controller("Health").unwrap().action("Ping").unwrap();
    assert_eq!(ping.properties["apiVisible"], json!(false));
}

#[rstest]
fn test_parameter_bindings(mut shop: ApplicationModel) {
    apply_conventions(&mut shop, &standard_conventions()).unwrap();

    let bindings: Vec<(&str, Option<BindingSource>)> = shop
        .controllers
        .iter()
        .flat_map(|c| c.actions.iter())
        .flat_map(|a| a.parameters.iter())
        .map(|p| (p.name.as_str(), p.binding_source))
        .collect();
    assert_eq!(
        bindings,
        vec![
            ("page", Some(BindingSource::Query)),
            ("pageSize", Some(BindingSource::Query)),
            ("id", Some(BindingSource::Path)),
            ("order", Some(BindingSource::Body)),
            ("query", Some(BindingSource::Query)),
        ]
    );
}

#[rstest]
fn test_reapplying_is_stable_for_idempotent_conventions(mut shop: ApplicationModel) {
    let conventions = standard_conventions();

    apply_conventions(&mut shop, &conventions).unwrap();
    let once = shop.clone();
    apply_conventions(&mut shop, &conventions).unwrap();

    assert_eq!(shop, once);
}

#[rstest]
fn test_failure_leaves_earlier_nodes_mutated(mut shop: ApplicationModel) {
    let mut conventions = standard_conventions();
    conventions
        .add_parameter_convention(|parameter: &mut ParameterModel| -> Result<(), ConventionError> {
            if parameter.name == "id" {
                return Err(ConventionError::failed("id must not be bound from the path"));
            }
            parameter
                .properties
                .insert("checked".to_string(), json!(true));
            Ok(())
        })
        .unwrap();

    let err = apply_conventions(&mut shop, &conventions).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Convention failed: id must not be bound from the path"
    );

    let checked: Vec<&str> = shop
        .controllers
        .iter()
        .flat_map(|c| c.actions.iter())
        .flat_map(|a| a.parameters.iter())
        .filter(|p| p.properties.contains_key("checked"))
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(checked, vec!["page", "pageSize"]);

    // Earlier list entries ran to completion before the failure.
    assert_eq!(
        shop.controllers[2].route_template.as_deref(),
        Some("api/health")
    );
}
