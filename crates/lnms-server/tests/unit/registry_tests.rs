//! Tool registry tests

use std::collections::HashSet;

use lnms_server::access::AccessPolicy;
use lnms_server::tools::{catalog, create_tool_list, find_spec};

#[test]
fn catalog_has_the_full_tool_set() {
    assert_eq!(catalog().len(), 97);
}

#[test]
fn tool_names_are_unique() {
    let specs = catalog();
    let names: HashSet<&str> = specs.iter().map(|spec| spec.meta.name).collect();
    assert_eq!(names.len(), specs.len());
}

#[test]
fn every_tool_carries_the_librenms_tag() {
    for spec in catalog() {
        assert!(
            spec.meta.has_tag("librenms"),
            "{} is missing the librenms tag",
            spec.meta.name
        );
    }
}

#[test]
fn read_only_tag_matches_read_only_hint() {
    for spec in catalog() {
        assert_eq!(
            spec.meta.is_read_only(),
            spec.meta.hints.read_only,
            "{} has inconsistent read-only metadata",
            spec.meta.name
        );
    }
}

#[test]
fn every_catalog_entry_is_findable() {
    for spec in catalog() {
        assert!(find_spec(spec.meta.name).is_some(), "{}", spec.meta.name);
    }
    assert!(find_spec("no_such_tool").is_none());
}

#[test]
fn tool_definitions_render_object_schemas() {
    for spec in catalog() {
        let tool = spec.to_tool().expect("schema should render");
        assert_eq!(tool.name, spec.meta.name);
        assert!(tool.description.is_some());
        let schema_type = tool.input_schema.get("type").and_then(|v| v.as_str());
        assert_eq!(schema_type, Some("object"), "{}", spec.meta.name);
    }
}

#[test]
fn tool_annotations_mirror_hints() {
    let spec = find_spec("device_delete").expect("device_delete exists");
    let tool = spec.to_tool().expect("schema should render");
    let annotations = tool.annotations.expect("annotations present");
    assert_eq!(annotations.read_only_hint, Some(false));
    assert_eq!(annotations.destructive_hint, Some(true));
    assert_eq!(annotations.idempotent_hint, Some(true));
}

#[test]
fn default_policy_lists_everything() {
    let tools = create_tool_list(&AccessPolicy::default()).expect("list should build");
    assert_eq!(tools.len(), 97);
}

#[test]
fn disabled_tag_filters_the_listing() {
    let policy = AccessPolicy::new(false, vec!["bills".to_string()]);
    let tools = create_tool_list(&policy).expect("list should build");
    assert_eq!(tools.len(), 97 - 9);
    assert!(tools.iter().all(|tool| !tool.name.starts_with("bill")));
}

#[test]
fn read_only_mode_lists_only_read_only_tools() {
    let policy = AccessPolicy::new(true, vec![]);
    let tools = create_tool_list(&policy).expect("list should build");

    let read_only: HashSet<&str> = catalog()
        .iter()
        .filter(|spec| spec.meta.is_read_only())
        .map(|spec| spec.meta.name)
        .collect();
    assert_eq!(tools.len(), read_only.len());
    assert!(tools.iter().all(|tool| read_only.contains(tool.name.as_ref())));
    assert!(!tools.iter().any(|tool| tool.name == "device_delete"));
}

#[test]
fn id_argument_schemas_mark_required_fields() {
    let spec = find_spec("alert_get_by_id").expect("tool exists");
    let tool = spec.to_tool().expect("schema should render");
    let required = tool
        .input_schema
        .get("required")
        .and_then(|v| v.as_array())
        .expect("required array");
    assert!(required.iter().any(|v| v.as_str() == Some("alert_id")));
}

#[test]
fn renamed_arguments_keep_their_wire_names() {
    let spec = find_spec("health_by_type").expect("tool exists");
    let tool = spec.to_tool().expect("schema should render");
    let properties = tool
        .input_schema
        .get("properties")
        .and_then(|v| v.as_object())
        .expect("properties object");
    assert!(properties.contains_key("type"));
    assert!(!properties.contains_key("sensor_type"));
}
