use folio_core::{ContentRecord, Project};
use serde_json::Value;

#[test]
fn stored_blob_uses_the_original_field_names() {
    let record = ContentRecord::builtin_default();
    let blob = record.to_json().unwrap();
    let value: Value = serde_json::from_str(&blob).unwrap();

    for key in ["name", "role", "email", "about", "projects"] {
        assert!(value.get(key).is_some(), "missing key {key}");
    }
    let first_project = &value["projects"][0];
    for key in ["title", "desc", "tech"] {
        assert!(first_project.get(key).is_some(), "missing project key {key}");
    }
}

#[test]
fn json_roundtrip_preserves_the_record() {
    let mut record = ContentRecord::builtin_default();
    record.name = "Ada".to_string();
    record.projects.push(Project::new("T", "D", ""));

    let blob = record.to_json().unwrap();
    let loaded = ContentRecord::from_json(&blob).unwrap();

    assert_eq!(loaded, record);
}

#[test]
fn project_tech_defaults_to_empty_when_absent() {
    let record =
        ContentRecord::from_json(r#"{"projects":[{"title":"T","desc":"D"}]}"#).unwrap();

    assert_eq!(record.projects.len(), 1);
    assert_eq!(record.projects[0], Project::new("T", "D", ""));
}

#[test]
fn absent_fields_fall_back_to_defaults_individually() {
    let defaults = ContentRecord::builtin_default();
    let record = ContentRecord::from_json(r#"{"role":"Custom Role"}"#).unwrap();

    assert_eq!(record.role, "Custom Role");
    assert_eq!(record.name, defaults.name);
    assert_eq!(record.email, defaults.email);
    assert_eq!(record.about, defaults.about);
    assert_eq!(record.projects, defaults.projects);
}

#[test]
fn empty_object_loads_as_the_full_default() {
    let record = ContentRecord::from_json("{}").unwrap();
    assert_eq!(record, ContentRecord::builtin_default());
}

#[test]
fn malformed_project_entries_fail_the_parse() {
    // A project without a title does not match the stored shape; callers
    // fall back to the default record.
    assert!(ContentRecord::from_json(r#"{"projects":[{"desc":"D"}]}"#).is_err());
}
