//! End-to-end runs of the propgen driver.

use clap::Parser;
use propgen_cli::args::CliArgs;
use propgen_cli::config::{CONFIG_FILE_NAME, ResolvedConfig};
use propgen_cli::driver::{self, generate};
use propgen_emitter::NamingStrategy;
use std::path::Path;

const DECLARATIONS: &str = r#"{
  "types": [
    { "name": "beans.PropertyChangeEventAware",
      "members": [ { "method": { "name": "getListeners", "returns": "java.util.List" } } ] },
    { "name": "com.acme.IPerson", "extends": ["com.acme.INamed", "beans.PropertyChangeEventAware"],
      "members": [
        { "method": { "name": "getAge", "returns": "int" } },
        { "method": { "name": "setAge", "parameters": ["int"] } },
        { "method": { "name": "getFriends", "returns": "java.util.List<com.acme.IPerson>",
            "annotations": [ { "type": "com.acme.Property", "values": { "retainType": { "enum": "NEW" }, "realType": { "type": "java.util.ArrayList<com.acme.IPerson>" } } } ] } }
      ] },
    { "name": "com.acme.INamed",
      "members": [ { "method": { "name": "getName", "returns": "java.lang.String" } } ] },
    { "name": "com.acme.internal.IHidden" }
  ]
}"#;

fn config() -> ResolvedConfig {
    ResolvedConfig {
        naming: NamingStrategy::RemovePrefix,
        capability_marker: Some("beans.PropertyChangeEventAware".to_string()),
        property_annotation: "com.acme.Property".to_string(),
        include: vec!["com.acme.*".to_string()],
        exclude: vec!["*.internal.*".to_string()],
    }
}

fn run(dir: &Path, extra: &[&str]) -> serde_json::Value {
    let declarations = dir.join("decls.json");
    let out = dir.join("plans.json");
    let mut argv = vec![
        "propgen".to_string(),
        declarations.display().to_string(),
        "--out".to_string(),
        out.display().to_string(),
    ];
    argv.extend(extra.iter().map(|arg| arg.to_string()));
    driver::run(&CliArgs::parse_from(argv)).unwrap();
    serde_json::from_str(&std::fs::read_to_string(out).unwrap()).unwrap()
}

#[test]
fn test_generate_plans() {
    let document = generate(DECLARATIONS, &config(), None).unwrap();
    let names: Vec<_> = document.classes.iter().map(|c| c.class_name.as_str()).collect();
    assert_eq!(names, ["Person", "Named"]);

    let person = &document.classes[0];
    assert_eq!(person.abstract_class_name, "AbstractPerson");
    assert!(person.capability_aware);
    let fields: Vec<_> = person.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(fields, ["name", "age", "friends"]);
    assert_eq!(
        person.fields[2].capture,
        "friends == null ? null : new java.util.ArrayList<com.acme.IPerson>(friends)"
    );
}

#[test]
fn test_generate_single_interface_bypasses_filter() {
    let document = generate(DECLARATIONS, &config(), Some("com.acme.internal.IHidden")).unwrap();
    assert_eq!(document.classes.len(), 1);
    assert_eq!(document.classes[0].class_name, "Hidden");

    let err = generate(DECLARATIONS, &config(), Some("com.acme.IMissing")).unwrap_err();
    assert_eq!(err.to_string(), "interface `com.acme.IMissing` is not declared");
}

#[test]
fn test_naming_error_names_the_interface() {
    let mut config = config();
    config.include.clear();
    config.capability_marker = None;
    let err = generate(DECLARATIONS, &config, None).unwrap_err();
    // Without a marker configured it is processed like any other interface,
    // and its simple name has no I/T prefix.
    assert_eq!(
        err.to_string(),
        "cannot name the classes for `beans.PropertyChangeEventAware`"
    );
}

#[test]
fn test_load_errors_have_context() {
    let err = generate("{ \"types\": 3 }", &config(), None).unwrap_err();
    assert_eq!(err.to_string(), "failed to load declarations");
    assert!(format!("{err:#}").contains("malformed declaration document"));
}

#[test]
fn test_run_with_config_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("decls.json"), DECLARATIONS).unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        r#"{ "naming": "remove-prefix", "capabilityMarker": "beans.PropertyChangeEventAware",
             "propertyAnnotation": "com.acme.Property", "exclude": ["beans.*", "*.internal.*"] }"#,
    )
    .unwrap();

    let output = run(dir.path(), &[]);
    let classes = output["classes"].as_array().unwrap();
    assert_eq!(classes.len(), 2);
    assert_eq!(classes[0]["className"], "Person");
    assert_eq!(classes[0]["package"], "com.acme");
    assert_eq!(classes[0]["fields"][2]["retain"], "NEW");
    assert_eq!(classes[1]["className"], "Named");

    // CLI flags win over the file.
    let output = run(dir.path(), &["--naming", "default"]);
    assert_eq!(output["classes"][0]["className"], "IPersonImpl");
}

#[test]
fn test_run_without_config_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("decls.json"), DECLARATIONS).unwrap();

    let output = run(dir.path(), &["--interface", "com.acme.IPerson", "--pretty"]);
    let person = &output["classes"][0];
    assert_eq!(person["className"], "IPersonImpl");
    // The default marker finds `beans.PropertyChangeEventAware` by simple name.
    assert_eq!(person["capabilityAware"], true);
    assert_eq!(person["fields"][0]["name"], "name");
    assert_eq!(person["fields"][1]["name"], "age");
    // The default annotation name does not match `com.acme.Property`.
    assert_eq!(person["fields"][2]["name"], "friends");
    assert_eq!(person["fields"][2]["retain"], "HOLD");
}

#[test]
fn test_show_config() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("decls.json"), DECLARATIONS).unwrap();

    let output = run(dir.path(), &["--showConfig", "--naming", "remove-prefix", "--exclude", "x.*"]);
    assert_eq!(output["naming"], "remove-prefix");
    assert_eq!(output["capabilityMarker"], "PropertyChangeEventAware");
    assert_eq!(output["propertyAnnotation"], "Property");
    assert_eq!(output["exclude"][0], "x.*");
}

#[test]
fn test_missing_declarations_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");
    let argv = vec!["propgen".to_string(), missing.display().to_string()];
    let err = driver::run(&CliArgs::parse_from(argv)).unwrap_err();
    assert!(err.to_string().starts_with("failed to read declarations"));
}
