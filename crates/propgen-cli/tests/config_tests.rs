use super::*;
use clap::Parser;

fn args(extra: &[&str]) -> CliArgs {
    let mut argv = vec!["propgen", "decls.json"];
    argv.extend_from_slice(extra);
    CliArgs::parse_from(argv)
}

#[test]
fn test_parse_full_config() {
    let config = parse_config(
        r#"{
            "naming": "remove-prefix",
            "capabilityMarker": "com.acme.Observable",
            "propertyAnnotation": "com.acme.Property",
            "include": ["com.acme.*"],
            "exclude": ["*.internal.*"]
        }"#,
    )
    .unwrap();
    assert_eq!(config.naming, Some(NamingStrategy::RemovePrefix));
    assert_eq!(
        config.capability_marker,
        Some(Some("com.acme.Observable".to_string()))
    );
    assert_eq!(config.property_annotation.as_deref(), Some("com.acme.Property"));
    assert_eq!(config.include, Some(vec!["com.acme.*".to_string()]));
    assert_eq!(config.exclude, Some(vec!["*.internal.*".to_string()]));
}

#[test]
fn test_empty_config_and_null_marker() {
    assert_eq!(parse_config("{}").unwrap(), PropgenConfig::default());

    let config = parse_config(r#"{ "capabilityMarker": null }"#).unwrap();
    assert_eq!(config.capability_marker, Some(None));
    let resolved = ResolvedConfig::resolve(Some(config), &args(&[]));
    assert_eq!(resolved.capability_marker, None);
}

#[test]
fn test_unknown_fields_and_bad_naming_are_rejected() {
    assert!(parse_config(r#"{ "nameing": "default" }"#).is_err());
    assert!(parse_config(r#"{ "naming": "prefix" }"#).is_err());
}

#[test]
fn test_defaults() {
    let resolved = ResolvedConfig::resolve(None, &args(&[]));
    assert_eq!(resolved, ResolvedConfig::default());
    assert_eq!(resolved.naming, NamingStrategy::Default);
    assert_eq!(resolved.capability_marker.as_deref(), Some(DEFAULT_CAPABILITY_MARKER));
    assert_eq!(resolved.property_annotation, DEFAULT_PROPERTY_ANNOTATION);
}

#[test]
fn test_cli_flags_override_file() {
    let config = parse_config(
        r#"{ "naming": "remove-prefix", "include": ["a.*"], "propertyAnnotation": "a.Property" }"#,
    )
    .unwrap();
    let cli = args(&[
        "--naming",
        "default",
        "--include",
        "b.*",
        "--include",
        "c.*",
        "--noCapability",
    ]);
    let resolved = ResolvedConfig::resolve(Some(config), &cli);
    assert_eq!(resolved.naming, NamingStrategy::Default);
    assert_eq!(resolved.include, ["b.*", "c.*"]);
    assert_eq!(resolved.property_annotation, "a.Property");
    assert_eq!(resolved.capability_marker, None);
}

#[test]
fn test_find_config_beside_declarations() {
    let dir = tempfile::tempdir().unwrap();
    let declarations = dir.path().join("decls.json");
    assert_eq!(find_config(None, &declarations).unwrap(), None);

    let config = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&config, "{}").unwrap();
    assert_eq!(find_config(None, &declarations).unwrap(), Some(config.clone()));

    // An explicit directory resolves to its propgen.json.
    assert_eq!(find_config(Some(dir.path()), &declarations).unwrap(), Some(config));
    assert!(find_config(Some(&dir.path().join("missing.json")), &declarations).is_err());
}

#[test]
fn test_log_flags() {
    let parsed = args(&["--log", "propgen_introspect=trace", "--logFormat", "tree"]);
    assert_eq!(parsed.log.as_deref(), Some("propgen_introspect=trace"));
    assert_eq!(parsed.log_format, Some(crate::tracing_config::LogFormat::Tree));
    assert_eq!(args(&[]).log_format, None);
}
