use super::*;
use propgen_model::parse_declarations;
use propgen_solver::TypeInterner;

const DOCUMENT: &str = r#"{
  "types": [
    { "name": "com.acme.PropertyChangeEventAware",
      "members": [ { "method": { "name": "getListeners", "returns": "java.util.List" } } ] },
    { "name": "com.acme.IPerson", "extends": ["com.acme.PropertyChangeEventAware"],
      "members": [ { "method": { "name": "getName", "returns": "java.lang.String" } } ] },
    { "name": "com.acme.internal.IHidden" },
    { "name": "com.acme.Person", "kind": "class" }
  ]
}"#;

#[test]
fn test_introspect_all_skips_marker_and_classes() {
    let interner = TypeInterner::new();
    let declarations = parse_declarations(DOCUMENT, &interner).unwrap();
    let introspector = Introspector::new(&interner, &declarations)
        .with_capability(CapabilityPredicate::marker(&interner, "com.acme.PropertyChangeEventAware"));

    let definitions = introspector.introspect_all().unwrap();
    let names: Vec<_> = definitions
        .iter()
        .map(|(decl, _)| decl.qualified_name.as_str())
        .collect();
    assert_eq!(names, ["com.acme.IPerson", "com.acme.internal.IHidden"]);

    let person = &definitions[0].1;
    assert_eq!(person.properties().len(), 1);
    assert!(person.is_capability_aware());
}

#[test]
fn test_introspect_all_applies_filter() {
    let interner = TypeInterner::new();
    let declarations = parse_declarations(DOCUMENT, &interner).unwrap();
    let filter = GlobFilter::new::<&str>(&[], &["*.internal.*"]).unwrap();
    let introspector = Introspector::new(&interner, &declarations).with_filter(filter);

    let names: Vec<_> = introspector
        .introspect_all()
        .unwrap()
        .into_iter()
        .map(|(decl, _)| decl.qualified_name.clone())
        .collect();
    // No capability predicate: the marker is an ordinary interface.
    assert_eq!(names, ["com.acme.PropertyChangeEventAware", "com.acme.IPerson"]);
}

#[test]
fn test_introspect_all_stops_at_first_error() {
    let interner = TypeInterner::new();
    let declarations = parse_declarations(
        r#"{ "types": [ { "name": "a.A", "extends": ["a.Missing"] } ] }"#,
        &interner,
    )
    .unwrap();
    let introspector = Introspector::new(&interner, &declarations);
    assert!(matches!(
        introspector.introspect_all(),
        Err(IntrospectError::UnresolvedType { .. })
    ));
}

#[test]
fn test_default_marker_resolves_by_simple_name() {
    let interner = TypeInterner::new();
    let declarations = parse_declarations(DOCUMENT, &interner).unwrap();
    let marker = declarations.by_name("com.acme.PropertyChangeEventAware").unwrap().ty;

    let predicate = CapabilityPredicate::resolve(&interner, &declarations, DEFAULT_CAPABILITY_MARKER);
    assert_eq!(predicate, CapabilityPredicate::SubtypeOf(marker));

    let introspector = Introspector::new(&interner, &declarations).with_capability(predicate);
    let definitions = introspector.introspect_all().unwrap();
    assert_eq!(definitions[0].0.qualified_name, "com.acme.IPerson");
    assert!(definitions[0].1.is_capability_aware());

    // Qualified names are taken literally, declared or not.
    assert_eq!(
        CapabilityPredicate::resolve(&interner, &declarations, "org.other.PropertyChangeEventAware"),
        CapabilityPredicate::marker(&interner, "org.other.PropertyChangeEventAware")
    );
    // An unqualified name nothing declares still yields a predicate.
    assert!(!CapabilityPredicate::resolve(&interner, &declarations, "Listenable")
        .matches(&interner, definitions[0].0.ty));
}
