use super::*;

#[test]
fn test_retain_type_defaults_to_hold() {
    assert_eq!(RetainType::default(), RetainType::Hold);
    assert_eq!(Property::new("name", TypeId::INT).retain(), RetainType::Hold);
}

#[test]
fn test_retain_type_from_constant_name() {
    assert_eq!("HOLD".parse::<RetainType>(), Ok(RetainType::Hold));
    assert_eq!("NEW".parse::<RetainType>(), Ok(RetainType::New));
    assert_eq!("CLONE".parse::<RetainType>(), Ok(RetainType::Clone));
    assert_eq!(
        "new".parse::<RetainType>(),
        Err(UnknownRetainType("new".to_string()))
    );
}

#[test]
fn test_retain_type_serde_uses_constant_names() {
    let json = serde_json::to_string(&RetainType::Clone).unwrap();
    assert_eq!(json, "\"CLONE\"");
    let parsed: RetainType = serde_json::from_str("\"NEW\"").unwrap();
    assert_eq!(parsed, RetainType::New);
}

#[test]
fn test_property_flags() {
    let mut property = Property::readable("name", TypeId::INT);
    assert!(property.is_readable());
    assert!(!property.is_writable());
    assert!(!property.is_ignored());

    property.set_ignored(true);
    assert!(property.is_ignored());
    assert_eq!(property.flags(), PropertyFlags::READABLE | PropertyFlags::IGNORED);
}

#[test]
fn test_absorb_access_only_ors_access_bits() {
    let mut first = Property::readable("age", TypeId::INT);
    let mut second = Property::writable("age", TypeId::INT);
    second.set_ignored(true);
    second.set_retain(RetainType::Clone);

    first.absorb_access(&second);
    assert!(first.is_readable());
    assert!(first.is_writable());
    assert!(!first.is_ignored());
    assert_eq!(first.retain(), RetainType::Hold);

    // Monotonic: absorbing a write-only declaration never clears readable.
    first.absorb_access(&Property::writable("age", TypeId::INT));
    assert!(first.is_readable());
}

#[test]
fn test_real_type_falls_back_to_declared_type() {
    let mut property = Property::new("items", TypeId(20));
    assert_eq!(property.real_type(), TypeId(20));
    property.set_real_type(Some(TypeId(21)));
    assert_eq!(property.real_type(), TypeId(21));
    assert_eq!(property.declared_type(), TypeId(20));
}

#[test]
fn test_field_from_property() {
    let read_only = Field::from_property(&Property::readable("id", TypeId::LONG));
    assert!(read_only.property_defined);
    assert!(read_only.read_only);
    assert_eq!(read_only.name(), "id");
    assert_eq!(read_only.method_modifier(), DEFAULT_METHOD_MODIFIER);

    let mut both = Property::readable("name", TypeId(30));
    both.set_writable(true);
    both.set_method_modifier("protected");
    let field = Field::from_property(&both);
    assert!(!field.read_only);
    assert_eq!(field.method_modifier(), "protected");

    // Write-only is not read-only.
    let write_only = Field::from_property(&Property::writable("secret", TypeId(30)));
    assert!(!write_only.read_only);
}

#[test]
fn test_plain_field_defaults() {
    let field = Field::new("counter", TypeId::INT);
    assert!(!field.property_defined);
    assert!(!field.read_only);
    assert_eq!(field.real_type(), TypeId::INT);
}
