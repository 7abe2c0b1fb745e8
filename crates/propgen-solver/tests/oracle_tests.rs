use super::*;
use crate::intern::OBJECT_TYPE_NAME;

#[test]
fn test_same_type_is_identity() {
    let interner = TypeInterner::new();
    let string = interner.declared("java.lang.String", &[]);

    assert!(interner.is_same_type(string, interner.declared("java.lang.String", &[])));
    assert!(!interner.is_same_type(string, TypeId::INT));
    assert!(!interner.is_same_type(TypeId::BOOLEAN, interner.boxed(PrimitiveKind::Boolean)));
}

#[test]
fn test_wildcards_are_never_the_same_type() {
    let interner = TypeInterner::new();
    let wildcard = interner.wildcard(WildcardBound::Unbounded);
    assert!(!interner.is_same_type(wildcard, wildcard));
}

#[test]
fn test_declared_subtype_through_hierarchy() {
    let interner = TypeInterner::new();
    let marker = interner.declared("com.acme.ChangeAware", &[]);
    let middle = interner.declared("com.acme.Observable", &[]);
    let leaf = interner.declared("com.acme.Person", &[]);

    interner.add_supertypes(middle, &[marker]);
    interner.add_supertypes(leaf, &[middle]);

    assert!(interner.is_subtype(leaf, marker));
    assert!(interner.is_subtype(marker, marker));
    assert!(!interner.is_subtype(marker, leaf));
}

#[test]
fn test_generic_subtype_uses_erasure() {
    let interner = TypeInterner::new();
    let t = interner.type_param("com.acme.Holder", "T");
    let string = interner.declared("java.lang.String", &[]);
    let base = interner.declared("com.acme.Holder", &[t]);
    let derived = interner.declared("com.acme.NamedHolder", &[]);
    interner.add_supertypes(derived, &[base]);

    let holder_of_string = interner.declared("com.acme.Holder", &[string]);
    assert!(interner.is_subtype(derived, holder_of_string));
}

#[test]
fn test_wildcard_containment() {
    let interner = TypeInterner::new();
    let string = interner.declared("java.lang.String", &[]);
    let list_of_string = interner.declared("java.util.List", &[string]);
    let any = interner.wildcard(WildcardBound::Unbounded);
    let list_of_any = interner.declared("java.util.List", &[any]);

    assert!(interner.is_subtype(list_of_string, list_of_any));
    assert!(!interner.is_subtype(list_of_any, list_of_string));
}

#[test]
fn test_everything_reference_is_an_object() {
    let interner = TypeInterner::new();
    let object = interner.declared(OBJECT_TYPE_NAME, &[]);
    let string = interner.declared("java.lang.String", &[]);

    assert!(interner.is_subtype(string, object));
    assert!(interner.is_subtype(interner.array(TypeId::INT), object));
    assert!(!interner.is_subtype(TypeId::INT, object));
}

#[test]
fn test_primitive_arrays_are_invariant() {
    let interner = TypeInterner::new();
    let ints = interner.array(TypeId::INT);
    let longs = interner.array(TypeId::LONG);
    let object = interner.declared(OBJECT_TYPE_NAME, &[]);
    let strings = interner.array(interner.declared("java.lang.String", &[]));
    let objects = interner.array(object);

    assert!(!interner.is_subtype(ints, longs));
    assert!(interner.is_subtype(strings, objects));
}

#[test]
fn test_display() {
    let interner = TypeInterner::new();
    let k = interner.type_param("java.util.Map", "K");
    let string = interner.declared("java.lang.String", &[]);
    let list = interner.declared("java.util.List", &[string]);
    let map = interner.declared("java.util.Map", &[k, list]);
    let bounded = interner.wildcard(WildcardBound::Extends(interner.boxed(PrimitiveKind::Int)));

    assert_eq!(
        interner.display(map),
        "java.util.Map<K, java.util.List<java.lang.String>>"
    );
    assert_eq!(interner.display(interner.array(TypeId::BYTE)), "byte[]");
    assert_eq!(interner.display(bounded), "? extends Integer");
    assert_eq!(interner.display(TypeId::VOID), "void");
}
