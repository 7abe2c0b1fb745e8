use super::*;
use crate::types::{PrimitiveKind, TypeData, TypeId};

#[test]
fn test_intrinsics_are_preregistered() {
    let interner = TypeInterner::new();

    assert_eq!(interner.lookup(TypeId::VOID), Some(TypeData::Void));
    assert_eq!(
        interner.lookup(TypeId::BOOLEAN),
        Some(TypeData::Primitive(PrimitiveKind::Boolean))
    );
    assert_eq!(interner.primitive(PrimitiveKind::Int), TypeId::INT);
    assert_eq!(interner.len(), TypeId::FIRST_USER as usize);
}

#[test]
fn test_interner_deduplication() {
    let interner = TypeInterner::new();

    let string = interner.declared("java.lang.String", &[]);
    let list1 = interner.declared("java.util.List", &[string]);
    let list2 = interner.declared("java.util.List", &[string]);
    let raw = interner.declared("java.util.List", &[]);

    assert_eq!(list1, list2);
    assert_ne!(list1, raw);
}

#[test]
fn test_box_names_fold_into_boxed() {
    let interner = TypeInterner::new();

    let simple = interner.declared("Boolean", &[]);
    let qualified = interner.declared("java.lang.Boolean", &[]);

    assert_eq!(simple, qualified);
    assert_eq!(simple, interner.boxed(PrimitiveKind::Boolean));
}

#[test]
fn test_erasure_drops_type_arguments() {
    let interner = TypeInterner::new();

    let string = interner.declared("java.lang.String", &[]);
    let list = interner.declared("java.util.List", &[string]);
    let raw = interner.declared("java.util.List", &[]);

    assert_eq!(interner.erasure(list), raw);
    assert_eq!(interner.erasure(interner.array(list)), interner.array(raw));
    assert_eq!(interner.erasure(TypeId::INT), TypeId::INT);
}

#[test]
fn test_lookup_unknown_id() {
    let interner = TypeInterner::new();
    assert!(interner.lookup(TypeId(9999)).is_none());
}
