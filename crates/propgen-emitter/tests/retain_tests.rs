use super::*;
use propgen_model::Property;
use propgen_solver::TypeInterner;

#[test]
fn test_capture_expressions() {
    assert_eq!(capture_expression(RetainType::Hold, "x", "Bar"), "x");
    assert_eq!(
        capture_expression(RetainType::New, "x", "Bar"),
        "x == null ? null : new Bar(x)"
    );
    assert_eq!(capture_expression(RetainType::Clone, "x", "Bar"), "x.clone()");
}

#[test]
fn test_new_uses_real_type_override() {
    let interner = TypeInterner::new();
    let string = interner.declared("java.lang.String", &[]);
    let list = interner.declared("java.util.List", &[string]);
    let array_list = interner.declared("java.util.ArrayList", &[]);

    let mut property = Property::readable("items", list);
    assert_eq!(
        RetainType::New.code_for("items", &property, &interner),
        "items == null ? null : new java.util.List<java.lang.String>(items)"
    );

    property.set_real_type(Some(array_list));
    assert_eq!(
        RetainType::New.code_for("items", &property, &interner),
        "items == null ? null : new java.util.ArrayList(items)"
    );
    assert_eq!(RetainType::Hold.code_for("items", &property, &interner), "items");
}
