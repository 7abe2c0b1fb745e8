//! Source-level rendering of interned types.

use crate::intern::TypeInterner;
use crate::types::{TypeData, TypeId, WildcardBound};
use std::fmt::Write;

/// Renders a `TypeId` the way it would be written in source.
///
/// Declared types keep their fully qualified names so the result can be
/// spliced into generated code without extra imports. Boxed primitives use
/// their simple names.
pub struct TypeFormatter<'a> {
    interner: &'a TypeInterner,
}

impl<'a> TypeFormatter<'a> {
    pub fn new(interner: &'a TypeInterner) -> Self {
        TypeFormatter { interner }
    }

    pub fn format(&self, ty: TypeId) -> String {
        let mut out = String::new();
        self.write_type(&mut out, ty);
        out
    }

    fn write_type(&self, out: &mut String, ty: TypeId) {
        let Some(data) = self.interner.lookup(ty) else {
            let _ = write!(out, "<unknown #{}>", ty.0);
            return;
        };
        match data {
            TypeData::Void => out.push_str("void"),
            TypeData::Primitive(kind) => out.push_str(kind.keyword()),
            TypeData::Boxed(kind) => out.push_str(kind.box_name()),
            TypeData::TypeParam(param) => out.push_str(&param.name),
            TypeData::Array(element) => {
                self.write_type(out, element);
                out.push_str("[]");
            }
            TypeData::Declared(declared) => {
                out.push_str(&declared.name);
                if !declared.args.is_empty() {
                    out.push('<');
                    for (i, &arg) in declared.args.iter().enumerate() {
                        if i > 0 {
                            out.push_str(", ");
                        }
                        self.write_type(out, arg);
                    }
                    out.push('>');
                }
            }
            TypeData::Wildcard(bound) => {
                out.push('?');
                match bound {
                    WildcardBound::Unbounded => {}
                    WildcardBound::Extends(bound) => {
                        out.push_str(" extends ");
                        self.write_type(out, bound);
                    }
                    WildcardBound::Super(bound) => {
                        out.push_str(" super ");
                        self.write_type(out, bound);
                    }
                }
            }
        }
    }
}
