//! JSON declaration loader.
//!
//! Reads the declaration document written by a front end and produces a
//! `DeclarationSet`, interning every type reference and registering the
//! declared `extends` edges with the interner so the oracle can answer
//! subtype questions.
//!
//! ```json
//! { "types": [ { "name": "com.acme.IPerson", "kind": "interface",
//!     "typeParameters": [ { "name": "T", "bounds": ["java.lang.Number"] } ],
//!     "extends": ["com.acme.Named"],
//!     "members": [ { "method": { "name": "getName", "returns": "java.lang.String" } },
//!                  { "constant": { "name": "MAX", "type": "int" } } ] } ] }
//! ```

use crate::declarations::{
    AnnotationDecl, AnnotationValue, ConstantDecl, DeclKind, DeclarationSet, MemberDecl,
    MethodDecl, ParameterDecl, TypeDecl, TypeParameterDecl,
};
use indexmap::IndexMap;
use propgen_solver::{TypeId, TypeInterner, TypeParser, TypeScope, TypeSyntaxError};
use rustc_hash::FxHashSet;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("malformed declaration document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{context}: {source}")]
    Syntax {
        context: String,
        #[source]
        source: TypeSyntaxError,
    },
    #[error("type `{0}` is declared more than once")]
    DuplicateType(String),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDocument {
    #[serde(default)]
    types: Vec<RawType>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawType {
    name: String,
    #[serde(default)]
    kind: RawKind,
    #[serde(default)]
    type_parameters: Vec<RawTypeParameter>,
    #[serde(default)]
    extends: Vec<String>,
    #[serde(default)]
    members: Vec<RawMember>,
}

#[derive(Deserialize, Default, Clone, Copy)]
#[serde(rename_all = "lowercase")]
enum RawKind {
    #[default]
    Interface,
    Class,
    Enum,
    Annotation,
}

impl From<RawKind> for DeclKind {
    fn from(kind: RawKind) -> Self {
        match kind {
            RawKind::Interface => DeclKind::Interface,
            RawKind::Class => DeclKind::Class,
            RawKind::Enum => DeclKind::Enum,
            RawKind::Annotation => DeclKind::Annotation,
        }
    }
}

#[derive(Deserialize)]
struct RawTypeParameter {
    name: String,
    #[serde(default)]
    bounds: Vec<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
enum RawMember {
    Method(RawMethod),
    Constant(RawConstant),
    NestedType(String),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMethod {
    name: String,
    #[serde(default = "void_type")]
    returns: String,
    #[serde(default)]
    type_parameters: Vec<String>,
    #[serde(default)]
    parameters: Vec<RawParameter>,
    #[serde(default)]
    annotations: Vec<RawAnnotation>,
}

fn void_type() -> String {
    "void".to_string()
}

/// `{"name": "x", "type": "int"}` or just `"int"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawParameter {
    Named {
        name: String,
        #[serde(rename = "type")]
        ty: String,
    },
    Bare(String),
}

#[derive(Deserialize)]
struct RawConstant {
    name: String,
    #[serde(rename = "type")]
    ty: String,
}

#[derive(Deserialize)]
struct RawAnnotation {
    #[serde(rename = "type")]
    ty: String,
    #[serde(default)]
    values: IndexMap<String, RawValue>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Bool(bool),
    Int(i64),
    Str(String),
    Enum {
        #[serde(rename = "enum")]
        constant: String,
    },
    Type {
        #[serde(rename = "type")]
        ty: String,
    },
    Array(Vec<RawValue>),
}

/// Parse a declaration document, interning its types into `interner`.
pub fn parse_declarations(json: &str, interner: &TypeInterner) -> Result<DeclarationSet, LoadError> {
    let document: RawDocument = serde_json::from_str(json)?;

    // Every declared name is interned before any reference is parsed.
    let mut declared = Vec::with_capacity(document.types.len());
    let mut seen = FxHashSet::default();
    for raw in &document.types {
        let ty = interner.declared(&raw.name, &[]);
        if !seen.insert(ty) {
            return Err(LoadError::DuplicateType(raw.name.clone()));
        }
        declared.push(ty);
    }

    let mut set = DeclarationSet::new();
    for (raw, ty) in document.types.into_iter().zip(declared) {
        let decl = load_type(raw, ty, interner)?;
        interner.add_supertypes(decl.ty, &decl.superinterfaces);
        debug!(
            name = %decl.qualified_name,
            supertypes = decl.superinterfaces.len(),
            members = decl.members.len(),
            "loaded declaration"
        );
        set.insert(decl);
    }
    Ok(set)
}

fn load_type(raw: RawType, ty: TypeId, interner: &TypeInterner) -> Result<TypeDecl, LoadError> {
    let scope = TypeScope::new().with_params(&raw.name, raw.type_parameters.iter().map(|p| p.name.clone()));
    let parser = TypeParser::new(interner, &scope);
    let owner = raw.name;

    let type_parameters = raw
        .type_parameters
        .into_iter()
        .map(|param| {
            let bounds = param
                .bounds
                .iter()
                .map(|bound| parse(&parser, bound, || format!("bound of `{}` in `{owner}`", param.name)))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(TypeParameterDecl {
                name: param.name,
                bounds,
            })
        })
        .collect::<Result<Vec<_>, LoadError>>()?;

    let superinterfaces = raw
        .extends
        .iter()
        .map(|sup| parse(&parser, sup, || format!("supertype of `{owner}`")))
        .collect::<Result<Vec<_>, _>>()?;

    let mut members = Vec::with_capacity(raw.members.len());
    for member in raw.members {
        members.push(match member {
            RawMember::Method(method) => MemberDecl::Method(load_method(method, &owner, &scope, interner)?),
            RawMember::Constant(constant) => {
                let ty = parse(&parser, &constant.ty, || {
                    format!("type of constant `{owner}.{}`", constant.name)
                })?;
                MemberDecl::Constant(ConstantDecl {
                    name: constant.name,
                    ty,
                })
            }
            RawMember::NestedType(name) => MemberDecl::NestedType(name),
        });
    }

    Ok(TypeDecl {
        kind: raw.kind.into(),
        qualified_name: owner,
        ty,
        type_parameters,
        superinterfaces,
        members,
    })
}

fn load_method(
    raw: RawMethod,
    owner: &str,
    type_scope: &TypeScope,
    interner: &TypeInterner,
) -> Result<MethodDecl, LoadError> {
    // Method type parameters are owned by `Interface.method`.
    let scope = type_scope
        .clone()
        .with_params(&format!("{owner}.{}", raw.name), raw.type_parameters.iter().cloned());
    let parser = TypeParser::new(interner, &scope);
    let site = || format!("`{owner}.{}`", raw.name);

    let return_type = parse(&parser, &raw.returns, || format!("return type of {}", site()))?;
    let mut method = MethodDecl::new(raw.name.clone(), return_type);
    method.type_parameters = raw.type_parameters.clone();

    for (index, param) in raw.parameters.iter().enumerate() {
        let (name, spelled) = match param {
            RawParameter::Named { name, ty } => (name.clone(), ty.as_str()),
            RawParameter::Bare(ty) => (format!("arg{index}"), ty.as_str()),
        };
        let ty = parse(&parser, spelled, || format!("parameter `{name}` of {}", site()))?;
        method.parameters.push(ParameterDecl { name, ty });
    }

    for annotation in &raw.annotations {
        // Annotation types are never type variables.
        let annotation_type = parse(&TypeParser::new(interner, &TypeScope::new()), &annotation.ty, || {
            format!("annotation on {}", site())
        })?;
        let mut decl = AnnotationDecl::new(annotation_type);
        for (member, value) in &annotation.values {
            let value = load_value(value, &parser, &|| format!("`{member}` of annotation on {}", site()))?;
            decl.values.insert(member.clone(), value);
        }
        method.annotations.push(decl);
    }
    Ok(method)
}

fn load_value(
    raw: &RawValue,
    parser: &TypeParser<'_>,
    context: &dyn Fn() -> String,
) -> Result<AnnotationValue, LoadError> {
    Ok(match raw {
        RawValue::Bool(b) => AnnotationValue::Bool(*b),
        RawValue::Int(i) => AnnotationValue::Int(*i),
        RawValue::Str(s) => AnnotationValue::Str(s.clone()),
        RawValue::Enum { constant } => AnnotationValue::EnumConstant(constant.clone()),
        RawValue::Type { ty } => AnnotationValue::Type(parse(parser, ty, context)?),
        RawValue::Array(items) => AnnotationValue::Array(
            items
                .iter()
                .map(|item| load_value(item, parser, context))
                .collect::<Result<_, _>>()?,
        ),
    })
}

fn parse(
    parser: &TypeParser<'_>,
    spelled: &str,
    context: impl FnOnce() -> String,
) -> Result<TypeId, LoadError> {
    parser.parse(spelled).map_err(|source| LoadError::Syntax {
        context: context(),
        source,
    })
}
