//! Declarations as handed over by the loader.
//!
//! Everything here is immutable input: the walker reads declarations but
//! never changes them. Types are referenced by interned `TypeId`.

use indexmap::IndexMap;
use propgen_solver::{TypeId, TypeOracle};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Kind of a top-level type declaration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DeclKind {
    Interface,
    Class,
    Enum,
    Annotation,
}

/// A declared type parameter with its bounds (`T extends Number & Comparable<T>`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeParameterDecl {
    pub name: String,
    pub bounds: Vec<TypeId>,
}

impl TypeParameterDecl {
    pub fn new(name: impl Into<String>) -> Self {
        TypeParameterDecl {
            name: name.into(),
            bounds: Vec::new(),
        }
    }
}

/// A value of one annotation member.
#[derive(Clone, Debug, PartialEq)]
pub enum AnnotationValue {
    Bool(bool),
    Int(i64),
    Str(String),
    /// Simple name of an enum constant (`NEW`, not `RetainType.NEW`).
    EnumConstant(String),
    Type(TypeId),
    Array(Vec<AnnotationValue>),
}

/// An annotation present on a method, with the members given explicitly.
///
/// Members left out fall back to the annotation's defaults, which are
/// applied by whoever interprets the annotation.
#[derive(Clone, Debug, PartialEq)]
pub struct AnnotationDecl {
    pub annotation_type: TypeId,
    pub values: IndexMap<String, AnnotationValue>,
}

impl AnnotationDecl {
    pub fn new(annotation_type: TypeId) -> Self {
        AnnotationDecl {
            annotation_type,
            values: IndexMap::new(),
        }
    }

    pub fn with_value(mut self, member: impl Into<String>, value: AnnotationValue) -> Self {
        self.values.insert(member.into(), value);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParameterDecl {
    pub name: String,
    pub ty: TypeId,
}

/// A method declared directly on a type.
#[derive(Clone, Debug, PartialEq)]
pub struct MethodDecl {
    pub name: String,
    pub type_parameters: Vec<String>,
    pub parameters: SmallVec<[ParameterDecl; 2]>,
    pub return_type: TypeId,
    pub annotations: Vec<AnnotationDecl>,
}

impl MethodDecl {
    pub fn new(name: impl Into<String>, return_type: TypeId) -> Self {
        MethodDecl {
            name: name.into(),
            type_parameters: Vec::new(),
            parameters: SmallVec::new(),
            return_type,
            annotations: Vec::new(),
        }
    }

    /// Builder: append a parameter named `argN`.
    pub fn with_param(mut self, ty: TypeId) -> Self {
        let name = format!("arg{}", self.parameters.len());
        self.parameters.push(ParameterDecl { name, ty });
        self
    }

    pub fn with_annotation(mut self, annotation: AnnotationDecl) -> Self {
        self.annotations.push(annotation);
        self
    }
}

/// A constant (static final field) declared on an interface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConstantDecl {
    pub name: String,
    pub ty: TypeId,
}

/// Members of a type declaration. Only `Method` ever takes part in
/// property inference; the other kinds are carried so the input model is
/// complete and are skipped by the walker.
#[derive(Clone, Debug, PartialEq)]
pub enum MemberDecl {
    Method(MethodDecl),
    Constant(ConstantDecl),
    /// A nested type, by qualified name. Nested types are declared separately.
    NestedType(String),
}

/// One top-level type declaration.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeDecl {
    pub kind: DeclKind,
    pub qualified_name: String,
    /// The raw (unparameterized) type this declaration introduces.
    pub ty: TypeId,
    pub type_parameters: Vec<TypeParameterDecl>,
    /// Directly extended interfaces, in declaration order.
    pub superinterfaces: Vec<TypeId>,
    pub members: Vec<MemberDecl>,
}

impl TypeDecl {
    pub fn interface(qualified_name: impl Into<String>, ty: TypeId) -> Self {
        TypeDecl {
            kind: DeclKind::Interface,
            qualified_name: qualified_name.into(),
            ty,
            type_parameters: Vec::new(),
            superinterfaces: Vec::new(),
            members: Vec::new(),
        }
    }

    pub fn is_interface(&self) -> bool {
        self.kind == DeclKind::Interface
    }

    pub fn methods(&self) -> impl Iterator<Item = &MethodDecl> {
        self.members.iter().filter_map(|member| match member {
            MemberDecl::Method(method) => Some(method),
            _ => None,
        })
    }
}

/// All loaded declarations, keyed by the raw type each one introduces.
#[derive(Debug, Default)]
pub struct DeclarationSet {
    decls: IndexMap<TypeId, TypeDecl>,
    by_name: FxHashMap<String, TypeId>,
}

impl DeclarationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a declaration, returning the one it replaced (if any).
    pub fn insert(&mut self, decl: TypeDecl) -> Option<TypeDecl> {
        self.by_name.insert(decl.qualified_name.clone(), decl.ty);
        self.decls.insert(decl.ty, decl)
    }

    pub fn get(&self, ty: TypeId) -> Option<&TypeDecl> {
        self.decls.get(&ty)
    }

    /// Declaration behind a possibly parameterized reference (`List<String>` -> `List`).
    pub fn resolve(&self, oracle: &dyn TypeOracle, ty: TypeId) -> Option<&TypeDecl> {
        self.decls
            .get(&ty)
            .or_else(|| self.decls.get(&oracle.erasure(ty)))
    }

    pub fn by_name(&self, qualified_name: &str) -> Option<&TypeDecl> {
        self.by_name
            .get(qualified_name)
            .and_then(|ty| self.decls.get(ty))
    }

    /// Declarations in load order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeDecl> {
        self.decls.values()
    }

    pub fn interfaces(&self) -> impl Iterator<Item = &TypeDecl> {
        self.iter().filter(|decl| decl.is_interface())
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}
