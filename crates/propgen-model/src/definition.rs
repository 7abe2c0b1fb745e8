//! The aggregate produced by walking one interface.

use crate::attribute::{Attribute, Property};
use crate::declarations::{MethodDecl, TypeParameterDecl};
use propgen_common::limits::PROPERTY_LIST_CAPACITY;
use propgen_solver::{TypeId, TypeOracle};

/// Package, name and type parameters of the root interface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InterfaceHeader {
    /// Empty for the unnamed package.
    pub package: String,
    pub simple_name: String,
    pub type_parameters: Vec<TypeParameterDecl>,
}

/// A non-accessor method, remembered with where it was declared.
#[derive(Clone, Debug, PartialEq)]
pub struct PlainMethod {
    pub declared_in: TypeId,
    /// Position among the declaring interface's members.
    pub member_index: usize,
    pub method: MethodDecl,
}

/// Everything inferred about one interface and its superinterfaces.
///
/// Properties are unique by (name, type) and keep insertion order. The
/// header is written exactly once, by the level-0 visit.
#[derive(Clone, Debug, Default)]
pub struct InterfaceDefinition {
    header: Option<InterfaceHeader>,
    properties: Vec<Property>,
    methods: Vec<PlainMethod>,
    capability_supertypes: Vec<TypeId>,
}

impl InterfaceDefinition {
    pub fn new() -> Self {
        InterfaceDefinition {
            properties: Vec::with_capacity(PROPERTY_LIST_CAPACITY),
            ..Self::default()
        }
    }

    /// Record the root header. Returns `false` (and changes nothing) if a
    /// header was already recorded.
    pub fn set_header(&mut self, header: InterfaceHeader) -> bool {
        if self.header.is_some() {
            return false;
        }
        self.header = Some(header);
        true
    }

    pub fn header(&self) -> Option<&InterfaceHeader> {
        self.header.as_ref()
    }

    pub fn package(&self) -> &str {
        self.header.as_ref().map_or("", |h| h.package.as_str())
    }

    pub fn simple_name(&self) -> &str {
        self.header.as_ref().map_or("", |h| h.simple_name.as_str())
    }

    pub fn type_parameters(&self) -> &[TypeParameterDecl] {
        self.header
            .as_ref()
            .map_or(&[][..], |h| h.type_parameters.as_slice())
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn find_property(&self, oracle: &dyn TypeOracle, name: &str, ty: TypeId) -> Option<&Property> {
        self.properties
            .iter()
            .find(|p| p.name() == name && oracle.is_same_type(p.declared_type(), ty))
    }

    pub fn find_property_mut(
        &mut self,
        oracle: &dyn TypeOracle,
        name: &str,
        ty: TypeId,
    ) -> Option<&mut Property> {
        self.properties
            .iter_mut()
            .find(|p| p.name() == name && oracle.is_same_type(p.declared_type(), ty))
    }

    /// Append without checking for an existing entry; callers merge first.
    pub fn push_property(&mut self, property: Property) {
        self.properties.push(property);
    }

    pub fn methods(&self) -> &[PlainMethod] {
        &self.methods
    }

    /// Record a plain method. A method already recorded from the same
    /// declaration site (reached again through a diamond) is skipped.
    pub fn add_method(&mut self, method: PlainMethod) -> bool {
        let seen = self
            .methods
            .iter()
            .any(|m| m.declared_in == method.declared_in && m.member_index == method.member_index);
        if seen {
            return false;
        }
        self.methods.push(method);
        true
    }

    /// Capability superinterfaces whose subtrees were skipped.
    pub fn capability_supertypes(&self) -> &[TypeId] {
        &self.capability_supertypes
    }

    pub fn add_capability_supertype(&mut self, ty: TypeId) {
        if !self.capability_supertypes.contains(&ty) {
            self.capability_supertypes.push(ty);
        }
    }

    /// `true` if any skipped superinterface satisfied the capability predicate.
    pub fn is_capability_aware(&self) -> bool {
        !self.capability_supertypes.is_empty()
    }
}

#[cfg(test)]
#[path = "../tests/definition_tests.rs"]
mod tests;
