//! Inferred properties and the fields generated from them.

use bitflags::bitflags;
use propgen_solver::TypeId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Modifier applied to generated accessor methods unless configured otherwise.
pub const DEFAULT_METHOD_MODIFIER: &str = "public";

/// How a generated class stores a value handed to it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RetainType {
    /// Keep the reference as given.
    #[default]
    Hold,
    /// Store a copy made through the real type's copy constructor.
    New,
    /// Store the result of `clone()`.
    Clone,
}

impl RetainType {
    pub const fn as_str(self) -> &'static str {
        match self {
            RetainType::Hold => "HOLD",
            RetainType::New => "NEW",
            RetainType::Clone => "CLONE",
        }
    }
}

impl fmt::Display for RetainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A retention name that is not one of `HOLD`, `NEW` or `CLONE`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown retain type `{0}` (expected HOLD, NEW or CLONE)")]
pub struct UnknownRetainType(pub String);

impl FromStr for RetainType {
    type Err = UnknownRetainType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HOLD" => Ok(RetainType::Hold),
            "NEW" => Ok(RetainType::New),
            "CLONE" => Ok(RetainType::Clone),
            other => Err(UnknownRetainType(other.to_string())),
        }
    }
}

bitflags! {
    /// Accessor-derived facts about a property.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct PropertyFlags: u8 {
        /// A getter (`getX` or boolean `isX`) was seen.
        const READABLE = 1 << 0;
        /// A setter (`setX`) was seen.
        const WRITABLE = 1 << 1;
        /// The property annotation asked for the property to be ignored.
        const IGNORED = 1 << 2;
    }
}

/// Common view over anything the emitter turns into a field.
pub trait Attribute {
    fn name(&self) -> &str;

    fn declared_type(&self) -> TypeId;

    /// Explicit override of the instantiated type, if one was configured.
    fn real_type_override(&self) -> Option<TypeId>;

    fn method_modifier(&self) -> &str;

    /// The type to instantiate, falling back to the declared type.
    fn real_type(&self) -> TypeId {
        self.real_type_override().unwrap_or(self.declared_type())
    }
}

/// A property inferred from one or more accessor methods.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Property {
    name: String,
    ty: TypeId,
    real_type: Option<TypeId>,
    flags: PropertyFlags,
    retain: RetainType,
    method_modifier: String,
}

impl Property {
    pub fn new(name: impl Into<String>, ty: TypeId) -> Self {
        Property {
            name: name.into(),
            ty,
            real_type: None,
            flags: PropertyFlags::empty(),
            retain: RetainType::Hold,
            method_modifier: DEFAULT_METHOD_MODIFIER.to_string(),
        }
    }

    pub fn readable(name: impl Into<String>, ty: TypeId) -> Self {
        let mut property = Self::new(name, ty);
        property.set_readable(true);
        property
    }

    pub fn writable(name: impl Into<String>, ty: TypeId) -> Self {
        let mut property = Self::new(name, ty);
        property.set_writable(true);
        property
    }

    pub fn flags(&self) -> PropertyFlags {
        self.flags
    }

    pub fn is_readable(&self) -> bool {
        self.flags.contains(PropertyFlags::READABLE)
    }

    pub fn is_writable(&self) -> bool {
        self.flags.contains(PropertyFlags::WRITABLE)
    }

    pub fn is_ignored(&self) -> bool {
        self.flags.contains(PropertyFlags::IGNORED)
    }

    pub fn set_readable(&mut self, readable: bool) {
        self.flags.set(PropertyFlags::READABLE, readable);
    }

    pub fn set_writable(&mut self, writable: bool) {
        self.flags.set(PropertyFlags::WRITABLE, writable);
    }

    pub fn set_ignored(&mut self, ignored: bool) {
        self.flags.set(PropertyFlags::IGNORED, ignored);
    }

    /// OR in the readable/writable bits of another declaration of the same property.
    ///
    /// The ignored flag, retention and real type stay as first declared.
    pub fn absorb_access(&mut self, other: &Property) {
        self.flags |= other.flags & (PropertyFlags::READABLE | PropertyFlags::WRITABLE);
    }

    pub fn retain(&self) -> RetainType {
        self.retain
    }

    pub fn set_retain(&mut self, retain: RetainType) {
        self.retain = retain;
    }

    pub fn set_real_type(&mut self, real_type: Option<TypeId>) {
        self.real_type = real_type;
    }

    pub fn set_method_modifier(&mut self, modifier: impl Into<String>) {
        self.method_modifier = modifier.into();
    }
}

impl Attribute for Property {
    fn name(&self) -> &str {
        &self.name
    }

    fn declared_type(&self) -> TypeId {
        self.ty
    }

    fn real_type_override(&self) -> Option<TypeId> {
        self.real_type
    }

    fn method_modifier(&self) -> &str {
        &self.method_modifier
    }
}

/// A field of a generated class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    name: String,
    ty: TypeId,
    real_type: Option<TypeId>,
    method_modifier: String,
    /// The field backs an inferred property (as opposed to an explicit field).
    pub property_defined: bool,
    pub read_only: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: TypeId) -> Self {
        Field {
            name: name.into(),
            ty,
            real_type: None,
            method_modifier: DEFAULT_METHOD_MODIFIER.to_string(),
            property_defined: false,
            read_only: false,
        }
    }

    pub fn from_property(property: &Property) -> Self {
        Field {
            name: property.name.clone(),
            ty: property.ty,
            real_type: property.real_type,
            method_modifier: property.method_modifier.clone(),
            property_defined: true,
            read_only: property.is_readable() && !property.is_writable(),
        }
    }
}

impl Attribute for Field {
    fn name(&self) -> &str {
        &self.name
    }

    fn declared_type(&self) -> TypeId {
        self.ty
    }

    fn real_type_override(&self) -> Option<TypeId> {
        self.real_type
    }

    fn method_modifier(&self) -> &str {
        &self.method_modifier
    }
}

#[cfg(test)]
#[path = "../tests/attribute_tests.rs"]
mod tests;
