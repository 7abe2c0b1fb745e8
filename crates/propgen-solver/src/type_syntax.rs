//! Parser for textual type references.
//!
//! Declaration files spell types the way source code does:
//!
//! ```text
//! int                                   primitive
//! java.lang.Boolean / Boolean           boxed primitive
//! java.util.Map<K, java.util.List<?>>   declared type with arguments
//! byte[][]                              arrays
//! ? extends Number / ? super T          wildcards (type arguments only)
//! T                                     type parameter in scope
//! ```
//!
//! A single-segment name is a type parameter if (and only if) it appears in
//! the scope handed to the parser; otherwise it is a declared type. The
//! innermost declaration of a name wins, so a method's `<T>` shadows the
//! interface's.

use crate::intern::TypeInterner;
use crate::types::{PrimitiveKind, TypeId, WildcardBound};
use smallvec::SmallVec;

/// Malformed type reference.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid type reference `{input}` at offset {offset}: {message}")]
pub struct TypeSyntaxError {
    pub input: String,
    pub offset: usize,
    pub message: String,
}

/// Type parameters visible at a reference site, each tagged with the
/// declaration that introduces it.
#[derive(Clone, Debug, Default)]
pub struct TypeScope {
    /// (owner, name), outermost first.
    params: Vec<(String, String)>,
}

impl TypeScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extend the scope with the parameters `owner` introduces.
    pub fn with_params<I, S>(mut self, owner: &str, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.params.push((owner.to_string(), name.into()));
        }
        self
    }

    /// The declaration introducing `name`, innermost first.
    pub fn owner_of(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .rev()
            .find(|(_, param)| param == name)
            .map(|(owner, _)| owner.as_str())
    }
}

/// Parses type references into interned `TypeId`s.
pub struct TypeParser<'a> {
    interner: &'a TypeInterner,
    scope: &'a TypeScope,
}

impl<'a> TypeParser<'a> {
    /// `scope` lists the type parameters visible at the reference site.
    pub fn new(interner: &'a TypeInterner, scope: &'a TypeScope) -> Self {
        TypeParser { interner, scope }
    }

    pub fn parse(&self, input: &str) -> Result<TypeId, TypeSyntaxError> {
        let mut cursor = Cursor { input, pos: 0 };
        let ty = self.parse_type(&mut cursor, false)?;
        cursor.skip_whitespace();
        if cursor.pos != input.len() {
            return Err(cursor.error("unexpected trailing input"));
        }
        Ok(ty)
    }

    fn parse_type(&self, cursor: &mut Cursor<'_>, in_type_args: bool) -> Result<TypeId, TypeSyntaxError> {
        cursor.skip_whitespace();
        if cursor.eat('?') {
            if !in_type_args {
                return Err(cursor.error("wildcard outside of type arguments"));
            }
            return self.parse_wildcard(cursor);
        }

        let start = cursor.pos;
        let name = cursor.qualified_name()?;
        let param_owner = if name.contains('.') {
            None
        } else {
            self.scope.owner_of(name)
        };
        let mut ty = if let Some(kind) = PrimitiveKind::from_keyword(name) {
            self.interner.primitive(kind)
        } else if name == "void" {
            self.interner.void()
        } else if let Some(owner) = param_owner {
            self.interner.type_param(owner, name)
        } else {
            let args = self.parse_type_args(cursor)?;
            self.interner.declared(name, &args)
        };

        loop {
            cursor.skip_whitespace();
            if !cursor.eat('[') {
                break;
            }
            cursor.skip_whitespace();
            if !cursor.eat(']') {
                return Err(cursor.error("expected `]`"));
            }
            if ty == TypeId::VOID {
                return Err(TypeSyntaxError {
                    input: cursor.input.to_string(),
                    offset: start,
                    message: "array of void".to_string(),
                });
            }
            ty = self.interner.array(ty);
        }
        Ok(ty)
    }

    fn parse_wildcard(&self, cursor: &mut Cursor<'_>) -> Result<TypeId, TypeSyntaxError> {
        cursor.skip_whitespace();
        let bound = if cursor.eat_keyword("extends") {
            WildcardBound::Extends(self.parse_type(cursor, false)?)
        } else if cursor.eat_keyword("super") {
            WildcardBound::Super(self.parse_type(cursor, false)?)
        } else {
            WildcardBound::Unbounded
        };
        Ok(self.interner.wildcard(bound))
    }

    fn parse_type_args(&self, cursor: &mut Cursor<'_>) -> Result<SmallVec<[TypeId; 4]>, TypeSyntaxError> {
        let mut args = SmallVec::new();
        cursor.skip_whitespace();
        if !cursor.eat('<') {
            return Ok(args);
        }
        loop {
            args.push(self.parse_type(cursor, true)?);
            cursor.skip_whitespace();
            if cursor.eat('>') {
                return Ok(args);
            }
            if !cursor.eat(',') {
                return Err(cursor.error("expected `,` or `>`"));
            }
        }
    }
}

struct Cursor<'s> {
    input: &'s str,
    pos: usize,
}

impl<'s> Cursor<'s> {
    fn rest(&self) -> &'s str {
        &self.input[self.pos..]
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.rest().starts_with(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn eat_keyword(&mut self, keyword: &str) -> bool {
        let Some(after) = self.rest().strip_prefix(keyword) else {
            return false;
        };
        if after.chars().next().is_some_and(is_ident_char) {
            return false;
        }
        self.pos += keyword.len();
        true
    }

    fn identifier(&mut self) -> Result<&'s str, TypeSyntaxError> {
        let rest = self.rest();
        let mut chars = rest.char_indices();
        match chars.next() {
            Some((_, c)) if c.is_alphabetic() || c == '_' || c == '$' => {}
            _ => return Err(self.error("expected identifier")),
        }
        let end = chars
            .find(|&(_, c)| !is_ident_char(c))
            .map_or(rest.len(), |(i, _)| i);
        self.pos += end;
        Ok(&rest[..end])
    }

    /// `a.b.C` as one slice of the input.
    fn qualified_name(&mut self) -> Result<&'s str, TypeSyntaxError> {
        let start = self.pos;
        self.identifier()?;
        while self.rest().starts_with('.') {
            self.pos += 1;
            self.identifier()?;
        }
        Ok(&self.input[start..self.pos])
    }

    fn error(&self, message: &str) -> TypeSyntaxError {
        TypeSyntaxError {
            input: self.input.to_string(),
            offset: self.pos,
            message: message.to_string(),
        }
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

#[cfg(test)]
#[path = "../tests/type_syntax_tests.rs"]
mod tests;
