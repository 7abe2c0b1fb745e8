//! Hierarchy walker.
//!
//! Builds one `InterfaceDefinition` by visiting an interface and,
//! depth-first, every superinterface it extends:
//!
//! 1. superinterfaces are visited before the interface's own methods, in
//!    declared order, one level deeper than the current interface;
//! 2. a superinterface matching the capability predicate is skipped with
//!    its whole subtree, and one already walked through another path
//!    (a diamond) is not walked again;
//! 3. only the level-0 visit records package, simple name and type
//!    parameters;
//! 4. every method declared directly on the interface goes through the
//!    accessor extractor, then either the merge or the plain-method list.
//!
//! The walk is single-threaded and owns its definition; nothing is shared
//! between two walks except the read-only `Environment`.

use crate::accessor::extract_property;
use crate::environment::Environment;
use crate::error::IntrospectError;
use crate::merge::{MergeOutcome, merge_property};
use propgen_common::split_qualified_name;
use propgen_model::{Attribute, InterfaceDefinition, InterfaceHeader, MemberDecl, PlainMethod, TypeDecl};
use propgen_solver::{RecursionGuard, RecursionProfile, RecursionResult, TypeId};
use rustc_hash::FxHashSet;
use tracing::{debug, trace};

pub struct HierarchyWalker<'e, 'a> {
    env: &'e Environment<'a>,
    definition: InterfaceDefinition,
    guard: RecursionGuard<TypeId>,
    /// Interfaces whose subtree is complete. Revisiting one cannot change
    /// the definition, so each is walked at most once.
    walked: FxHashSet<TypeId>,
    profile: RecursionProfile,
    root: &'e str,
}

impl<'e, 'a> HierarchyWalker<'e, 'a> {
    /// Walk `root` and return the definition it describes.
    pub fn walk(env: &'e Environment<'a>, root: &'e TypeDecl) -> Result<InterfaceDefinition, IntrospectError> {
        Self::walk_with_profile(env, root, RecursionProfile::HierarchyWalk)
    }

    pub fn walk_with_profile(
        env: &'e Environment<'a>,
        root: &'e TypeDecl,
        profile: RecursionProfile,
    ) -> Result<InterfaceDefinition, IntrospectError> {
        if !root.is_interface() {
            return Err(IntrospectError::NotAnInterface {
                name: root.qualified_name.clone(),
            });
        }

        let mut walker = HierarchyWalker {
            env,
            definition: InterfaceDefinition::new(),
            guard: RecursionGuard::with_profile(profile),
            walked: FxHashSet::default(),
            profile,
            root: &root.qualified_name,
        };
        debug!(interface = %root.qualified_name, "walking interface hierarchy");

        // The root is on the path so an ancestor extending it is a cycle.
        if !walker.guard.enter(root.ty).is_entered() {
            return Err(walker.too_deep());
        }
        let result = walker.visit(root, 0);
        walker.guard.leave(root.ty);
        result?;

        debug!(
            interface = %root.qualified_name,
            properties = walker.definition.properties().len(),
            methods = walker.definition.methods().len(),
            "interface walked"
        );
        Ok(walker.definition)
    }

    fn too_deep(&self) -> IntrospectError {
        IntrospectError::HierarchyTooDeep {
            root: self.root.to_string(),
            limit: self.profile.max_depth(),
        }
    }

    fn visit(&mut self, decl: &'e TypeDecl, level: u32) -> Result<(), IntrospectError> {
        let env = self.env;

        for &supertype in &decl.superinterfaces {
            if env.capability.matches(env.oracle, supertype) {
                debug!(
                    interface = %decl.qualified_name,
                    supertype = %env.oracle.display(supertype),
                    "skipping capability superinterface"
                );
                self.definition
                    .add_capability_supertype(env.oracle.erasure(supertype));
                continue;
            }

            let Some(super_decl) = env.declarations.resolve(env.oracle, supertype) else {
                return Err(IntrospectError::UnresolvedType {
                    name: env.oracle.display(supertype),
                    referenced_from: decl.qualified_name.clone(),
                });
            };
            if !super_decl.is_interface() {
                debug!(supertype = %super_decl.qualified_name, "supertype is not an interface; skipped");
                continue;
            }
            if self.walked.contains(&super_decl.ty) {
                trace!(supertype = %super_decl.qualified_name, "already walked");
                continue;
            }

            match self.guard.enter(super_decl.ty) {
                RecursionResult::Entered => {
                    let result = self.visit(super_decl, level + 1);
                    self.guard.leave(super_decl.ty);
                    result?;
                }
                RecursionResult::Cycle => {
                    return Err(IntrospectError::CyclicInheritance {
                        name: super_decl.qualified_name.clone(),
                        via: decl.qualified_name.clone(),
                    });
                }
                RecursionResult::DepthExceeded => return Err(self.too_deep()),
                RecursionResult::IterationExceeded => {
                    return Err(IntrospectError::HierarchyTooLarge {
                        root: self.root.to_string(),
                        limit: self.profile.max_iterations(),
                    });
                }
            }
        }

        if level == 0 {
            let name = split_qualified_name(&decl.qualified_name)
                .ok_or(IntrospectError::MissingQualifiedName)?;
            self.definition.set_header(InterfaceHeader {
                package: name.package.to_string(),
                simple_name: name.simple_name.to_string(),
                type_parameters: decl.type_parameters.clone(),
            });
        }

        for (index, member) in decl.members.iter().enumerate() {
            let MemberDecl::Method(method) = member else {
                trace!(interface = %decl.qualified_name, index, "skipping non-method member");
                continue;
            };
            match extract_property(method, env)? {
                Some(property) => {
                    let name = property.name().to_string();
                    let outcome = merge_property(&mut self.definition, property, env.oracle);
                    trace!(
                        interface = %decl.qualified_name,
                        method = %method.name,
                        property = %name,
                        merged = outcome == MergeOutcome::Merged,
                        "accessor"
                    );
                }
                None => {
                    trace!(interface = %decl.qualified_name, method = %method.name, "plain method");
                    self.definition.add_method(PlainMethod {
                        declared_in: decl.ty,
                        member_index: index,
                        method: method.clone(),
                    });
                }
            }
        }
        self.walked.insert(decl.ty);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/walker_tests.rs"]
mod tests;
