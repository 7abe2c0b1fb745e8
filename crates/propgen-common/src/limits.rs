//! Centralized limits for hierarchy traversal.
//!
//! The solver's `RecursionProfile` reads the walker limits from here.

/// Maximum depth of the superinterface chain below the requested interface.
///
/// Past this the walker fails with a fatal error.
pub const MAX_HIERARCHY_DEPTH: u32 = 64;

/// Maximum number of distinct interfaces walked during one traversal.
///
/// A shared ancestor is walked once however many paths reach it, so this
/// bounds the size of the hierarchy, not the number of paths through it.
pub const MAX_HIERARCHY_VISITS: u32 = 10_000;

/// Initial capacity for the per-interface property list.
pub const PROPERTY_LIST_CAPACITY: usize = 16;
