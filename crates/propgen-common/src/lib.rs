//! Common utilities for the propgen interface processor.
//!
//! This crate provides foundational helpers used across all propgen crates:
//! - Identifier case conversion (`capitalize`, `uncapitalize`)
//! - Qualified-name splitting (`split_qualified_name`)
//! - Centralized limits for hierarchy traversal

// Identifier and qualified-name helpers
pub mod strings;
pub use strings::{QualifiedName, capitalize, split_qualified_name, uncapitalize};

// Centralized limits and thresholds
pub mod limits;
