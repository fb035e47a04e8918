//! Core library for constructing suggested fixes to Java source code.
//!
//! Given syntax-tree positions, scopes and types that an external front end
//! has already resolved, this crate builds correct, minimal, composable
//! textual edits: modifier additions and removals at their canonical
//! grammar position, the shortest unambiguous reference to a type at a use
//! site, rewritten documentation cross-references, and deterministic
//! application of many such fixes to the original text.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

/// Module containing cross-reference qualification for documentation
/// comments.
pub mod doc;

/// Module containing the edit model: `Edit`, `Fix`, the fix builder, the
/// modifier editor and the fix applier.
pub mod fix;

/// Module computing minimal unambiguous type references.
pub mod qualify;

/// Module defining the use-site scope interface supplied by the front end.
pub mod scope;

/// Module defining the byte-anchored declaration model.
pub mod syntax;

/// Module containing test fixture helpers.
pub mod test_utils;

/// Module defining resolved type references.
pub mod types;
