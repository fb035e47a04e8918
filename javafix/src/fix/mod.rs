//! Fix construction and application.
//!
//! The core pieces are [`Edit`] (a single anchored span replacement),
//! [`Fix`] (a validated non-overlapping set of edits built through
//! [`FixBuilder`]), the modifier editor, and [`apply_fixes`], which merges
//! fixes against the original text or rejects them on conflict.

mod applier;
mod edit;
mod modifier_editor;

pub use applier::{apply_fix, apply_fixes, ApplyError};
pub use edit::{Edit, Fix, FixBuilder, OverlapError};
pub use modifier_editor::{add_modifier, add_modifiers, remove_modifier, remove_modifiers};
