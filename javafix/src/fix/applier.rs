//! Deterministic application of one or more fixes to the original text.
//!
//! All offsets are interpreted against the original text, so edits are laid
//! down in a single left-to-right pass with a running cursor; nothing is
//! ever re-scanned or shifted.

use super::edit::{Edit, Fix};

/// Error while applying fixes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApplyError {
    /// Two edits from different fixes overlap (or insert at the same
    /// point). The driver decides whether to drop one fix or abort; this
    /// crate never picks a winner.
    #[error(
        "conflicting edits across fixes: [{first_start}, {first_end}) and [{second_start}, {second_end})"
    )]
    Conflict {
        /// Start of the earlier edit (by offset order).
        first_start: usize,
        /// End of the earlier edit.
        first_end: usize,
        /// Start of the later edit.
        second_start: usize,
        /// End of the later edit.
        second_end: usize,
    },
    /// An edit extends past the end of the supplied text.
    #[error("edit out of bounds: end byte {end_byte} > source length {source_len}")]
    OutOfBounds {
        /// End byte of the offending edit.
        end_byte: usize,
        /// Length of the source text.
        source_len: usize,
    },
}

/// Apply every edit of every fix to `original` and return the result.
///
/// Edits are flattened, stably sorted by start then end offset, checked
/// pairwise for overlap, and rendered in one pass. Coincident zero-width
/// insertions are allowed within a single fix (the builder's insertion
/// order is the rendering order) but rejected across fixes, so the output
/// can never depend on the order fixes were supplied in.
///
/// # Errors
/// [`ApplyError::Conflict`] if edits from different fixes overlap;
/// [`ApplyError::OutOfBounds`] if an edit extends past the end of
/// `original`.
pub fn apply_fixes(original: &str, fixes: &[Fix]) -> Result<String, ApplyError> {
    let mut flat: Vec<(usize, &Edit)> = fixes
        .iter()
        .enumerate()
        .flat_map(|(fix_index, fix)| fix.edits().iter().map(move |edit| (fix_index, edit)))
        .collect();

    for &(_, edit) in &flat {
        if edit.end_byte > original.len() {
            return Err(ApplyError::OutOfBounds {
                end_byte: edit.end_byte,
                source_len: original.len(),
            });
        }
    }

    // Stable sort: edits with equal offsets keep their flattening order,
    // which within one fix is the builder's insertion order.
    flat.sort_by_key(|&(_, edit)| (edit.start_byte, edit.end_byte));

    check_conflicts(&flat)?;

    let mut output = String::with_capacity(original.len());
    let mut cursor = 0;
    for &(_, edit) in &flat {
        output.push_str(&original[cursor..edit.start_byte]);
        output.push_str(&edit.replacement);
        cursor = edit.end_byte;
    }
    output.push_str(&original[cursor..]);
    Ok(output)
}

/// Apply a single fix to `original`.
///
/// # Errors
/// Same conditions as [`apply_fixes`].
pub fn apply_fix(original: &str, fix: &Fix) -> Result<String, ApplyError> {
    apply_fixes(original, std::slice::from_ref(fix))
}

fn check_conflicts(sorted: &[(usize, &Edit)]) -> Result<(), ApplyError> {
    let mut widest: Option<(usize, &Edit)> = None;
    let mut previous: Option<(usize, &Edit)> = None;
    for &(fix_index, edit) in sorted {
        if let Some((_, prev)) = widest {
            if prev.overlaps(edit) {
                return Err(conflict(prev, edit));
            }
        }
        // Same-point insertions from different fixes do not strictly
        // overlap, but rendering them would depend on supply order.
        if let Some((prev_index, prev)) = previous {
            if prev_index != fix_index
                && edit.is_insertion()
                && prev.is_insertion()
                && prev.start_byte == edit.start_byte
            {
                return Err(conflict(prev, edit));
            }
        }
        if widest.is_none_or(|(_, prev)| edit.end_byte > prev.end_byte) {
            widest = Some((fix_index, edit));
        }
        previous = Some((fix_index, edit));
    }
    Ok(())
}

fn conflict(first: &Edit, second: &Edit) -> ApplyError {
    ApplyError::Conflict {
        first_start: first.start_byte,
        first_end: first.end_byte,
        second_start: second.start_byte,
        second_end: second.end_byte,
    }
}
