//! Anchored text edits and the non-overlapping fix they build into.
//!
//! Every offset refers to the *original* source text; edits never see
//! post-edit positions. A [`Fix`] is constructed through [`FixBuilder`],
//! which validates the non-overlap invariant exactly once, at build time.

use crate::syntax::Span;
use serde::Serialize;

/// A single edit operation: replace `[start_byte, end_byte)` of the original
/// text with `replacement`. Insertion is a zero-width range, deletion an
/// empty replacement. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edit {
    /// Start byte offset (inclusive)
    pub start_byte: usize,
    /// End byte offset (exclusive)
    pub end_byte: usize,
    /// Replacement content
    pub replacement: String,
}

impl Edit {
    /// Create a new replacement edit.
    #[must_use]
    pub fn new(start_byte: usize, end_byte: usize, replacement: impl Into<String>) -> Self {
        Self {
            start_byte,
            end_byte,
            replacement: replacement.into(),
        }
    }

    /// Create a deletion edit.
    #[must_use]
    pub fn delete(start_byte: usize, end_byte: usize) -> Self {
        Self::new(start_byte, end_byte, "")
    }

    /// Create an insertion edit at `position`.
    #[must_use]
    pub fn insert(position: usize, content: impl Into<String>) -> Self {
        Self::new(position, position, content)
    }

    /// Length of the range being replaced.
    #[must_use]
    pub const fn range_len(&self) -> usize {
        self.end_byte.saturating_sub(self.start_byte)
    }

    /// Whether this edit inserts without replacing anything.
    #[must_use]
    pub const fn is_insertion(&self) -> bool {
        self.start_byte == self.end_byte
    }

    /// Strict overlap test: ranges that merely touch at a boundary do not
    /// overlap, and zero-width ranges never overlap anything.
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.start_byte < other.end_byte && other.start_byte < self.end_byte
    }
}

/// Two edits within one fix overlap. This is a caller error: the builder
/// that produced them accumulated contradictory edits.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "overlapping edits within one fix: [{first_start}, {first_end}) and [{second_start}, {second_end})"
)]
pub struct OverlapError {
    /// Start of the earlier edit (by offset order).
    pub first_start: usize,
    /// End of the earlier edit.
    pub first_end: usize,
    /// Start of the later edit.
    pub second_start: usize,
    /// End of the later edit.
    pub second_end: usize,
}

/// A named set of non-overlapping edits representing one suggested change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fix {
    /// Human-readable one-line description of the change.
    pub short_description: String,
    edits: Vec<Edit>,
}

impl Fix {
    /// A fix with no edits: the suggestion that nothing needs to change.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            short_description: String::new(),
            edits: Vec::new(),
        }
    }

    /// The edits, in the order the builder accumulated them.
    #[must_use]
    pub fn edits(&self) -> &[Edit] {
        &self.edits
    }

    /// Whether the fix changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }
}

/// Owned accumulator for [`Fix`] construction, consumed exactly once by
/// [`FixBuilder::build`].
#[derive(Debug, Default)]
pub struct FixBuilder {
    description: String,
    edits: Vec<Edit>,
}

impl FixBuilder {
    /// Start a fix with the given description.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            edits: Vec::new(),
        }
    }

    /// Replace the text covered by `span`.
    #[must_use]
    pub fn replace(mut self, span: Span, text: impl Into<String>) -> Self {
        self.edits.push(Edit::new(span.start, span.end, text));
        self
    }

    /// Insert `text` immediately before `span`.
    #[must_use]
    pub fn insert_before(mut self, span: Span, text: impl Into<String>) -> Self {
        self.edits.push(Edit::insert(span.start, text));
        self
    }

    /// Insert `text` immediately after `span`.
    #[must_use]
    pub fn insert_after(mut self, span: Span, text: impl Into<String>) -> Self {
        self.edits.push(Edit::insert(span.end, text));
        self
    }

    /// Delete the text covered by `span`.
    #[must_use]
    pub fn delete(mut self, span: Span) -> Self {
        self.edits.push(Edit::delete(span.start, span.end));
        self
    }

    /// Append an already-constructed edit.
    #[must_use]
    pub fn push(mut self, edit: Edit) -> Self {
        self.edits.push(edit);
        self
    }

    /// Append auxiliary edits (e.g. import insertions from qualification).
    #[must_use]
    pub fn extend(mut self, edits: impl IntoIterator<Item = Edit>) -> Self {
        self.edits.extend(edits);
        self
    }

    /// Whether any edit has been accumulated so far.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Validate the non-overlap invariant and produce the fix.
    ///
    /// Insertion order is preserved; it decides the rendering order of
    /// coincident zero-width insertions.
    ///
    /// # Errors
    /// Returns [`OverlapError`] if any two accumulated edits strictly
    /// overlap, regardless of the order they were added in.
    pub fn build(self) -> Result<Fix, OverlapError> {
        check_overlaps(&self.edits)?;
        Ok(Fix {
            short_description: self.description,
            edits: self.edits,
        })
    }
}

/// Verify pairwise non-overlap over `edits` in O(n log n), reporting the
/// offending pair by offset order.
fn check_overlaps(edits: &[Edit]) -> Result<(), OverlapError> {
    let mut order: Vec<usize> = (0..edits.len()).collect();
    order.sort_by_key(|&i| (edits[i].start_byte, edits[i].end_byte));

    // Track the widest range seen so far; sorting by start alone would miss
    // a short range nested inside an earlier long one.
    let mut widest: Option<&Edit> = None;
    for &i in &order {
        let edit = &edits[i];
        if let Some(prev) = widest {
            if prev.overlaps(edit) {
                return Err(OverlapError {
                    first_start: prev.start_byte,
                    first_end: prev.end_byte,
                    second_start: edit.start_byte,
                    second_end: edit.end_byte,
                });
            }
        }
        if widest.is_none_or(|prev| edit.end_byte > prev.end_byte) {
            widest = Some(edit);
        }
    }
    Ok(())
}
