//! Byte-anchored view of a declaration as supplied by the external front end.
//!
//! Nothing here parses Java. The front end hands this crate declarations that
//! are already resolved down to byte spans over the original source; the
//! editors only read those spans and emit edits against them.

mod modifiers;

pub use modifiers::Modifier;

use serde::Serialize;
use smallvec::SmallVec;

/// A half-open byte range `[start, end)` into the original source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span. `start` must not exceed `end`.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the span in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the span is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// The slice of `source` this span covers.
    #[must_use]
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}

/// A modifier keyword present on a declaration, with its source span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModifierToken {
    /// Which modifier this token spells.
    pub kind: Modifier,
    /// Span of the keyword itself (no surrounding whitespace).
    pub span: Span,
}

/// A modifier-bearing declaration (field, method, class, ...).
///
/// Leading annotations and any interstitial comments belong to the
/// declaration but are never modifiers; modifier edits must leave them
/// byte-for-byte untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    /// Span of the whole declaration.
    pub span: Span,
    /// Leading annotation spans, in source order.
    pub annotations: Vec<Span>,
    /// Modifier tokens present, in source order.
    pub modifiers: SmallVec<[ModifierToken; 4]>,
    /// Offset of the first token that is neither an annotation, a comment,
    /// nor a modifier (normally the declared type). A modifier appended at
    /// the end of the run is inserted here.
    pub type_start: usize,
}

impl Declaration {
    /// Whether the declaration already carries `modifier`.
    #[must_use]
    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.iter().any(|t| t.kind == modifier)
    }

    /// The token for `modifier`, if present.
    #[must_use]
    pub fn modifier_token(&self, modifier: Modifier) -> Option<&ModifierToken> {
        self.modifiers.iter().find(|t| t.kind == modifier)
    }
}
