//! Adding and removing declaration modifiers.
//!
//! Edits keep annotations, comments and the original whitespace untouched;
//! a new modifier lands at its canonical grammar position among the
//! modifiers already present.

use super::edit::{Edit, Fix, FixBuilder, OverlapError};
use crate::syntax::{Declaration, Modifier};

/// Edit that adds `modifier` to the declaration at its canonical position.
///
/// Returns `None` when the modifier is already present, so callers can
/// invoke this unconditionally.
#[must_use]
pub fn add_modifier(decl: &Declaration, modifier: Modifier) -> Option<Edit> {
    if decl.has_modifier(modifier) {
        return None;
    }
    // Insert before the first existing modifier of equal or higher rank;
    // with none, before the first token after the annotation/modifier run.
    let position = decl
        .modifiers
        .iter()
        .find(|token| token.kind.rank() >= modifier.rank())
        .map_or(decl.type_start, |token| token.span.start);
    Some(Edit::insert(position, format!("{} ", modifier.as_keyword())))
}

/// Edit that removes `modifier` from the declaration, together with exactly
/// one adjacent whitespace run (trailing preferred) so no double or leading
/// space is left behind.
///
/// Returns `None` when the modifier is absent; removal of an
/// already-absent modifier is a silent no-op, not an error.
#[must_use]
pub fn remove_modifier(decl: &Declaration, source: &str, modifier: Modifier) -> Option<Edit> {
    let token = decl.modifier_token(modifier)?;
    let mut start = token.span.start;
    let mut end = token.span.end;

    let trailing = source[end..]
        .bytes()
        .take_while(u8::is_ascii_whitespace)
        .count();
    if trailing > 0 {
        end += trailing;
    } else {
        let leading = source[..start]
            .bytes()
            .rev()
            .take_while(u8::is_ascii_whitespace)
            .count();
        start -= leading;
    }
    Some(Edit::delete(start, end))
}

/// Fix that adds every modifier in `modifiers` not already present.
///
/// Modifiers are inserted in canonical rank order; if all are already
/// present the fix is empty.
///
/// # Errors
/// Returns [`OverlapError`] if the declaration's modifier spans are
/// inconsistent (a front-end bug).
pub fn add_modifiers(decl: &Declaration, modifiers: &[Modifier]) -> Result<Fix, OverlapError> {
    let mut wanted: Vec<Modifier> = modifiers.to_vec();
    wanted.sort_by_key(|m| m.rank());
    wanted.dedup();

    let mut builder = FixBuilder::new(describe("add", &wanted));
    for modifier in wanted {
        if let Some(edit) = add_modifier(decl, modifier) {
            builder = builder.push(edit);
        }
    }
    builder.build()
}

/// Fix that removes every modifier in `modifiers` that is present.
///
/// # Errors
/// Returns [`OverlapError`] if the declaration's modifier spans are
/// inconsistent (a front-end bug).
pub fn remove_modifiers(
    decl: &Declaration,
    source: &str,
    modifiers: &[Modifier],
) -> Result<Fix, OverlapError> {
    let mut builder = FixBuilder::new(describe("remove", modifiers));
    for &modifier in modifiers {
        if let Some(edit) = remove_modifier(decl, source, modifier) {
            builder = builder.push(edit);
        }
    }
    builder.build()
}

fn describe(verb: &str, modifiers: &[Modifier]) -> String {
    let keywords: Vec<&str> = modifiers.iter().map(|m| m.as_keyword()).collect();
    let noun = if keywords.len() > 1 { "modifiers" } else { "modifier" };
    format!("{verb} `{}` {noun}", keywords.join("`, `"))
}
