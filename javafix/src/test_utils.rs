//! Test fixture helpers.
//!
//! Real declarations come from an external front end; tests need a way to
//! turn a literal source line like `@Nullable public Object three;` into a
//! [`Declaration`] with accurate spans. The scanner here handles exactly
//! that shape (leading annotations, comments, modifier keywords, then the
//! type) and nothing more — it is fixture support, not a parser.

use crate::syntax::{Declaration, Modifier, ModifierToken, Span};
use smallvec::SmallVec;

/// Scan a single declaration's leading annotation/modifier run.
///
/// Recognizes, in any interleaving: `@Name` / `@Name(...)` annotations,
/// `/* ... */` block comments, `// ...` line comments, and modifier
/// keywords. The first token outside those categories marks `type_start`.
#[must_use]
pub fn scan_declaration(source: &str) -> Declaration {
    let bytes = source.as_bytes();
    let mut annotations = Vec::new();
    let mut modifiers: SmallVec<[ModifierToken; 4]> = SmallVec::new();
    let mut pos = 0;

    loop {
        while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }
        if pos >= bytes.len() {
            break;
        }
        if source[pos..].starts_with("/*") {
            pos = source[pos..]
                .find("*/")
                .map_or(bytes.len(), |end| pos + end + 2);
            continue;
        }
        if source[pos..].starts_with("//") {
            pos = source[pos..]
                .find('\n')
                .map_or(bytes.len(), |end| pos + end + 1);
            continue;
        }
        if bytes[pos] == b'@' {
            let start = pos;
            pos += 1;
            pos += word_len(&source[pos..]);
            if pos < bytes.len() && bytes[pos] == b'(' {
                pos = skip_parens(source, pos);
            }
            annotations.push(Span::new(start, pos));
            continue;
        }
        let len = word_len(&source[pos..]);
        if len == 0 {
            break;
        }
        match Modifier::from_keyword(&source[pos..pos + len]) {
            Some(kind) => {
                modifiers.push(ModifierToken {
                    kind,
                    span: Span::new(pos, pos + len),
                });
                pos += len;
            }
            None => break,
        }
    }

    Declaration {
        span: Span::new(0, source.len()),
        annotations,
        modifiers,
        type_start: pos,
    }
}

fn word_len(rest: &str) -> usize {
    rest.bytes()
        .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_' || *b == b'$')
        .count()
}

fn skip_parens(source: &str, open: usize) -> usize {
    let mut depth = 0;
    for (offset, byte) in source[open..].bytes().enumerate() {
        match byte {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return open + offset + 1;
                }
            }
            _ => {}
        }
    }
    source.len()
}
