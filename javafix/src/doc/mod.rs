//! Qualification of cross-references inside structured documentation.
//!
//! The front end parses javadoc into [`DocCrossReference`] nodes; this
//! module only rewrites the type text before any `#member` selector.
//! Selectors, parameter lists and link labels stay byte-for-byte intact,
//! and a reference whose target could not be resolved is left alone rather
//! than failing the whole comment.

use crate::fix::{Fix, FixBuilder, OverlapError};
use crate::qualify::{qualify_type, QualifyMode};
use crate::scope::ScopeContext;
use crate::syntax::Span;
use crate::types::{DeclaredType, TypeReference};

/// A structured documentation comment with its cross-references, in source
/// order. Supplied externally, already parsed.
#[derive(Debug, Clone)]
pub struct DocComment {
    /// Span of the whole comment.
    pub span: Span,
    /// Cross-reference nodes in the comment body, left to right.
    pub refs: Vec<DocCrossReference>,
}

/// One `{@link ...}`-style cross-reference.
#[derive(Debug, Clone)]
pub struct DocCrossReference {
    /// Span of the type text before any `#` selector; empty for a bare
    /// `#member` self reference.
    pub target_span: Span,
    /// What the reference points at.
    pub target: DocTarget,
}

/// The resolved target of a documentation cross-reference.
#[derive(Debug, Clone)]
pub enum DocTarget {
    /// A type reference, e.g. `{@link List}`.
    Type(TypeReference),
    /// A member reference, e.g. `{@link Map#containsKey(Object)}`. The
    /// owner is `None` for a `{@link #member}` self reference, which
    /// resolves against the enclosing declaration.
    Member {
        /// Type owning the member, when spelled explicitly.
        owner: Option<TypeReference>,
    },
    /// The front end could not resolve this reference; leave it untouched.
    Unresolved,
}

/// Rendering policy for rewritten references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocLinkStyle {
    /// Always the fully package-qualified name. Matches the original
    /// behavior for documentation, where links must resolve without the
    /// file's imports.
    #[default]
    FullyQualified,
    /// The minimal unambiguous form, symbol-only.
    Minimal,
}

/// Rewrites documentation cross-references to a uniform qualification.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocReferenceQualifier {
    style: DocLinkStyle,
}

impl DocReferenceQualifier {
    /// A qualifier using the given rendering style.
    #[must_use]
    pub const fn new(style: DocLinkStyle) -> Self {
        Self { style }
    }

    /// Rewrite every resolvable cross-reference in `comment`.
    ///
    /// References already in the target form contribute no edit; the fix is
    /// empty when nothing needed rewriting. `enclosing` is the declaration
    /// the comment is attached to, used for `#member` self references.
    ///
    /// # Errors
    /// Returns [`OverlapError`] if the comment's reference spans overlap
    /// (a front-end bug).
    pub fn qualify(
        &self,
        source: &str,
        comment: &DocComment,
        scope: &dyn ScopeContext,
        enclosing: Option<&DeclaredType>,
    ) -> Result<Fix, OverlapError> {
        let mut builder = FixBuilder::new("qualify documentation references");
        let mut auxiliary_seen: Vec<crate::fix::Edit> = Vec::new();
        for reference in &comment.refs {
            let Some((text, auxiliary)) = self.render_target(&reference.target, scope, enclosing)
            else {
                continue;
            };
            if text == reference.target_span.slice(source) {
                continue;
            }
            builder = builder.replace(reference.target_span, text);
            // Two references to the same type need only one import.
            for edit in auxiliary {
                if !auxiliary_seen.contains(&edit) {
                    builder = builder.push(edit.clone());
                    auxiliary_seen.push(edit);
                }
            }
        }
        builder.build()
    }

    /// The replacement text for one target, or `None` when the reference
    /// must be left as written.
    fn render_target(
        &self,
        target: &DocTarget,
        scope: &dyn ScopeContext,
        enclosing: Option<&DeclaredType>,
    ) -> Option<(String, Vec<crate::fix::Edit>)> {
        let reference = match target {
            DocTarget::Type(reference) | DocTarget::Member {
                owner: Some(reference),
            } => reference.clone(),
            DocTarget::Member { owner: None } => TypeReference::Declared(enclosing?.clone()),
            DocTarget::Unresolved => return None,
        };
        match self.style {
            DocLinkStyle::FullyQualified => {
                let text = match &reference {
                    TypeReference::Declared(ty) => ty.qualified_name(),
                    TypeReference::TypeVariable(name) => name.to_string(),
                };
                Some((text, Vec::new()))
            }
            DocLinkStyle::Minimal => {
                let qualified = qualify_type(&reference, scope, QualifyMode::SymbolOnly);
                Some((qualified.text, qualified.auxiliary_edits))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scope::InMemoryScope;

    fn comment_over(source: &str, refs: Vec<DocCrossReference>) -> DocComment {
        DocComment {
            span: Span::new(0, source.len()),
            refs,
        }
    }

    #[test]
    fn test_fully_qualifies_linked_type() {
        let source = "/** foo {@link List} bar */";
        let target_start = source.find("List").unwrap();
        let comment = comment_over(
            source,
            vec![DocCrossReference {
                target_span: Span::new(target_start, target_start + 4),
                target: DocTarget::Type(DeclaredType::top_level("java.util", "List").into()),
            }],
        );
        let mut scope = InMemoryScope::new();
        scope.add_import("java.util.List");

        let fix = DocReferenceQualifier::default()
            .qualify(source, &comment, &scope, None)
            .unwrap();
        let rewritten = crate::fix::apply_fix(source, &fix).unwrap();
        assert_eq!(rewritten, "/** foo {@link java.util.List} bar */");
    }

    #[test]
    fn test_self_member_reference_gains_enclosing_type() {
        let source = "/** baz {@link #foo} */";
        let hash = source.find('#').unwrap();
        let comment = comment_over(
            source,
            vec![DocCrossReference {
                target_span: Span::new(hash, hash),
                target: DocTarget::Member { owner: None },
            }],
        );
        let scope = InMemoryScope::new();
        let enclosing = DeclaredType::top_level("", "Test");

        let fix = DocReferenceQualifier::default()
            .qualify(source, &comment, &scope, Some(&enclosing))
            .unwrap();
        let rewritten = crate::fix::apply_fix(source, &fix).unwrap();
        assert_eq!(rewritten, "/** baz {@link Test#foo} */");
    }

    #[test]
    fn test_member_selector_left_untouched() {
        let source = "/** bar {@link Map#containsKey(Object)} */";
        let target_start = source.find("Map").unwrap();
        let comment = comment_over(
            source,
            vec![DocCrossReference {
                target_span: Span::new(target_start, target_start + 3),
                target: DocTarget::Member {
                    owner: Some(DeclaredType::top_level("java.util", "Map").into()),
                },
            }],
        );
        let scope = InMemoryScope::new();

        let fix = DocReferenceQualifier::default()
            .qualify(source, &comment, &scope, None)
            .unwrap();
        let rewritten = crate::fix::apply_fix(source, &fix).unwrap();
        assert_eq!(rewritten, "/** bar {@link java.util.Map#containsKey(Object)} */");
    }

    #[test]
    fn test_unresolved_reference_skipped() {
        let source = "/** {@link Mystery} and {@link List} */";
        let mystery = source.find("Mystery").unwrap();
        let list = source.find("List").unwrap();
        let comment = comment_over(
            source,
            vec![
                DocCrossReference {
                    target_span: Span::new(mystery, mystery + 7),
                    target: DocTarget::Unresolved,
                },
                DocCrossReference {
                    target_span: Span::new(list, list + 4),
                    target: DocTarget::Type(DeclaredType::top_level("java.util", "List").into()),
                },
            ],
        );
        let scope = InMemoryScope::new();

        let fix = DocReferenceQualifier::default()
            .qualify(source, &comment, &scope, None)
            .unwrap();
        let rewritten = crate::fix::apply_fix(source, &fix).unwrap();
        assert_eq!(rewritten, "/** {@link Mystery} and {@link java.util.List} */");
    }

    #[test]
    fn test_already_qualified_yields_empty_fix() {
        let source = "/** {@link java.util.List} */";
        let start = source.find("java.util.List").unwrap();
        let comment = comment_over(
            source,
            vec![DocCrossReference {
                target_span: Span::new(start, start + "java.util.List".len()),
                target: DocTarget::Type(DeclaredType::top_level("java.util", "List").into()),
            }],
        );
        let scope = InMemoryScope::new();

        let fix = DocReferenceQualifier::default()
            .qualify(source, &comment, &scope, None)
            .unwrap();
        assert!(fix.is_empty());
    }

    #[test]
    fn test_minimal_style_uses_scope() {
        let source = "/** {@link java.util.List} */";
        let start = source.find("java.util.List").unwrap();
        let comment = comment_over(
            source,
            vec![DocCrossReference {
                target_span: Span::new(start, start + "java.util.List".len()),
                target: DocTarget::Type(DeclaredType::top_level("java.util", "List").into()),
            }],
        );
        let mut scope = InMemoryScope::new();
        scope.add_import("java.util.List");

        let fix = DocReferenceQualifier::new(DocLinkStyle::Minimal)
            .qualify(source, &comment, &scope, None)
            .unwrap();
        let rewritten = crate::fix::apply_fix(source, &fix).unwrap();
        assert_eq!(rewritten, "/** {@link List} */");
    }

    #[test]
    fn test_self_member_without_enclosing_skipped() {
        let source = "/** {@link #foo} */";
        let hash = source.find('#').unwrap();
        let comment = comment_over(
            source,
            vec![DocCrossReference {
                target_span: Span::new(hash, hash),
                target: DocTarget::Member { owner: None },
            }],
        );
        let scope = InMemoryScope::new();
        let fix = DocReferenceQualifier::default()
            .qualify(source, &comment, &scope, None)
            .unwrap();
        assert!(fix.is_empty());
    }
}
