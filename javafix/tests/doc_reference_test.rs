//! End-to-end test for javadoc cross-reference qualification.

// Test-specific lint suppressions
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use javafix::doc::{DocComment, DocCrossReference, DocReferenceQualifier, DocTarget};
use javafix::fix::apply_fix;
use javafix::scope::InMemoryScope;
use javafix::syntax::Span;
use javafix::types::DeclaredType;

/// The full scenario: a comment linking an imported type, a member of
/// another type, and a bare self member, rewritten in one fix.
#[test]
fn test_qualify_javadoc() {
    let source = "\
import java.util.List;
import java.util.Map;
/** foo {@link List} bar {@link Map#containsKey(Object)} baz {@link #foo} */
class Test {
  void foo() {}
}
";
    let comment_start = source.find("/**").unwrap();
    let comment_end = source.find("*/\n").unwrap() + 2;
    let list_start = source.find("{@link List}").unwrap() + "{@link ".len();
    let map_start = source.find("{@link Map#").unwrap() + "{@link ".len();
    let hash_start = source.find("{@link #foo}").unwrap() + "{@link ".len();

    let comment = DocComment {
        span: Span::new(comment_start, comment_end),
        refs: vec![
            DocCrossReference {
                target_span: Span::new(list_start, list_start + 4),
                target: DocTarget::Type(DeclaredType::top_level("java.util", "List").into()),
            },
            DocCrossReference {
                target_span: Span::new(map_start, map_start + 3),
                target: DocTarget::Member {
                    owner: Some(DeclaredType::top_level("java.util", "Map").into()),
                },
            },
            DocCrossReference {
                target_span: Span::new(hash_start, hash_start),
                target: DocTarget::Member { owner: None },
            },
        ],
    };

    let mut scope = InMemoryScope::new();
    scope.add_import("java.util.List");
    scope.add_import("java.util.Map");
    let enclosing = DeclaredType::top_level("", "Test");

    let fix = DocReferenceQualifier::default()
        .qualify(source, &comment, &scope, Some(&enclosing))
        .unwrap();
    let rewritten = apply_fix(source, &fix).unwrap();

    assert_eq!(
        rewritten,
        "\
import java.util.List;
import java.util.Map;
/** foo {@link java.util.List} bar {@link java.util.Map#containsKey(Object)} baz {@link Test#foo} */
class Test {
  void foo() {}
}
"
    );
}

#[test]
fn test_comment_without_rewrites_yields_empty_fix() {
    let source = "/** nothing to do here */";
    let comment = DocComment {
        span: Span::new(0, source.len()),
        refs: Vec::new(),
    };
    let scope = InMemoryScope::new();
    let fix = DocReferenceQualifier::default()
        .qualify(source, &comment, &scope, None)
        .unwrap();
    assert!(fix.is_empty());
}
