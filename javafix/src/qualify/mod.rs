//! Minimal unambiguous textual references to types.
//!
//! Given a resolved type and the visibility at the use site, compute the
//! shortest name that still denotes exactly that type: the simple name when
//! it is (or can be made) uniquely visible, a dotted chain from the nearest
//! resolvable enclosing type otherwise, and the package-qualified name as a
//! last resort. Ambiguity is never an error here, only a reason to qualify
//! further: precision always wins over brevity.

use crate::fix::Edit;
use crate::scope::{NameBinding, ScopeContext};
use crate::types::{DeclaredType, TypeReference};

/// How much of the type to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualifyMode {
    /// The type symbol alone, e.g. `Entry`.
    SymbolOnly,
    /// The symbol plus its type arguments, e.g. `Entry<String,Integer>`.
    WithTypeArguments,
}

/// A qualification result: the rendered text plus any auxiliary edits
/// (import insertions) the caller must merge into its fix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Qualified {
    /// The textual reference to use at the use site.
    pub text: String,
    /// Import insertions required for `text` to resolve; empty when the
    /// name is already visible.
    pub auxiliary_edits: Vec<Edit>,
}

/// Compute the minimal unambiguous reference to `reference` in `scope`.
///
/// Deterministic for fixed inputs: resolution order is canonical and no
/// result depends on iteration order of the scope's tables.
#[must_use]
pub fn qualify_type(
    reference: &TypeReference,
    scope: &dyn ScopeContext,
    mode: QualifyMode,
) -> Qualified {
    let mut edits = Vec::new();
    let text = qualify_reference(reference, scope, mode, &mut edits);
    Qualified {
        text,
        auxiliary_edits: edits,
    }
}

fn qualify_reference(
    reference: &TypeReference,
    scope: &dyn ScopeContext,
    mode: QualifyMode,
    edits: &mut Vec<Edit>,
) -> String {
    match reference {
        // Type variables are always in scope under their own identifier.
        TypeReference::TypeVariable(name) => name.to_string(),
        TypeReference::Declared(ty) => {
            let base = qualify_declared(ty, scope, edits);
            match mode {
                QualifyMode::SymbolOnly => base,
                QualifyMode::WithTypeArguments if ty.type_args.is_empty() => base,
                QualifyMode::WithTypeArguments => {
                    let args: Vec<String> = ty
                        .type_args
                        .iter()
                        .map(|arg| qualify_reference(arg, scope, mode, edits))
                        .collect();
                    format!("{base}<{}>", args.join(","))
                }
            }
        }
    }
}

/// Walk from the referenced type outward to the first enclosing type whose
/// simple name works at the use site, then render the dotted chain from
/// there. Only top-level types are ever imported; nested types are reached
/// by qualification through their outer type.
fn qualify_declared(ty: &DeclaredType, scope: &dyn ScopeContext, edits: &mut Vec<Edit>) -> String {
    let mut chain: Vec<&str> = vec![&ty.simple_name];
    let mut current = ty;
    loop {
        match scope.resolve_simple_name(&current.simple_name) {
            NameBinding::Unique(fqn) if fqn == current.qualified_name() => break,
            binding => {
                if let Some(enclosing) = current.enclosing.as_deref() {
                    current = enclosing;
                    chain.push(&current.simple_name);
                    continue;
                }
                if matches!(binding, NameBinding::Unbound) {
                    push_import(edits, scope, current);
                    break;
                }
                // The top-level name is taken by a different entity; no
                // shorter form is unambiguous.
                return ty.qualified_name();
            }
        }
    }
    chain.reverse();
    chain.join(".")
}

fn push_import(edits: &mut Vec<Edit>, scope: &dyn ScopeContext, ty: &DeclaredType) {
    let qualified_name = ty.qualified_name();
    if scope.is_imported(&qualified_name) {
        return;
    }
    let edit = Edit::insert(
        scope.import_insertion_offset(),
        format!("import {qualified_name};\n"),
    );
    // One import statement per type, however often it is referenced.
    if !edits.contains(&edit) {
        edits.push(edit);
    }
}
