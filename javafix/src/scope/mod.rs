//! Use-site scope lookup, queried but never built by this crate.
//!
//! The external front end owns symbol resolution; this crate only asks two
//! questions of it: what a simple name resolves to at the use site, and
//! whether a type is already importable without a new import statement.
//! [`InMemoryScope`] is a minimal table-backed implementation, used by tests
//! and by callers that precompute their visibility tables.

use compact_str::CompactString;
use rustc_hash::FxHashMap;

/// What a simple name resolves to at the use site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameBinding {
    /// The name is not bound by any visible declaration or import.
    Unbound,
    /// The name resolves to exactly one entity, identified by its fully
    /// qualified name.
    Unique(CompactString),
    /// Two or more distinct visible entities bind this name; it cannot be
    /// used unqualified.
    Ambiguous,
}

/// The visibility chain at a use site.
///
/// Implemented by the external front end against its symbol tables. All
/// operations are read-only and must be deterministic for fixed inputs.
pub trait ScopeContext {
    /// Resolve `simple_name` against everything visible at the use site:
    /// declarations in the same compilation unit, members of enclosing
    /// types, shadowing declarations, explicit imports and on-demand
    /// imports.
    fn resolve_simple_name(&self, simple_name: &str) -> NameBinding;

    /// Whether `qualified_name` is already importable without adding an
    /// import statement (same package, explicitly imported, or visible as an
    /// enclosing-type member).
    fn is_imported(&self, qualified_name: &str) -> bool;

    /// Byte offset at which a new import declaration would be inserted.
    fn import_insertion_offset(&self) -> usize;
}

/// A scope backed by in-memory tables with fixed lookup precedence.
///
/// Candidates are gathered in canonical order (declared, explicitly
/// imported, on-demand imported) and deduplicated by qualified name, so
/// resolution never depends on map iteration order: one distinct candidate
/// is [`NameBinding::Unique`], several are [`NameBinding::Ambiguous`].
#[derive(Debug, Default)]
pub struct InMemoryScope {
    declared: FxHashMap<CompactString, CompactString>,
    explicit_imports: FxHashMap<CompactString, CompactString>,
    on_demand: FxHashMap<CompactString, Vec<CompactString>>,
    import_offset: usize,
}

impl InMemoryScope {
    /// An empty scope: nothing visible, imports inserted at offset 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the byte offset for new import declarations.
    pub fn set_import_insertion_offset(&mut self, offset: usize) {
        self.import_offset = offset;
    }

    /// Record a declaration visible at the use site (same compilation unit,
    /// enclosing-type member, or a shadowing local such as a type variable).
    pub fn declare(&mut self, simple_name: &str, qualified_name: &str) {
        self.declared
            .insert(CompactString::from(simple_name), CompactString::from(qualified_name));
    }

    /// Record an explicit single-type import of `qualified_name`; its simple
    /// name is the last dotted segment.
    pub fn add_import(&mut self, qualified_name: &str) {
        let simple = qualified_name.rsplit('.').next().unwrap_or(qualified_name);
        self.explicit_imports
            .insert(CompactString::from(simple), CompactString::from(qualified_name));
    }

    /// Record a type made visible by an on-demand (wildcard) import.
    pub fn add_on_demand(&mut self, qualified_name: &str) {
        let simple = qualified_name.rsplit('.').next().unwrap_or(qualified_name);
        self.on_demand
            .entry(CompactString::from(simple))
            .or_default()
            .push(CompactString::from(qualified_name));
    }
}

impl ScopeContext for InMemoryScope {
    fn resolve_simple_name(&self, simple_name: &str) -> NameBinding {
        let mut candidates: Vec<&CompactString> = Vec::new();
        if let Some(fqn) = self.declared.get(simple_name) {
            candidates.push(fqn);
        }
        if let Some(fqn) = self.explicit_imports.get(simple_name) {
            candidates.push(fqn);
        }
        if let Some(fqns) = self.on_demand.get(simple_name) {
            candidates.extend(fqns);
        }
        candidates.dedup();
        match candidates.as_slice() {
            [] => NameBinding::Unbound,
            [only] => NameBinding::Unique((*only).clone()),
            _ => NameBinding::Ambiguous,
        }
    }

    fn is_imported(&self, qualified_name: &str) -> bool {
        let simple = qualified_name.rsplit('.').next().unwrap_or(qualified_name);
        self.declared.get(simple).is_some_and(|fqn| fqn == qualified_name)
            || self.explicit_imports.get(simple).is_some_and(|fqn| fqn == qualified_name)
            || self.on_demand
                .get(simple)
                .is_some_and(|fqns| fqns.iter().any(|fqn| fqn == qualified_name))
    }

    fn import_insertion_offset(&self) -> usize {
        self.import_offset
    }
}
