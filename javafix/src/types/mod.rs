//! Resolved type references, as handed over by the external front end.
//!
//! A reference is either a declared type (with its package, enclosing-type
//! chain and type arguments) or a bare type variable. This crate never
//! constructs these from source; it only renders them.

use compact_str::CompactString;
use serde::Serialize;

/// A resolved reference to a type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TypeReference {
    /// A named declared type (class, interface, enum, ...).
    Declared(DeclaredType),
    /// A type variable; rendered verbatim, never qualified.
    TypeVariable(CompactString),
}

impl TypeReference {
    /// A type-variable reference with the given identifier.
    #[must_use]
    pub fn type_variable(name: &str) -> Self {
        Self::TypeVariable(CompactString::from(name))
    }
}

impl From<DeclaredType> for TypeReference {
    fn from(ty: DeclaredType) -> Self {
        Self::Declared(ty)
    }
}

/// A declared type with its package, enclosing chain and type arguments.
///
/// `package` is meaningful on the outermost type of a nesting chain; nested
/// types inherit it through `enclosing`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeclaredType {
    /// Package name, e.g. `java.util`. Empty for the default package.
    pub package: CompactString,
    /// Simple name, e.g. `Entry`.
    pub simple_name: CompactString,
    /// Immediately enclosing type, if this type is nested.
    pub enclosing: Option<Box<DeclaredType>>,
    /// Type arguments of this instantiation, possibly empty.
    pub type_args: Vec<TypeReference>,
}

impl DeclaredType {
    /// A top-level type in `package`.
    #[must_use]
    pub fn top_level(package: &str, simple_name: &str) -> Self {
        Self {
            package: CompactString::from(package),
            simple_name: CompactString::from(simple_name),
            enclosing: None,
            type_args: Vec::new(),
        }
    }

    /// A member type of `self` named `simple_name`.
    #[must_use]
    pub fn nested(self, simple_name: &str) -> Self {
        Self {
            package: self.package.clone(),
            simple_name: CompactString::from(simple_name),
            enclosing: Some(Box::new(self)),
            type_args: Vec::new(),
        }
    }

    /// The same type instantiated with `args`.
    #[must_use]
    pub fn with_type_args(mut self, args: Vec<TypeReference>) -> Self {
        self.type_args = args;
        self
    }

    /// The fully package-qualified dotted name, e.g. `java.util.Map.Entry`.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        match &self.enclosing {
            Some(enclosing) => format!("{}.{}", enclosing.qualified_name(), self.simple_name),
            None if self.package.is_empty() => self.simple_name.to_string(),
            None => format!("{}.{}", self.package, self.simple_name),
        }
    }

    /// Whether this type is nested inside another type.
    #[must_use]
    pub const fn is_nested(&self) -> bool {
        self.enclosing.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualified_name_top_level() {
        let ty = DeclaredType::top_level("java.util", "List");
        assert_eq!(ty.qualified_name(), "java.util.List");
    }

    #[test]
    fn test_qualified_name_nested() {
        let ty = DeclaredType::top_level("java.util", "Map").nested("Entry");
        assert_eq!(ty.qualified_name(), "java.util.Map.Entry");
        assert!(ty.is_nested());
    }

    #[test]
    fn test_qualified_name_default_package() {
        let ty = DeclaredType::top_level("", "Test");
        assert_eq!(ty.qualified_name(), "Test");
    }

    #[test]
    fn test_type_args_do_not_change_name() {
        let ty = DeclaredType::top_level("java.util", "List")
            .with_type_args(vec![DeclaredType::top_level("java.lang", "String").into()]);
        assert_eq!(ty.qualified_name(), "java.util.List");
        assert_eq!(ty.type_args.len(), 1);
    }
}
