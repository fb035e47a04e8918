//! Java declaration modifiers and their canonical ordering.
//!
//! The rank table encodes the modifier order recommended by the JLS and
//! enforced by checkstyle's `ModifierOrder`: visibility keywords first, then
//! `abstract`/`default`/`static`/`final`, then the behavioral modifiers.

use serde::Serialize;

/// A Java declaration modifier keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    /// `public`
    Public,
    /// `protected`
    Protected,
    /// `private`
    Private,
    /// `abstract`
    Abstract,
    /// `default` (interface method)
    Default,
    /// `static`
    Static,
    /// `final`
    Final,
    /// `transient`
    Transient,
    /// `volatile`
    Volatile,
    /// `synchronized`
    Synchronized,
    /// `native`
    Native,
    /// `strictfp`
    Strictfp,
}

impl Modifier {
    /// Canonical position of this modifier within a modifier run.
    ///
    /// Lower ranks come first; a new modifier is inserted before the first
    /// existing modifier whose rank is greater than or equal to its own.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Public => 0,
            Self::Protected => 1,
            Self::Private => 2,
            Self::Abstract => 3,
            Self::Default => 4,
            Self::Static => 5,
            Self::Final => 6,
            Self::Transient => 7,
            Self::Volatile => 8,
            Self::Synchronized => 9,
            Self::Native => 10,
            Self::Strictfp => 11,
        }
    }

    /// The source keyword for this modifier.
    #[must_use]
    pub const fn as_keyword(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
            Self::Abstract => "abstract",
            Self::Default => "default",
            Self::Static => "static",
            Self::Final => "final",
            Self::Transient => "transient",
            Self::Volatile => "volatile",
            Self::Synchronized => "synchronized",
            Self::Native => "native",
            Self::Strictfp => "strictfp",
        }
    }

    /// Parse a modifier keyword, returning `None` for any other token.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Some(match keyword {
            "public" => Self::Public,
            "protected" => Self::Protected,
            "private" => Self::Private,
            "abstract" => Self::Abstract,
            "default" => Self::Default,
            "static" => Self::Static,
            "final" => Self::Final,
            "transient" => Self::Transient,
            "volatile" => Self::Volatile,
            "synchronized" => Self::Synchronized,
            "native" => Self::Native,
            "strictfp" => Self::Strictfp,
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_orders_visibility_first() {
        assert!(Modifier::Public.rank() < Modifier::Static.rank());
        assert!(Modifier::Static.rank() < Modifier::Final.rank());
        assert!(Modifier::Final.rank() < Modifier::Volatile.rank());
    }

    #[test]
    fn test_keyword_round_trip() {
        for modifier in [
            Modifier::Public,
            Modifier::Protected,
            Modifier::Private,
            Modifier::Abstract,
            Modifier::Default,
            Modifier::Static,
            Modifier::Final,
            Modifier::Transient,
            Modifier::Volatile,
            Modifier::Synchronized,
            Modifier::Native,
            Modifier::Strictfp,
        ] {
            assert_eq!(Modifier::from_keyword(modifier.as_keyword()), Some(modifier));
        }
    }

    #[test]
    fn test_from_keyword_rejects_non_modifiers() {
        assert_eq!(Modifier::from_keyword("class"), None);
        assert_eq!(Modifier::from_keyword("Object"), None);
        assert_eq!(Modifier::from_keyword(""), None);
    }
}
