//! Wrapped type references (`Foo`, `[Foo]`, `Foo!`, `[Foo!]!`).
//!
//! Fields and arguments point at other types through a `TypeRef`. Pruning only
//! ever cares about the innermost named type; the wrappers are preserved so a
//! rebuilt graph renders exactly like the input.

use std::fmt;
use std::str::FromStr;

/// A possibly wrapped reference to a named type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    Named(String),
    List(Box<TypeRef>),
    NonNull(Box<TypeRef>),
}

/// Error while parsing the `[Foo!]!` notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeRefError {
    #[error("type reference is empty")]
    Empty,

    #[error("unbalanced brackets in type reference `{0}`")]
    UnbalancedBrackets(String),

    #[error("invalid type name `{0}`")]
    InvalidName(String),

    #[error("non-null applied twice in `{0}`")]
    DoubleNonNull(String),
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn list(inner: TypeRef) -> Self {
        Self::List(Box::new(inner))
    }

    pub fn non_null(inner: TypeRef) -> Self {
        Self::NonNull(Box::new(inner))
    }

    /// Innermost named type, with all list and non-null wrappers stripped.
    pub fn named_type(&self) -> &str {
        let mut current = self;
        loop {
            match current {
                Self::Named(name) => return name,
                Self::List(inner) | Self::NonNull(inner) => current = inner,
            }
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}

impl FromStr for TypeRef {
    type Err = TypeRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s.trim(), s)
    }
}

fn parse(s: &str, full: &str) -> Result<TypeRef, TypeRefError> {
    if s.is_empty() {
        return Err(TypeRefError::Empty);
    }

    if let Some(inner) = s.strip_suffix('!') {
        let inner = parse(inner.trim_end(), full)?;
        if inner.is_non_null() {
            return Err(TypeRefError::DoubleNonNull(full.to_string()));
        }
        return Ok(TypeRef::non_null(inner));
    }

    match (s.strip_prefix('['), s.ends_with(']')) {
        (Some(rest), true) => {
            let inner = &rest[..rest.len() - 1];
            Ok(TypeRef::list(parse(inner.trim(), full)?))
        }
        (Some(_), false) | (None, true) => {
            Err(TypeRefError::UnbalancedBrackets(full.to_string()))
        }
        (None, false) => {
            if is_valid_name(s) {
                Ok(TypeRef::named(s))
            } else {
                Err(TypeRefError::InvalidName(s.to_string()))
            }
        }
    }
}

fn is_valid_name(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl serde::Serialize for TypeRef {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for TypeRef {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
