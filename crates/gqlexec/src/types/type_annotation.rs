use crate::types::TypeArena;
use crate::types::TypeId;

/// Represents the declared type of a [`Field`](crate::types::Field),
/// [`Argument`](crate::types::Argument), or
/// [`InputField`](crate::types::InputField).
///
/// [`TypeAnnotation::List`] and [`TypeAnnotation::NonNull`] are anonymous
/// wrappers around an inner (`of_type`) annotation; only
/// [`TypeAnnotation::Named`] refers to an entry in the [`TypeArena`]. A
/// `NonNull` must not directly wrap another `NonNull`; schemas containing one
/// fail to build.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum TypeAnnotation {
    List(Box<TypeAnnotation>),
    Named(TypeId),
    NonNull(Box<TypeAnnotation>),
}
impl TypeAnnotation {
    pub fn named(type_id: TypeId) -> Self {
        Self::Named(type_id)
    }

    pub fn list(of_type: impl Into<TypeAnnotation>) -> Self {
        Self::List(Box::new(of_type.into()))
    }

    pub fn non_null(of_type: impl Into<TypeAnnotation>) -> Self {
        Self::NonNull(Box::new(of_type.into()))
    }

    /// Recursively unwrap this [`TypeAnnotation`] and return the id of the
    /// inner-most named type.
    pub fn innermost_type_id(&self) -> TypeId {
        match self {
            Self::List(inner) | Self::NonNull(inner) => inner.innermost_type_id(),
            Self::Named(type_id) => *type_id,
        }
    }

    /// Structural type equality.
    ///
    /// Two `NonNull` annotations are equal iff their inner types are equal, two
    /// `List` annotations are equal iff their inner types are equal, and
    /// otherwise two annotations are equal only if they name the identical
    /// type (arena identity, not name). Wrapping must match exactly on both
    /// sides; `String!` is not equal to `String`.
    pub fn is_equal_type(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::NonNull(self_inner), Self::NonNull(other_inner))
                => self_inner.is_equal_type(other_inner),
            (Self::List(self_inner), Self::List(other_inner))
                => self_inner.is_equal_type(other_inner),
            (Self::Named(self_id), Self::Named(other_id))
                => self_id == other_id,
            _ => false,
        }
    }

    /// Indicates if this [`TypeAnnotation`] is a `NonNull` wrapper.
    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }

    /// Indicates if this [`TypeAnnotation`] permits `null`.
    pub fn nullable(&self) -> bool {
        !self.is_non_null()
    }

    /// The wrapped annotation, if this is a `List` or `NonNull` wrapper.
    pub fn of_type(&self) -> Option<&TypeAnnotation> {
        match self {
            Self::List(inner) | Self::NonNull(inner) => Some(inner),
            Self::Named(_) => None,
        }
    }

    /// Render this annotation in GraphQL syntax (e.g. `[String!]!`), looking
    /// up named types in `arena`.
    pub fn to_graphql_string(&self, arena: &TypeArena) -> String {
        match self {
            Self::List(inner) => format!("[{}]", inner.to_graphql_string(arena)),
            Self::Named(type_id) => arena.type_name(*type_id)
                .map(|name| name.to_string())
                .unwrap_or_else(|| format!("<undefined {type_id}>")),
            Self::NonNull(inner) => format!("{}!", inner.to_graphql_string(arena)),
        }
    }
}
impl std::convert::From<TypeId> for TypeAnnotation {
    fn from(value: TypeId) -> Self {
        Self::Named(value)
    }
}
