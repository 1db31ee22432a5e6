use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;

/// Represents a named GraphQL type stored in a
/// [`TypeArena`](crate::types::TypeArena).
///
/// `List` and `NonNull` are not named types; they only appear in
/// [`TypeAnnotation`](crate::types::TypeAnnotation)s.
#[derive(Clone, Debug)]
pub enum GraphQLType {
    InputObject(Box<InputObjectType>),
    Interface(Box<InterfaceType>),
    Object(Box<ObjectType>),
    Scalar(Box<ScalarType>),
    Union(Box<UnionType>),
}
impl GraphQLType {
    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        if let Self::InputObject(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_interface(&self) -> Option<&InterfaceType> {
        if let Self::Interface(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_scalar(&self) -> Option<&ScalarType> {
        if let Self::Scalar(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        if let Self::Union(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Self::InputObject(t) => t.description(),
            Self::Interface(t) => t.description(),
            Self::Object(t) => t.description(),
            Self::Scalar(t) => t.description(),
            Self::Union(t) => t.description(),
        }
    }

    /// Interfaces and unions are abstract: values of these types always have
    /// some concrete object type at runtime.
    pub fn is_abstract(&self) -> bool {
        matches!(self, Self::Interface(_) | Self::Union(_))
    }

    /// Indicates if this type may be used for arguments, variables, and input
    /// object fields.
    ///
    /// https://spec.graphql.org/October2021/#IsInputType()
    pub fn is_input_type(&self) -> bool {
        match self {
            Self::InputObject(_)
            | Self::Scalar(_)
                => true,

            Self::Interface(_)
            | Self::Object(_)
            | Self::Union(_)
                => false,
        }
    }

    /// Indicates if this type may be used as the type of an object or
    /// interface field.
    ///
    /// https://spec.graphql.org/October2021/#IsOutputType()
    pub fn is_output_type(&self) -> bool {
        match self {
            Self::Interface(_)
            | Self::Object(_)
            | Self::Scalar(_)
            | Self::Union(_)
                => true,

            Self::InputObject(_)
                => false,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::InputObject(t) => t.name(),
            Self::Interface(t) => t.name(),
            Self::Object(t) => t.name(),
            Self::Scalar(t) => t.name(),
            Self::Union(t) => t.name(),
        }
    }
}
