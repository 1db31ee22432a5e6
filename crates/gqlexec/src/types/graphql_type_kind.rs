use crate::types::GraphQLType;

/// Similar to [`GraphQLType`] except without the corresponding type metadata.
/// Useful when representing a group or category of [`GraphQLType`]s.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GraphQLTypeKind {
    InputObject,
    Interface,
    Object,
    Scalar,
    Union,
}
impl GraphQLTypeKind {
    pub fn name(&self) -> &str {
        match self {
            Self::InputObject => "InputObject",
            Self::Interface => "Interface",
            Self::Object => "Object",
            Self::Scalar => "Scalar",
            Self::Union => "Union",
        }
    }
}
impl std::convert::From<&GraphQLType> for GraphQLTypeKind {
    fn from(value: &GraphQLType) -> Self {
        match value {
            GraphQLType::InputObject(_) => GraphQLTypeKind::InputObject,
            GraphQLType::Interface(_) => GraphQLTypeKind::Interface,
            GraphQLType::Object(_) => GraphQLTypeKind::Object,
            GraphQLType::Scalar(_) => GraphQLTypeKind::Scalar,
            GraphQLType::Union(_) => GraphQLTypeKind::Union,
        }
    }
}
