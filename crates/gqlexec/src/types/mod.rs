mod directive;
mod field;
mod graphql_type;
mod graphql_type_kind;
mod input_field;
mod input_object_type;
mod input_object_type_validator;
mod interface_conformance;
mod interface_type;
mod object_or_interface_type_data;
mod object_or_interface_type_trait;
mod object_or_interface_type_validator;
mod object_type;
mod resolver;
mod scalar_type;
mod type_annotation;
mod type_arena;
mod type_definition_error;
mod types_map_builder;
mod union_type;
mod union_type_validator;

pub use directive::Directive;
pub use field::Argument;
pub use field::Field;
pub use graphql_type::GraphQLType;
pub use graphql_type_kind::GraphQLTypeKind;
pub use input_field::InputField;
pub use input_object_type::InputObjectType;
pub use input_object_type::InputObjectTypeConfig;
use input_object_type_validator::InputObjectTypeValidator;
pub use interface_conformance::check_implements;
pub use interface_type::InterfaceType;
pub use interface_type::InterfaceTypeConfig;
use object_or_interface_type_data::ObjectOrInterfaceTypeData;
pub use object_or_interface_type_trait::ObjectOrInterfaceTypeTrait;
use object_or_interface_type_validator::ObjectOrInterfaceTypeValidator;
pub use object_type::ObjectType;
pub use object_type::ObjectTypeConfig;
pub use resolver::IsTypeOfFn;
pub use resolver::ResolveTypeFn;
pub use resolver::Resolver;
pub use scalar_type::ScalarType;
pub use type_annotation::TypeAnnotation;
pub use type_arena::TypeArena;
pub use type_arena::TypeId;
pub use type_definition_error::TypeDefinitionError;
pub(crate) use types_map_builder::TypesMapBuilder;
pub use union_type::UnionType;
pub use union_type::UnionTypeConfig;
use union_type_validator::UnionTypeValidator;

#[cfg(test)]
mod tests;
