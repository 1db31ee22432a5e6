use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::TypeArena;
use crate::types::UnionType;

pub(super) struct UnionTypeValidator<'a> {
    arena: &'a TypeArena,
    errors: Vec<TypeValidationError>,
    type_: &'a UnionType,
}
impl<'a> UnionTypeValidator<'a> {
    pub fn new(type_: &'a UnionType, arena: &'a TypeArena) -> Self {
        Self {
            arena,
            errors: vec![],
            type_,
        }
    }

    pub fn validate(mut self) -> Vec<TypeValidationError> {
        if self.type_.members().is_empty() {
            self.errors.push(TypeValidationError::UnionWithNoMembers {
                union_type_name: self.type_.name().to_string(),
            });
        }

        for member_id in self.type_.members() {
            // Member types of a union type can only be object types.
            // https://spec.graphql.org/October2021/#sel-HAHdfFDABABlG3ib
            let Some(member_type) = self.arena.get(*member_id) else {
                continue;
            };
            if !matches!(member_type, GraphQLType::Object(_)) {
                self.errors.push(
                    TypeValidationError::InvalidUnionMemberTypeKind {
                        member_type_kind: GraphQLTypeKind::from(member_type),
                        member_type_name: member_type.name().to_string(),
                        union_type_name: self.type_.name().to_string(),
                    }
                );
            }
        }

        self.errors
    }
}
