use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::TypeAnnotation;
use crate::types::TypeArena;
use indexmap::IndexMap;
use std::collections::HashSet;

pub(super) struct InputObjectTypeValidator<'a> {
    arena: &'a TypeArena,
    errors: Vec<TypeValidationError>,
    type_: &'a InputObjectType,
}
impl<'a> InputObjectTypeValidator<'a> {
    pub fn new(type_: &'a InputObjectType, arena: &'a TypeArena) -> Self {
        Self {
            arena,
            errors: vec![],
            type_,
        }
    }

    pub fn validate(mut self) -> Vec<TypeValidationError> {
        let fields = self.type_.fields();
        if fields.is_empty() {
            self.errors.push(TypeValidationError::TypeWithNoFields {
                type_name: self.type_.name().to_string(),
            });
        }

        for (field_name, field) in fields {
            // Input object fields can not be declared with an output type.
            //
            // https://spec.graphql.org/October2021/#sel-IAHhBXDDBFCAACEB4iG
            let innermost_type_id = field.type_annotation().innermost_type_id();
            if let Some(innermost_type) = self.arena.get(innermost_type_id)
                && !innermost_type.is_input_type() {
                self.errors.push(
                    TypeValidationError::InvalidInputFieldWithOutputType {
                        field_name: field_name.to_string(),
                        invalid_type_name: innermost_type.name().to_string(),
                        parent_type_name: self.type_.name().to_string(),
                    }
                );
            }
        }

        self.validate_fields_recursive(
            self.type_.name(),
            fields,
            &mut vec![],
            HashSet::from([self.type_.name()]),
        );
        self.errors
    }

    fn validate_fields_recursive(
        &mut self,
        type_name: &'a str,
        fields: &'a IndexMap<String, InputField>,
        path: &mut Vec<(&'a str, Option<&'a str>)>,
        seen_type_names: HashSet<&'a str>,
    ) {
        for (field_name, field) in fields {
            // Look for input-type cycles that aren't broken by at least one
            // nullable (or list) type.
            if is_cycle_breaking(field.type_annotation()) {
                continue;
            }

            let innermost_type_id = field.type_annotation().innermost_type_id();
            let Some(GraphQLType::InputObject(input_obj_type)) =
                self.arena.get(innermost_type_id) else {
                continue;
            };
            let innermost_type_name = input_obj_type.name();

            path.extend_from_slice(&[
                (type_name, Some(field_name)),
                (innermost_type_name, None),
            ]);
            if innermost_type_name == self.type_.name() {
                self.errors.push(TypeValidationError::CircularInputFieldChain {
                    circular_field_path: path.iter().map(|(type_name, field_name)| {
                        if let Some(field_name) = field_name {
                            format!("{type_name}.{field_name}")
                        } else {
                            type_name.to_string()
                        }
                    }).collect(),
                });
            } else if !seen_type_names.contains(innermost_type_name) {
                let mut seen_type_names = seen_type_names.clone();
                seen_type_names.insert(innermost_type_name);
                self.validate_fields_recursive(
                    innermost_type_name,
                    input_obj_type.fields(),
                    path,
                    seen_type_names,
                );
            }
            path.truncate(path.len() - 2);
        }
    }
}

/// Only a non-null reference directly to a named type keeps a chain of input
/// objects unbreakable; a nullable or list-typed field can always be given a
/// finite value.
fn is_cycle_breaking(type_annot: &TypeAnnotation) -> bool {
    match type_annot {
        TypeAnnotation::NonNull(inner) =>
            !matches!(inner.as_ref(), TypeAnnotation::Named(_)),
        TypeAnnotation::List(_)
        | TypeAnnotation::Named(_)
            => true,
    }
}
