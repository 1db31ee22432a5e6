use crate::schema::TypeValidationError;
use crate::types::check_implements;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::TypeArena;
use indexmap::IndexMap;

pub(super) struct ObjectOrInterfaceTypeValidator<'a> {
    arena: &'a TypeArena,
    errors: Vec<TypeValidationError>,
    fields: &'a IndexMap<String, Field>,
    object: Option<&'a ObjectType>,
    type_name: &'a str,
}
impl<'a> ObjectOrInterfaceTypeValidator<'a> {
    pub fn for_interface(iface: &'a InterfaceType, arena: &'a TypeArena) -> Self {
        Self {
            arena,
            errors: vec![],
            fields: iface.fields(),
            object: None,
            type_name: iface.name(),
        }
    }

    pub fn for_object(object: &'a ObjectType, arena: &'a TypeArena) -> Self {
        Self {
            arena,
            errors: vec![],
            fields: object.fields(),
            object: Some(object),
            type_name: object.name(),
        }
    }

    pub fn validate(mut self) -> Vec<TypeValidationError> {
        if self.fields.is_empty() {
            self.errors.push(TypeValidationError::TypeWithNoFields {
                type_name: self.type_name.to_string(),
            });
        }

        if let Some(object) = self.object {
            self.validate_interface_impls(object);
        }

        for (field_name, field) in self.fields {
            // All fields on an object or interface type must be declared with
            // an output type.
            //
            // https://spec.graphql.org/October2021/#sel-JAHZhCFDBFABLBgB_pM
            let innermost_type_id = field.type_annotation().innermost_type_id();
            if let Some(innermost_type) = self.arena.get(innermost_type_id)
                && !innermost_type.is_output_type() {
                self.errors.push(
                    TypeValidationError::InvalidOutputFieldWithInputType {
                        field_name: field_name.to_string(),
                        input_type_name: innermost_type.name().to_string(),
                        parent_type_name: self.type_name.to_string(),
                    }
                );
            }

            for (param_name, param) in field.arguments() {
                // All parameters must be declared with an input type.
                //
                // https://spec.graphql.org/October2021/#sel-KAHZhCFDBHBDCAACEB6yD
                let innermost_type_id = param.type_annotation().innermost_type_id();
                if let Some(innermost_type) = self.arena.get(innermost_type_id)
                    && !innermost_type.is_input_type() {
                    self.errors.push(
                        TypeValidationError::InvalidParameterWithOutputOnlyType {
                            field_name: field_name.to_string(),
                            outputonly_type_name: innermost_type.name().to_string(),
                            parameter_name: param_name.to_string(),
                            parent_type_name: self.type_name.to_string(),
                        }
                    );
                }
            }
        }

        self.errors
    }

    fn validate_interface_impls(&mut self, object: &'a ObjectType) {
        for iface_id in object.interfaces() {
            match self.arena.get(*iface_id) {
                Some(GraphQLType::Interface(iface)) => self.errors.append(
                    &mut check_implements(self.arena, object, iface),
                ),

                Some(non_iface) => self.errors.push(
                    TypeValidationError::ImplementsNonInterfaceType {
                        type_name: self.type_name.to_string(),
                        non_interface_type_name: non_iface.name().to_string(),
                    }
                ),

                // Unknown ids are recorded as definition errors on the object.
                None => (),
            }
        }
    }
}
